//! Chart theming.

use crate::render::Color;

/// Visual theme for the identity map.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Canvas background.
    pub background: Color,
    /// Center grid lines.
    pub grid: Color,
    /// Axis ticks and tick labels.
    pub axis: Color,
    /// Chart title.
    pub title: Color,
    /// Chart subtitle.
    pub subtitle: Color,
    /// Legend row text.
    pub legend_text: Color,
    /// Tooltip background.
    pub tooltip_bg: Color,
    /// Tooltip border.
    pub tooltip_border: Color,
    /// Tooltip text.
    pub tooltip_text: Color,
    /// Glow gradient color at the marker center.
    pub glow: Color,
    /// Marker outline.
    pub marker_stroke: Color,
    /// Alpha applied to connector lines.
    pub connector_alpha: f32,
}

impl Theme {
    /// Dark theme (default).
    pub fn dark() -> Self {
        Self {
            background: Color::rgb8(18, 18, 24),
            grid: Color::rgb8(60, 60, 72),
            axis: Color::rgb8(150, 150, 164),
            title: Color::rgb8(235, 235, 245),
            subtitle: Color::rgb8(160, 160, 176),
            legend_text: Color::rgb8(210, 210, 222),
            tooltip_bg: Color::new(0.08, 0.08, 0.11, 0.95),
            tooltip_border: Color::rgb8(110, 110, 128),
            tooltip_text: Color::rgb8(235, 235, 245),
            glow: Color::new(1.0, 1.0, 1.0, 0.35),
            marker_stroke: Color::WHITE,
            connector_alpha: 0.3,
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            background: Color::rgb8(250, 250, 252),
            grid: Color::rgb8(220, 220, 228),
            axis: Color::rgb8(110, 110, 122),
            title: Color::rgb8(25, 25, 35),
            subtitle: Color::rgb8(105, 105, 118),
            legend_text: Color::rgb8(50, 50, 62),
            tooltip_bg: Color::new(1.0, 1.0, 1.0, 0.95),
            tooltip_border: Color::rgb8(160, 160, 172),
            tooltip_text: Color::rgb8(25, 25, 35),
            glow: Color::new(1.0, 1.0, 1.0, 0.55),
            marker_stroke: Color::WHITE,
            connector_alpha: 0.3,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
