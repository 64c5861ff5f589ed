//! Fixed canvas geometry.

use crate::geom::{ScreenPoint, ScreenRect};
use crate::scale::{LinearScale, Placement, STRENGTH_DOMAIN};

/// Total canvas width in logical pixels.
pub const CANVAS_WIDTH: f32 = 900.0;
/// Total canvas height in logical pixels.
pub const CANVAS_HEIGHT: f32 = 700.0;

/// Margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    /// Top margin (title space).
    pub top: f32,
    /// Right margin (legend space).
    pub right: f32,
    /// Bottom margin.
    pub bottom: f32,
    /// Left margin.
    pub left: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 160.0,
            bottom: 60.0,
            left: 60.0,
        }
    }
}

/// The chart's canvas geometry and derived scales.
///
/// The default geometry is a 900x700 canvas with a 680x580 plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    /// Canvas width.
    pub width: f32,
    /// Canvas height.
    pub height: f32,
    /// Margins around the plot.
    pub margin: Margin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            margin: Margin::default(),
        }
    }
}

impl ChartLayout {
    /// The whole canvas rectangle.
    pub fn canvas_rect(&self) -> ScreenRect {
        ScreenRect::new(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(self.width, self.height),
        )
    }

    /// The plot area inside the margins.
    pub fn plot_rect(&self) -> ScreenRect {
        ScreenRect::new(
            ScreenPoint::new(self.margin.left, self.margin.top),
            ScreenPoint::new(
                self.width - self.margin.right,
                self.height - self.margin.bottom,
            ),
        )
    }

    /// X scale over the strength domain, left to right.
    pub fn x_scale(&self) -> LinearScale {
        let plot = self.plot_rect();
        LinearScale::new(STRENGTH_DOMAIN, (plot.min.x, plot.max.x))
    }

    /// Y scale over the strength domain, inverted so +10 is visually up.
    pub fn y_scale(&self) -> LinearScale {
        let plot = self.plot_rect();
        LinearScale::new(STRENGTH_DOMAIN, (plot.max.y, plot.min.y))
    }

    /// Placement over both axis scales.
    pub fn placement(&self) -> Placement {
        Placement::new(self.x_scale(), self.y_scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plot_area_is_680_by_580() {
        let layout = ChartLayout::default();
        let plot = layout.plot_rect();
        assert_eq!(plot.width(), 680.0);
        assert_eq!(plot.height(), 580.0);
        assert_eq!(plot.min, ScreenPoint::new(60.0, 60.0));
    }

    #[test]
    fn y_scale_is_inverted() {
        let layout = ChartLayout::default();
        let y = layout.y_scale();
        assert_eq!(y.map(10.0), Some(60.0));
        assert_eq!(y.map(-10.0), Some(640.0));
    }
}
