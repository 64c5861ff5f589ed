use crate::hover::HOVER_ENLARGE;

/// Configuration for the GPUI identity map view.
#[derive(Debug, Clone)]
pub struct ChartViewConfig {
    /// Target enlargement of the hovered marker's core circle.
    pub hover_enlarge: f32,
    /// Duration of the hover enlargement transition, in milliseconds.
    pub hover_anim_ms: u64,
    /// Enable hover interaction (enlargement, connectors, tooltip).
    pub show_hover: bool,
}

impl Default for ChartViewConfig {
    fn default() -> Self {
        Self {
            hover_enlarge: HOVER_ENLARGE,
            hover_anim_ms: 120,
            show_hover: true,
        }
    }
}
