use std::time::Instant;

use crate::geom::ScreenPoint;

/// The point currently under the cursor, plus when the hover started.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HoverState {
    /// Index into the chart's placed points.
    pub(crate) point: usize,
    /// Cursor position in canvas coordinates.
    pub(crate) cursor: ScreenPoint,
    /// When this point became hovered; drives the enlargement transition.
    pub(crate) since: Instant,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ChartUiState {
    pub(crate) hover: Option<HoverState>,
    /// Canvas origin in window coordinates, captured during prepaint.
    pub(crate) origin: Option<ScreenPoint>,
}
