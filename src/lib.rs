//! gpui_identity_map renders an "identity map": a named set of entries, each
//! with a signed strength, plotted as a glowing scatter chart inside a fixed
//! 900x700 canvas. Position and marker size both follow the strength, with
//! maximal-strength entries collapsing to the plot center.
//!
//! The chart core is backend-agnostic: [`scene::build_scene`] produces a flat
//! render-command list that tests inspect directly, and the GPUI backend in
//! [`gpui_backend`] replays it with hover interaction.

#![forbid(unsafe_code)]

pub mod chart;
pub mod entry;
pub mod geom;
pub mod gpui_backend;
pub mod hover;
pub mod layout;
pub mod palette;
pub mod render;
pub mod scale;
pub mod scene;
pub mod style;
pub mod text;

pub use chart::{ChartBuilder, ChartConfig, IdentityChart, PlacedPoint};
pub use entry::{Entry, IdentityMap};
pub use geom::{ScreenPoint, ScreenRect};
pub use gpui_backend::{ChartHandle, ChartViewConfig, IdentityMapView};
pub use hover::{HOVER_ENLARGE, HoverOverlay, hit_test};
pub use layout::{CANVAS_HEIGHT, CANVAS_WIDTH, ChartLayout, Margin};
pub use palette::{PALETTE, entry_color};
pub use render::{
    Color, Fill, LineSegment, LineStyle, RectStyle, RenderCommand, Scene, StrokeStyle, TextAnchor,
    TextStyle,
};
pub use scale::{LinearScale, MARKER_BASE_SIZE, Placement, STRENGTH_DOMAIN, marker_size};
pub use scene::build_scene;
pub use style::Theme;
pub use text::{ApproxTextMeasurer, TextMeasurer};
