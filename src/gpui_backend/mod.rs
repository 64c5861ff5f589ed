//! GPUI integration for gpui_identity_map.
//!
//! This module provides a GPUI view that renders an
//! [`IdentityChart`](crate::chart::IdentityChart) and handles hover
//! interaction: marker enlargement, connector lines, and the tooltip.

mod config;
mod paint;
mod state;
mod text;
mod view;

pub use config::ChartViewConfig;
pub use view::{ChartHandle, IdentityMapView};
