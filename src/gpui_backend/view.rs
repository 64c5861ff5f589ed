use std::sync::{Arc, RwLock};
use std::time::Instant;

use gpui::prelude::*;
use gpui::{MouseMoveEvent, Pixels, Point, Window, canvas, div};

use crate::chart::IdentityChart;
use crate::geom::ScreenPoint;
use crate::hover::{HoverOverlay, ease_out, hit_test};

use super::config::ChartViewConfig;
use super::paint::{paint_scene, to_hsla};
use super::state::{ChartUiState, HoverState};
use super::text::GpuiTextMeasurer;

/// A GPUI view that renders an [`IdentityChart`] with hover interaction.
///
/// The view rebuilds the full scene on every frame from the chart model and
/// the transient hover state, so entry updates through a [`ChartHandle`]
/// always produce a consistent picture.
#[derive(Clone)]
pub struct IdentityMapView {
    chart: Arc<RwLock<IdentityChart>>,
    state: Arc<RwLock<ChartUiState>>,
    config: ChartViewConfig,
}

impl IdentityMapView {
    /// Create a view for the given chart.
    ///
    /// Uses the default [`ChartViewConfig`].
    pub fn new(chart: IdentityChart) -> Self {
        Self::with_config(chart, ChartViewConfig::default())
    }

    /// Create a view with a custom configuration.
    pub fn with_config(chart: IdentityChart, config: ChartViewConfig) -> Self {
        Self {
            chart: Arc::new(RwLock::new(chart)),
            state: Arc::new(RwLock::new(ChartUiState::default())),
            config,
        }
    }

    /// Get a handle for mutating the underlying chart.
    ///
    /// This is useful for swapping in a new mapping from async tasks.
    pub fn chart_handle(&self) -> ChartHandle {
        ChartHandle {
            chart: Arc::clone(&self.chart),
        }
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        if !self.config.show_hover {
            return;
        }
        let mut state = self.state.write().expect("chart ui state lock");
        let Some(origin) = state.origin else {
            return;
        };
        let window_pos = screen_point(ev.position);
        let cursor = ScreenPoint::new(window_pos.x - origin.x, window_pos.y - origin.y);

        let placed = self.chart.read().expect("chart lock").placed_points();
        state.hover = hit_test(&placed, cursor).map(|point| HoverState {
            point,
            cursor,
            // A new hover restarts the enlargement transition.
            since: match state.hover {
                Some(existing) if existing.point == point => existing.since,
                _ => Instant::now(),
            },
        });
        drop(state);
        cx.notify();
    }

    fn hover_overlay(&self, state: &ChartUiState) -> Option<HoverOverlay> {
        let hover = state.hover?;
        let elapsed_ms = hover.since.elapsed().as_secs_f32() * 1000.0;
        let progress = elapsed_ms / self.config.hover_anim_ms.max(1) as f32;
        let enlarge = 1.0 + (self.config.hover_enlarge - 1.0) * ease_out(progress);
        Some(HoverOverlay {
            point: hover.point,
            cursor: hover.cursor,
            enlarge,
        })
    }
}

impl Render for IdentityMapView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let chart = Arc::clone(&self.chart);
        let state = Arc::clone(&self.state);
        let view = self.clone();
        let background = to_hsla(
            chart
                .read()
                .expect("chart lock")
                .theme()
                .background,
        );

        div()
            .size_full()
            .bg(background)
            .child(
                canvas(
                    move |bounds, window, _| {
                        let chart = chart.read().expect("chart lock");
                        let mut state = state.write().expect("chart ui state lock");
                        let origin = ScreenPoint::new(
                            f32::from(bounds.origin.x),
                            f32::from(bounds.origin.y),
                        );
                        state.origin = Some(origin);
                        let hover = view.hover_overlay(&state);
                        let measurer = GpuiTextMeasurer::new(window);
                        let scene = crate::scene::build_scene(&chart, hover.as_ref(), &measurer);
                        (scene, origin)
                    },
                    move |_, (scene, origin), window, cx| {
                        paint_scene(&scene, origin, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
    }
}

/// A handle for mutating an [`IdentityChart`] held inside an `IdentityMapView`.
///
/// The handle clones cheaply and can be moved into async tasks.
#[derive(Clone)]
pub struct ChartHandle {
    chart: Arc<RwLock<IdentityChart>>,
}

impl ChartHandle {
    /// Read the chart state.
    ///
    /// The chart is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&IdentityChart) -> R) -> R {
        let chart = self.chart.read().expect("chart lock");
        f(&chart)
    }

    /// Mutate the chart state.
    ///
    /// The chart is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut IdentityChart) -> R) -> R {
        let mut chart = self.chart.write().expect("chart lock");
        f(&mut chart)
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x), f32::from(point.y))
}
