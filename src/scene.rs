//! Scene building.
//!
//! [`build_scene`] turns the chart model plus transient hover state into a
//! flat render-command list. The scene is rebuilt from scratch on every call:
//! clearing the previous visual tree and constructing the new one are the
//! same operation, so a re-render can never expose partial state.

use crate::chart::{IdentityChart, PlacedPoint};
use crate::entry::Entry;
use crate::geom::{ScreenPoint, ScreenRect, clamp_box_origin};
use crate::hover::HoverOverlay;
use crate::render::{
    Fill, LineSegment, LineStyle, RectStyle, RenderCommand, Scene, StrokeStyle, TextAnchor,
    TextStyle,
};
use crate::scale::STRENGTH_DOMAIN;
use crate::style::Theme;
use crate::text::TextMeasurer;

const TICK_STEP: f64 = 5.0;
const TICK_HALF_LENGTH: f32 = 4.0;
const TICK_LABEL_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 18.0;
const SUBTITLE_SIZE: f32 = 13.0;
const LEGEND_ROW_HEIGHT: f32 = 22.0;
const LEGEND_SWATCH_SIZE: f32 = 12.0;
const LEGEND_GAP: f32 = 18.0;
const TOOLTIP_FONT_SIZE: f32 = 12.0;
const TOOLTIP_LINE_HEIGHT: f32 = 16.0;
const TOOLTIP_CURSOR_OFFSET: f32 = 14.0;

/// Build the full scene for a chart.
///
/// With no mapping present this is a no-op that yields an empty scene. With
/// an empty mapping the chart furniture (grid, axes, titles) is drawn but no
/// points or legend rows. `hover` adds the transient overlay: the hovered
/// core circle enlarges, a connector line runs to every other point, and a
/// tooltip floats near the cursor.
pub fn build_scene(
    chart: &IdentityChart,
    hover: Option<&HoverOverlay>,
    measurer: &dyn TextMeasurer,
) -> Scene {
    let mut scene = Scene::new();
    let Some(entries) = chart.entries() else {
        return scene;
    };

    let layout = chart.layout();
    let theme = chart.theme();
    let plot = layout.plot_rect();

    scene.push(RenderCommand::Rect {
        rect: layout.canvas_rect(),
        style: RectStyle {
            fill: theme.background,
            stroke: theme.background,
            stroke_width: 0.0,
        },
    });

    build_grid_and_axes(&mut scene, chart, plot);
    build_titles(&mut scene, chart, plot);

    let placed = chart.placed_points();
    build_points(&mut scene, &placed, hover, theme);
    build_legend(&mut scene, chart, plot);

    if let Some(hover) = hover
        && let Some(hovered) = placed.get(hover.point)
    {
        build_connectors(&mut scene, &placed, hovered, theme);
        if let Some((name, entry)) = entries.get_index(hovered.index) {
            build_tooltip(&mut scene, chart, name, entry, hover.cursor, measurer);
        }
    }

    scene
}

fn tick_values() -> impl Iterator<Item = f64> {
    let mut value = STRENGTH_DOMAIN.0;
    std::iter::from_fn(move || {
        if value > STRENGTH_DOMAIN.1 {
            return None;
        }
        let current = value;
        value += TICK_STEP;
        Some(current)
    })
}

fn build_grid_and_axes(scene: &mut Scene, chart: &IdentityChart, plot: ScreenRect) {
    let layout = chart.layout();
    let theme = chart.theme();
    let x_scale = layout.x_scale();
    let y_scale = layout.y_scale();
    let (Some(center_x), Some(center_y)) = (x_scale.map(0.0), y_scale.map(0.0)) else {
        return;
    };

    // Center axes spanning the full plot.
    scene.push(RenderCommand::LineSegments {
        segments: vec![
            LineSegment::new(
                ScreenPoint::new(center_x, plot.min.y),
                ScreenPoint::new(center_x, plot.max.y),
            ),
            LineSegment::new(
                ScreenPoint::new(plot.min.x, center_y),
                ScreenPoint::new(plot.max.x, center_y),
            ),
        ],
        style: LineStyle {
            color: theme.grid,
            width: 1.0,
        },
    });

    let mut ticks = Vec::new();
    let mut labels = Vec::new();
    for value in tick_values() {
        if let Some(x) = x_scale.map(value) {
            ticks.push(LineSegment::new(
                ScreenPoint::new(x, center_y - TICK_HALF_LENGTH),
                ScreenPoint::new(x, center_y + TICK_HALF_LENGTH),
            ));
            labels.push((
                ScreenPoint::new(x, center_y + TICK_HALF_LENGTH + 4.0),
                format!("{value:.0}"),
                TextAnchor::Middle,
            ));
        }
        if let Some(y) = y_scale.map(value) {
            ticks.push(LineSegment::new(
                ScreenPoint::new(center_x - TICK_HALF_LENGTH, y),
                ScreenPoint::new(center_x + TICK_HALF_LENGTH, y),
            ));
            labels.push((
                ScreenPoint::new(center_x - TICK_HALF_LENGTH - 4.0, y - TICK_LABEL_SIZE * 0.6),
                format!("{value:.0}"),
                TextAnchor::End,
            ));
        }
    }

    scene.push(RenderCommand::LineSegments {
        segments: ticks,
        style: LineStyle {
            color: theme.axis,
            width: 1.0,
        },
    });
    for (position, text, anchor) in labels {
        scene.push(RenderCommand::Text {
            position,
            text,
            style: TextStyle {
                color: theme.axis,
                size: TICK_LABEL_SIZE,
            },
            anchor,
        });
    }
}

fn build_titles(scene: &mut Scene, chart: &IdentityChart, plot: ScreenRect) {
    let theme = chart.theme();
    let config = chart.config();
    scene.push(RenderCommand::Text {
        position: ScreenPoint::new(plot.center_x(), 16.0),
        text: config.title.clone(),
        style: TextStyle {
            color: theme.title,
            size: TITLE_SIZE,
        },
        anchor: TextAnchor::Middle,
    });
    scene.push(RenderCommand::Text {
        position: ScreenPoint::new(plot.center_x(), 40.0),
        text: config.subtitle.clone(),
        style: TextStyle {
            color: theme.subtitle,
            size: SUBTITLE_SIZE,
        },
        anchor: TextAnchor::Middle,
    });
}

fn build_points(
    scene: &mut Scene,
    placed: &[PlacedPoint],
    hover: Option<&HoverOverlay>,
    theme: &Theme,
) {
    for (position, point) in placed.iter().enumerate() {
        scene.push(RenderCommand::Circle {
            center: point.center,
            radius: point.size * 2.0,
            fill: Fill::RadialFade {
                center: theme.glow,
                edge: theme.glow.with_alpha(0.0),
            },
            stroke: None,
        });

        let enlarge = match hover {
            Some(hover) if hover.point == position => hover.enlarge.max(1.0),
            _ => 1.0,
        };
        scene.push(RenderCommand::Circle {
            center: point.center,
            radius: point.size * enlarge,
            fill: Fill::Solid(point.color),
            stroke: Some(StrokeStyle {
                color: theme.marker_stroke,
                width: 2.0,
            }),
        });
    }
}

fn build_legend(scene: &mut Scene, chart: &IdentityChart, plot: ScreenRect) {
    let Some(entries) = chart.entries() else {
        return;
    };
    let theme = chart.theme();
    for (index, (name, _)) in entries.iter().enumerate() {
        let row_top = plot.min.y + index as f32 * LEGEND_ROW_HEIGHT;
        let swatch_origin = ScreenPoint::new(plot.max.x + LEGEND_GAP, row_top);
        scene.push(RenderCommand::Rect {
            rect: ScreenRect::new(
                swatch_origin,
                ScreenPoint::new(
                    swatch_origin.x + LEGEND_SWATCH_SIZE,
                    swatch_origin.y + LEGEND_SWATCH_SIZE,
                ),
            ),
            style: RectStyle {
                fill: crate::palette::entry_color(index),
                stroke: theme.marker_stroke,
                stroke_width: 1.0,
            },
        });
        scene.push(RenderCommand::Text {
            position: ScreenPoint::new(swatch_origin.x + LEGEND_SWATCH_SIZE + 8.0, row_top),
            text: name.to_string(),
            style: TextStyle {
                color: theme.legend_text,
                size: 12.0,
            },
            anchor: TextAnchor::Start,
        });
    }
}

fn build_connectors(
    scene: &mut Scene,
    placed: &[PlacedPoint],
    hovered: &PlacedPoint,
    theme: &Theme,
) {
    let segments: Vec<LineSegment> = placed
        .iter()
        .filter(|point| point.index != hovered.index)
        .map(|point| LineSegment::new(hovered.center, point.center))
        .collect();
    if segments.is_empty() {
        return;
    }
    scene.push(RenderCommand::LineSegments {
        segments,
        style: LineStyle {
            color: hovered.color.with_alpha(theme.connector_alpha),
            width: 1.0,
        },
    });
}

fn build_tooltip(
    scene: &mut Scene,
    chart: &IdentityChart,
    name: &str,
    entry: &Entry,
    cursor: ScreenPoint,
    measurer: &dyn TextMeasurer,
) {
    let theme = chart.theme();
    let canvas = chart.layout().canvas_rect();

    let mut lines = vec![
        name.to_string(),
        format!("Strength: {}", format_strength(entry.strength)),
    ];
    if let Some(title) = &entry.title {
        lines.push(format!("Role: {title}"));
    }
    if let Some(beliefs) = &entry.beliefs {
        lines.push(format!("Beliefs: {beliefs}"));
    }
    if let Some(style) = &entry.style {
        lines.push(format!("Style: {style}"));
    }

    let block = lines.join("\n");
    let size = measurer.measure_multiline(&block, TOOLTIP_FONT_SIZE);

    let mut origin = ScreenPoint::new(
        cursor.x + TOOLTIP_CURSOR_OFFSET,
        cursor.y + TOOLTIP_CURSOR_OFFSET,
    );
    if origin.x + size.0 > canvas.max.x {
        origin.x = cursor.x - size.0 - TOOLTIP_CURSOR_OFFSET;
    }
    if origin.y + size.1 > canvas.max.y {
        origin.y = cursor.y - size.1 - TOOLTIP_CURSOR_OFFSET;
    }
    let origin = clamp_box_origin(origin, canvas, size);

    scene.push(RenderCommand::Rect {
        rect: ScreenRect::new(
            origin,
            ScreenPoint::new(origin.x + size.0, origin.y + size.1),
        ),
        style: RectStyle {
            fill: theme.tooltip_bg,
            stroke: theme.tooltip_border,
            stroke_width: 1.0,
        },
    });
    for (index, line) in lines.iter().enumerate() {
        scene.push(RenderCommand::Text {
            position: ScreenPoint::new(
                origin.x + 6.0,
                origin.y + 4.0 + index as f32 * TOOLTIP_LINE_HEIGHT,
            ),
            text: line.clone(),
            style: TextStyle {
                color: theme.tooltip_text,
                size: TOOLTIP_FONT_SIZE,
            },
            anchor: TextAnchor::Start,
        });
    }
}

fn format_strength(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}/10")
    } else {
        format!("{value}/10")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::IdentityMap;
    use crate::text::ApproxTextMeasurer;

    fn chart_with(entries: IdentityMap) -> IdentityChart {
        IdentityChart::builder().entries(entries).build()
    }

    fn solid_circles(scene: &Scene) -> Vec<(ScreenPoint, f32)> {
        scene
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Circle {
                    center,
                    radius,
                    fill: Fill::Solid(_),
                    ..
                } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    fn texts(scene: &Scene) -> Vec<String> {
        scene
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn connector_segments(scene: &Scene, from: ScreenPoint) -> Vec<LineSegment> {
        scene
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::LineSegments { segments, .. }
                    if segments.iter().all(|segment| segment.start == from) =>
                {
                    Some(segments.clone())
                }
                _ => None,
            })
            .flatten()
            .collect()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn absent_mapping_is_a_silent_no_op() {
        let scene = build_scene(&IdentityChart::new(), None, &ApproxTextMeasurer);
        assert!(scene.is_empty());
    }

    #[test]
    fn empty_mapping_draws_furniture_but_no_points_or_legend() {
        let chart = chart_with(IdentityMap::new());
        let scene = build_scene(&chart, None, &ApproxTextMeasurer);
        assert!(!scene.is_empty());
        assert!(solid_circles(&scene).is_empty());
        // Titles and tick labels are present; no legend rows.
        let texts = texts(&scene);
        assert!(texts.iter().any(|text| text == "Identity Map"));
        assert!(texts.iter().any(|text| text == "-10"));
        let grid = scene
            .commands()
            .iter()
            .any(|command| matches!(command, RenderCommand::LineSegments { .. }));
        assert!(grid);
        let legend_rows = scene
            .commands()
            .iter()
            .filter(|command| {
                matches!(
                    command,
                    RenderCommand::Text {
                        anchor: TextAnchor::Start,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(legend_rows, 0);
    }

    #[test]
    fn two_entry_mapping_places_points_per_tier() {
        let entries: IdentityMap = [("A", Entry::new(3.0)), ("B", Entry::new(10.0))]
            .into_iter()
            .collect();
        let chart = chart_with(entries);
        let scene = build_scene(&chart, None, &ApproxTextMeasurer);

        let circles = solid_circles(&scene);
        assert_eq!(circles.len(), 2);
        // A renders at scale(3) on each axis with base size 7.
        assert_close(circles[0].0.x, 502.0);
        assert_close(circles[0].0.y, 263.0);
        assert_close(circles[0].1, 7.0);
        // B renders at the plot center with size 12.6.
        assert_close(circles[1].0.x, 400.0);
        assert_close(circles[1].0.y, 350.0);
        assert_close(circles[1].1, 12.6);
    }

    #[test]
    fn every_point_gets_a_glow_twice_its_size() {
        let entries: IdentityMap = [("A", Entry::new(3.0)), ("B", Entry::new(10.0))]
            .into_iter()
            .collect();
        let chart = chart_with(entries);
        let scene = build_scene(&chart, None, &ApproxTextMeasurer);
        let glows: Vec<f32> = scene
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Circle {
                    radius,
                    fill: Fill::RadialFade { .. },
                    ..
                } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(glows.len(), 2);
        assert_close(glows[0], 14.0);
        assert_close(glows[1], 25.2);
    }

    #[test]
    fn legend_has_one_row_per_entry_in_mapping_order() {
        let entries: IdentityMap = [
            ("first", Entry::new(1.0)),
            ("second", Entry::new(2.0)),
            ("third", Entry::new(3.0)),
        ]
        .into_iter()
        .collect();
        let chart = chart_with(entries);
        let scene = build_scene(&chart, None, &ApproxTextMeasurer);
        let rows: Vec<String> = scene
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text {
                    text,
                    anchor: TextAnchor::Start,
                    ..
                } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(rows, ["first", "second", "third"]);
    }

    #[test]
    fn hover_draws_one_connector_per_other_point() {
        let entries: IdentityMap = [
            ("A", Entry::new(3.0)),
            ("B", Entry::new(-2.0)),
            ("C", Entry::new(6.0)),
            ("D", Entry::new(10.0)),
        ]
        .into_iter()
        .collect();
        let chart = chart_with(entries);
        let placed = chart.placed_points();
        let hover = HoverOverlay {
            point: 0,
            cursor: placed[0].center,
            enlarge: 1.2,
        };
        let scene = build_scene(&chart, Some(&hover), &ApproxTextMeasurer);

        let segments = connector_segments(&scene, placed[0].center);
        assert_eq!(segments.len(), 3);
        for segment in &segments {
            assert_eq!(segment.start, placed[0].center);
        }
        let ends: Vec<ScreenPoint> = segments.iter().map(|segment| segment.end).collect();
        for other in &placed[1..] {
            assert!(ends.contains(&other.center));
        }
    }

    #[test]
    fn pointer_leave_removes_all_connectors_and_tooltip() {
        let entries: IdentityMap = [("A", Entry::new(3.0)), ("B", Entry::new(-2.0))]
            .into_iter()
            .collect();
        let chart = chart_with(entries);
        let placed = chart.placed_points();
        let hover = HoverOverlay {
            point: 0,
            cursor: placed[0].center,
            enlarge: 1.2,
        };
        let hovered = build_scene(&chart, Some(&hover), &ApproxTextMeasurer);
        let left = build_scene(&chart, None, &ApproxTextMeasurer);

        assert_eq!(connector_segments(&hovered, placed[0].center).len(), 1);
        assert!(connector_segments(&left, placed[0].center).is_empty());
        assert!(texts(&hovered).iter().any(|text| text.starts_with("Strength:")));
        assert!(!texts(&left).iter().any(|text| text.starts_with("Strength:")));
        // The leave scene has fewer commands than the hovered one.
        assert!(left.commands().len() < hovered.commands().len());
    }

    #[test]
    fn hovered_core_circle_is_enlarged() {
        let entries: IdentityMap = [("A", Entry::new(3.0)), ("B", Entry::new(-2.0))]
            .into_iter()
            .collect();
        let chart = chart_with(entries);
        let placed = chart.placed_points();
        let hover = HoverOverlay {
            point: 0,
            cursor: placed[0].center,
            enlarge: 1.2,
        };
        let scene = build_scene(&chart, Some(&hover), &ApproxTextMeasurer);
        let circles = solid_circles(&scene);
        assert_close(circles[0].1, 7.0 * 1.2);
        assert_close(circles[1].1, 7.0);
    }

    #[test]
    fn tooltip_lists_only_present_fields() {
        let entries: IdentityMap = [(
            "Navigator",
            Entry::new(7.0).with_title("Wayfinder"),
        )]
        .into_iter()
        .collect();
        let chart = chart_with(entries);
        let placed = chart.placed_points();
        let hover = HoverOverlay {
            point: 0,
            cursor: placed[0].center,
            enlarge: 1.2,
        };
        let scene = build_scene(&chart, Some(&hover), &ApproxTextMeasurer);
        let texts = texts(&scene);
        assert!(texts.iter().any(|text| text == "Strength: 7/10"));
        assert!(texts.iter().any(|text| text == "Role: Wayfinder"));
        assert!(!texts.iter().any(|text| text.starts_with("Beliefs:")));
        assert!(!texts.iter().any(|text| text.starts_with("Style:")));
    }

    #[test]
    fn rebuild_with_new_mapping_leaves_nothing_behind() {
        let first: IdentityMap = [("old-a", Entry::new(1.0)), ("old-b", Entry::new(2.0))]
            .into_iter()
            .collect();
        let second: IdentityMap = [("fresh", Entry::new(4.0))].into_iter().collect();

        let mut chart = chart_with(first);
        let before = build_scene(&chart, None, &ApproxTextMeasurer);
        chart.set_entries(Some(second));
        let after = build_scene(&chart, None, &ApproxTextMeasurer);

        assert!(texts(&before).iter().any(|text| text == "old-a"));
        assert!(!texts(&after).iter().any(|text| text.starts_with("old-")));
        assert!(texts(&after).iter().any(|text| text == "fresh"));
        assert_eq!(solid_circles(&after).len(), 1);
    }
}
