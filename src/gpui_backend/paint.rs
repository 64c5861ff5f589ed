use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, TextRun, Window, font, point,
    px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{
    Color, Fill, LineSegment, LineStyle, RectStyle, RenderCommand, Scene, StrokeStyle, TextAnchor,
    TextStyle,
};

/// Number of stacked rings used to approximate a radial gradient.
const GLOW_RINGS: u32 = 4;

/// Replay a scene's commands into the window.
///
/// Scene coordinates are canvas-local; `origin` is the canvas element's
/// window-space origin captured during prepaint.
pub(crate) fn paint_scene(scene: &Scene, origin: ScreenPoint, window: &mut Window, cx: &mut App) {
    for command in scene.commands() {
        match command {
            RenderCommand::LineSegments { segments, style } => {
                paint_lines(window, origin, segments, *style);
            }
            RenderCommand::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                paint_circle(window, offset(*center, origin), *radius, *fill, *stroke);
            }
            RenderCommand::Rect { rect, style } => {
                paint_rect(window, origin, *rect, *style);
            }
            RenderCommand::Text {
                position,
                text,
                style,
                anchor,
            } => {
                paint_text(window, cx, offset(*position, origin), text, style, *anchor);
            }
        }
    }
}

fn paint_lines(window: &mut Window, origin: ScreenPoint, segments: &[LineSegment], style: LineStyle) {
    if segments.is_empty() {
        return;
    }
    let width = style.width.max(0.5);
    let mut builder = PathBuilder::stroke(px(width));
    for segment in segments {
        let start = offset(segment.start, origin);
        let end = offset(segment.end, origin);
        builder.move_to(point(px(start.x), px(start.y)));
        builder.line_to(point(px(end.x), px(end.y)));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_circle(
    window: &mut Window,
    center: ScreenPoint,
    radius: f32,
    fill: Fill,
    stroke: Option<StrokeStyle>,
) {
    match fill {
        Fill::Solid(color) => {
            let (border_width, border_color) = match stroke {
                Some(stroke) => (stroke.width, stroke.color),
                None => (0.0, color),
            };
            paint_disc(window, center, radius, color, border_width, border_color);
        }
        Fill::RadialFade { center: inner, .. } => {
            // Quads cannot carry a radial gradient; layer translucent rings
            // so opacity accumulates toward the center.
            let layer = inner.with_alpha(1.0 / GLOW_RINGS as f32);
            for step in 0..GLOW_RINGS {
                let ring_radius = radius * (GLOW_RINGS - step) as f32 / GLOW_RINGS as f32;
                paint_disc(window, center, ring_radius, layer, 0.0, layer);
            }
        }
    }
}

fn paint_disc(
    window: &mut Window,
    center: ScreenPoint,
    radius: f32,
    fill: Color,
    border_width: f32,
    border_color: Color,
) {
    let bounds = Bounds::from_corners(
        point(px(center.x - radius), px(center.y - radius)),
        point(px(center.x + radius), px(center.y + radius)),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(px(radius)),
        to_rgba(fill),
        Edges::all(px(border_width)),
        to_rgba(border_color),
        BorderStyle::default(),
    ));
}

fn paint_rect(window: &mut Window, origin: ScreenPoint, rect: ScreenRect, style: RectStyle) {
    let bounds = to_bounds(rect, origin);
    window.paint_quad(quad(
        bounds,
        Corners::all(px(0.0)),
        to_rgba(style.fill),
        Edges::all(px(style.stroke_width)),
        to_rgba(style.stroke),
        BorderStyle::default(),
    ));
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    position: ScreenPoint,
    text: &str,
    style: &TextStyle,
    anchor: TextAnchor,
) {
    if text.is_empty() {
        return;
    }
    let font_size = px(style.size);
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), font_size, &[run], None);
    let width = f32::from(shaped.width);
    let x = match anchor {
        TextAnchor::Start => position.x,
        TextAnchor::Middle => position.x - width * 0.5,
        TextAnchor::End => position.x - width,
    };
    let line_height = shaped.ascent + shaped.descent;
    let origin = point(px(x), px(position.y));
    let _ = shaped.paint(origin, line_height, window, cx);
}

fn offset(position: ScreenPoint, origin: ScreenPoint) -> ScreenPoint {
    ScreenPoint::new(position.x + origin.x, position.y + origin.y)
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_bounds(rect: ScreenRect, origin: ScreenPoint) -> Bounds<Pixels> {
    Bounds::from_corners(
        point(px(rect.min.x + origin.x), px(rect.min.y + origin.y)),
        point(px(rect.max.x + origin.x), px(rect.max.y + origin.y)),
    )
}
