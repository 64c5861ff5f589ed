//! Hover hit-testing and the transient hover overlay description.
//!
//! Hover state is view-layer only; it never touches the underlying
//! [`IdentityMap`](crate::entry::IdentityMap).

use crate::chart::PlacedPoint;
use crate::geom::ScreenPoint;

/// Extra pixels around a marker that still count as a hit.
pub const HOVER_HIT_PAD: f32 = 2.0;

/// Core-circle enlargement factor while hovered.
pub const HOVER_ENLARGE: f32 = 1.2;

/// The transient overlay drawn while a point is hovered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverOverlay {
    /// Index of the hovered point in [`IdentityChart::placed_points`](crate::chart::IdentityChart::placed_points).
    pub point: usize,
    /// Pointer position in canvas coordinates; anchors the tooltip.
    pub cursor: ScreenPoint,
    /// Current enlargement of the hovered core circle.
    ///
    /// Backends animate this from 1.0 up to [`HOVER_ENLARGE`].
    pub enlarge: f32,
}

/// Find the placed point under the cursor, if any.
///
/// A point is hit when the cursor lies within its core radius plus
/// [`HOVER_HIT_PAD`]; the nearest center wins when markers overlap. Returns
/// an index into `points`.
pub fn hit_test(points: &[PlacedPoint], cursor: ScreenPoint) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, point) in points.iter().enumerate() {
        let radius = point.size + HOVER_HIT_PAD;
        let dist_sq = point.center.distance_sq(cursor);
        if dist_sq > radius * radius {
            continue;
        }
        if best.is_none_or(|(_, best_dist)| dist_sq < best_dist) {
            best = Some((index, dist_sq));
        }
    }
    best.map(|(index, _)| index)
}

/// Cubic ease-out for the hover enlargement transition.
pub fn ease_out(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    fn point(index: usize, x: f32, y: f32, size: f32) -> PlacedPoint {
        PlacedPoint {
            index,
            center: ScreenPoint::new(x, y),
            size,
            color: Color::BLACK,
        }
    }

    #[test]
    fn hit_requires_cursor_within_radius() {
        let points = [point(0, 100.0, 100.0, 7.0)];
        assert_eq!(hit_test(&points, ScreenPoint::new(105.0, 100.0)), Some(0));
        assert_eq!(hit_test(&points, ScreenPoint::new(120.0, 100.0)), None);
    }

    #[test]
    fn nearest_center_wins_on_overlap() {
        let points = [point(0, 100.0, 100.0, 10.0), point(1, 106.0, 100.0, 10.0)];
        assert_eq!(hit_test(&points, ScreenPoint::new(105.0, 100.0)), Some(1));
        assert_eq!(hit_test(&points, ScreenPoint::new(101.0, 100.0)), Some(0));
    }

    #[test]
    fn ease_out_is_monotonic_and_clamped() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.25) < ease_out(0.5));
        assert!(ease_out(0.5) > 0.5);
    }
}
