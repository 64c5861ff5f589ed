//! Linear scales and the strength placement transform.

use crate::geom::ScreenPoint;

/// Plotted strength domain on both axes.
pub const STRENGTH_DOMAIN: (f64, f64) = (-10.0, 10.0);

/// Base marker size in pixels.
pub const MARKER_BASE_SIZE: f32 = 7.0;

/// A linear scale mapping a data domain to a pixel range.
///
/// The range may be inverted (larger domain value mapped to a smaller pixel
/// value), which is how the Y axis maps `+10` to the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    /// Create a scale from a domain and a pixel range.
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to a pixel coordinate.
    ///
    /// Values outside the domain extrapolate linearly; non-finite values map
    /// to `None`.
    pub fn map(&self, value: f64) -> Option<f32> {
        if !value.is_finite() {
            return None;
        }
        let span = self.domain.1 - self.domain.0;
        let norm = (value - self.domain.0) / span;
        Some(self.range.0 + norm as f32 * (self.range.1 - self.range.0))
    }
}

/// Positions and sizes points from their strength.
///
/// The transform is intentionally non-linear: strengths at or above 5 are
/// compressed toward the origin, and an exact maximum of 10 is pinned to the
/// plot's exact center. This favors visual separation near the origin.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    x: LinearScale,
    y: LinearScale,
}

impl Placement {
    /// Create a placement over the two axis scales.
    pub fn new(x: LinearScale, y: LinearScale) -> Self {
        Self { x, y }
    }

    /// Domain value a strength actually plots at.
    fn plotted_value(strength: f64) -> f64 {
        if strength == STRENGTH_DOMAIN.1 {
            0.0
        } else if strength >= STRENGTH_DOMAIN.1 / 2.0 {
            strength / 2.0
        } else {
            strength
        }
    }

    /// Screen position of a strength, applied identically to both axes.
    ///
    /// Non-finite strengths have no position.
    pub fn position(&self, strength: f64) -> Option<ScreenPoint> {
        let value = Self::plotted_value(strength);
        Some(ScreenPoint::new(self.x.map(value)?, self.y.map(value)?))
    }
}

/// Marker size for a strength, tiered with the position transform.
pub fn marker_size(strength: f64) -> f32 {
    if strength == STRENGTH_DOMAIN.1 {
        MARKER_BASE_SIZE * 1.8
    } else if strength >= STRENGTH_DOMAIN.1 / 2.0 {
        MARKER_BASE_SIZE * 1.4
    } else {
        MARKER_BASE_SIZE
    }
}
