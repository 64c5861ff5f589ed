//! Text measurement abstraction.
//!
//! Scene building needs text extents for the tooltip box and anchored labels
//! before any backend is involved. Backends provide a real shaping-based
//! measurer; tests and headless callers use [`ApproxTextMeasurer`].

/// Measures text extents in pixels.
pub trait TextMeasurer {
    /// Measure a single line of text at the given font size.
    fn measure(&self, text: &str, size: f32) -> (f32, f32);

    /// Measure a multi-line block, including the tooltip's inner padding.
    fn measure_multiline(&self, text: &str, size: f32) -> (f32, f32) {
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        for line in text.lines() {
            let (w, h) = self.measure(line, size);
            width = width.max(w);
            height += h.max(size * 1.2);
        }
        (width + 8.0, height + 8.0)
    }
}

/// Deterministic approximate measurer.
///
/// Assumes a fixed advance per character. Good enough for tests and for
/// hosts without a text system.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTextMeasurer;

impl TextMeasurer for ApproxTextMeasurer {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let width = text.chars().count() as f32 * size * 0.6;
        (width, size * 1.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiline_takes_widest_line() {
        let measurer = ApproxTextMeasurer;
        let (w, h) = measurer.measure_multiline("ab\nabcd\na", 10.0);
        let (widest, _) = measurer.measure("abcd", 10.0);
        assert_eq!(w, widest + 8.0);
        assert_eq!(h, 3.0 * 12.0 + 8.0);
    }
}
