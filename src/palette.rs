//! Categorical color assignment for entries.

use crate::render::Color;

/// Fixed 12-color qualitative palette.
pub const PALETTE: [Color; 12] = [
    Color::rgb8(0xa6, 0xce, 0xe3),
    Color::rgb8(0x1f, 0x78, 0xb4),
    Color::rgb8(0xb2, 0xdf, 0x8a),
    Color::rgb8(0x33, 0xa0, 0x2c),
    Color::rgb8(0xfb, 0x9a, 0x99),
    Color::rgb8(0xe3, 0x1a, 0x1c),
    Color::rgb8(0xfd, 0xbf, 0x6f),
    Color::rgb8(0xff, 0x7f, 0x00),
    Color::rgb8(0xca, 0xb2, 0xd6),
    Color::rgb8(0x6a, 0x3d, 0x9a),
    Color::rgb8(0xff, 0xff, 0x99),
    Color::rgb8(0xb1, 0x59, 0x28),
];

/// Color for the entry at the given encounter position.
///
/// Assignment follows mapping iteration order and cycles past twelve entries.
/// It is stable for one render but not across re-renders if entry order
/// changes.
pub fn entry_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_follows_encounter_order() {
        assert_eq!(entry_color(0), PALETTE[0]);
        assert_eq!(entry_color(5), PALETTE[5]);
    }

    #[test]
    fn assignment_cycles_past_palette_length() {
        assert_eq!(entry_color(12), PALETTE[0]);
        assert_eq!(entry_color(25), PALETTE[1]);
    }
}
