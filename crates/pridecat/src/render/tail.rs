//! The generated rainbow tail.
//!
//! A square wave over column offset and frame index, indexed into the
//! family stripe pattern. Two frames of one phase, two of the inverted
//! phase, so the bands appear to flow leftwards behind the cat.

use crate::flag::StripeFamily;
use crate::palette::SymbolicColor;

/// First native row of the tail band.
pub const TAIL_BAND_TOP: i32 = 24;
/// Last native row of the tail band, inclusive.
pub const TAIL_BAND_BOTTOM: i32 = 42;

/// Whether a native row falls inside the tail band.
pub fn in_tail_band(row: i32) -> bool {
    (TAIL_BAND_TOP..=TAIL_BAND_BOTTOM).contains(&row)
}

/// Square-wave phase for a column at a frame: 0 or 1, inverting every
/// other pair of frames.
pub fn stripe_phase(col: i32, frame_index: usize) -> i32 {
    let phase = (2 - col).rem_euclid(16) / 8;
    if (frame_index / 2) % 2 == 1 {
        1 - phase
    } else {
        phase
    }
}

/// Stripe color for a band cell. Positions past the end of the pattern
/// fall back to plain background.
pub fn stripe_color(
    family: StripeFamily,
    col: i32,
    row: i32,
    frame_index: usize,
) -> SymbolicColor {
    let index = (stripe_phase(col, frame_index) + row - (TAIL_BAND_TOP - 1)) as usize;
    let code = family
        .stripe_pattern()
        .as_bytes()
        .get(index)
        .copied()
        .unwrap_or(b',');
    SymbolicColor(code as char)
}
