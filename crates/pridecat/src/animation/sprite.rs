//! Poptart cat sprite assets.
//!
//! The cat is drawn from small text-art templates keyed by symbolic color
//! codes (space = transparent), layered over a star field and the in-frame
//! stripe region. The stripe region reuses the tail square wave so the
//! bands are continuous across the sprite's left edge, the stars drift two
//! columns per frame in pairs 32 columns apart, and the cat bobs one row
//! every other pair of frames.

use super::{AnimationFrame, FRAME_HEIGHT, FRAME_WIDTH, FRAMES_PER_LOOP};
use crate::flag::StripeFamily;
use crate::palette::SymbolicColor;
use crate::render::tail;

/// Leftmost column the cat body occupies.
const BODY_COL: i32 = 28;
/// Top row of the body at rest (bob adds one).
const BODY_ROW: i32 = 24;
/// In-frame stripes are painted left of this column.
const STRIPE_REACH: i32 = 30;

/// Poptart body, border and frosting, feet on the last two rows.
const BODY: [&str; 20] = [
    " ''''''''''''''''''''''   ",
    "''@@@@@@@@@@@@@@@@@@@@''  ",
    "'@@$$$$$$$$$$$$$$$$$$@@'  ",
    "'@$$$$$$$$$$$$$$$$$$$$@'  ",
    "'@$$$-$$$$$$$$$$-$$$$$@'  ",
    "'@$$$$$$$$$-$$$$$$$$$$@'  ",
    "'@$-$$$$$$$$$$$$$$-$$$@'  ",
    "'@$$$$$$$$$$$$$$$$$$$$@'  ",
    "'@$$$$$$-$$$$$$$$$$$$$@'  ",
    "'@$$$$$$$$$$$$$$$-$$$$@'  ",
    "'@$$$-$$$$$$$$$$$$$$$$@'  ",
    "'@$$$$$$$$$$$-$$$$$$$$@'  ",
    "'@$$$$$$$$$$$$$$$$$$$$@'  ",
    "'@$-$$$$$$$$$$$$$$$-$$@'  ",
    "'@$$$$$$$$$$$$$$$$$$$$@'  ",
    "'@@$$$$$$$$$$$$$$$$$$@@'  ",
    "''@@@@@@@@@@@@@@@@@@@@''  ",
    " ''''''''''''''''''''''   ",
    "  '**'    '**'    '**'    ",
    "  ''''    ''''    ''''    ",
];

/// Cat head: ears, eyes, cheeks, mouth. Overlays the tart's right edge.
const HEAD: [&str; 10] = [
    " ''       ''  ",
    "'**'     '**' ",
    "'***''''''***'",
    "'************'",
    "'*''****''***'",
    "'************'",
    "'%%********%%'",
    "'**''''''****'",
    "'************'",
    " '''''''''''' ",
];

/// Gray tail poking out over the stripes.
const CAT_TAIL: [&str; 5] = [
    "  ''''  ",
    " '****' ",
    "''***'  ",
    "'**''   ",
    "'''     ",
];

/// Star seeds: (row, col) with col < 32; each star also gets a twin 32
/// columns to the right so the 16-frame drift wraps without a jump.
const STAR_BASES: [(i32, i32); 8] = [
    (2, 5),
    (7, 19),
    (13, 28),
    (19, 11),
    (47, 7),
    (51, 24),
    (58, 16),
    (61, 2),
];

/// Build one frame of the sequence for a stripe family.
pub fn build_frame(family: StripeFamily, index: usize) -> AnimationFrame {
    let mut cells =
        vec![vec![SymbolicColor::BACKGROUND; FRAME_WIDTH as usize]; FRAME_HEIGHT as usize];

    for row in tail::TAIL_BAND_TOP..=tail::TAIL_BAND_BOTTOM {
        for col in 0..STRIPE_REACH {
            cells[row as usize][col as usize] = tail::stripe_color(family, col, row, index);
        }
    }

    let drift = 2 * (index % FRAMES_PER_LOOP) as i32;
    for (row, col) in STAR_BASES {
        for twin in [0, 32] {
            let x = (col + twin - drift).rem_euclid(FRAME_WIDTH) as usize;
            let cell = &mut cells[row as usize][x];
            if *cell == SymbolicColor::BACKGROUND {
                *cell = SymbolicColor('.');
            }
        }
    }

    let bob = ((index / 2) % 2) as i32;
    blit(&mut cells, &CAT_TAIL, BODY_ROW + bob + 9, BODY_COL - 6);
    blit(&mut cells, &BODY, BODY_ROW + bob, BODY_COL);
    blit(&mut cells, &HEAD, BODY_ROW + bob + 6, BODY_COL + 14);

    AnimationFrame::new(cells)
}

/// Copy a template onto the grid; spaces are transparent.
fn blit(cells: &mut [Vec<SymbolicColor>], art: &[&str], top: i32, left: i32) {
    for (dy, line) in art.iter().enumerate() {
        for (dx, ch) in line.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let row = top + dy as i32;
            let col = left + dx as i32;
            if (0..FRAME_HEIGHT).contains(&row) && (0..FRAME_WIDTH).contains(&col) {
                cells[row as usize][col as usize] = SymbolicColor(ch);
            }
        }
    }
}
