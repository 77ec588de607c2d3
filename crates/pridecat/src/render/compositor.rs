//! Frame compositing over the viewport.
//!
//! The conceptual plane is infinite: the native frame sits at the origin,
//! the generated tail extends to its left, and everything else is plain
//! background. The viewport picks a rectangle out of that plane.

use crate::animation::{AnimationFrame, FRAME_HEIGHT, FRAME_WIDTH};
use crate::flag::StripeFamily;
use crate::palette::SymbolicColor;
use crate::render::tail;
use crate::viewport::Viewport;

/// Composite one frame across the viewport, row-major.
///
/// Cell priority is load-bearing: the tail band is checked before the
/// generic out-of-bounds fallback, otherwise the generated tail would
/// vanish into background.
pub fn compose(
    frame: &AnimationFrame,
    viewport: Viewport,
    frame_index: usize,
    family: StripeFamily,
) -> Vec<Vec<SymbolicColor>> {
    let mut rows = Vec::with_capacity(viewport.height().max(0) as usize);
    for row in viewport.min_row..viewport.max_row {
        let mut cells = Vec::with_capacity(viewport.width().max(0) as usize);
        for col in viewport.min_col..viewport.max_col {
            let color = if tail::in_tail_band(row) && col < 0 {
                tail::stripe_color(family, col, row, frame_index)
            } else if col < 0 || row < 0 || row >= FRAME_HEIGHT || col >= FRAME_WIDTH {
                SymbolicColor::BACKGROUND
            } else {
                frame.cell(row, col)
            };
            cells.push(color);
        }
        rows.push(cells);
    }
    rows
}
