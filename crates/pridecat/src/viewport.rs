//! Viewport computation and the resize-shared state.
//!
//! The viewport is a window in native sprite coordinates; bounds can be
//! negative (the generated tail lives left of the origin). Terminal cells
//! map 2:1 onto sprite columns, so auto width centers against half the
//! terminal column count, and auto height reserves one terminal row for
//! the counter line.

use std::sync::atomic::{AtomicI32, AtomicU16, Ordering};

use crate::animation::{FRAME_HEIGHT, FRAME_WIDTH};

/// The visible window over the composited plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl Viewport {
    /// Compute the viewport from an optional explicit crop and the current
    /// terminal size. Explicit dimensions center the crop on the native
    /// frame; auto dimensions center on what the terminal can show.
    pub fn compute(
        crop_width: Option<u16>,
        crop_height: Option<u16>,
        terminal_cols: u16,
        terminal_rows: u16,
    ) -> Self {
        let (min_col, max_col) = match crop_width {
            Some(w) => centered(FRAME_WIDTH, i32::from(w)),
            None => centered(FRAME_WIDTH, i32::from(terminal_cols) / 2),
        };
        let (min_row, max_row) = match crop_height {
            Some(h) => centered(FRAME_HEIGHT, i32::from(h)),
            None => centered(FRAME_HEIGHT, i32::from(terminal_rows) - 1),
        };
        Self {
            min_row,
            max_row,
            min_col,
            max_col,
        }
    }

    pub fn width(&self) -> i32 {
        self.max_col - self.min_col
    }

    pub fn height(&self) -> i32 {
        self.max_row - self.min_row
    }
}

/// Center a span of `visible` cells on a `native`-sized frame. Truncating
/// division, so an odd overshoot leans one cell left/up.
fn centered(native: i32, visible: i32) -> (i32, i32) {
    ((native - visible) / 2, (native + visible) / 2)
}

/// Viewport state shared between the render loop and the resize handler.
///
/// The handler stores new bounds with relaxed atomics and returns; the
/// loop reads them once per frame. A resize landing mid-read can tear one
/// frame's viewport, which is cosmetic and tolerated by design.
#[derive(Debug)]
pub struct SharedViewport {
    min_row: AtomicI32,
    max_row: AtomicI32,
    min_col: AtomicI32,
    max_col: AtomicI32,
    terminal_cols: AtomicU16,
    auto_width: bool,
    auto_height: bool,
}

impl SharedViewport {
    /// Wrap an initial viewport. `auto_width`/`auto_height` record which
    /// dimensions were derived from the terminal and may be recomputed.
    pub fn new(initial: Viewport, auto_width: bool, auto_height: bool, terminal_cols: u16) -> Self {
        Self {
            min_row: AtomicI32::new(initial.min_row),
            max_row: AtomicI32::new(initial.max_row),
            min_col: AtomicI32::new(initial.min_col),
            max_col: AtomicI32::new(initial.max_col),
            terminal_cols: AtomicU16::new(terminal_cols),
            auto_width,
            auto_height,
        }
    }

    /// Snapshot the current viewport.
    pub fn load(&self) -> Viewport {
        Viewport {
            min_row: self.min_row.load(Ordering::Relaxed),
            max_row: self.max_row.load(Ordering::Relaxed),
            min_col: self.min_col.load(Ordering::Relaxed),
            max_col: self.max_col.load(Ordering::Relaxed),
        }
    }

    /// Terminal width in cells, for counter centering.
    pub fn terminal_cols(&self) -> u16 {
        self.terminal_cols.load(Ordering::Relaxed)
    }

    /// Apply a new terminal size. Only dimensions in auto mode move;
    /// explicitly cropped ones stay fixed for the run.
    pub fn resize(&self, terminal_cols: u16, terminal_rows: u16) {
        self.terminal_cols.store(terminal_cols, Ordering::Relaxed);

        if self.auto_width {
            let (min, max) = centered(FRAME_WIDTH, i32::from(terminal_cols) / 2);
            self.min_col.store(min, Ordering::Relaxed);
            self.max_col.store(max, Ordering::Relaxed);
        }
        if self.auto_height {
            let (min, max) = centered(FRAME_HEIGHT, i32::from(terminal_rows) - 1);
            self.min_row.store(min, Ordering::Relaxed);
            self.max_row.store(max, Ordering::Relaxed);
        }
    }
}
