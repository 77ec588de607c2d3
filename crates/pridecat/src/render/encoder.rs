//! Escape-minimized output encoding.
//!
//! Terminal cells keep their background attribute until it changes, so a
//! run of same-colored cells needs one escape followed by plain glyphs.
//! The encoder tracks the last color it emitted across a whole frame and
//! resets at the next frame, mirroring the full-redraw cursor reposition.

use std::io::{self, Write};

use crate::palette::{Palette, SymbolicColor};

/// The visual pixel: two spaces, one double-wide cell per sprite column.
pub const GLYPH: &[u8] = b"  ";

/// Stateful frame encoder.
#[derive(Debug)]
pub struct OutputEncoder {
    last: Option<SymbolicColor>,
    always_escape: bool,
}

impl OutputEncoder {
    pub fn new(always_escape: bool) -> Self {
        Self {
            last: None,
            always_escape,
        }
    }

    /// Encode one composited frame into the sink. Each row ends in a
    /// newline regardless of color state.
    pub fn encode_frame<W: Write>(
        &mut self,
        rows: &[Vec<SymbolicColor>],
        palette: &Palette,
        out: &mut W,
    ) -> io::Result<()> {
        self.last = None;
        for row in rows {
            for &color in row {
                self.encode_cell(color, palette, out)?;
            }
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn encode_cell<W: Write>(
        &mut self,
        color: SymbolicColor,
        palette: &Palette,
        out: &mut W,
    ) -> io::Result<()> {
        if self.always_escape {
            if let Some(escape) = palette.escape(color) {
                out.write_all(escape.as_bytes())?;
            }
            return out.write_all(GLYPH);
        }

        match palette.escape(color) {
            Some(escape) if self.last != Some(color) => {
                self.last = Some(color);
                out.write_all(escape.as_bytes())?;
                out.write_all(GLYPH)
            }
            // Same color as the previous cell, or a code the palette does
            // not know: the background attribute is inherited.
            _ => out.write_all(GLYPH),
        }
    }
}
