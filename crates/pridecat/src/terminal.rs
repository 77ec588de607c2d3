//! Terminal control sequences and queries.
//!
//! Everything the renderer sends is a literal byte string; crossterm is
//! used only to ask the terminal how big it is.

use std::io::Write;

/// Clear the screen and home the cursor.
pub const CLEAR: &[u8] = b"\x1b[H\x1b[2J";
/// Hide / show the cursor.
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
/// Reset SGR attributes.
pub const RESET: &[u8] = b"\x1b[0m";
/// Absolute home, for clear-mode frame starts.
pub const HOME: &[u8] = b"\x1b[H";
/// Save / restore the cursor position, for no-clear mode.
pub const SAVE_CURSOR: &[u8] = b"\x1b[s";
pub const RESTORE_CURSOR: &[u8] = b"\x1b[u";
/// Bright-white text for the counter line.
pub const COUNTER_SGR: &[u8] = b"\x1b[1;37m";
/// Erase below the counter so the line keeps the frame background.
pub const ERASE_BELOW: &[u8] = b"\x1b[J";

/// The titlebar text.
pub const TITLE: &str = "Nyanyanyanyanyanyanya...";

/// Set the terminal title three ways: screen/tmux hardstatus, then the
/// xterm icon-name and window-title OSC variants.
pub fn write_title<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    write!(out, "\x1bk{title}\x1b\\")?;
    write!(out, "\x1b]1;{title}\x07")?;
    write!(out, "\x1b]2;{title}\x07")
}

/// Current terminal size in cells, or None when the query fails (the
/// caller keeps its previous values).
pub fn size() -> Option<(u16, u16)> {
    crossterm::terminal::size().ok()
}

/// Restore cursor visibility and attributes if the process panics mid-
/// animation. Best effort, straight to stdout.
pub fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(SHOW_CURSOR);
        let _ = stdout.write_all(RESET);
        let _ = stdout.flush();
        original(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_sequences() {
        let mut out = Vec::new();
        write_title(&mut out, "nyan").unwrap();
        assert_eq!(
            out,
            b"\x1bknyan\x1b\\\x1b]1;nyan\x07\x1b]2;nyan\x07".to_vec()
        );
    }
}
