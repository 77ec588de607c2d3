//! Terminal identity detection.
//!
//! Pure ordered substring matching over the terminal identity string, so
//! the whole table is testable without an environment. First match wins;
//! a truecolor hint overrides everything.

use tracing::debug;

use super::tier::ColorTier;

/// Outcome of capability resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCapability {
    pub tier: ColorTier,
    /// Re-send the color escape for every cell (text-mode tiers).
    pub always_escape: bool,
}

/// Resolve the color tier from the terminal identity (`TERM`) and the
/// optional truecolor hint (`COLORTERM`), both matched case-insensitively.
///
/// `terminal_cols` feeds the one width-sensitive entry in the table: a
/// vt100 reporting exactly 40 columns.
pub fn resolve(
    term: Option<&str>,
    truecolor_hint: Option<&str>,
    terminal_cols: u16,
) -> ResolvedCapability {
    // Conservative default for unrecognized terminals.
    let mut tier = ColorTier::Ansi16;

    if let Some(term) = term {
        let term = term.to_lowercase();

        tier = if term.contains("xterm") {
            ColorTier::Indexed256
        } else if term.contains("toaru") {
            // emulates xterm
            ColorTier::Indexed256
        } else if term.contains("linux") {
            ColorTier::LinuxConsole
        } else if term.contains("vtnt") {
            ColorTier::ExtendedAscii
        } else if term.contains("cygwin") {
            ColorTier::ExtendedAscii
        } else if term.contains("vt220") {
            ColorTier::Vt220
        } else if term.contains("fallback") {
            ColorTier::UnicodeFallback
        } else if term.contains("rxvt-256color") {
            ColorTier::Indexed256
        } else if term.contains("rxvt") {
            ColorTier::LinuxConsole
        } else if term.contains("vt100") && terminal_cols == 40 {
            ColorTier::Vt100Compact
        } else if term.starts_with("st") {
            // suckless simple terminal is xterm-256color-compatible
            ColorTier::Indexed256
        } else {
            ColorTier::Ansi16
        };

        if let Some(hint) = truecolor_hint {
            if hint.to_lowercase().contains("truecolor") {
                tier = ColorTier::TrueColor;
            }
        }
    }

    debug!(%tier, "resolved terminal capability");

    ResolvedCapability {
        tier,
        always_escape: tier.always_escape(),
    }
}
