//! Color capability tiers.
//!
//! Tiers are resolved once at startup and immutable for the rest of the
//! run. Only the top three carry background-color palettes; the text-mode
//! tiers are recognized so they can be reported, not rendered to.

/// Terminal color capability class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTier {
    /// 24-bit SGR backgrounds (COLORTERM=truecolor).
    TrueColor,
    /// 256-color indexed backgrounds (xterm and friends).
    Indexed256,
    /// 4-bit ANSI backgrounds. The conservative default.
    Ansi16,
    /// Linux console: 16-color codes plus the blink attribute quirk.
    LinuxConsole,
    /// Unicode character fallback, no color.
    UnicodeFallback,
    /// Extended ASCII fallback (Windows consoles).
    ExtendedAscii,
    /// DEC vt220, no color support.
    Vt220,
    /// vt100 at 40 columns, no color support.
    Vt100Compact,
}

impl ColorTier {
    /// Text-mode tiers redraw the full cell every time instead of relying
    /// on a sticky background attribute.
    pub fn always_escape(self) -> bool {
        matches!(
            self,
            Self::UnicodeFallback | Self::ExtendedAscii | Self::Vt220 | Self::Vt100Compact
        )
    }

    /// Whether any background-color palette exists for this tier.
    pub fn has_palette(self) -> bool {
        matches!(self, Self::TrueColor | Self::Indexed256 | Self::Ansi16)
    }
}

impl std::fmt::Display for ColorTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrueColor => write!(f, "truecolor"),
            Self::Indexed256 => write!(f, "256-color"),
            Self::Ansi16 => write!(f, "16-color"),
            Self::LinuxConsole => write!(f, "linux console"),
            Self::UnicodeFallback => write!(f, "unicode fallback"),
            Self::ExtendedAscii => write!(f, "extended ascii"),
            Self::Vt220 => write!(f, "vt220"),
            Self::Vt100Compact => write!(f, "vt100/40-column"),
        }
    }
}
