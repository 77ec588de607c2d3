//! Symbolic colors and per-run palettes.
//!
//! Animation frames are painted in symbolic color codes; a `Palette` maps
//! those codes to literal SGR background escapes for one (tier, flag) pair.
//! Palettes are built fresh per run and never merged across flags, so a
//! stripe code can mean different colors in different runs without any
//! shared mutable table.

use std::collections::HashMap;

use tracing::debug;

use crate::capabilities::ColorTier;
use crate::error::Error;
use crate::flag::FlagVariant;

/// A single logical paint color, stable across all frames of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolicColor(pub char);

impl SymbolicColor {
    /// Plain background: deep blue sky.
    pub const BACKGROUND: SymbolicColor = SymbolicColor(',');
}

/// Base colors present for every flag: sky, stars, border, poptart body,
/// face and cheeks.
const BASE_TRUECOLOR: &[(char, &str)] = &[
    (',', "\x1b[48;2;9;22;128m"),    // Blue background
    ('.', "\x1b[48;2;255;255;255m"), // White stars
    ('\'', "\x1b[48;2;0;0;0m"),      // Black border
    ('@', "\x1b[48;2;248;206;160m"), // Tan poptart
    ('$', "\x1b[48;2;242;160;250m"), // Pink poptart
    ('-', "\x1b[48;2;236;74;151m"),  // Red poptart
    ('*', "\x1b[48;2;154;154;154m"), // Gray cat face
    ('%', "\x1b[48;2;242;158;156m"), // Pink cheeks
];

const BASE_INDEXED256: &[(char, &str)] = &[
    (',', "\x1b[48;5;18m"),
    ('.', "\x1b[48;5;231m"),
    ('\'', "\x1b[48;5;16m"),
    ('@', "\x1b[48;5;223m"),
    ('$', "\x1b[48;5;219m"),
    ('-', "\x1b[48;5;204m"),
    ('*', "\x1b[48;5;102m"),
    ('%', "\x1b[48;5;217m"),
];

const BASE_ANSI16: &[(char, &str)] = &[
    (',', "\x1b[104m"),
    ('.', "\x1b[107m"),
    ('\'', "\x1b[40m"),
    ('@', "\x1b[47m"),
    ('$', "\x1b[105m"),
    ('-', "\x1b[101m"),
    ('*', "\x1b[100m"),
    ('%', "\x1b[105m"),
];

/// Stripe escapes for one (tier, flag) pair, or None where no viable
/// approximation exists.
fn stripe_entries(tier: ColorTier, variant: FlagVariant) -> Option<&'static [(char, &'static str)]> {
    use ColorTier::*;
    use FlagVariant::*;

    let entries: &'static [(char, &'static str)] = match (variant, tier) {
        (Lesbian, TrueColor) => &[
            ('>', "\x1b[48;2;198;59;30m"),
            ('&', "\x1b[48;2;243;160;99m"),
            ('+', "\x1b[48;2;255;255;255m"),
            ('#', "\x1b[48;2;199;106;163m"),
            ('=', "\x1b[48;2;152;31;96m"),
        ],
        (Lesbian, Indexed256) => &[
            ('>', "\x1b[48;5;166m"),
            ('&', "\x1b[48;5;215m"),
            ('+', "\x1b[48;5;231m"),
            ('#', "\x1b[48;5;169m"),
            ('=', "\x1b[48;5;89m"),
        ],
        // The 16-color cube has no workable lesbian-flag approximation.
        (Lesbian, Ansi16) => return None,

        (Gay, TrueColor) => &[
            ('>', "\x1b[48;2;236;51;44m"),  // Red
            ('&', "\x1b[48;2;244;168;74m"), // Orange
            ('+', "\x1b[48;2;255;254;104m"), // Yellow
            ('#', "\x1b[48;2;53;126;43m"),  // Green
            ('=', "\x1b[48;2;0;28;239m"),   // Blue
            (';', "\x1b[48;2;123;26;121m"), // Purple
        ],
        (Gay, Indexed256) => &[
            ('>', "\x1b[48;5;202m"),
            ('&', "\x1b[48;5;215m"),
            ('+', "\x1b[48;5;227m"),
            ('#', "\x1b[48;5;64m"),
            ('=', "\x1b[48;5;21m"),
            (';', "\x1b[48;5;90m"),
        ],
        (Gay, Ansi16) => &[
            ('>', "\x1b[101m"),
            ('&', "\x1b[43m"),
            ('+', "\x1b[103m"),
            ('#', "\x1b[102m"),
            ('=', "\x1b[104m"),
            (';', "\x1b[45m"),
        ],

        (Transgender, TrueColor) => &[
            ('>', "\x1b[48;2;120;205;246m"), // blue
            ('&', "\x1b[48;2;235;174;186m"), // pink
            ('+', "\x1b[48;2;255;255;255m"), // white
            ('#', "\x1b[48;2;235;174;186m"), // pink
            ('=', "\x1b[48;2;120;205;246m"), // blue
        ],
        (Transgender, Indexed256) => &[
            ('>', "\x1b[48;5;117m"),
            ('&', "\x1b[48;5;217m"),
            ('+', "\x1b[48;5;231m"),
            ('#', "\x1b[48;5;217m"),
            ('=', "\x1b[48;5;117m"),
        ],
        (Transgender, Ansi16) => &[
            ('>', "\x1b[106m"),
            ('&', "\x1b[105m"),
            ('+', "\x1b[107m"),
            ('#', "\x1b[105m"),
            ('=', "\x1b[106m"),
        ],

        (Bisexual, TrueColor) => &[
            ('>', "\x1b[48;2;199;43;112m"),
            ('+', "\x1b[48;2;147;84;148m"),
            ('=', "\x1b[48;2;14;56;163m"),
        ],
        (Bisexual, Indexed256) => &[
            ('>', "\x1b[48;5;161m"),
            ('+', "\x1b[48;5;96m"),
            ('=', "\x1b[48;5;25m"),
        ],
        (Bisexual, Ansi16) => &[
            ('>', "\x1b[41m"),
            ('+', "\x1b[45m"),
            ('=', "\x1b[104m"),
        ],

        (Queer, TrueColor) => &[
            ('>', "\x1b[48;2;175;131;215m"),
            ('+', "\x1b[48;2;255;255;255m"),
            ('=', "\x1b[48;2;86;128;48m"),
        ],
        (Queer, Indexed256) => &[
            ('>', "\x1b[48;5;140m"),
            ('+', "\x1b[48;5;231m"),
            ('=', "\x1b[48;5;65m"),
        ],
        (Queer, Ansi16) => &[
            ('>', "\x1b[105m"),
            ('+', "\x1b[107m"),
            ('=', "\x1b[102m"),
        ],

        (NonBinary, TrueColor) => &[
            ('>', "\x1b[48;2;254;243;93m"),
            ('+', "\x1b[48;2;255;255;255m"),
            ('#', "\x1b[48;2;147;95;203m"),
            (';', "\x1b[48;2;0;0;0m"),
        ],
        (NonBinary, Indexed256) => &[
            ('>', "\x1b[48;5;227m"),
            ('+', "\x1b[48;5;231m"),
            ('#', "\x1b[48;5;98m"),
            (';', "\x1b[48;5;16m"),
        ],
        (NonBinary, Ansi16) => &[
            ('>', "\x1b[103m"),
            ('+', "\x1b[107m"),
            ('#', "\x1b[45m"),
            (';', "\x1b[40m"),
        ],

        (Asexual, TrueColor) => &[
            ('>', "\x1b[48;2;0;0;0m"),
            ('+', "\x1b[48;2;164;164;164m"),
            ('#', "\x1b[48;2;255;255;255m"),
            (';', "\x1b[48;2;119;25;125m"),
        ],
        (Asexual, Indexed256) => &[
            ('>', "\x1b[48;5;16m"),
            ('+', "\x1b[48;5;145m"),
            ('#', "\x1b[48;5;231m"),
            (';', "\x1b[48;5;90m"),
        ],
        (Asexual, Ansi16) => &[
            ('>', "\x1b[40m"),
            ('+', "\x1b[47m"),
            ('#', "\x1b[107m"),
            (';', "\x1b[45m"),
        ],

        (Pansexual, TrueColor) => &[
            ('>', "\x1b[48;2;236;61;140m"),
            ('+', "\x1b[48;2;250;217;74m"),
            ('=', "\x1b[48;2;80;177;249m"),
        ],
        (Pansexual, Indexed256) => &[
            ('>', "\x1b[48;5;204m"),
            ('+', "\x1b[48;5;221m"),
            ('=', "\x1b[48;5;75m"),
        ],
        (Pansexual, Ansi16) => &[
            ('>', "\x1b[105m"),
            ('+', "\x1b[103m"),
            ('=', "\x1b[107m"),
        ],

        // Text-mode tiers carry no palettes at all.
        _ => return None,
    };

    Some(entries)
}

/// Mapping from symbolic color to escape string, scoped to one run.
///
/// A code absent from the palette renders as "no color change" and
/// inherits whatever background is already set.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: HashMap<SymbolicColor, &'static str>,
}

impl Palette {
    /// Build the palette for a (tier, flag) pair, failing closed when the
    /// tier has no complete palette for the flag.
    pub fn build(tier: ColorTier, variant: FlagVariant) -> Result<Self, Error> {
        if !tier.has_palette() {
            return Err(Error::UnsupportedTerminal { tier });
        }

        let base: &[(char, &str)] = match tier {
            ColorTier::TrueColor => BASE_TRUECOLOR,
            ColorTier::Indexed256 => BASE_INDEXED256,
            ColorTier::Ansi16 => BASE_ANSI16,
            _ => unreachable!("has_palette() filtered text-mode tiers"),
        };
        let stripes =
            stripe_entries(tier, variant).ok_or(Error::UnsupportedTerminal { tier })?;

        let mut entries = HashMap::with_capacity(base.len() + stripes.len());
        for &(code, escape) in base.iter().chain(stripes) {
            entries.insert(SymbolicColor(code), escape);
        }

        debug!(%tier, %variant, codes = entries.len(), "palette built");
        Ok(Self { entries })
    }

    /// Escape string for a code, if the palette defines one.
    pub fn escape(&self, color: SymbolicColor) -> Option<&'static str> {
        self.entries.get(&color).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::StripeFamily;

    const RENDERABLE_TIERS: [ColorTier; 3] =
        [ColorTier::TrueColor, ColorTier::Indexed256, ColorTier::Ansi16];

    const BASE_CODES: [char; 8] = [',', '.', '\'', '@', '$', '-', '*', '%'];

    #[test]
    fn test_every_renderable_pair_has_a_complete_palette() {
        for variant in FlagVariant::ALL {
            for tier in RENDERABLE_TIERS {
                if tier == ColorTier::Ansi16 && variant == FlagVariant::Lesbian {
                    continue;
                }
                let palette = Palette::build(tier, variant)
                    .unwrap_or_else(|e| panic!("{variant} on {tier}: {e}"));
                for code in BASE_CODES {
                    let escape = palette.escape(SymbolicColor(code));
                    assert!(
                        escape.is_some_and(|s| !s.is_empty()),
                        "{variant} on {tier}: base code {code:?} missing"
                    );
                }
                for &code in variant.family().stripe_codes() {
                    let escape = palette.escape(code);
                    assert!(
                        escape.is_some_and(|s| !s.is_empty()),
                        "{variant} on {tier}: stripe code {code:?} missing"
                    );
                }
            }
        }
    }

    #[test]
    fn test_lesbian_on_16_color_fails_closed() {
        let err = Palette::build(ColorTier::Ansi16, FlagVariant::Lesbian).unwrap_err();
        assert!(matches!(err, Error::UnsupportedTerminal { .. }));
    }

    #[test]
    fn test_text_mode_tiers_fail_closed_for_every_flag() {
        for variant in FlagVariant::ALL {
            for tier in [
                ColorTier::LinuxConsole,
                ColorTier::UnicodeFallback,
                ColorTier::ExtendedAscii,
                ColorTier::Vt220,
                ColorTier::Vt100Compact,
            ] {
                assert!(
                    Palette::build(tier, variant).is_err(),
                    "{variant} on {tier} should be unsupported"
                );
            }
        }
    }

    #[test]
    fn test_unknown_code_has_no_escape() {
        let palette = Palette::build(ColorTier::TrueColor, FlagVariant::Gay).unwrap();
        assert_eq!(palette.escape(SymbolicColor('?')), None);
    }

    #[test]
    fn test_stripe_codes_match_family_patterns() {
        // The gay palette must cover all six stripe codes its pattern uses
        let palette = Palette::build(ColorTier::Ansi16, FlagVariant::Gay).unwrap();
        for ch in StripeFamily::Six.stripe_pattern().chars() {
            assert!(palette.escape(SymbolicColor(ch)).is_some());
        }
    }
}
