//! Pride flag variants and their stripe families.
//!
//! Every flag belongs to a family that shares a stripe count (3 to 6), and
//! each family owns one fixed stripe band layout used both inside the
//! animation frames and for the generated tail. The variant is picked once
//! at startup and never re-dispatched per frame.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::Error;
use crate::palette::SymbolicColor;

/// The selected decorative stripe theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagVariant {
    Lesbian,
    Gay,
    Bisexual,
    Transgender,
    Queer,
    NonBinary,
    Asexual,
    Pansexual,
}

impl FlagVariant {
    pub const ALL: [FlagVariant; 8] = [
        Self::Lesbian,
        Self::Gay,
        Self::Bisexual,
        Self::Transgender,
        Self::Queer,
        Self::NonBinary,
        Self::Asexual,
        Self::Pansexual,
    ];

    /// Stripe-count family this flag renders with.
    pub fn family(self) -> StripeFamily {
        match self {
            Self::Gay => StripeFamily::Six,
            Self::Lesbian | Self::Transgender => StripeFamily::Five,
            Self::Asexual | Self::NonBinary => StripeFamily::Four,
            Self::Bisexual | Self::Queer | Self::Pansexual => StripeFamily::Three,
        }
    }

    /// Pick a flag uniformly at random (the default when none is requested).
    pub fn random() -> Self {
        Self::ALL[rand::thread_rng().gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for FlagVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lesbian => write!(f, "lesbian"),
            Self::Gay => write!(f, "gay"),
            Self::Bisexual => write!(f, "bisexual"),
            Self::Transgender => write!(f, "transgender"),
            Self::Queer => write!(f, "queer"),
            Self::NonBinary => write!(f, "nonbinary"),
            Self::Asexual => write!(f, "asexual"),
            Self::Pansexual => write!(f, "pansexual"),
        }
    }
}

impl FromStr for FlagVariant {
    type Err = Error;

    /// Accepts the alternative spellings supported by `--pride`.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "lesbian" | "l" => Ok(Self::Lesbian),
            "gay" | "g" => Ok(Self::Gay),
            "bisexual" | "bi" | "b" => Ok(Self::Bisexual),
            "trans" | "transgender" | "t" => Ok(Self::Transgender),
            "queer" | "q" => Ok(Self::Queer),
            "nonbinary" | "non-binary" | "nb" => Ok(Self::NonBinary),
            "asexual" | "ace" | "a" => Ok(Self::Asexual),
            "pansexual" | "pan-sexual" | "pan" | "p" => Ok(Self::Pansexual),
            other => Err(Error::UnknownPrideType(other.to_string())),
        }
    }
}

/// Stripe-count family. Flags in one family share an animation sequence and
/// a tail band layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripeFamily {
    Three,
    Four,
    Five,
    Six,
}

impl StripeFamily {
    /// The vertical stripe band, top to bottom, as symbolic color codes.
    ///
    /// Stripe codes are doubled at the band edges to produce thicker outer
    /// bands on screen; `,` positions are plain background.
    pub fn stripe_pattern(self) -> &'static str {
        match self {
            Self::Six => ",,>>&&&+++###==;;;,,",
            Self::Five => ",,>>&&&+++###==,,,,,",
            Self::Four => ",,>>>>++++####;;;;,,",
            Self::Three => ",,>>>>>++++++=====,,",
        }
    }

    /// The distinct stripe codes this family paints with.
    pub fn stripe_codes(self) -> &'static [SymbolicColor] {
        const SIX: [SymbolicColor; 6] = [
            SymbolicColor('>'),
            SymbolicColor('&'),
            SymbolicColor('+'),
            SymbolicColor('#'),
            SymbolicColor('='),
            SymbolicColor(';'),
        ];
        const FIVE: [SymbolicColor; 5] = [
            SymbolicColor('>'),
            SymbolicColor('&'),
            SymbolicColor('+'),
            SymbolicColor('#'),
            SymbolicColor('='),
        ];
        const FOUR: [SymbolicColor; 4] = [
            SymbolicColor('>'),
            SymbolicColor('+'),
            SymbolicColor('#'),
            SymbolicColor(';'),
        ];
        const THREE: [SymbolicColor; 3] = [
            SymbolicColor('>'),
            SymbolicColor('+'),
            SymbolicColor('='),
        ];
        match self {
            Self::Six => &SIX,
            Self::Five => &FIVE,
            Self::Four => &FOUR,
            Self::Three => &THREE,
        }
    }
}
