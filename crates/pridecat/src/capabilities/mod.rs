//! Terminal capability resolution.
//!
//! A terminal identity string maps to a discrete color tier; the tier plus
//! the chosen flag decide whether a run is possible at all.

pub mod detect;
pub mod tier;

pub use detect::{resolve, ResolvedCapability};
pub use tier::ColorTier;
