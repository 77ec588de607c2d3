//! Error taxonomy for the render engine.
//!
//! Everything here is fatal: configuration and capability errors are raised
//! before the first byte touches the terminal, and terminal writes either
//! succeed or end the run.

use crate::capabilities::ColorTier;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `--pride` value did not match any known flag spelling.
    #[error("unrecognized pride type {0:?}")]
    UnknownPrideType(String),

    /// The resolved tier has no complete palette for the chosen flag.
    #[error("unsupported terminal ({tier}). Please use an xterm compatible terminal.")]
    UnsupportedTerminal { tier: ColorTier },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
