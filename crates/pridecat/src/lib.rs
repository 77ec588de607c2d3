//! Capability-adaptive terminal renderer for the classic poptart cat,
//! flying pride flags.
//!
//! The pipeline: resolve the terminal's color tier, build the (tier, flag)
//! palette, composite each frame over a viewport that tracks the live
//! terminal size, and encode cells into escape-minimized output. The
//! binary in `main.rs` is a thin CLI over [`run`].

pub mod animation;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod flag;
pub mod palette;
pub mod render;
pub mod runloop;
pub mod terminal;
pub mod viewport;

pub use config::RunConfig;
pub use error::Error;
pub use flag::FlagVariant;
pub use runloop::run;
