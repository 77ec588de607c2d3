//! Run configuration.
//!
//! Built once from the CLI surface and immutable afterwards. Out-of-range
//! values are clamped or ignored here, never fatal.

use std::time::Duration;

use crate::flag::FlagVariant;

/// Accepted inter-frame delay range, in milliseconds.
pub const DELAY_MIN_MS: u64 = 10;
pub const DELAY_MAX_MS: u64 = 1000;
pub const DELAY_DEFAULT_MS: u64 = 90;

/// Immutable per-run configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The flag to fly.
    pub variant: FlagVariant,
    /// Pacing delay between frames.
    pub delay: Duration,
    /// Frames to show before quitting, or 0 to loop forever.
    pub frame_limit: u32,
    /// Explicit crop width in sprite columns; None = track the terminal.
    pub crop_width: Option<u16>,
    /// Explicit crop height in sprite rows; None = track the terminal.
    pub crop_height: Option<u16>,
    /// Show the elapsed-seconds counter under the animation.
    pub show_counter: bool,
    /// Set the terminal title at startup.
    pub set_title: bool,
    /// Clear the screen between frames (vs. cursor save/restore).
    pub clear_screen: bool,
}

impl RunConfig {
    pub fn new(variant: FlagVariant) -> Self {
        Self {
            variant,
            delay: Duration::from_millis(DELAY_DEFAULT_MS),
            frame_limit: 0,
            crop_width: None,
            crop_height: None,
            show_counter: true,
            set_title: true,
            clear_screen: true,
        }
    }

    /// Apply a requested delay; values outside the accepted range silently
    /// keep the default.
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        if (DELAY_MIN_MS..=DELAY_MAX_MS).contains(&ms) {
            self.delay = Duration::from_millis(ms);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_clamping() {
        let base = RunConfig::new(FlagVariant::Gay);
        assert_eq!(base.clone().with_delay_ms(250).delay, Duration::from_millis(250));
        assert_eq!(base.clone().with_delay_ms(10).delay, Duration::from_millis(10));
        assert_eq!(base.clone().with_delay_ms(1000).delay, Duration::from_millis(1000));
        // Out of range: keep the default, don't error
        assert_eq!(base.clone().with_delay_ms(5).delay, Duration::from_millis(90));
        assert_eq!(base.with_delay_ms(5000).delay, Duration::from_millis(90));
    }
}
