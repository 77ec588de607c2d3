//! The render loop: Starting -> Running -> Stopping.
//!
//! One logical thread drives everything; the only out-of-band activity is
//! the resize task nudging the shared viewport and the interrupt future
//! racing the inter-frame sleep. Cleanup runs exactly once on the way out,
//! whichever way the loop ends.

use std::future::Future;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::animation::AnimationSequence;
use crate::capabilities;
use crate::config::RunConfig;
use crate::error::Error;
use crate::palette::Palette;
use crate::render::{compose, OutputEncoder};
use crate::terminal;
use crate::viewport::{SharedViewport, Viewport};

/// Length of the counter text around the digits:
/// "You have prided for " plus " seconds!".
const COUNTER_TEXT_LEN: i32 = 29;

/// Run-time state owned by the loop; nothing else touches it.
struct RenderState {
    frame_index: usize,
    frames_shown: u32,
    started: Instant,
}

/// Resolve capabilities, set up signals and drive the animation on stdout
/// until the frame limit or an interrupt ends it.
pub async fn run(config: RunConfig) -> Result<(), Error> {
    let term = std::env::var("TERM").ok();
    let truecolor = std::env::var("COLORTERM").ok();
    let (cols, rows) = terminal::size().unwrap_or((80, 24));

    let caps = capabilities::resolve(term.as_deref(), truecolor.as_deref(), cols);
    // Fatal before the terminal has been touched at all.
    let palette = Palette::build(caps.tier, config.variant)?;

    let sequence = AnimationSequence::for_family(config.variant.family());
    let viewport = Viewport::compute(config.crop_width, config.crop_height, cols, rows);
    let shared = Arc::new(SharedViewport::new(
        viewport,
        config.crop_width.is_none(),
        config.crop_height.is_none(),
        cols,
    ));

    terminal::install_panic_hook();
    #[cfg(unix)]
    spawn_resize_task(Arc::clone(&shared));

    let stop = Box::pin(async {
        let _ = tokio::signal::ctrl_c().await;
    });

    let mut out = BufWriter::new(io::stdout());
    let result = render(
        &config,
        &palette,
        caps.always_escape,
        &sequence,
        &shared,
        &mut out,
        stop,
    )
    .await;

    // Best-effort, unconditional, exactly once.
    let _ = cleanup(&mut out, config.clear_screen);
    result?;
    Ok(())
}

/// Forward SIGWINCH into viewport recomputation. The handler body does no
/// blocking work: query the size, store the auto dimensions, return. A
/// failed size query keeps the previous viewport.
#[cfg(unix)]
fn spawn_resize_task(shared: Arc<SharedViewport>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let Ok(mut winch) = signal(SignalKind::window_change()) else {
            return;
        };
        while winch.recv().await.is_some() {
            if let Some((cols, rows)) = terminal::size() {
                shared.resize(cols, rows);
                debug!(cols, rows, "viewport recomputed after resize");
            }
        }
    });
}

/// The loop proper, generic over the output sink and the termination
/// signal so it can be driven against a buffer in tests.
pub async fn render<W, F>(
    config: &RunConfig,
    palette: &Palette,
    always_escape: bool,
    sequence: &AnimationSequence,
    shared: &SharedViewport,
    out: &mut W,
    mut stop: F,
) -> io::Result<()>
where
    W: Write,
    F: Future<Output = ()> + Unpin,
{
    if config.set_title {
        terminal::write_title(out, terminal::TITLE)?;
    }
    if config.clear_screen {
        out.write_all(terminal::CLEAR)?;
        out.write_all(terminal::HIDE_CURSOR)?;
    } else {
        out.write_all(terminal::SAVE_CURSOR)?;
    }

    let family = config.variant.family();
    let mut encoder = OutputEncoder::new(always_escape);
    let mut state = RenderState {
        frame_index: 0,
        frames_shown: 0,
        started: Instant::now(),
    };

    loop {
        out.write_all(if config.clear_screen {
            terminal::HOME
        } else {
            terminal::RESTORE_CURSOR
        })?;

        let viewport = shared.load();
        let rows = compose(
            sequence.frame(state.frame_index),
            viewport,
            state.frame_index,
            family,
        );
        encoder.encode_frame(&rows, palette, out)?;

        if config.show_counter {
            write_counter(out, shared.terminal_cols(), state.started.elapsed().as_secs())?;
        }
        out.flush()?;

        state.frames_shown += 1;
        if config.frame_limit != 0 && state.frames_shown >= config.frame_limit {
            break;
        }
        state.frame_index = (state.frame_index + 1) % sequence.len();

        // Pacing only; a pending interrupt wins immediately.
        tokio::select! {
            _ = tokio::time::sleep(config.delay) => {}
            _ = &mut stop => break,
        }
    }
    Ok(())
}

/// Centered "You have prided for N seconds!" on the row below the frame.
fn write_counter<W: Write>(out: &mut W, terminal_cols: u16, seconds: u64) -> io::Result<()> {
    let mut pad = (i32::from(terminal_cols) - COUNTER_TEXT_LEN - digits(seconds)) / 2;
    while pad > 0 {
        out.write_all(b" ")?;
        pad -= 1;
    }
    out.write_all(terminal::COUNTER_SGR)?;
    write!(out, "You have prided for {seconds} seconds!")?;
    out.write_all(terminal::ERASE_BELOW)?;
    out.write_all(terminal::RESET)
}

/// Restore the cursor and attributes; clear or drop a trailing newline
/// depending on clear mode.
fn cleanup<W: Write>(out: &mut W, clear_screen: bool) -> io::Result<()> {
    if clear_screen {
        out.write_all(terminal::SHOW_CURSOR)?;
        out.write_all(terminal::RESET)?;
        out.write_all(terminal::CLEAR)?;
    } else {
        out.write_all(terminal::RESET)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Decimal digit count, for centering the counter.
fn digits(mut n: u64) -> i32 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(99), 2);
        assert_eq!(digits(1234), 4);
    }

    #[test]
    fn test_counter_is_centered() {
        let mut out = Vec::new();
        write_counter(&mut out, 80, 5).unwrap();
        let text = String::from_utf8(out).unwrap();
        // (80 - 29 - 1) / 2 = 25 leading spaces.
        assert!(text.starts_with(&" ".repeat(25)));
        assert!(!text.starts_with(&" ".repeat(26)));
        assert!(text.contains("You have prided for 5 seconds!"));
    }

    #[test]
    fn test_narrow_terminal_drops_the_padding() {
        let mut out = Vec::new();
        write_counter(&mut out, 20, 5).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[1;37mYou have prided"));
    }

    #[test]
    fn test_cleanup_modes() {
        let mut cleared = Vec::new();
        cleanup(&mut cleared, true).unwrap();
        assert_eq!(cleared, b"\x1b[?25h\x1b[0m\x1b[H\x1b[2J".to_vec());

        let mut kept = Vec::new();
        cleanup(&mut kept, false).unwrap();
        assert_eq!(kept, b"\x1b[0m\n".to_vec());
    }
}
