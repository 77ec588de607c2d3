//! End-to-end render pipeline checks against an in-memory sink.
//!
//! The loop is driven exactly as the binary drives it, with a `Vec<u8>`
//! standing in for stdout and a test-controlled termination future.

use std::future::{pending, ready};

use pridecat::animation::AnimationSequence;
use pridecat::capabilities::ColorTier;
use pridecat::config::RunConfig;
use pridecat::flag::FlagVariant;
use pridecat::palette::Palette;
use pridecat::runloop::render;
use pridecat::viewport::{SharedViewport, Viewport};

/// A fully manual 40x24 viewport so frame geometry is deterministic.
fn fixture(variant: FlagVariant) -> (RunConfig, Palette, AnimationSequence, SharedViewport) {
    let mut config = RunConfig::new(variant).with_delay_ms(10);
    config.crop_width = Some(40);
    config.crop_height = Some(24);
    config.show_counter = false;

    let palette = Palette::build(ColorTier::Indexed256, variant).unwrap();
    let sequence = AnimationSequence::for_family(variant.family());
    let viewport = Viewport::compute(config.crop_width, config.crop_height, 80, 25);
    let shared = SharedViewport::new(viewport, false, false, 80);
    (config, palette, sequence, shared)
}

async fn run_to_vec(
    config: &RunConfig,
    palette: &Palette,
    sequence: &AnimationSequence,
    shared: &SharedViewport,
) -> String {
    let mut out = Vec::new();
    render(config, palette, false, sequence, shared, &mut out, pending())
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_frame_limit_one_renders_exactly_one_frame() {
    let (mut config, palette, sequence, shared) = fixture(FlagVariant::Gay);
    config.frame_limit = 1;

    let text = run_to_vec(&config, &palette, &sequence, &shared).await;

    // 24 viewport rows, one newline each, no second frame.
    assert_eq!(text.matches('\n').count(), 24);
    // Startup clear plus exactly one per-frame home.
    assert_eq!(text.matches("\x1b[H").count(), 2);
    assert_eq!(text.matches("\x1b[2J").count(), 1);
}

#[tokio::test]
async fn test_frame_limit_three() {
    let (mut config, palette, sequence, shared) = fixture(FlagVariant::Queer);
    config.frame_limit = 3;

    let text = run_to_vec(&config, &palette, &sequence, &shared).await;
    assert_eq!(text.matches('\n').count(), 3 * 24);
}

#[tokio::test]
async fn test_pending_interrupt_skips_the_sleep() {
    // An unlimited run with an already-pending termination request stops
    // after the first frame instead of waiting out the delay.
    let (config, palette, sequence, shared) = fixture(FlagVariant::Transgender);
    assert_eq!(config.frame_limit, 0);

    let mut out = Vec::new();
    render(
        &config, &palette, false, &sequence, &shared, &mut out, ready(()),
    )
    .await
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches('\n').count(), 24);
}

#[tokio::test]
async fn test_no_counter_mode_has_no_overlay() {
    let (mut config, palette, sequence, shared) = fixture(FlagVariant::Bisexual);
    config.frame_limit = 4;
    assert!(!config.show_counter);

    let text = run_to_vec(&config, &palette, &sequence, &shared).await;
    assert!(!text.contains("prided"));
}

#[tokio::test]
async fn test_counter_overlay_when_enabled() {
    let (mut config, palette, sequence, shared) = fixture(FlagVariant::Pansexual);
    config.frame_limit = 1;
    config.show_counter = true;

    let text = run_to_vec(&config, &palette, &sequence, &shared).await;
    assert!(text.contains("You have prided for 0 seconds!"));
    // Bright white text, erase-below, reset.
    assert!(text.contains("\x1b[1;37m"));
    assert!(text.contains("\x1b[J"));
}

#[tokio::test]
async fn test_title_can_be_suppressed() {
    let (mut config, palette, sequence, shared) = fixture(FlagVariant::Asexual);
    config.frame_limit = 1;

    let with_title = run_to_vec(&config, &palette, &sequence, &shared).await;
    assert!(with_title.contains("Nyanyanyanyanyanyanya..."));

    config.set_title = false;
    let without = run_to_vec(&config, &palette, &sequence, &shared).await;
    assert!(!without.contains("Nyanyanyanyanyanyanya..."));
    assert!(!without.contains("\x1b]2;"));
}

#[tokio::test]
async fn test_no_clear_mode_saves_and_restores_the_cursor() {
    let (mut config, palette, sequence, shared) = fixture(FlagVariant::NonBinary);
    config.frame_limit = 2;
    config.clear_screen = false;

    let text = run_to_vec(&config, &palette, &sequence, &shared).await;
    assert_eq!(text.matches("\x1b[s").count(), 1);
    assert_eq!(text.matches("\x1b[u").count(), 2);
    assert!(!text.contains("\x1b[2J"));
    assert!(!text.contains("\x1b[?25l"));
}

#[tokio::test]
async fn test_capability_failure_happens_before_any_output() {
    // A tier with no palette for the chosen flag must be rejected while
    // the terminal is still untouched; render is never entered.
    let err = Palette::build(ColorTier::Ansi16, FlagVariant::Lesbian).unwrap_err();
    assert!(err.to_string().contains("unsupported terminal"));
    let err = Palette::build(ColorTier::Vt220, FlagVariant::Gay).unwrap_err();
    assert!(err.to_string().contains("unsupported terminal"));
}

#[test]
fn test_unrecognized_pride_type_is_a_config_error() {
    let err = "sparkle".parse::<FlagVariant>().unwrap_err();
    assert!(err.to_string().contains("unrecognized pride type"));
}

#[tokio::test]
async fn test_escape_traffic_is_bounded_by_color_changes() {
    // A 40x24 frame has 960 cells; the encoder must emit far fewer
    // escapes than cells, one per same-color run.
    let (mut config, palette, sequence, shared) = fixture(FlagVariant::Gay);
    config.frame_limit = 1;

    let text = run_to_vec(&config, &palette, &sequence, &shared).await;
    let escapes = text.matches("\x1b[48;5;").count();
    assert!(escapes > 0);
    assert!(escapes < 400, "expected run-length suppression, got {escapes}");
}
