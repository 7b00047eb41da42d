use hoshikuzu_core::scheduler::{FrameScheduler, Phase, MIN_FRAME_INTERVAL_MS};

#[test]
fn starts_idle_and_ignores_frames() {
    let mut scheduler = FrameScheduler::new();
    assert_eq!(scheduler.phase(), Phase::Idle);
    assert_eq!(scheduler.frame(0.0), None);
    assert_eq!(scheduler.frame(1000.0), None);
}

#[test]
fn runs_only_with_visibility_and_assets() {
    let mut scheduler = FrameScheduler::new();
    scheduler.set_visible(true);
    assert_eq!(scheduler.phase(), Phase::Idle);
    scheduler.assets_ready(3);
    assert_eq!(scheduler.phase(), Phase::Running);

    scheduler.set_visible(false);
    assert_eq!(scheduler.phase(), Phase::Idle);
    assert_eq!(scheduler.frame(2000.0), None);
    scheduler.set_visible(true);
    assert_eq!(scheduler.phase(), Phase::Running);
}

#[test]
fn zero_loaded_icons_never_runs() {
    let mut scheduler = FrameScheduler::new();
    scheduler.set_visible(true);
    scheduler.assets_ready(0);
    assert_eq!(scheduler.phase(), Phase::Idle);
    assert_eq!(scheduler.frame(16.0), None);
}

#[test]
fn first_frame_draws_without_advancing() {
    let mut scheduler = FrameScheduler::new();
    scheduler.set_visible(true);
    scheduler.assets_ready(1);
    assert_eq!(scheduler.frame(100.0), Some(0.0));
    assert_eq!(scheduler.frame(140.0), Some(40.0));
}

#[test]
fn fast_frames_are_skipped() {
    let mut scheduler = FrameScheduler::new();
    scheduler.set_visible(true);
    scheduler.assets_ready(1);
    scheduler.frame(100.0);
    // 144Hz-style cadence under the 16ms ceiling.
    assert_eq!(scheduler.frame(107.0), None);
    assert_eq!(scheduler.frame(114.0), None);
    let elapsed = scheduler.frame(121.0).expect("past the ceiling");
    assert!(elapsed >= MIN_FRAME_INTERVAL_MS);
}

#[test]
fn visibility_loss_resets_frame_timing() {
    let mut scheduler = FrameScheduler::new();
    scheduler.set_visible(true);
    scheduler.assets_ready(2);
    scheduler.frame(100.0);
    scheduler.frame(150.0);
    scheduler.set_visible(false);
    scheduler.set_visible(true);
    // First frame after resume must not see the hidden gap as elapsed time.
    assert_eq!(scheduler.frame(60_000.0), Some(0.0));
}

#[test]
fn shutdown_is_idempotent_and_final() {
    let mut scheduler = FrameScheduler::new();
    scheduler.set_visible(true);
    scheduler.assets_ready(1);
    assert_eq!(scheduler.phase(), Phase::Running);

    scheduler.shutdown();
    assert_eq!(scheduler.phase(), Phase::Idle);
    scheduler.shutdown();
    assert_eq!(scheduler.phase(), Phase::Idle);

    // No event revives a torn-down scheduler.
    scheduler.set_visible(true);
    scheduler.assets_ready(5);
    assert_eq!(scheduler.phase(), Phase::Idle);
    assert_eq!(scheduler.frame(999.0), None);
}
