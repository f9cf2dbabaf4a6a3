// Integration tests for the playback controller state machine

use algotty::playback::{PlaybackController, PlaybackState, Speed};
use algotty::trace::recorder::TraceRecorder;
use algotty::trace::value::StateValue;
use algotty::trace::Trace;
use std::time::{Duration, Instant};

fn trace_of_len(n: usize) -> Trace {
    let mut rec = TraceRecorder::new();
    for i in 0..n {
        rec.record(
            &format!("step {}", i),
            vec![("i", StateValue::Int(i as i64))],
        );
    }
    rec.finish()
}

#[test]
fn step_backward_at_zero_is_a_noop() {
    // Loading a 5-snapshot trace and stepping backward at cursor 0 must
    // leave the cursor at 0 with no error raised
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(5));
    pc.step_backward();
    assert_eq!(pc.current_index(), Some(0));
    assert_eq!(pc.state(), PlaybackState::Ready);
}

#[test]
fn step_forward_at_end_is_a_noop() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(3));
    pc.jump_to_end();
    let rev = pc.revision();
    pc.step_forward();
    assert_eq!(pc.current_index(), Some(2));
    assert_eq!(pc.revision(), rev, "no-op must not report a change");
}

#[test]
fn cursor_stays_in_bounds_under_arbitrary_operations() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(4));
    let now = Instant::now();

    pc.jump_to(100);
    assert_eq!(pc.current_index(), Some(3));
    pc.step_forward();
    pc.step_forward();
    assert_eq!(pc.current_index(), Some(3));
    pc.jump_to_start();
    pc.step_backward();
    assert_eq!(pc.current_index(), Some(0));
    pc.play(now);
    pc.pause();
    pc.pause();
    assert_eq!(pc.state(), PlaybackState::Ready);

    let len = pc.trace_len();
    let cursor = pc.current_index().unwrap();
    assert!(cursor < len);
}

#[test]
fn current_snapshot_follows_the_cursor() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(5));
    pc.jump_to(2);
    let snap = pc.current_snapshot().unwrap();
    assert_eq!(snap.index, 2);
    assert_eq!(snap.field("i").unwrap().as_int(), Some(2));
}

#[test]
fn ticks_advance_until_auto_pause_at_end() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(3));
    let t0 = Instant::now();
    pc.play(t0);
    let id = pc.active_timer().unwrap();
    let interval = pc.speed().interval();

    pc.on_tick(id, t0 + interval);
    assert_eq!(pc.current_index(), Some(1));
    assert!(pc.is_playing());

    pc.on_tick(id, t0 + interval * 2);
    assert_eq!(pc.current_index(), Some(2));
    // Reached the last index: controller auto-paused and dropped the timer
    assert_eq!(pc.state(), PlaybackState::Ready);
    assert!(pc.active_timer().is_none());

    // A late duplicate tick must not step anywhere
    pc.on_tick(id, t0 + interval * 3);
    assert_eq!(pc.current_index(), Some(2));
    assert_eq!(pc.state(), PlaybackState::Ready);
}

#[test]
fn stale_tick_after_pause_is_ignored() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(10));
    let t0 = Instant::now();
    pc.play(t0);
    let stale_id = pc.active_timer().unwrap();
    pc.pause();

    // The callback armed before pause() fires anyway: it must be a no-op
    pc.on_tick(stale_id, t0 + Duration::from_secs(5));
    assert_eq!(pc.current_index(), Some(0));
    assert_eq!(pc.state(), PlaybackState::Ready);
}

#[test]
fn stale_tick_after_reload_is_ignored() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(10));
    let t0 = Instant::now();
    pc.play(t0);
    let stale_id = pc.active_timer().unwrap();

    pc.load(trace_of_len(6));
    pc.on_tick(stale_id, t0 + Duration::from_secs(5));
    assert_eq!(pc.current_index(), Some(0));
    assert_eq!(pc.trace_len(), 6);
    assert_eq!(pc.state(), PlaybackState::Ready);
}

#[test]
fn early_tick_does_not_step() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(10));
    let t0 = Instant::now();
    pc.play(t0);
    let id = pc.active_timer().unwrap();

    pc.on_tick(id, t0 + Duration::from_millis(1));
    assert_eq!(pc.current_index(), Some(0));
    assert!(pc.is_playing());
}

#[test]
fn play_twice_owns_a_single_timer() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(10));
    let t0 = Instant::now();
    pc.play(t0);
    let first = pc.active_timer().unwrap();
    pc.play(t0 + Duration::from_millis(10));
    assert_eq!(pc.active_timer(), Some(first));

    // One interval later, exactly one step has been taken
    let interval = pc.speed().interval();
    pc.on_tick(first, t0 + interval);
    pc.on_tick(first, t0 + interval);
    assert_eq!(pc.current_index(), Some(1));
}

#[test]
fn pause_then_play_arms_a_fresh_timer() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(10));
    let t0 = Instant::now();
    pc.play(t0);
    let first = pc.active_timer().unwrap();
    pc.pause();
    pc.play(t0 + Duration::from_millis(10));
    let second = pc.active_timer().unwrap();
    assert_ne!(first, second);
}

#[test]
fn speed_change_while_playing_never_double_steps() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(10));
    let t0 = Instant::now();
    pc.play(t0);
    let id = pc.active_timer().unwrap();

    // Switching to a faster speed reschedules the same timer; the change
    // itself takes no step
    pc.set_speed(Speed::VeryFast, t0 + Duration::from_millis(20));
    assert_eq!(pc.current_index(), Some(0));
    assert_eq!(pc.active_timer(), Some(id));

    // The new deadline fires once, and an immediate duplicate is absorbed
    let fire = t0 + Speed::VeryFast.interval();
    pc.on_tick(id, fire);
    pc.on_tick(id, fire);
    assert_eq!(pc.current_index(), Some(1));
}

#[test]
fn play_at_last_index_restarts_from_zero() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(4));
    pc.jump_to_end();
    pc.play(Instant::now());
    assert_eq!(pc.current_index(), Some(0));
    assert!(pc.is_playing());
}

#[test]
fn reset_returns_to_empty() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(4));
    pc.play(Instant::now());
    pc.reset();

    assert_eq!(pc.state(), PlaybackState::Empty);
    assert!(pc.current_snapshot().is_none());
    assert!(pc.current_index().is_none());
    assert_eq!(pc.trace_len(), 0);
    assert!(pc.active_timer().is_none());

    // Everything is a no-op until the next load
    pc.step_forward();
    pc.play(Instant::now());
    assert_eq!(pc.state(), PlaybackState::Empty);
}

#[test]
fn load_replaces_the_previous_trace_wholesale() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(8));
    pc.jump_to(5);
    pc.play(Instant::now());
    let rev = pc.revision();

    pc.load(trace_of_len(2));
    assert_eq!(pc.trace_len(), 2);
    assert_eq!(pc.current_index(), Some(0));
    assert_eq!(pc.state(), PlaybackState::Ready);
    assert!(pc.revision() > rev);
}

#[test]
fn revision_bumps_on_every_observable_transition() {
    let mut pc = PlaybackController::new();
    pc.load(trace_of_len(3));
    let mut last = pc.revision();

    for op in 0..4 {
        match op {
            0 => pc.step_forward(),
            1 => pc.step_backward(),
            2 => pc.play(Instant::now()),
            _ => pc.pause(),
        }
        assert!(pc.revision() > last, "operation {} did not bump revision", op);
        last = pc.revision();
    }
}
