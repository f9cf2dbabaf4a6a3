//! Playback controller: a cursor over one frozen trace
//!
//! [`PlaybackController`] is a small state machine:
//!
//! - **Empty** — no trace loaded, cursor absent
//! - **Ready** — a trace is loaded, cursor valid, no timer armed
//! - **Playing** — a trace is loaded and a single auto-play timer is armed
//!
//! Every operation is total: out-of-range and wrong-state calls are silent
//! no-ops, so the controller absorbs rapid or duplicate UI events without
//! ever raising.
//!
//! # Timer ownership
//!
//! Auto-play uses a logical timer value, not an OS timer: the controller owns
//! at most one [`TimerHandle`] at a time, and the event loop pumps it by
//! asking for [`PlaybackController::deadline`] and delivering
//! [`PlaybackController::on_tick`] when the deadline passes.  Each armed
//! handle gets a fresh generation id; a tick carrying a stale id (queued
//! before a `pause`/`reset`/`load` cancelled the handle) is ignored.  This
//! guarantees that on return from `pause` or `reset` no further automatic
//! step can occur.

use crate::trace::{Snapshot, Trace};
use std::time::{Duration, Instant};

/// Auto-play speed, a fixed interval per step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Slow,
    Medium,
    Fast,
    VeryFast,
}

impl Speed {
    /// The tick interval for this speed
    pub fn interval(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(1000),
            Speed::Medium => Duration::from_millis(500),
            Speed::Fast => Duration::from_millis(250),
            Speed::VeryFast => Duration::from_millis(100),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
            Speed::VeryFast => "very fast",
        }
    }
}

/// Controller state, derived from loaded trace + armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Empty,
    Ready,
    Playing,
}

/// The single owned auto-play timer.
///
/// `armed_at` is the instant of arming or of the last fire; the deadline is
/// always `armed_at + interval`, so rescheduling under a new speed keeps the
/// elapsed portion of the current interval instead of restarting it.
#[derive(Debug, Clone, Copy)]
struct TimerHandle {
    id: u64,
    interval: Duration,
    armed_at: Instant,
}

/// Owns one trace, one cursor, and at most one auto-play timer
#[derive(Debug)]
pub struct PlaybackController {
    trace: Option<Trace>,
    cursor: usize,
    speed: Speed,
    timer: Option<TimerHandle>,
    next_timer_id: u64,
    revision: u64,
}

impl PlaybackController {
    pub fn new() -> Self {
        PlaybackController {
            trace: None,
            cursor: 0,
            speed: Speed::Medium,
            timer: None,
            next_timer_id: 0,
            revision: 0,
        }
    }

    // === Queries ===

    pub fn state(&self) -> PlaybackState {
        match (&self.trace, &self.timer) {
            (None, _) => PlaybackState::Empty,
            (Some(_), None) => PlaybackState::Ready,
            (Some(_), Some(_)) => PlaybackState::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state() == PlaybackState::Playing
    }

    /// The snapshot under the cursor, None when no trace is loaded
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.trace.as_ref().and_then(|t| t.get(self.cursor))
    }

    /// Cursor position, None when no trace is loaded
    pub fn current_index(&self) -> Option<usize> {
        self.trace.as_ref().map(|_| self.cursor)
    }

    /// Length of the loaded trace, 0 when empty
    pub fn trace_len(&self) -> usize {
        self.trace.as_ref().map_or(0, |t| t.len())
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Change counter, bumped on every observable transition.
    ///
    /// Subscribers compare it between polls to decide whether to re-render.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Generation id of the armed timer, None unless Playing
    pub fn active_timer(&self) -> Option<u64> {
        self.timer.map(|t| t.id)
    }

    /// When the armed timer should next fire, None unless Playing
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.map(|t| t.armed_at + t.interval)
    }

    // === Mutators (all total) ===

    /// Load a trace, replacing any previous one wholesale.
    ///
    /// Cursor starts at 0 and any armed timer is cancelled.
    pub fn load(&mut self, trace: Trace) {
        self.timer = None;
        self.cursor = 0;
        self.trace = Some(trace);
        self.touch();
    }

    /// Discard the trace and cursor, cancelling any armed timer
    pub fn reset(&mut self) {
        self.timer = None;
        self.cursor = 0;
        self.trace = None;
        self.touch();
    }

    /// Advance one step; no-op at the last index or when Empty
    pub fn step_forward(&mut self) {
        let len = self.trace_len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
            self.touch();
        }
    }

    /// Retreat one step; no-op at index 0 or when Empty
    pub fn step_backward(&mut self) {
        if self.trace.is_some() && self.cursor > 0 {
            self.cursor -= 1;
            self.touch();
        }
    }

    /// Move the cursor to `index`, clamped into bounds; no-op when Empty
    pub fn jump_to(&mut self, index: usize) {
        let len = self.trace_len();
        if len > 0 {
            let clamped = index.min(len - 1);
            if clamped != self.cursor {
                self.cursor = clamped;
                self.touch();
            }
        }
    }

    /// Jump to the first snapshot
    pub fn jump_to_start(&mut self) {
        self.jump_to(0);
    }

    /// Jump to the terminal snapshot
    pub fn jump_to_end(&mut self) {
        let len = self.trace_len();
        if len > 0 {
            self.jump_to(len - 1);
        }
    }

    /// Start auto-play, arming exactly one timer.
    ///
    /// If the cursor is already at the last index it wraps to 0 first so the
    /// replay starts over.  No-op when Empty or already Playing.
    pub fn play(&mut self, now: Instant) {
        let len = self.trace_len();
        if len == 0 || self.timer.is_some() {
            return;
        }
        if self.cursor + 1 >= len {
            self.cursor = 0;
        }
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        self.timer = Some(TimerHandle {
            id,
            interval: self.speed.interval(),
            armed_at: now,
        });
        self.touch();
    }

    /// Stop auto-play; no-op unless Playing.
    ///
    /// On return the timer is gone: a tick queued against the old handle
    /// carries a dead id and will be ignored.
    pub fn pause(&mut self) {
        if self.timer.take().is_some() {
            self.touch();
        }
    }

    /// Toggle between Playing and Ready; no-op when Empty
    pub fn toggle_play(&mut self, now: Instant) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Select a speed.  While Playing the armed handle is rescheduled under
    /// the new interval from its original arming point, so no step is skipped
    /// or duplicated by the change itself.
    pub fn set_speed(&mut self, speed: Speed, _now: Instant) {
        if speed == self.speed {
            return;
        }
        self.speed = speed;
        if let Some(timer) = self.timer.as_mut() {
            timer.interval = speed.interval();
        }
        self.touch();
    }

    /// Deliver a timer tick.
    ///
    /// Performs one `step_forward` only when `timer_id` matches the armed
    /// handle and its deadline has passed; a stale or early tick is a no-op.
    /// Reaching the last index disarms the timer (auto-pause at end).
    pub fn on_tick(&mut self, timer_id: u64, now: Instant) {
        let timer = match self.timer {
            Some(t) if t.id == timer_id => t,
            _ => return,
        };
        if now < timer.armed_at + timer.interval {
            return;
        }
        self.step_forward();
        let len = self.trace_len();
        if len == 0 || self.cursor + 1 >= len {
            self.timer = None;
            self.touch();
        } else if let Some(t) = self.timer.as_mut() {
            t.armed_at = now;
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}
