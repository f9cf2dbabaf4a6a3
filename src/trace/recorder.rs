//! Trace recorder: the instrumentation API algorithms drive during execution
//!
//! An instrumented algorithm owns a [`TraceRecorder`] for the duration of one
//! synchronous run.  It stages named state fields, calls
//! [`TraceRecorder::record`] at every meaningful step, and finally calls
//! [`TraceRecorder::finish`] to freeze the log into a [`Trace`].
//!
//! # Copy-on-record
//!
//! The recorder carries a live field map that the algorithm updates through
//! overrides.  `record` clones that map — and the active frame list — into
//! the new snapshot.  Every [`StateValue`] owns its data, so the clone is a
//! deep copy: once a snapshot is appended, no later mutation of the carried
//! fields (or of the algorithm's own working containers, which were copied
//! into `StateValue`s when staged) can reach it.
//!
//! # Call frames
//!
//! Recursive algorithms bracket each logical call with
//! [`TraceRecorder::push_frame`] / [`TraceRecorder::pop_frame`].  The current
//! frame list is copied verbatim into every snapshot recorded while the call
//! is active, which lets playback show recursion depth without re-entering
//! any call.

use super::value::StateValue;
use super::{CallFrame, Snapshot, Trace};
use rustc_hash::FxHashMap;

/// Builds a [`Trace`] one snapshot at a time during a single algorithm run
#[derive(Debug)]
pub struct TraceRecorder {
    snapshots: Vec<Snapshot>,
    fields: FxHashMap<String, StateValue>,
    field_order: Vec<String>,
    frames: Vec<CallFrame>,
    next_frame_id: u64,
}

impl TraceRecorder {
    pub fn new() -> Self {
        TraceRecorder {
            snapshots: Vec::new(),
            fields: FxHashMap::default(),
            field_order: Vec::new(),
            frames: Vec::new(),
            next_frame_id: 0,
        }
    }

    /// Stage a field without recording a snapshot.
    ///
    /// The value is carried forward into every subsequent snapshot until
    /// overridden again.
    pub fn set(&mut self, name: &str, value: StateValue) {
        if !self.fields.contains_key(name) {
            self.field_order.push(name.to_string());
        }
        self.fields.insert(name.to_string(), value);
    }

    /// Append a snapshot: apply `overrides` on top of the carried fields,
    /// then capture everything by value with the next sequence index.
    pub fn record(&mut self, explanation: &str, overrides: Vec<(&str, StateValue)>) {
        for (name, value) in overrides {
            self.set(name, value);
        }
        let index = self.snapshots.len();
        self.snapshots.push(Snapshot {
            index,
            explanation: explanation.to_string(),
            fields: self.fields.clone(),
            field_order: self.field_order.clone(),
            call_frames: self.frames.clone(),
            is_terminal: false,
        });
    }

    /// Push a logical call frame; returns its stable id
    pub fn push_frame(&mut self, label: &str, args: Vec<(String, StateValue)>) -> u64 {
        let id = self.next_frame_id;
        self.next_frame_id += 1;
        self.frames.push(CallFrame {
            id,
            label: label.to_string(),
            args,
        });
        id
    }

    /// Pop the innermost call frame
    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Current recursion depth
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Number of snapshots recorded so far
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Mark the last snapshot terminal and freeze the log into a [`Trace`].
    ///
    /// Callers must have recorded at least one snapshot; every instrumented
    /// algorithm records an initial snapshot immediately after validation.
    pub fn finish(mut self) -> Trace {
        debug_assert!(
            !self.snapshots.is_empty(),
            "finish() before any record() call"
        );
        if let Some(last) = self.snapshots.last_mut() {
            last.is_terminal = true;
        }
        Trace::new(self.snapshots)
    }
}

impl Default for TraceRecorder {
    fn default() -> Self {
        Self::new()
    }
}
