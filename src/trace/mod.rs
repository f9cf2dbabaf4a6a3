// Execution trace model: immutable snapshots of one completed algorithm run

pub mod recorder;
pub mod value;

use rustc_hash::FxHashMap;
use value::StateValue;

/// One active call of a recursive algorithm, captured by value.
///
/// Frames are attached to every snapshot recorded while the call is logically
/// active, so playback can show recursion depth and arguments without ever
/// re-entering the recursion.
#[derive(Debug, Clone, PartialEq)]
pub struct CallFrame {
    /// Stable identity: snapshots recorded during the same call share the id
    pub id: u64,
    pub label: String,
    pub args: Vec<(String, StateValue)>,
}

/// Snapshot of an algorithm's full observable state at one step.
///
/// Once appended to a trace a snapshot never changes: every container in
/// `fields` is an owned copy taken at record time, so later mutation of the
/// algorithm's live working state has no effect on it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Position in the trace, strictly increasing from 0
    pub index: usize,
    /// Human-readable description of this step
    pub explanation: String,
    /// Named state fields, each an independently owned copy
    pub fields: FxHashMap<String, StateValue>,
    /// Field names in first-recorded order, for stable display
    pub field_order: Vec<String>,
    /// Active recursive calls at this instant, outermost first
    pub call_frames: Vec<CallFrame>,
    /// Marks the last snapshot of the trace
    pub is_terminal: bool,
}

impl Snapshot {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&StateValue> {
        self.fields.get(name)
    }

    /// Fields in recorded order, for rendering
    pub fn ordered_fields(&self) -> impl Iterator<Item = (&str, &StateValue)> {
        self.field_order
            .iter()
            .filter_map(|name| self.fields.get(name).map(|v| (name.as_str(), v)))
    }

    /// Recursion depth at this instant
    pub fn depth(&self) -> usize {
        self.call_frames.len()
    }
}

/// A finite, ordered, frozen sequence of snapshots from one algorithm run.
///
/// A trace is populated once, by a single synchronous run driving a
/// [`recorder::TraceRecorder`], and never mutated afterwards.  A new run
/// always produces a brand-new trace; nothing ever edits an existing one.
#[derive(Debug)]
pub struct Trace {
    snapshots: Vec<Snapshot>,
}

impl Trace {
    pub(crate) fn new(snapshots: Vec<Snapshot>) -> Self {
        Trace { snapshots }
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots (≥ 1 for any validated run)
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The terminal snapshot
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Iterate over all snapshots in order
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}
