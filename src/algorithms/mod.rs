//! Instrumented algorithm implementations and their validation boundary
//!
//! Every algorithm implements [`TraceAlgorithm`]: validate its raw inputs,
//! then drive a [`TraceRecorder`](crate::trace::recorder::TraceRecorder)
//! synchronously to completion and return the frozen trace.  Selection is by
//! name through [`find`] — one implementation per algorithm, no mode flags.
//!
//! # Algorithm Modules
//!
//! - [`two_pointer`]: triplet-sum search over a sorted array
//! - [`sliding_window`]: minimum window substring
//! - [`backtracking`]: subset enumeration with explicit call frames
//! - [`tree`]: binary tree construction from preorder + inorder
//! - [`linked_list`]: iterative linked-list reversal

pub mod backtracking;
pub mod errors;
pub mod input;
pub mod linked_list;
pub mod sliding_window;
pub mod tree;
pub mod two_pointer;

use crate::trace::Trace;
use errors::InputError;

/// One instrumented algorithm: validate raw input, run once, return a trace.
///
/// `generate_trace` either completes a full run or rejects before the first
/// snapshot is recorded; it never yields a partial trace.
pub trait TraceAlgorithm {
    /// Registry name, as given on the command line
    fn name(&self) -> &'static str;

    /// One-line description for the algorithm listing
    fn summary(&self) -> &'static str;

    /// Positional argument description, e.g. `"<nums>"`
    fn usage(&self) -> &'static str;

    /// Validate `args` and run the algorithm to completion
    fn generate_trace(&self, args: &[String]) -> Result<Trace, InputError>;
}

impl std::fmt::Debug for dyn TraceAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceAlgorithm")
            .field("name", &self.name())
            .finish()
    }
}

/// All registered algorithms, in listing order
pub fn registry() -> Vec<Box<dyn TraceAlgorithm>> {
    vec![
        Box::new(two_pointer::TripletSum),
        Box::new(sliding_window::MinWindow),
        Box::new(backtracking::Subsets),
        Box::new(tree::BuildTree),
        Box::new(linked_list::ReverseList),
    ]
}

/// Look up an algorithm by name
pub fn find(name: &str) -> Result<Box<dyn TraceAlgorithm>, InputError> {
    registry()
        .into_iter()
        .find(|a| a.name() == name)
        .ok_or_else(|| InputError::UnknownAlgorithm {
            name: name.to_string(),
        })
}
