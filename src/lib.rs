//! # Introduction
//!
//! algotty replays textbook algorithms step by step in the terminal.  Each
//! algorithm is instrumented to record a snapshot of its full working state
//! at every meaningful step; the finished snapshot log is then navigated
//! forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), without ever re-running the algorithm.
//!
//! ## Pipeline
//!
//! ```text
//! Raw input → Validation → Instrumented algorithm → Trace → Playback → TUI
//! ```
//!
//! 1. [`algorithms`] — the instrumented algorithm implementations and their
//!    input validation boundary.  Each algorithm drives a
//!    [`trace::recorder::TraceRecorder`] synchronously to completion.
//! 2. [`trace`] — the immutable history model: [`trace::Snapshot`]s of owned
//!    [`trace::value::StateValue`]s, collected into a frozen [`trace::Trace`].
//! 3. [`playback`] — [`playback::PlaybackController`]: a cursor over one
//!    Trace with stepping, jumping, and a single owned auto-play timer.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Triplet sum (two-pointer), minimum window substring (sliding window),
//! subset enumeration (backtracking with call frames), binary tree
//! construction from preorder + inorder, and linked-list reversal.

pub mod algorithms;
pub mod playback;
pub mod trace;
pub mod ui;
