//! Input validation errors for the instrumented algorithms
//!
//! This module defines [`InputError`], which represents every way raw input
//! can fail an algorithm's preconditions.  Validation happens before the
//! first snapshot is recorded, so a failed run never produces a partial
//! trace.
//!
//! Malformed tokens are always rejected, never coerced or silently dropped.

use std::fmt;

/// Precondition violations over raw algorithm input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required positional argument was not supplied
    MissingArgument { name: &'static str },

    /// A token could not be parsed as an integer
    MalformedNumber { token: String },

    /// An input collection was empty where a non-empty one is required
    EmptyInput { name: &'static str },

    /// An input collection has fewer elements than the algorithm needs
    TooFewElements {
        name: &'static str,
        needed: usize,
        got: usize,
    },

    /// Two inputs that must have equal length do not
    LengthMismatch {
        left: &'static str,
        right: &'static str,
        left_len: usize,
        right_len: usize,
    },

    /// Values must be distinct but are not
    DuplicateValues { name: &'static str, value: i64 },

    /// Two inputs that must contain the same values do not
    ValueSetMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// The pattern is longer than the text it must fit inside
    PatternTooLong { pattern_len: usize, text_len: usize },

    /// No algorithm registered under the given name
    UnknownAlgorithm { name: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingArgument { name } => {
                write!(f, "Missing required argument '{}'", name)
            }
            InputError::MalformedNumber { token } => {
                write!(f, "'{}' is not a valid integer", token)
            }
            InputError::EmptyInput { name } => {
                write!(f, "Input '{}' must not be empty", name)
            }
            InputError::TooFewElements { name, needed, got } => {
                write!(
                    f,
                    "Input '{}' needs at least {} element{}, got {}",
                    name,
                    needed,
                    if *needed == 1 { "" } else { "s" },
                    got
                )
            }
            InputError::LengthMismatch {
                left,
                right,
                left_len,
                right_len,
            } => {
                write!(
                    f,
                    "Inputs '{}' ({} elements) and '{}' ({} elements) must have equal length",
                    left, left_len, right, right_len
                )
            }
            InputError::DuplicateValues { name, value } => {
                write!(
                    f,
                    "Input '{}' must contain distinct values, but {} appears more than once",
                    name, value
                )
            }
            InputError::ValueSetMismatch { left, right } => {
                write!(
                    f,
                    "Inputs '{}' and '{}' must contain the same values",
                    left, right
                )
            }
            InputError::PatternTooLong {
                pattern_len,
                text_len,
            } => {
                write!(
                    f,
                    "Pattern length {} exceeds text length {}",
                    pattern_len, text_len
                )
            }
            InputError::UnknownAlgorithm { name } => {
                write!(f, "Unknown algorithm '{}'", name)
            }
        }
    }
}

impl std::error::Error for InputError {}
