//! Strict raw-input parsing helpers
//!
//! Raw arguments arrive as strings from the command line.  Helpers here
//! tokenize and parse them, rejecting anything malformed with an
//! [`InputError`] — no token is ever coerced or dropped.

use super::errors::InputError;

/// Fetch the positional argument at `index`, or fail with its name
pub fn require_arg<'a>(
    args: &'a [String],
    index: usize,
    name: &'static str,
) -> Result<&'a str, InputError> {
    args.get(index)
        .map(|s| s.as_str())
        .ok_or(InputError::MissingArgument { name })
}

/// Parse a comma- or whitespace-separated list of integers.
///
/// Every token must parse; an empty list fails with [`InputError::EmptyInput`].
pub fn parse_int_list(raw: &str, name: &'static str) -> Result<Vec<i64>, InputError> {
    let tokens: Vec<&str> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(InputError::EmptyInput { name });
    }

    tokens
        .iter()
        .map(|t| {
            t.parse::<i64>().map_err(|_| InputError::MalformedNumber {
                token: t.to_string(),
            })
        })
        .collect()
}

/// Require a non-empty string argument
pub fn require_nonempty<'a>(raw: &'a str, name: &'static str) -> Result<&'a str, InputError> {
    if raw.is_empty() {
        Err(InputError::EmptyInput { name })
    } else {
        Ok(raw)
    }
}

/// Require all values distinct, reporting the first repeated one
pub fn require_distinct(values: &[i64], name: &'static str) -> Result<(), InputError> {
    let mut seen = Vec::with_capacity(values.len());
    for &v in values {
        if seen.contains(&v) {
            return Err(InputError::DuplicateValues { name, value: v });
        }
        seen.push(v);
    }
    Ok(())
}
