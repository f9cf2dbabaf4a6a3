//! Minimum window substring with a sliding window
//!
//! Finds the shortest window of the text containing every pattern character
//! (with multiplicity).  The right edge expands until the window covers the
//! pattern, then the left edge contracts while coverage holds, recording the
//! best window seen.

use super::errors::InputError;
use super::input::{require_arg, require_nonempty};
use super::TraceAlgorithm;
use crate::trace::recorder::TraceRecorder;
use crate::trace::value::StateValue;
use crate::trace::Trace;
use rustc_hash::FxHashMap;

pub struct MinWindow;

fn count_map_value(counts: &FxHashMap<char, i64>) -> StateValue {
    StateValue::CountMap(
        counts
            .iter()
            .map(|(c, n)| (c.to_string(), *n))
            .collect(),
    )
}

impl TraceAlgorithm for MinWindow {
    fn name(&self) -> &'static str {
        "min-window"
    }

    fn summary(&self) -> &'static str {
        "shortest substring of text covering the pattern (sliding window)"
    }

    fn usage(&self) -> &'static str {
        "<text> <pattern>"
    }

    fn generate_trace(&self, args: &[String]) -> Result<Trace, InputError> {
        let text = require_nonempty(require_arg(args, 0, "text")?, "text")?.to_string();
        let pattern = require_nonempty(require_arg(args, 1, "pattern")?, "pattern")?.to_string();
        let chars: Vec<char> = text.chars().collect();
        let pattern_chars: Vec<char> = pattern.chars().collect();
        if pattern_chars.len() > chars.len() {
            return Err(InputError::PatternTooLong {
                pattern_len: pattern_chars.len(),
                text_len: chars.len(),
            });
        }

        let mut need: FxHashMap<char, i64> = FxHashMap::default();
        for &c in &pattern_chars {
            *need.entry(c).or_insert(0) += 1;
        }
        let required = need.len();

        let mut rec = TraceRecorder::new();
        rec.set("text", StateValue::Text(text.clone()));
        rec.set("pattern", StateValue::Text(pattern.clone()));
        rec.set("need", count_map_value(&need));
        rec.set("window", StateValue::Text(String::new()));
        rec.set("best_window", StateValue::Text(String::new()));
        rec.record(
            &format!(
                "Need {} distinct character(s) from \"{}\"; sliding a window over \"{}\"",
                required, pattern, text
            ),
            vec![],
        );

        let mut have: FxHashMap<char, i64> = FxHashMap::default();
        let mut formed = 0usize;
        let mut left = 0usize;
        let mut best: Option<(usize, usize)> = None; // (start, len)

        for right in 0..chars.len() {
            let c = chars[right];
            *have.entry(c).or_insert(0) += 1;
            if need.get(&c).is_some_and(|&n| have[&c] == n) {
                formed += 1;
            }
            let window: String = chars[left..=right].iter().collect();
            rec.record(
                &format!(
                    "Expanded right edge to {} ('{}'); window \"{}\" covers {}/{} needed characters",
                    right, c, window, formed, required
                ),
                vec![
                    ("left", StateValue::Int(left as i64)),
                    ("right", StateValue::Int(right as i64)),
                    ("window", StateValue::Text(window)),
                    ("have", count_map_value(&have)),
                ],
            );

            while formed == required {
                let len = right - left + 1;
                if best.map_or(true, |(_, best_len)| len < best_len) {
                    best = Some((left, len));
                    let best_window: String = chars[left..=right].iter().collect();
                    rec.record(
                        &format!("New best window \"{}\" (length {})", best_window, len),
                        vec![("best_window", StateValue::Text(best_window))],
                    );
                }
                let out = chars[left];
                if let Some(count) = have.get_mut(&out) {
                    *count -= 1;
                }
                if need.get(&out).is_some_and(|&n| have[&out] < n) {
                    formed -= 1;
                }
                left += 1;
                let window: String = if left <= right {
                    chars[left..=right].iter().collect()
                } else {
                    String::new()
                };
                rec.record(
                    &format!(
                        "Contracted left edge past '{}'; window \"{}\" covers {}/{} needed characters",
                        out, window, formed, required
                    ),
                    vec![
                        ("left", StateValue::Int(left as i64)),
                        ("window", StateValue::Text(window)),
                        ("have", count_map_value(&have)),
                    ],
                );
            }
        }

        match best {
            Some((start, len)) => {
                let best_window: String = chars[start..start + len].iter().collect();
                rec.record(
                    &format!("Minimum window is \"{}\" (length {})", best_window, len),
                    vec![("best_window", StateValue::Text(best_window))],
                );
            }
            None => {
                rec.record(
                    &format!("No window of \"{}\" covers \"{}\"", text, pattern),
                    vec![],
                );
            }
        }
        Ok(rec.finish())
    }
}
