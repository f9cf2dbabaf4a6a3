//! Triplet-sum search with the two-pointer technique
//!
//! Finds every unique triplet summing to zero: sort the array, then for each
//! anchor element walk a low and a high pointer toward each other over the
//! remainder.  Duplicate anchors and duplicate pair values are skipped so
//! each triplet is reported once.

use super::errors::InputError;
use super::input::{parse_int_list, require_arg};
use super::TraceAlgorithm;
use crate::trace::recorder::TraceRecorder;
use crate::trace::value::StateValue;
use crate::trace::Trace;

pub struct TripletSum;

impl TraceAlgorithm for TripletSum {
    fn name(&self) -> &'static str {
        "triplet-sum"
    }

    fn summary(&self) -> &'static str {
        "find all unique triplets summing to zero (two-pointer)"
    }

    fn usage(&self) -> &'static str {
        "<nums>"
    }

    fn generate_trace(&self, args: &[String]) -> Result<Trace, InputError> {
        let nums = parse_int_list(require_arg(args, 0, "nums")?, "nums")?;
        if nums.len() < 3 {
            return Err(InputError::TooFewElements {
                name: "nums",
                needed: 3,
                got: nums.len(),
            });
        }

        let mut rec = TraceRecorder::new();
        rec.set("nums", StateValue::IntList(nums.clone()));
        rec.set("triplets", StateValue::IntPairs(Vec::new()));
        rec.record(&format!("Read {} numbers", nums.len()), vec![]);

        let mut sorted = nums;
        sorted.sort_unstable();
        rec.record(
            "Sorted the array; searching for triplets summing to 0",
            vec![("nums", StateValue::IntList(sorted.clone()))],
        );

        let mut triplets: Vec<Vec<i64>> = Vec::new();
        let n = sorted.len();

        for anchor in 0..n.saturating_sub(2) {
            if anchor > 0 && sorted[anchor] == sorted[anchor - 1] {
                rec.record(
                    &format!(
                        "Anchor {} repeats value {}; skipping to avoid duplicate triplets",
                        anchor, sorted[anchor]
                    ),
                    vec![("anchor", StateValue::Int(anchor as i64))],
                );
                continue;
            }

            let mut low = anchor + 1;
            let mut high = n - 1;
            rec.record(
                &format!(
                    "Anchor at index {} (value {}); sweeping low={} and high={} toward each other",
                    anchor, sorted[anchor], low, high
                ),
                vec![
                    ("anchor", StateValue::Int(anchor as i64)),
                    ("low", StateValue::Int(low as i64)),
                    ("high", StateValue::Int(high as i64)),
                ],
            );

            while low < high {
                let sum = sorted[anchor] + sorted[low] + sorted[high];

                if sum < 0 {
                    rec.record(
                        &format!(
                            "{} + {} + {} = {} < 0; advancing low to raise the sum",
                            sorted[anchor], sorted[low], sorted[high], sum
                        ),
                        vec![
                            ("sum", StateValue::Int(sum)),
                            ("low", StateValue::Int(low as i64 + 1)),
                        ],
                    );
                    low += 1;
                } else if sum > 0 {
                    rec.record(
                        &format!(
                            "{} + {} + {} = {} > 0; retreating high to lower the sum",
                            sorted[anchor], sorted[low], sorted[high], sum
                        ),
                        vec![
                            ("sum", StateValue::Int(sum)),
                            ("high", StateValue::Int(high as i64 - 1)),
                        ],
                    );
                    high -= 1;
                } else {
                    let triplet = vec![sorted[anchor], sorted[low], sorted[high]];
                    triplets.push(triplet.clone());
                    rec.record(
                        &format!(
                            "Found triplet [{}, {}, {}]",
                            triplet[0], triplet[1], triplet[2]
                        ),
                        vec![
                            ("sum", StateValue::Int(0)),
                            ("triplets", StateValue::IntPairs(triplets.clone())),
                        ],
                    );
                    // Skip duplicate values on both sides before moving on
                    while low < high && sorted[low] == sorted[low + 1] {
                        low += 1;
                    }
                    while low < high && sorted[high] == sorted[high - 1] {
                        high -= 1;
                    }
                    low += 1;
                    high -= 1;
                    if low < high {
                        rec.record(
                            &format!("Moved past duplicates; low={}, high={}", low, high),
                            vec![
                                ("low", StateValue::Int(low as i64)),
                                ("high", StateValue::Int(high as i64)),
                            ],
                        );
                    }
                }
            }
        }

        rec.record(
            &format!("Done: found {} unique triplet(s)", triplets.len()),
            vec![("triplets", StateValue::IntPairs(triplets))],
        );
        Ok(rec.finish())
    }
}
