//! Subset enumeration by backtracking
//!
//! Enumerates every subset of a distinct integer list with the classic
//! include/advance recursion.  Recursion happens only at generation time:
//! each logical call pushes a frame on the recorder, so every snapshot
//! carries the active call stack and playback can show recursion depth
//! without re-entering anything.

use super::errors::InputError;
use super::input::{parse_int_list, require_arg, require_distinct};
use super::TraceAlgorithm;
use crate::trace::recorder::TraceRecorder;
use crate::trace::value::StateValue;
use crate::trace::Trace;

pub struct Subsets;

impl TraceAlgorithm for Subsets {
    fn name(&self) -> &'static str {
        "subsets"
    }

    fn summary(&self) -> &'static str {
        "enumerate all subsets of distinct numbers (backtracking)"
    }

    fn usage(&self) -> &'static str {
        "<nums>"
    }

    fn generate_trace(&self, args: &[String]) -> Result<Trace, InputError> {
        let nums = parse_int_list(require_arg(args, 0, "nums")?, "nums")?;
        require_distinct(&nums, "nums")?;

        let mut rec = TraceRecorder::new();
        rec.set("nums", StateValue::IntList(nums.clone()));
        rec.set("path", StateValue::IntList(Vec::new()));
        rec.set("subsets", StateValue::IntPairs(Vec::new()));
        rec.record(
            &format!(
                "Read {} distinct number(s); enumerating all {} subsets",
                nums.len(),
                1u64 << nums.len().min(63)
            ),
            vec![],
        );

        let mut path: Vec<i64> = Vec::new();
        let mut subsets: Vec<Vec<i64>> = Vec::new();
        explore(&mut rec, &nums, 0, &mut path, &mut subsets);

        rec.record(
            &format!("Done: collected {} subset(s)", subsets.len()),
            vec![("subsets", StateValue::IntPairs(subsets))],
        );
        Ok(rec.finish())
    }
}

/// One logical call: collect the current path, then branch on each remaining
/// element.  `path` and `subsets` are the live working containers; snapshots
/// capture them by value on every record.
fn explore(
    rec: &mut TraceRecorder,
    nums: &[i64],
    start: usize,
    path: &mut Vec<i64>,
    subsets: &mut Vec<Vec<i64>>,
) {
    rec.push_frame(
        &format!("explore(start={})", start),
        vec![
            ("start".to_string(), StateValue::Int(start as i64)),
            ("path".to_string(), StateValue::IntList(path.clone())),
        ],
    );

    subsets.push(path.clone());
    rec.record(
        &format!("Collected subset {:?}", path),
        vec![
            ("path", StateValue::IntList(path.clone())),
            ("subsets", StateValue::IntPairs(subsets.clone())),
        ],
    );

    for i in start..nums.len() {
        path.push(nums[i]);
        rec.record(
            &format!("Chose {} (index {}); recursing", nums[i], i),
            vec![("path", StateValue::IntList(path.clone()))],
        );

        explore(rec, nums, i + 1, path, subsets);

        let removed = path.pop();
        rec.record(
            &format!(
                "Backtracked: removed {}",
                removed.map_or_else(|| "nothing".to_string(), |v| v.to_string())
            ),
            vec![("path", StateValue::IntList(path.clone()))],
        );
    }

    rec.pop_frame();
}
