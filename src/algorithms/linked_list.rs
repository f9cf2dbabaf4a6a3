//! Iterative linked-list reversal
//!
//! The list is modeled as a reversed prefix and a remaining suffix; each step
//! detaches the head of the suffix and pushes it onto the front of the
//! prefix, the pointer-relinking of the classic three-pointer reversal.

use super::errors::InputError;
use super::input::{parse_int_list, require_arg};
use super::TraceAlgorithm;
use crate::trace::recorder::TraceRecorder;
use crate::trace::value::StateValue;
use crate::trace::Trace;

pub struct ReverseList;

impl TraceAlgorithm for ReverseList {
    fn name(&self) -> &'static str {
        "reverse-list"
    }

    fn summary(&self) -> &'static str {
        "reverse a linked list one node at a time"
    }

    fn usage(&self) -> &'static str {
        "<values>"
    }

    fn generate_trace(&self, args: &[String]) -> Result<Trace, InputError> {
        let values = parse_int_list(require_arg(args, 0, "values")?, "values")?;

        let mut rec = TraceRecorder::new();
        rec.set("remaining", StateValue::IntList(values.clone()));
        rec.set("reversed", StateValue::IntList(Vec::new()));
        rec.record(
            &format!("Read a {}-node list; reversing it in place", values.len()),
            vec![],
        );

        let mut remaining = values;
        let mut reversed: Vec<i64> = Vec::new();

        while !remaining.is_empty() {
            let node = remaining.remove(0);
            reversed.insert(0, node);
            rec.record(
                &format!(
                    "Relinked node {}: it now points at the reversed prefix",
                    node
                ),
                vec![
                    ("current", StateValue::Int(node)),
                    ("remaining", StateValue::IntList(remaining.clone())),
                    ("reversed", StateValue::IntList(reversed.clone())),
                ],
            );
        }

        rec.record(
            &format!("Done: list fully reversed ({} node(s))", reversed.len()),
            vec![("reversed", StateValue::IntList(reversed))],
        );
        Ok(rec.finish())
    }
}
