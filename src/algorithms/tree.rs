//! Binary tree construction from preorder + inorder traversals
//!
//! The first preorder value is the root; its position in the inorder list
//! splits the remaining values into left and right subtrees, recursively.
//! The partially built tree is recorded as a node arena (index 0 is the
//! root), with a frame pushed per logical call.

use super::errors::InputError;
use super::input::{parse_int_list, require_arg, require_distinct};
use super::TraceAlgorithm;
use crate::trace::recorder::TraceRecorder;
use crate::trace::value::{StateValue, TreeNode};
use crate::trace::Trace;

pub struct BuildTree;

impl TraceAlgorithm for BuildTree {
    fn name(&self) -> &'static str {
        "build-tree"
    }

    fn summary(&self) -> &'static str {
        "reconstruct a binary tree from preorder and inorder traversals"
    }

    fn usage(&self) -> &'static str {
        "<preorder> <inorder>"
    }

    fn generate_trace(&self, args: &[String]) -> Result<Trace, InputError> {
        let preorder = parse_int_list(require_arg(args, 0, "preorder")?, "preorder")?;
        let inorder = parse_int_list(require_arg(args, 1, "inorder")?, "inorder")?;
        if preorder.len() != inorder.len() {
            return Err(InputError::LengthMismatch {
                left: "preorder",
                right: "inorder",
                left_len: preorder.len(),
                right_len: inorder.len(),
            });
        }
        require_distinct(&preorder, "preorder")?;
        // Same multiset (values are distinct, so sorted equality suffices)
        let mut pre_sorted = preorder.clone();
        let mut in_sorted = inorder.clone();
        pre_sorted.sort_unstable();
        in_sorted.sort_unstable();
        if pre_sorted != in_sorted {
            return Err(InputError::ValueSetMismatch {
                left: "preorder",
                right: "inorder",
            });
        }

        let mut rec = TraceRecorder::new();
        rec.set("preorder", StateValue::IntList(preorder.clone()));
        rec.set("inorder", StateValue::IntList(inorder.clone()));
        rec.set("tree", StateValue::Tree(Vec::new()));
        rec.record(
            &format!(
                "Reconstructing a {}-node tree from its traversals",
                preorder.len()
            ),
            vec![],
        );

        let mut arena: Vec<TreeNode> = Vec::new();
        build(&mut rec, &preorder, &inorder, 0, 0, inorder.len(), &mut arena);

        rec.record(
            &format!("Done: built all {} node(s)", arena.len()),
            vec![("tree", StateValue::Tree(arena))],
        );
        Ok(rec.finish())
    }
}

/// Build the subtree whose inorder values are `inorder[in_lo..in_hi]` and
/// whose preorder values start at `pre_lo`.  Returns the arena index of the
/// subtree root, or None for an empty range.
fn build(
    rec: &mut TraceRecorder,
    preorder: &[i64],
    inorder: &[i64],
    pre_lo: usize,
    in_lo: usize,
    in_hi: usize,
    arena: &mut Vec<TreeNode>,
) -> Option<usize> {
    if in_lo >= in_hi {
        return None;
    }

    let root_value = preorder[pre_lo];
    rec.push_frame(
        &format!("build(root={})", root_value),
        vec![
            ("root".to_string(), StateValue::Int(root_value)),
            (
                "inorder_range".to_string(),
                StateValue::IntList(inorder[in_lo..in_hi].to_vec()),
            ),
        ],
    );

    // Values are validated distinct, so the pivot is always present
    let pivot = inorder[in_lo..in_hi]
        .iter()
        .position(|&v| v == root_value)
        .map(|p| in_lo + p)
        .unwrap_or(in_lo);
    let left_len = pivot - in_lo;

    let node_index = arena.len();
    arena.push(TreeNode::leaf(root_value));
    rec.record(
        &format!(
            "Node {} is the root of this subtree; {} value(s) to its left, {} to its right",
            root_value,
            left_len,
            in_hi - pivot - 1
        ),
        vec![("tree", StateValue::Tree(arena.clone()))],
    );

    let left = build(rec, preorder, inorder, pre_lo + 1, in_lo, pivot, arena);
    let right = build(
        rec,
        preorder,
        inorder,
        pre_lo + 1 + left_len,
        pivot + 1,
        in_hi,
        arena,
    );

    if left.is_some() || right.is_some() {
        arena[node_index].left = left;
        arena[node_index].right = right;
        rec.record(
            &format!("Attached children to node {}", root_value),
            vec![("tree", StateValue::Tree(arena.clone()))],
        );
    }

    rec.pop_frame();
    Some(node_index)
}
