//! Snapshot value representation
//!
//! This module defines the [`StateValue`] enum, which represents every kind of
//! working state an instrumented algorithm can expose in a snapshot.  Values
//! are tagged and fully owned — no variant holds a reference or a shared
//! handle — so [`Clone`] is a genuine deep copy.  The recorder relies on this
//! when it captures the live field map into a snapshot: cloning the map
//! severs every tie to the algorithm's still-mutating containers.
//!
//! # Value Types
//!
//! - [`StateValue::Int`]: 64-bit signed integer (indices, counters, sums)
//! - [`StateValue::Text`]: owned string (windows, labels)
//! - [`StateValue::Bool`]: flag
//! - [`StateValue::IntList`]: ordered integer sequence (arrays, paths)
//! - [`StateValue::TextList`]: ordered string sequence (collected results)
//! - [`StateValue::IntPairs`]: list of integer tuples (found triplets)
//! - [`StateValue::CountMap`]: frequency map (sliding-window need/have)
//! - [`StateValue::Tree`]: node arena for a partially built binary tree

use rustc_hash::FxHashMap;

/// One node of a recorded binary tree.  Children are indices into the same
/// [`StateValue::Tree`] arena, so a cloned arena is a complete tree copy.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl TreeNode {
    pub fn leaf(value: i64) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }
}

/// A single named piece of algorithm state inside a snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    Int(i64),
    Text(String),
    Bool(bool),
    IntList(Vec<i64>),
    TextList(Vec<String>),
    IntPairs(Vec<Vec<i64>>),
    CountMap(FxHashMap<String, i64>), // Key -> occurrence count
    Tree(Vec<TreeNode>),              // Index 0 is the root once non-empty
}

impl StateValue {
    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            StateValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text value, returns None if not Text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StateValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer list, returns None if not an IntList
    pub fn as_int_list(&self) -> Option<&[i64]> {
        match self {
            StateValue::IntList(v) => Some(v),
            _ => None,
        }
    }

    /// Get the pair list, returns None if not IntPairs
    pub fn as_int_pairs(&self) -> Option<&[Vec<i64>]> {
        match self {
            StateValue::IntPairs(v) => Some(v),
            _ => None,
        }
    }

    /// Get the count map, returns None if not a CountMap
    pub fn as_count_map(&self) -> Option<&FxHashMap<String, i64>> {
        match self {
            StateValue::CountMap(m) => Some(m),
            _ => None,
        }
    }

    /// Get the tree arena, returns None if not a Tree
    pub fn as_tree(&self) -> Option<&[TreeNode]> {
        match self {
            StateValue::Tree(nodes) => Some(nodes),
            _ => None,
        }
    }

    /// Render the value on one line for the state pane
    pub fn display(&self) -> String {
        match self {
            StateValue::Int(n) => n.to_string(),
            StateValue::Text(s) => format!("\"{}\"", s),
            StateValue::Bool(b) => b.to_string(),
            StateValue::IntList(v) => format!(
                "[{}]",
                v.iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            StateValue::TextList(v) => format!(
                "[{}]",
                v.iter()
                    .map(|s| format!("\"{}\"", s))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            StateValue::IntPairs(v) => format!(
                "[{}]",
                v.iter()
                    .map(|pair| format!(
                        "[{}]",
                        pair.iter()
                            .map(|n| n.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            StateValue::CountMap(m) => {
                // Sort keys so the display is stable across renders
                let mut entries: Vec<_> = m.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                format!(
                    "{{{}}}",
                    entries
                        .iter()
                        .map(|(k, v)| format!("{}: {}", k, v))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            StateValue::Tree(nodes) => {
                if nodes.is_empty() {
                    "(empty)".to_string()
                } else {
                    format!("{} node(s)", nodes.len())
                }
            }
        }
    }
}
