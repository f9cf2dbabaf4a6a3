// Integration tests for the instrumented algorithms and their validation

use algotty::algorithms::errors::InputError;
use algotty::algorithms::{self, TraceAlgorithm};

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

// === Triplet sum ===

#[test]
fn triplet_sum_finds_the_two_known_triplets() {
    let algo = algorithms::two_pointer::TripletSum;
    let trace = algo.generate_trace(&args(&["-1,0,1,2,-1,-4"])).unwrap();

    let terminal = trace.last().unwrap();
    assert!(terminal.is_terminal);
    let triplets = terminal.field("triplets").unwrap().as_int_pairs().unwrap();
    assert_eq!(triplets.to_vec(), vec![vec![-1, -1, 2], vec![-1, 0, 1]]);
}

#[test]
fn triplet_sum_searches_over_the_sorted_array() {
    let algo = algorithms::two_pointer::TripletSum;
    let trace = algo.generate_trace(&args(&["-1,0,1,2,-1,-4"])).unwrap();

    // The first snapshot that mentions searching already shows the sorted
    // array; every later snapshot keeps it
    let searching = trace
        .iter()
        .find(|s| s.explanation.contains("searching"))
        .unwrap();
    assert_eq!(
        searching.field("nums").unwrap().as_int_list(),
        Some(&[-4i64, -1, -1, 0, 1, 2][..])
    );
}

#[test]
fn triplet_sum_rejects_short_input() {
    let algo = algorithms::two_pointer::TripletSum;
    assert_eq!(
        algo.generate_trace(&args(&["1,2"])).unwrap_err(),
        InputError::TooFewElements {
            name: "nums",
            needed: 3,
            got: 2
        }
    );
}

#[test]
fn triplet_sum_rejects_malformed_tokens() {
    let algo = algorithms::two_pointer::TripletSum;
    assert_eq!(
        algo.generate_trace(&args(&["1,two,3"])).unwrap_err(),
        InputError::MalformedNumber {
            token: "two".to_string()
        }
    );
}

// === Minimum window substring ===

#[test]
fn min_window_finds_banc() {
    let algo = algorithms::sliding_window::MinWindow;
    let trace = algo
        .generate_trace(&args(&["ADOBECODEBANC", "ABC"]))
        .unwrap();

    let terminal = trace.last().unwrap();
    let best = terminal.field("best_window").unwrap().as_text().unwrap();
    assert_eq!(best, "BANC");
    assert_eq!(best.len(), 4);
}

#[test]
fn min_window_reports_no_window_when_impossible() {
    let algo = algorithms::sliding_window::MinWindow;
    let trace = algo.generate_trace(&args(&["AAA", "B"])).unwrap();

    let terminal = trace.last().unwrap();
    assert_eq!(
        terminal.field("best_window").unwrap().as_text(),
        Some("")
    );
}

#[test]
fn min_window_rejects_oversized_pattern() {
    let algo = algorithms::sliding_window::MinWindow;
    assert_eq!(
        algo.generate_trace(&args(&["AB", "ABC"])).unwrap_err(),
        InputError::PatternTooLong {
            pattern_len: 3,
            text_len: 2
        }
    );
}

#[test]
fn min_window_rejects_empty_inputs() {
    let algo = algorithms::sliding_window::MinWindow;
    assert_eq!(
        algo.generate_trace(&args(&["", "ABC"])).unwrap_err(),
        InputError::EmptyInput { name: "text" }
    );
    assert_eq!(
        algo.generate_trace(&args(&["ABC", ""])).unwrap_err(),
        InputError::EmptyInput { name: "pattern" }
    );
    assert_eq!(
        algo.generate_trace(&args(&["ABC"])).unwrap_err(),
        InputError::MissingArgument { name: "pattern" }
    );
}

// === Subsets ===

#[test]
fn subsets_collects_all_eight_for_three_elements() {
    let algo = algorithms::backtracking::Subsets;
    let trace = algo.generate_trace(&args(&["1,2,3"])).unwrap();

    let terminal = trace.last().unwrap();
    let subsets = terminal.field("subsets").unwrap().as_int_pairs().unwrap();
    assert_eq!(subsets.len(), 8);
    assert!(subsets.contains(&vec![]));
    assert!(subsets.contains(&vec![1, 2, 3]));
    assert!(subsets.contains(&vec![1, 3]));
}

#[test]
fn subsets_rejects_duplicates() {
    let algo = algorithms::backtracking::Subsets;
    assert_eq!(
        algo.generate_trace(&args(&["1,2,1"])).unwrap_err(),
        InputError::DuplicateValues {
            name: "nums",
            value: 1
        }
    );
}

// === Build tree ===

#[test]
fn build_tree_reconstructs_the_classic_example() {
    let algo = algorithms::tree::BuildTree;
    let trace = algo
        .generate_trace(&args(&["3,9,20,15,7", "9,3,15,20,7"]))
        .unwrap();

    let terminal = trace.last().unwrap();
    let arena = terminal.field("tree").unwrap().as_tree().unwrap();
    assert_eq!(arena.len(), 5);

    // Nodes are pushed in preorder: index 0 is the root
    let root = &arena[0];
    assert_eq!(root.value, 3);
    assert_eq!(arena[root.left.unwrap()].value, 9);
    let right = &arena[root.right.unwrap()];
    assert_eq!(right.value, 20);
    assert_eq!(arena[right.left.unwrap()].value, 15);
    assert_eq!(arena[right.right.unwrap()].value, 7);
}

#[test]
fn build_tree_records_partial_trees_along_the_way() {
    let algo = algorithms::tree::BuildTree;
    let trace = algo
        .generate_trace(&args(&["3,9,20,15,7", "9,3,15,20,7"]))
        .unwrap();

    // The arena only ever grows across the trace
    let mut prev = 0;
    for snap in trace.iter() {
        let count = snap.field("tree").unwrap().as_tree().unwrap().len();
        assert!(count >= prev, "tree shrank from {} to {}", prev, count);
        prev = count;
    }
    assert_eq!(prev, 5);
}

#[test]
fn build_tree_rejects_mismatched_traversals() {
    let algo = algorithms::tree::BuildTree;
    assert!(matches!(
        algo.generate_trace(&args(&["1,2,3", "1,2"])).unwrap_err(),
        InputError::LengthMismatch { .. }
    ));
    // Equal lengths but different value sets
    assert!(matches!(
        algo.generate_trace(&args(&["1,2,3", "1,2,4"])).unwrap_err(),
        InputError::ValueSetMismatch { .. }
    ));
    assert!(matches!(
        algo.generate_trace(&args(&["1,2,2", "2,1,2"])).unwrap_err(),
        InputError::DuplicateValues { .. }
    ));
}

// === Reverse list ===

#[test]
fn reverse_list_reverses_in_order() {
    let algo = algorithms::linked_list::ReverseList;
    let trace = algo.generate_trace(&args(&["1,2,3"])).unwrap();

    let terminal = trace.last().unwrap();
    assert_eq!(
        terminal.field("reversed").unwrap().as_int_list(),
        Some(&[3i64, 2, 1][..])
    );
    assert_eq!(
        terminal.field("remaining").unwrap().as_int_list(),
        Some(&[][..])
    );
    // Initial + one per node + terminal
    assert_eq!(trace.len(), 5);
}

#[test]
fn reverse_list_rejects_empty_input() {
    let algo = algorithms::linked_list::ReverseList;
    assert_eq!(
        algo.generate_trace(&args(&[" "])).unwrap_err(),
        InputError::EmptyInput { name: "values" }
    );
}

// === Registry ===

#[test]
fn registry_finds_every_algorithm_by_name() {
    for algo in algorithms::registry() {
        assert_eq!(algorithms::find(algo.name()).unwrap().name(), algo.name());
    }
}

#[test]
fn unknown_algorithm_is_rejected() {
    assert_eq!(
        algorithms::find("quickhull").unwrap_err(),
        InputError::UnknownAlgorithm {
            name: "quickhull".to_string()
        }
    );
}
