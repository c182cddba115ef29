//! Tests for build order computation.

use construction::builder::{BuildOrder, Builder, CycleError, build};
use construction::graph::DependencyGraph;
use rstest::rstest;
use test_support::{HOUSE_ORDER, house_graph};

fn assert_valid_order(graph: &DependencyGraph, order: &BuildOrder) {
    let steps = graph.steps();
    assert_eq!(order.len(), steps.len(), "every step appears once");
    for step in &steps {
        assert!(order.position(step).is_some(), "{step} missing from order");
    }
    for pair in graph.dependency_pairs() {
        let before = order.position(&pair.predecessor).expect("predecessor placed");
        let after = order.position(&pair.successor).expect("successor placed");
        assert!(before < after, "{pair} violated in {order}");
    }
}

#[rstest]
fn house_order_is_deterministic_and_lexicographic() {
    let graph = house_graph();
    let order = build(&graph).expect("house is acyclic");
    assert_eq!(order.as_slice(), HOUSE_ORDER);
    assert_valid_order(&graph, &order);
}

#[rstest]
#[case::chain(&[("a", "b"), ("b", "c"), ("c", "d")])]
#[case::diamond(&[("top", "left"), ("top", "right"), ("left", "bottom"), ("right", "bottom")])]
#[case::forest(&[("x", "y"), ("p", "q"), ("m", "n")])]
#[case::duplicates(&[("a", "b"), ("a", "b"), ("b", "c"), ("a", "c")])]
#[case::shortcut(&[("a", "d"), ("a", "b"), ("b", "c"), ("c", "d")])]
fn acyclic_graphs_yield_total_consistent_orders(#[case] pairs: &[(&str, &str)]) {
    let graph = DependencyGraph::new(pairs.iter().copied());
    let order = Builder::new(&graph).build().expect("acyclic");
    assert_valid_order(&graph, &order);
}

#[rstest]
fn building_twice_yields_identical_orders() {
    let graph = house_graph();
    let first = build(&graph).expect("first build");
    let second = build(&graph).expect("second build");
    assert_eq!(first, second);
}

#[rstest]
fn input_order_does_not_change_the_result() {
    let mut reversed: Vec<_> = test_support::HOUSE_PAIRS.to_vec();
    reversed.reverse();
    let graph = DependencyGraph::new(reversed);
    let order = build(&graph).expect("acyclic");
    assert_eq!(order.as_slice(), HOUSE_ORDER);
}

#[rstest]
fn empty_graph_builds_empty_order() {
    let order = build(&DependencyGraph::default()).expect("empty");
    assert!(order.is_empty());
    assert_eq!(order.to_string(), "");
}

#[rstest]
#[case::three_cycle(&[("A", "B"), ("B", "C"), ("C", "A")], &["A", "B", "C"], &["A", "B", "C", "A"])]
#[case::self_pair(&[("A", "A")], &["A"], &["A", "A"])]
#[case::two_cycle_after_root(&[("root", "B"), ("B", "A"), ("A", "B")], &["A", "B"], &["A", "B", "A"])]
fn cycles_are_reported(
    #[case] pairs: &[(&str, &str)],
    #[case] unresolved: &[&str],
    #[case] cycle: &[&str],
) {
    let graph = DependencyGraph::new(pairs.iter().copied());
    let err: CycleError = build(&graph).expect_err("cycle");
    assert_eq!(err.unresolved, unresolved);
    assert_eq!(err.cycle, cycle);
}

#[rstest]
fn cycle_error_message_names_the_loop() {
    let graph = DependencyGraph::new([("A", "B"), ("B", "C"), ("C", "A")]);
    let err = build(&graph).expect_err("cycle");
    assert_eq!(
        err.to_string(),
        "dependency cycle detected: A -> B -> C -> A (unresolved steps: A, B, C)"
    );
}

#[rstest]
fn a_cycle_anywhere_blocks_the_whole_order() {
    let graph = DependencyGraph::new([("a", "b"), ("x", "x")]);
    let err = build(&graph).expect_err("self loop");
    assert!(err.involves("x"));
    assert!(!err.involves("a"));
}

#[rstest]
fn long_cycle_is_reported_without_exhausting_the_stack() {
    let n = 200_000;
    let graph: DependencyGraph = (0..n)
        .map(|i| (format!("s{i}"), format!("s{}", (i + 1) % n)))
        .collect();
    let err = build(&graph).expect_err("every step is on the loop");
    assert_eq!(err.unresolved.len(), n);
    assert_eq!(err.cycle.len(), n + 1);
    assert_eq!(err.cycle.first().map(String::as_str), Some("s0"));
    assert_eq!(err.cycle.get(1).map(String::as_str), Some("s1"));
    assert_eq!(err.cycle.last().map(String::as_str), Some("s0"));
}
