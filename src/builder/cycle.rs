//! Cycle tracing for steps the topological sort could not order.

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::Adjacency;

/// Find one loop among `unresolved` steps.
///
/// Every unresolved step still waits on at least one other unresolved step,
/// so repeatedly stepping to the smallest unresolved predecessor must revisit
/// a step. The walk is iterative and visits each step at most once. The
/// result reads in build direction (`a -> b` means `a` precedes `b`) and is
/// canonicalised by [`canonicalize_cycle`]. Returns an empty vector when
/// `unresolved` is empty.
pub(crate) fn find_cycle(adjacency: &Adjacency, unresolved: &BTreeSet<&str>) -> Vec<String> {
    let Some(&start) = unresolved.first() else {
        return Vec::new();
    };
    let mut path: Vec<&str> = Vec::new();
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    let mut current = start;
    loop {
        if let Some(&idx) = seen.get(current) {
            let mut cycle: Vec<String> = path
                .iter()
                .skip(idx)
                .map(|step| (*step).to_owned())
                .collect();
            cycle.push(current.to_owned());
            // The path follows predecessor edges; flip it to build order.
            cycle.reverse();
            return canonicalize_cycle(cycle);
        }
        seen.insert(current, path.len());
        path.push(current);
        let next = adjacency.get(current).and_then(|predecessors| {
            predecessors
                .iter()
                .map(String::as_str)
                .find(|predecessor| unresolved.contains(predecessor))
        });
        let Some(predecessor) = next else {
            tracing::debug!(
                step = current,
                unresolved = unresolved.len(),
                "unresolved step has no unresolved predecessor",
            );
            return Vec::new();
        };
        current = predecessor;
    }
}

/// Rotate a closed loop so it starts and ends at its smallest step.
fn canonicalize_cycle(mut cycle: Vec<String>) -> Vec<String> {
    if cycle.len() < 2 {
        return cycle;
    }
    let len = cycle.len() - 1;
    let start = cycle
        .iter()
        .take(len)
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map_or(0, |(idx, _)| idx);
    let (prefix, suffix) = cycle.split_at_mut(len);
    prefix.rotate_left(start);
    if let (Some(first), Some(slot)) = (prefix.first().cloned(), suffix.first_mut()) {
        slot.clone_from(&first);
    }
    cycle
}
