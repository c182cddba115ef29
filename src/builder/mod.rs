//! Build order computation.
//!
//! [`Builder`] turns a [`DependencyGraph`] into a [`BuildOrder`] using Kahn's
//! algorithm. Steps are released generation by generation: the first
//! generation holds every step without predecessors, and each following
//! generation holds the steps whose last outstanding predecessor was emitted
//! in the previous one. Within a generation steps are emitted in
//! lexicographic order, so the output is reproducible across runs and
//! platforms.
//!
//! When steps remain that never become ready, the pairs contain a cycle and
//! [`CycleError`] reports them together with one concrete loop.
//!
//! # Examples
//!
//! ```
//! use construction::builder::build;
//! use construction::graph::DependencyGraph;
//!
//! let graph = DependencyGraph::new([
//!     ("foundation", "walls"),
//!     ("foundation", "plumbing"),
//!     ("walls", "roof"),
//! ]);
//! let order = build(&graph).expect("acyclic");
//! assert_eq!(order.as_slice(), ["foundation", "plumbing", "walls", "roof"]);
//! ```

mod cycle;
mod error;
mod order;

pub use error::CycleError;
pub use order::BuildOrder;

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::graph::{Adjacency, DependencyGraph};

/// Computes linear build orders for a borrowed graph.
#[derive(Debug, Clone, Copy)]
pub struct Builder<'a> {
    graph: &'a DependencyGraph,
}

impl<'a> Builder<'a> {
    /// Wrap a graph for ordering.
    #[must_use]
    pub const fn new(graph: &'a DependencyGraph) -> Self {
        Self { graph }
    }

    /// Produce one build order consistent with every dependency pair.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] when the pairs form at least one cycle,
    /// including a step that depends on itself.
    pub fn build(&self) -> Result<BuildOrder, CycleError> {
        let steps = self.graph.steps();
        let adjacency = self.graph.adjacency();
        let dependents = invert(&adjacency);

        let mut pending: BTreeMap<&str, usize> = steps
            .iter()
            .map(|step| {
                let count = adjacency.get(step).map_or(0, BTreeSet::len);
                (step.as_str(), count)
            })
            .collect();
        let mut ready: BTreeSet<&str> = pending
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(step, _)| *step)
            .collect();
        debug!(steps = steps.len(), ready = ready.len(), "starting topological sort");

        let mut order = Vec::with_capacity(steps.len());
        while !ready.is_empty() {
            let mut next = BTreeSet::new();
            for step in ready {
                pending.remove(step);
                order.push(step.to_owned());
                for dependent in dependents.get(step).into_iter().flatten() {
                    if let Some(count) = pending.get_mut(dependent) {
                        *count = count.saturating_sub(1);
                        if *count == 0 {
                            next.insert(*dependent);
                        }
                    }
                }
            }
            ready = next;
        }

        if pending.is_empty() {
            debug!(emitted = order.len(), "build order complete");
            return Ok(BuildOrder::new(order));
        }

        let unresolved: BTreeSet<&str> = pending.into_keys().collect();
        let cycle = cycle::find_cycle(&adjacency, &unresolved);
        debug!(
            emitted = order.len(),
            unresolved = unresolved.len(),
            "dependency cycle prevents a complete build order",
        );
        Err(CycleError {
            unresolved: unresolved.into_iter().map(str::to_owned).collect(),
            cycle,
        })
    }
}

/// Order every step of `graph`.
///
/// Shorthand for `Builder::new(graph).build()`.
///
/// # Errors
///
/// Returns [`CycleError`] when no valid order exists.
pub fn build(graph: &DependencyGraph) -> Result<BuildOrder, CycleError> {
    Builder::new(graph).build()
}

/// Flip predecessor sets into dependent lists without touching `adjacency`.
fn invert(adjacency: &Adjacency) -> BTreeMap<&str, Vec<&str>> {
    let mut dependents: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (step, predecessors) in adjacency {
        for predecessor in predecessors {
            dependents
                .entry(predecessor.as_str())
                .or_default()
                .push(step.as_str());
        }
    }
    dependents
}
