//! Dependency graph structures.
//!
//! A [`DependencyGraph`] owns the precedence pairs supplied by a loader and
//! derives two read-only views from them: the set of distinct steps and an
//! adjacency map from each step to the steps that must finish before it can
//! start. Neither view carries independent state; both are recomputed from
//! the stored pairs on every call.
//!
//! # Examples
//!
//! ```
//! use construction::graph::DependencyGraph;
//!
//! let graph = DependencyGraph::new([("foundation", "walls"), ("walls", "roof")]);
//! assert_eq!(graph.steps().len(), 3);
//! assert!(graph.predecessors("foundation").is_empty());
//! assert!(graph.predecessors("roof").contains("walls"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};

/// Name of a single unit of work.
pub type Step = String;

/// Mapping from a step to the set of its direct predecessors.
pub type Adjacency = BTreeMap<Step, BTreeSet<Step>>;

/// Ordered constraint: `predecessor` must complete before `successor`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DependencyPair {
    /// Step that must be completed first.
    pub predecessor: Step,
    /// Step that may only start once `predecessor` is done.
    pub successor: Step,
}

impl DependencyPair {
    /// Create a pair from anything convertible into step names.
    #[must_use]
    pub fn new(predecessor: impl Into<Step>, successor: impl Into<Step>) -> Self {
        Self {
            predecessor: predecessor.into(),
            successor: successor.into(),
        }
    }

    /// Whether the pair names the same step on both sides.
    #[must_use]
    pub fn is_self_dependency(&self) -> bool {
        self.predecessor == self.successor
    }
}

impl<P, S> From<(P, S)> for DependencyPair
where
    P: Into<Step>,
    S: Into<Step>,
{
    fn from((predecessor, successor): (P, S)) -> Self {
        Self::new(predecessor, successor)
    }
}

impl Display for DependencyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.predecessor, self.successor)
    }
}

/// Immutable set of precedence constraints between construction steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    pairs: Vec<DependencyPair>,
}

impl DependencyGraph {
    /// Build a graph from an ordered sequence of pairs.
    ///
    /// The pairs are stored exactly as supplied. Empty input yields a graph
    /// with no steps; duplicate pairs are kept but do not affect the derived
    /// views.
    #[must_use]
    pub fn new<I, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<DependencyPair>,
    {
        Self {
            pairs: pairs.into_iter().map(Into::into).collect(),
        }
    }

    /// Pairs in the order they were supplied.
    #[must_use]
    pub fn dependency_pairs(&self) -> &[DependencyPair] {
        &self.pairs
    }

    /// Every distinct step appearing on either side of any pair.
    #[must_use]
    pub fn steps(&self) -> BTreeSet<Step> {
        self.pairs
            .iter()
            .flat_map(|pair| [&pair.predecessor, &pair.successor])
            .cloned()
            .collect()
    }

    /// Map each successor to the set of steps that must precede it.
    ///
    /// Only steps appearing as a successor in at least one pair become keys.
    /// A step absent from the map has no predecessors; callers must not treat
    /// a missing key as an error. Use [`Self::predecessors`] to read the map
    /// with that contract applied.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        let mut adjacency = Adjacency::new();
        for pair in &self.pairs {
            adjacency
                .entry(pair.successor.clone())
                .or_default()
                .insert(pair.predecessor.clone());
        }
        adjacency
    }

    /// Direct predecessors of `step`, empty when it has none.
    #[must_use]
    pub fn predecessors(&self, step: &str) -> BTreeSet<Step> {
        self.pairs
            .iter()
            .filter(|pair| pair.successor == step)
            .map(|pair| pair.predecessor.clone())
            .collect()
    }

    /// Number of distinct steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps().len()
    }

    /// Whether the graph holds no pairs at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<P> FromIterator<P> for DependencyGraph
where
    P: Into<DependencyPair>,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set(items: &[&str]) -> BTreeSet<Step> {
        items.iter().map(|item| (*item).to_owned()).collect()
    }

    #[rstest]
    fn empty_graph_has_no_views() {
        let graph = DependencyGraph::default();
        assert!(graph.is_empty());
        assert!(graph.steps().is_empty());
        assert!(graph.adjacency().is_empty());
        assert!(graph.dependency_pairs().is_empty());
    }

    #[rstest]
    fn steps_include_both_sides() {
        let graph = DependencyGraph::new([("a", "b"), ("c", "b")]);
        assert_eq!(graph.steps(), set(&["a", "b", "c"]));
        assert_eq!(graph.step_count(), 3);
    }

    #[rstest]
    fn adjacency_keys_are_successors_only() {
        let graph = DependencyGraph::new([("a", "b"), ("c", "b"), ("b", "d")]);
        let adjacency = graph.adjacency();
        assert_eq!(adjacency.keys().collect::<Vec<_>>(), vec!["b", "d"]);
        assert_eq!(adjacency.get("b"), Some(&set(&["a", "c"])));
        assert_eq!(adjacency.get("d"), Some(&set(&["b"])));
        assert!(adjacency.get("a").is_none());
    }

    #[rstest]
    fn duplicate_pairs_are_kept_but_collapse_in_views() {
        let graph = DependencyGraph::new([("a", "b"), ("a", "b")]);
        assert_eq!(graph.dependency_pairs().len(), 2);
        assert_eq!(graph.steps(), set(&["a", "b"]));
        assert_eq!(graph.adjacency().get("b"), Some(&set(&["a"])));
    }

    #[rstest]
    #[case("b", &["a"])]
    #[case("a", &[])]
    #[case("unknown", &[])]
    fn predecessors_treat_missing_keys_as_empty(#[case] step: &str, #[case] expected: &[&str]) {
        let graph = DependencyGraph::new([("a", "b")]);
        assert_eq!(graph.predecessors(step), set(expected));
    }

    #[rstest]
    fn self_pair_is_flagged() {
        assert!(DependencyPair::new("a", "a").is_self_dependency());
        assert!(!DependencyPair::new("a", "b").is_self_dependency());
    }

    #[rstest]
    fn pair_displays_as_tuple() {
        assert_eq!(DependencyPair::new("walls", "roof").to_string(), "(walls, roof)");
    }
}
