//! The linear build order produced by the builder.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Sequence of steps in which every predecessor precedes its successors.
///
/// Each step appears exactly once. Values are only created by
/// [`super::Builder`], so the ordering invariant always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildOrder(Vec<String>);

impl BuildOrder {
    pub(super) const fn new(steps: Vec<String>) -> Self {
        Self(steps)
    }

    /// Borrow the ordered steps.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of steps in the order.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the order is empty, which only happens for an empty graph.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Zero-based position of `step`, if present.
    #[must_use]
    pub fn position(&self, step: &str) -> Option<usize> {
        self.0.iter().position(|candidate| candidate == step)
    }

    /// Iterate over the steps in build order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Consume the order returning the owned steps.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a BuildOrder {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for BuildOrder {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for BuildOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
