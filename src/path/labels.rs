//! Step labels attached to a path segment.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Insertion-ordered set of step labels. Duplicates collapse; equality ignores order.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(IndexSet<String>);

impl Labels {
  pub fn new() -> Self {
    Self(IndexSet::new())
  }

  pub fn single(label: impl Into<String>) -> Self {
    let mut labels = Self::new();
    labels.insert(label);
    labels
  }

  /// Adds a label, returning false if it was already present.
  pub fn insert(&mut self, label: impl Into<String>) -> bool {
    self.0.insert(label.into())
  }

  pub fn contains(&self, label: &str) -> bool {
    self.0.contains(label)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.0.iter().map(String::as_str)
  }

  /// True when at least one label is shared with `other`.
  pub fn intersects(&self, other: &Labels) -> bool {
    !self.0.is_disjoint(&other.0)
  }

  /// `self ∪ other`, keeping `self`'s labels first.
  pub fn union(&self, other: &Labels) -> Labels {
    let mut merged = self.clone();
    merged.0.extend(other.0.iter().cloned());
    merged
  }
}

impl fmt::Debug for Labels {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.0.iter()).finish()
  }
}

impl<S: Into<String>> FromIterator<S> for Labels {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self(iter.into_iter().map(Into::into).collect())
  }
}

impl<const N: usize> From<[&str; N]> for Labels {
  fn from(labels: [&str; N]) -> Self {
    labels.into_iter().collect()
  }
}

impl From<&[&str]> for Labels {
  fn from(labels: &[&str]) -> Self {
    labels.iter().copied().collect()
  }
}

impl From<Vec<String>> for Labels {
  fn from(labels: Vec<String>) -> Self {
    labels.into_iter().collect()
  }
}

impl From<&Labels> for Labels {
  fn from(labels: &Labels) -> Self {
    labels.clone()
  }
}

impl<'a> IntoIterator for &'a Labels {
  type Item = &'a String;
  type IntoIter = indexmap::set::Iter<'a, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
