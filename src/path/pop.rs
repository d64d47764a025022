//! Retrieval mode for label-scoped path lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the segments carrying a label a lookup returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pop {
  /// The oldest segment carrying the label.
  First,
  /// The newest segment carrying the label.
  Last,
  /// Every segment carrying the label, oldest to newest.
  All,
}

impl fmt::Display for Pop {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Pop::First => write!(f, "first"),
      Pop::Last => write!(f, "last"),
      Pop::All => write!(f, "all"),
    }
  }
}

/// Result of [Path::get_by_label](super::Path::get_by_label).
#[derive(Debug, Clone, PartialEq)]
pub enum Popped<'a, T> {
  One(&'a T),
  All(Vec<&'a T>),
}

impl<'a, T> Popped<'a, T> {
  /// The single object for `First`/`Last` lookups.
  pub fn one(self) -> Option<&'a T> {
    match self {
      Popped::One(object) => Some(object),
      Popped::All(_) => None,
    }
  }

  /// Every object; a single lookup becomes a one-element list.
  pub fn into_vec(self) -> Vec<&'a T> {
    match self {
      Popped::One(object) => vec![object],
      Popped::All(objects) => objects,
    }
  }
}
