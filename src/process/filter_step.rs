//! Steps that pass or drop traversers.

use tracing::trace;

use super::{Step, Traverser, Upstream};
use crate::error::TraversalResult;
use crate::path::Labels;

/// Decides whether a traverser continues.
pub trait Filter<T> {
  fn test(&mut self, traverser: &Traverser<T>) -> TraversalResult<bool>;
}

impl<T, F> Filter<T> for F
where
  F: FnMut(&Traverser<T>) -> bool,
{
  fn test(&mut self, traverser: &Traverser<T>) -> TraversalResult<bool> {
    Ok(self(traverser))
  }
}

/// Emits the upstream traversers that satisfy a [Filter], unchanged and in order.
pub struct FilterStep<T, F> {
  upstream: Upstream<T>,
  filter: F,
  labels: Labels,
}

impl<T, F: Filter<T>> FilterStep<T, F> {
  pub fn new(upstream: Upstream<T>, filter: F) -> Self {
    Self {
      upstream,
      filter,
      labels: Labels::new(),
    }
  }
}

impl<T: Clone, F: Filter<T>> Step<T> for FilterStep<T, F> {
  fn process_next_start(&mut self) -> TraversalResult<Option<Traverser<T>>> {
    loop {
      let Some(traverser) = self.upstream.pull_next()? else {
        trace!(step = self.name(), "upstream exhausted");
        return Ok(None);
      };
      if self.filter.test(&traverser)? {
        return Ok(Some(traverser));
      }
      trace!(step = self.name(), "filtered out");
    }
  }

  fn labels(&self) -> &Labels {
    &self.labels
  }

  fn add_label(&mut self, label: &str) {
    self.labels.insert(label);
  }

  fn name(&self) -> &'static str {
    "FilterStep"
  }
}
