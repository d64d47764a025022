//! One-to-one and one-to-many steps.

use std::collections::VecDeque;

use super::{Step, Traverser, Upstream};
use crate::error::TraversalResult;
use crate::path::Labels;

/// Replaces each traverser's object, extending its path.
pub struct MapStep<T, F> {
  upstream: Upstream<T>,
  map: F,
  labels: Labels,
}

impl<T, F> MapStep<T, F>
where
  F: FnMut(&Traverser<T>) -> TraversalResult<T>,
{
  pub fn new(upstream: Upstream<T>, map: F) -> Self {
    Self {
      upstream,
      map,
      labels: Labels::new(),
    }
  }
}

impl<T, F> Step<T> for MapStep<T, F>
where
  T: Clone,
  F: FnMut(&Traverser<T>) -> TraversalResult<T>,
{
  fn process_next_start(&mut self) -> TraversalResult<Option<Traverser<T>>> {
    let Some(traverser) = self.upstream.pull_next()? else {
      return Ok(None);
    };
    let object = (self.map)(&traverser)?;
    Ok(Some(traverser.split(object, Labels::new())))
  }

  fn labels(&self) -> &Labels {
    &self.labels
  }

  fn add_label(&mut self, label: &str) {
    self.labels.insert(label);
  }

  fn name(&self) -> &'static str {
    "MapStep"
  }
}

/// Replaces each traverser by zero or more children, each extending the parent's path.
pub struct FlatMapStep<T, F> {
  upstream: Upstream<T>,
  flat_map: F,
  buffer: VecDeque<Traverser<T>>,
  labels: Labels,
}

impl<T, F> FlatMapStep<T, F>
where
  F: FnMut(&Traverser<T>) -> TraversalResult<Vec<T>>,
{
  pub fn new(upstream: Upstream<T>, flat_map: F) -> Self {
    Self {
      upstream,
      flat_map,
      buffer: VecDeque::new(),
      labels: Labels::new(),
    }
  }
}

impl<T, F> Step<T> for FlatMapStep<T, F>
where
  T: Clone,
  F: FnMut(&Traverser<T>) -> TraversalResult<Vec<T>>,
{
  fn process_next_start(&mut self) -> TraversalResult<Option<Traverser<T>>> {
    loop {
      if let Some(next) = self.buffer.pop_front() {
        return Ok(Some(next));
      }
      let Some(traverser) = self.upstream.pull_next()? else {
        return Ok(None);
      };
      let objects = (self.flat_map)(&traverser)?;
      self.buffer.extend(
        objects
          .into_iter()
          .map(|object| traverser.split(object, Labels::new())),
      );
    }
  }

  fn labels(&self) -> &Labels {
    &self.labels
  }

  fn add_label(&mut self, label: &str) {
    self.labels.insert(label);
  }

  fn name(&self) -> &'static str {
    "FlatMapStep"
  }
}
