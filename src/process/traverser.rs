//! The unit of work pulled through steps.

use crate::error::TraversalResult;
use crate::path::{Labels, Path};

/// An object in flight together with the history that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Traverser<T> {
  object: T,
  path: Path<T>,
  bulk: u64,
}

impl<T: Clone> Traverser<T> {
  /// A traverser whose path holds just `object`.
  pub fn new(object: T) -> Self {
    let path = Path::empty().extend(object.clone(), Labels::new());
    Self {
      object,
      path,
      bulk: 1,
    }
  }

  /// A child traverser for `object`, extending this traverser's path. The parent is unchanged,
  /// so one traverser can branch into several.
  pub fn split(&self, object: T, labels: impl Into<Labels>) -> Traverser<T> {
    Traverser {
      path: self.path.extend(object.clone(), labels),
      object,
      bulk: self.bulk,
    }
  }

  /// Adds `labels` to the newest path segment.
  pub fn add_labels(&mut self, labels: impl Into<Labels>) -> TraversalResult<()> {
    self.path = self.path.extend_labels(labels)?;
    Ok(())
  }

  /// Removes every path segment carrying any of `labels`.
  pub fn drop_labels(&mut self, labels: &Labels) -> TraversalResult<()> {
    self.path = self.path.retract(labels)?;
    Ok(())
  }
}

impl<T> Traverser<T> {
  pub fn get(&self) -> &T {
    &self.object
  }

  pub fn into_object(self) -> T {
    self.object
  }

  pub fn path(&self) -> &Path<T> {
    &self.path
  }

  /// How many identical traversers this one stands for.
  pub fn bulk(&self) -> u64 {
    self.bulk
  }

  pub fn set_bulk(&mut self, bulk: u64) {
    self.bulk = bulk;
  }
}
