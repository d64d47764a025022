//! Source step over a fixed sequence of objects.

use super::{Step, Traverser};
use crate::error::TraversalResult;
use crate::path::Labels;

/// Emits one fresh traverser per object.
pub struct StartStep<T> {
  objects: Box<dyn Iterator<Item = T>>,
  labels: Labels,
}

impl<T> StartStep<T> {
  pub fn new<I>(objects: I) -> Self
  where
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
  {
    Self {
      objects: Box::new(objects.into_iter()),
      labels: Labels::new(),
    }
  }
}

impl<T: Clone> Step<T> for StartStep<T> {
  fn process_next_start(&mut self) -> TraversalResult<Option<Traverser<T>>> {
    Ok(self.objects.next().map(Traverser::new))
  }

  fn labels(&self) -> &Labels {
    &self.labels
  }

  fn add_label(&mut self, label: &str) {
    self.labels.insert(label);
  }

  fn name(&self) -> &'static str {
    "StartStep"
  }
}
