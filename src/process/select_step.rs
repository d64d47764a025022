//! Looks objects up in the path by label.

use super::{Step, Traverser, Upstream};
use crate::error::TraversalResult;
use crate::path::{Labels, Pop, Popped};

/// Maps each traverser to the object its path holds under `label`.
///
/// With [Pop::All] the matches are collected into one object through `From<Vec<T>>`. A path
/// without the label fails the traversal for [Pop::First] and [Pop::Last].
pub struct SelectStep<T> {
  upstream: Upstream<T>,
  label: String,
  pop: Pop,
  labels: Labels,
}

impl<T> SelectStep<T> {
  pub fn new(upstream: Upstream<T>, label: impl Into<String>, pop: Pop) -> Self {
    Self {
      upstream,
      label: label.into(),
      pop,
      labels: Labels::new(),
    }
  }
}

impl<T> Step<T> for SelectStep<T>
where
  T: Clone + From<Vec<T>>,
{
  fn process_next_start(&mut self) -> TraversalResult<Option<Traverser<T>>> {
    let Some(traverser) = self.upstream.pull_next()? else {
      return Ok(None);
    };
    let object = match traverser.path().get_by_label(&self.label, self.pop)? {
      Popped::One(object) => object.clone(),
      Popped::All(objects) => T::from(objects.into_iter().cloned().collect()),
    };
    Ok(Some(traverser.split(object, Labels::new())))
  }

  fn labels(&self) -> &Labels {
    &self.labels
  }

  fn add_label(&mut self, label: &str) {
    self.labels.insert(label);
  }

  fn name(&self) -> &'static str {
    "SelectStep"
  }
}
