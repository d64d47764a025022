//! The pull contract every step implements.

use super::Traverser;
use crate::error::TraversalResult;
use crate::path::Labels;

/// A lazily evaluated stage of a traversal.
///
/// Steps pull from the step before them one traverser at a time. Nothing is computed until a
/// caller asks for the next traverser.
pub trait Step<T> {
  /// Produces the next traverser, pulling as many upstream traversers as needed.
  /// `Ok(None)` means the step is exhausted.
  fn process_next_start(&mut self) -> TraversalResult<Option<Traverser<T>>>;

  /// Labels added to the path of every traverser this step emits.
  fn labels(&self) -> &Labels;

  fn add_label(&mut self, label: &str);

  /// Step name used in logs.
  fn name(&self) -> &'static str;

  /// [Step::process_next_start] with this step's labels applied.
  fn pull_next(&mut self) -> TraversalResult<Option<Traverser<T>>>
  where
    T: Clone,
  {
    match self.process_next_start()? {
      Some(mut traverser) if !self.labels().is_empty() => {
        traverser.add_labels(self.labels())?;
        Ok(Some(traverser))
      }
      next => Ok(next),
    }
  }
}

/// A boxed upstream step.
pub type Upstream<T> = Box<dyn Step<T>>;
