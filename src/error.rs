//! Error types for paths, graph operations and traversals.
//!
//! Nothing in this crate recovers locally: every error is returned to the immediate caller,
//! and errors raised inside a strategy chain reach the original caller unmodified.

use crate::structure::ElementId;

/// Failures of [Path](crate::path::Path) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
  /// The operation is not defined for this path. The empty path can neither be retracted
  /// nor relabelled.
  #[error("invalid path operation {operation}: {reason}")]
  InvalidOperation {
    operation: &'static str,
    reason: String,
  },

  /// No segment of the path carries the label.
  #[error("the step with label {label} does not exist")]
  LabelNotFound { label: String },

  #[error("path index {index} out of bounds for size {size}")]
  IndexOutOfBounds { index: usize, size: usize },
}

/// Failures of base graph operations, or aborts raised by a strategy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
  #[error("vertex with id {id} does not exist")]
  VertexNotFound { id: ElementId },

  #[error("edge with id {id} does not exist")]
  EdgeNotFound { id: ElementId },

  #[error("property {key} does not exist on element {id}")]
  PropertyNotFound { id: ElementId, key: String },

  /// Constructor arguments were not alternating key/value pairs with string keys.
  #[error("invalid key/values: {reason}")]
  InvalidKeyValues { reason: String },

  #[error("the graph has been closed")]
  Closed,

  /// Raised by a strategy to abort the operation it intercepts.
  #[error("operation aborted by strategy: {reason}")]
  Aborted { reason: String },

  #[error("configuration error: {reason}")]
  Config { reason: String },
}

impl GraphError {
  /// Convenience for strategies that abort a chain.
  pub fn aborted(reason: impl Into<String>) -> Self {
    GraphError::Aborted {
      reason: reason.into(),
    }
  }
}

/// Failures surfaced by a running traversal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TraversalError {
  #[error(transparent)]
  Path(#[from] PathError),

  #[error(transparent)]
  Graph(#[from] GraphError),

  /// A graph-dependent step was added to a traversal that has no graph.
  #[error("step {step} requires a graph but the traversal has none")]
  MissingGraph { step: &'static str },

  /// A graph-dependent step received an object that is not a vertex or edge.
  #[error("step {step} expected an element but got {found}")]
  NotAnElement { step: &'static str, found: String },
}

pub type PathResult<T> = Result<T, PathError>;
pub type GraphResult<T> = Result<T, GraphError>;
pub type TraversalResult<T> = Result<T, TraversalError>;
