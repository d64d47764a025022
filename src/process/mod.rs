//! Lazy, pull-based traversal evaluation.
//!
//! A [Traversal] is a chain of [Step]s. Each step pulls [Traverser]s from the step before it,
//! one at a time, and every traverser carries the [Path](crate::path::Path) of objects it has
//! been.

mod filter_step;
mod graph_step;
#[cfg(test)]
mod graph_step_test;
mod has_container;
mod map_step;
#[cfg(test)]
mod map_step_test;
mod select_step;
mod start_step;
mod step;
mod traversal;
#[cfg(test)]
mod traversal_test;
mod traverser;
#[cfg(test)]
mod traverser_test;

pub use filter_step::{Filter, FilterStep};
pub use graph_step::{ElementKind, GraphStep};
pub use has_container::{HasContainer, HasFilter, HasKey, Predicate};
pub use map_step::{FlatMapStep, MapStep};
pub use select_step::SelectStep;
pub use start_step::StartStep;
pub use step::{Step, Upstream};
pub use traversal::Traversal;
pub use traverser::Traverser;
