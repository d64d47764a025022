//! Immutable traversal history.
//!
//! [Path] records every object a traverser has been, together with the labels of the steps
//! that produced it. Lookups by label use a [Pop] mode to pick the oldest, the newest or every
//! matching object.

mod immutable_path;
mod labels;
mod pop;
#[cfg(test)]
mod retract_test;

pub use immutable_path::Path;
pub use labels::Labels;
pub use pop::{Pop, Popped};
