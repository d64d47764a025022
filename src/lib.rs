//! # pathweave
//!
//! Lazy graph traversal core: persistent traversal paths, pull-based steps and composable
//! strategies that intercept graph operations.
//!
//! ## Architecture
//!
//! - [path]: the immutable, structurally shared [Path](path::Path) every traverser carries.
//! - [structure]: the element model and the base [Graph](structure::Graph) contract, with the
//!   in-memory [MemoryGraph](structure::MemoryGraph).
//! - [strategy]: [StrategyGraph](strategy::StrategyGraph) routes every operation through a
//!   [GraphStrategy](strategy::GraphStrategy); [SequenceStrategy](strategy::SequenceStrategy)
//!   composes several of them, the first one outermost.
//! - [process]: [Step](process::Step)s pulled one [Traverser](process::Traverser) at a time,
//!   driven by a [Traversal](process::Traversal).
//! - [config]: defaults for base graphs, from JSON or the environment.

pub mod config;
pub mod error;
pub mod path;
pub mod process;
pub mod strategy;
pub mod structure;

pub use config::{Cardinality, GraphConfig};
pub use error::{GraphError, GraphResult, PathError, PathResult, TraversalError, TraversalResult};
pub use path::{Labels, Path, Pop};
pub use process::{Step, Traversal, Traverser};
pub use strategy::{GraphStrategy, SequenceStrategy, StrategyGraph};
pub use structure::{Graph, KeyValues, MemoryGraph, Value};
