//! Interception of graph operations by composable strategies.
//!
//! A [StrategyGraph] wraps a base [Graph](crate::structure::Graph). Each operation on it, or
//! on an element reached through it, asks the active [GraphStrategy] for a [Transform] of
//! that operation, applies it to the native handler from [base] and runs the result.
//! [SequenceStrategy] chains several strategies, the first one outermost.

pub mod base;
mod context;
mod graph_strategy;
mod handler;
mod sequence_strategy;
#[cfg(test)]
mod sequence_strategy_test;
mod strategy_edge;
mod strategy_graph;
mod strategy_property;
mod strategy_variables;
mod strategy_vertex;
mod strategy_vertex_property;

pub use context::{Context, StrategyWrapped};
pub use graph_strategy::{GraphStrategy, Operation};
pub use handler::{Handler, Transform, chain, handler, identity, transform};
pub use sequence_strategy::SequenceStrategy;
pub use strategy_edge::StrategyEdge;
pub use strategy_graph::{Strategy, StrategyGraph};
pub use strategy_property::StrategyProperty;
pub use strategy_variables::StrategyVariables;
pub use strategy_vertex::StrategyVertex;
pub use strategy_vertex_property::StrategyVertexProperty;
