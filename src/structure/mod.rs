//! Graph data model and the base graph contract.
//!
//! Storage adapters implement [Graph] and [Variables]. [MemoryGraph] is the in-memory
//! reference implementation.

mod element;
mod graph;
mod key_values;
#[cfg(test)]
mod key_values_test;
mod memory_graph;
mod value;

pub use element::{Direction, Edge, ElementId, Property, Vertex, VertexProperty};
pub use graph::{Graph, Variables};
pub use key_values::{KeyValues, t};
pub use memory_graph::{MemoryGraph, MemoryVariables};
pub use value::Value;
