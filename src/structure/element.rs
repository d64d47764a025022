//! Element handles returned by base graphs.
//!
//! These are plain data: the id and label of a vertex or edge plus, for properties, their key
//! and value. Reading anything else goes back through a [Graph](super::Graph).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Value;

/// Identifier shared by vertices, edges and vertex properties of one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<u64> for ElementId {
  fn from(id: u64) -> Self {
    ElementId(id)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vertex {
  pub id: ElementId,
  pub label: String,
}

impl fmt::Display for Vertex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "v[{}]", self.id)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
  pub id: ElementId,
  pub label: String,
  pub out_vertex: ElementId,
  pub in_vertex: ElementId,
}

impl Edge {
  /// The endpoint opposite `vertex`. For self-loops this is `vertex` itself.
  pub fn other_vertex(&self, vertex: ElementId) -> ElementId {
    if self.out_vertex == vertex {
      self.in_vertex
    } else {
      self.out_vertex
    }
  }
}

impl fmt::Display for Edge {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "e[{}][{}-{}->{}]",
      self.id, self.out_vertex, self.label, self.in_vertex
    )
  }
}

/// A property of a vertex. Vertices may hold several properties with the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexProperty {
  pub id: ElementId,
  pub vertex: ElementId,
  pub key: String,
  pub value: Value,
}

impl fmt::Display for VertexProperty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "vp[{}->{}]", self.key, self.value)
  }
}

/// A property of an edge. Keys are unique per edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
  pub element: ElementId,
  pub key: String,
  pub value: Value,
}

impl fmt::Display for Property {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "p[{}->{}]", self.key, self.value)
  }
}

/// Edge direction relative to a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Out,
  In,
  Both,
}

impl Direction {
  pub fn opposite(self) -> Direction {
    match self {
      Direction::Out => Direction::In,
      Direction::In => Direction::Out,
      Direction::Both => Direction::Both,
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Direction::Out => write!(f, "out"),
      Direction::In => write!(f, "in"),
      Direction::Both => write!(f, "both"),
    }
  }
}
