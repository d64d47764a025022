//! Native operations a storage backend provides.
//!
//! Strategies wrap exactly these calls. Implementations never see strategies: a
//! [StrategyGraph](crate::strategy::StrategyGraph) composes the active strategy around each
//! call before it reaches the backend.

use std::collections::{BTreeMap, BTreeSet};

use super::{Direction, Edge, ElementId, KeyValues, Property, Value, Vertex, VertexProperty};
use crate::error::{GraphError, GraphResult};

/// Base (unwrapped) graph.
pub trait Graph: Send + Sync {
  fn add_vertex(&self, key_values: KeyValues) -> GraphResult<Vertex>;

  /// Vertices with the given ids in the order given, skipping unknown ids.
  /// Every vertex when `ids` is empty.
  fn vertices(&self, ids: &[ElementId]) -> GraphResult<Vec<Vertex>>;

  /// Edges with the given ids in the order given, skipping unknown ids.
  /// Every edge when `ids` is empty.
  fn edges(&self, ids: &[ElementId]) -> GraphResult<Vec<Edge>>;

  fn add_edge(
    &self,
    out_vertex: ElementId,
    label: &str,
    in_vertex: ElementId,
    key_values: KeyValues,
  ) -> GraphResult<Edge>;

  /// Removes the vertex and its incident edges.
  fn remove_vertex(&self, id: ElementId) -> GraphResult<()>;

  fn remove_edge(&self, id: ElementId) -> GraphResult<()>;

  /// Properties of a vertex with any of `keys`, or all of them when `keys` is empty.
  fn vertex_properties(&self, id: ElementId, keys: &[String])
  -> GraphResult<Vec<VertexProperty>>;

  fn set_vertex_property(&self, id: ElementId, key: &str, value: Value)
  -> GraphResult<VertexProperty>;

  fn remove_vertex_property(&self, property: &VertexProperty) -> GraphResult<()>;

  /// Properties of an edge with any of `keys`, or all of them when `keys` is empty.
  fn edge_properties(&self, id: ElementId, keys: &[String]) -> GraphResult<Vec<Property>>;

  fn set_edge_property(&self, id: ElementId, key: &str, value: Value) -> GraphResult<Property>;

  fn remove_edge_property(&self, property: &Property) -> GraphResult<()>;

  /// Edges incident to a vertex, restricted to `labels` unless empty.
  fn vertex_edges(
    &self,
    id: ElementId,
    direction: Direction,
    labels: &[String],
  ) -> GraphResult<Vec<Edge>>;

  /// Endpoints of an edge: out vertex, in vertex, or both in that order.
  fn edge_vertices(&self, id: ElementId, direction: Direction) -> GraphResult<Vec<Vertex>>;

  fn variables(&self) -> &dyn Variables;

  fn close(&self) -> GraphResult<()>;

  /// Vertices adjacent through [Graph::vertex_edges].
  fn vertex_vertices(
    &self,
    id: ElementId,
    direction: Direction,
    labels: &[String],
  ) -> GraphResult<Vec<Vertex>> {
    let edges = self.vertex_edges(id, direction, labels)?;
    let mut adjacent = Vec::with_capacity(edges.len());
    for edge in edges {
      let other = match direction {
        Direction::Out => edge.in_vertex,
        Direction::In => edge.out_vertex,
        Direction::Both => edge.other_vertex(id),
      };
      let vertex = self
        .vertices(&[other])?
        .into_iter()
        .next()
        .ok_or(GraphError::VertexNotFound { id: other })?;
      adjacent.push(vertex);
    }
    Ok(adjacent)
  }

  fn vertex_keys(&self, id: ElementId) -> GraphResult<BTreeSet<String>> {
    Ok(
      self
        .vertex_properties(id, &[])?
        .into_iter()
        .map(|p| p.key)
        .collect(),
    )
  }

  /// First property with `key`.
  fn vertex_property(&self, id: ElementId, key: &str) -> GraphResult<Option<VertexProperty>> {
    Ok(
      self
        .vertex_properties(id, &[key.to_string()])?
        .into_iter()
        .next(),
    )
  }

  fn vertex_value(&self, id: ElementId, key: &str) -> GraphResult<Option<Value>> {
    Ok(self.vertex_property(id, key)?.map(|p| p.value))
  }

  fn vertex_values(&self, id: ElementId, keys: &[String]) -> GraphResult<Vec<Value>> {
    Ok(
      self
        .vertex_properties(id, keys)?
        .into_iter()
        .map(|p| p.value)
        .collect(),
    )
  }

  fn edge_keys(&self, id: ElementId) -> GraphResult<BTreeSet<String>> {
    Ok(
      self
        .edge_properties(id, &[])?
        .into_iter()
        .map(|p| p.key)
        .collect(),
    )
  }

  fn edge_property(&self, id: ElementId, key: &str) -> GraphResult<Option<Property>> {
    Ok(
      self
        .edge_properties(id, &[key.to_string()])?
        .into_iter()
        .next(),
    )
  }

  fn edge_value(&self, id: ElementId, key: &str) -> GraphResult<Option<Value>> {
    Ok(self.edge_property(id, key)?.map(|p| p.value))
  }

  fn edge_values(&self, id: ElementId, keys: &[String]) -> GraphResult<Vec<Value>> {
    Ok(
      self
        .edge_properties(id, keys)?
        .into_iter()
        .map(|p| p.value)
        .collect(),
    )
  }
}

/// Graph-level key/value variables.
pub trait Variables: Send + Sync {
  fn keys(&self) -> GraphResult<BTreeSet<String>>;

  fn get(&self, key: &str) -> GraphResult<Option<Value>>;

  fn set(&self, key: &str, value: Value) -> GraphResult<()>;

  fn remove(&self, key: &str) -> GraphResult<()>;

  fn as_map(&self) -> GraphResult<BTreeMap<String, Value>> {
    let mut map = BTreeMap::new();
    for key in self.keys()? {
      if let Some(value) = self.get(&key)? {
        map.insert(key, value);
      }
    }
    Ok(map)
  }
}
