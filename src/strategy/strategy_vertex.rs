//! Strategy-wrapped vertex.

use std::collections::BTreeSet;
use std::fmt;

use tracing::instrument;

use super::{
  Context, StrategyEdge, StrategyGraph, StrategyVertexProperty, StrategyWrapped, base,
};
use crate::error::GraphResult;
use crate::structure::{Direction, ElementId, KeyValues, Value, Vertex};

/// A vertex reached through a [StrategyGraph]. Every accessor runs through the strategy.
#[derive(Clone)]
pub struct StrategyVertex {
  vertex: Vertex,
  graph: StrategyGraph,
}

impl StrategyVertex {
  pub(crate) fn new(vertex: Vertex, graph: StrategyGraph) -> Self {
    Self { vertex, graph }
  }

  /// The unwrapped vertex handle. Use with [Context::base_graph] to bypass strategies.
  pub fn base_vertex(&self) -> &Vertex {
    &self.vertex
  }

  pub fn context(&self) -> Context<StrategyVertex> {
    Context::new(self.graph.base_graph().clone(), self.clone())
  }

  pub fn id(&self) -> GraphResult<ElementId> {
    let ctx = self.context();
    self.graph.compose(|s| s.vertex_id(&ctx), base::vertex_id(&ctx))(())
  }

  pub fn label(&self) -> GraphResult<String> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.vertex_label(&ctx), base::vertex_label(&ctx))(())
  }

  pub fn graph(&self) -> GraphResult<StrategyGraph> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.vertex_graph(&ctx), base::vertex_graph(&ctx))(())
  }

  pub fn keys(&self) -> GraphResult<BTreeSet<String>> {
    let ctx = self.context();
    self.graph.compose(|s| s.vertex_keys(&ctx), base::vertex_keys(&ctx))(())
  }

  /// First property with `key`, if any.
  pub fn property(&self, key: &str) -> GraphResult<Option<StrategyVertexProperty>> {
    let ctx = self.context();
    let property = self.graph.compose(
      |s| s.vertex_get_property(&ctx),
      base::vertex_get_property(&ctx),
    )(key.to_string())?;
    Ok(property.map(|p| StrategyVertexProperty::new(p, self.graph.clone())))
  }

  /// Sets a property. Whether it replaces or adds to existing values depends on the graph.
  #[instrument(level = "trace", skip(self, value))]
  pub fn set_property(
    &self,
    key: &str,
    value: impl Into<Value>,
  ) -> GraphResult<StrategyVertexProperty> {
    let ctx = self.context();
    let property = self
      .graph
      .compose(|s| s.vertex_property(&ctx), base::vertex_property(&ctx))((
      key.to_string(),
      value.into(),
    ))?;
    Ok(StrategyVertexProperty::new(property, self.graph.clone()))
  }

  pub fn value(&self, key: &str) -> GraphResult<Option<Value>> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.vertex_value(&ctx), base::vertex_value(&ctx))(key.to_string())
  }

  /// Properties with any of `keys`, or all of them when `keys` is empty.
  pub fn properties(&self, keys: &[&str]) -> GraphResult<Vec<StrategyVertexProperty>> {
    let ctx = self.context();
    let properties = self.graph.compose(
      |s| s.vertex_properties(&ctx),
      base::vertex_properties(&ctx),
    )(owned(keys))?;
    Ok(
      properties
        .into_iter()
        .map(|p| StrategyVertexProperty::new(p, self.graph.clone()))
        .collect(),
    )
  }

  /// Values with any of `keys`, or all of them when `keys` is empty.
  pub fn values(&self, keys: &[&str]) -> GraphResult<Vec<Value>> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.vertex_values(&ctx), base::vertex_values(&ctx))(owned(keys))
  }

  /// Adjacent vertices, through edges with any of `labels` (all edges when empty).
  pub fn vertices(&self, direction: Direction, labels: &[&str]) -> GraphResult<Vec<StrategyVertex>> {
    let ctx = self.context();
    let vertices = self
      .graph
      .compose(|s| s.vertex_vertices(&ctx), base::vertex_vertices(&ctx))((
      direction,
      owned(labels),
    ))?;
    Ok(
      vertices
        .into_iter()
        .map(|v| self.graph.wrap_vertex(v))
        .collect(),
    )
  }

  /// Incident edges with any of `labels` (all edges when empty).
  pub fn edges(&self, direction: Direction, labels: &[&str]) -> GraphResult<Vec<StrategyEdge>> {
    let ctx = self.context();
    let edges = self
      .graph
      .compose(|s| s.vertex_edges(&ctx), base::vertex_edges(&ctx))((
      direction,
      owned(labels),
    ))?;
    Ok(edges.into_iter().map(|e| self.graph.wrap_edge(e)).collect())
  }

  /// Adds an edge from this vertex to `in_vertex`.
  #[instrument(level = "trace", skip(self, in_vertex, key_values))]
  pub fn add_edge(
    &self,
    label: &str,
    in_vertex: &StrategyVertex,
    key_values: KeyValues,
  ) -> GraphResult<StrategyEdge> {
    let ctx = self.context();
    let edge = self
      .graph
      .compose(|s| s.add_edge(&ctx), base::add_edge(&ctx))((
      label.to_string(),
      in_vertex.vertex.clone(),
      key_values,
    ))?;
    Ok(self.graph.wrap_edge(edge))
  }

  #[instrument(level = "trace", skip(self))]
  pub fn remove(&self) -> GraphResult<()> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.remove_vertex(&ctx), base::remove_vertex(&ctx))(())
  }
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

impl StrategyWrapped for StrategyVertex {
  fn strategy_graph(&self) -> &StrategyGraph {
    &self.graph
  }
}

impl PartialEq for StrategyVertex {
  fn eq(&self, other: &Self) -> bool {
    self.vertex == other.vertex
  }
}

impl Eq for StrategyVertex {}

impl fmt::Debug for StrategyVertex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "sv[{}]", self.vertex)
  }
}

impl fmt::Display for StrategyVertex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.vertex)
  }
}
