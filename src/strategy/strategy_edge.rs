//! Strategy-wrapped edge.

use std::collections::BTreeSet;
use std::fmt;

use tracing::instrument;

use super::strategy_vertex::owned;
use super::{Context, StrategyGraph, StrategyProperty, StrategyVertex, StrategyWrapped, base};
use crate::error::GraphResult;
use crate::structure::{Direction, Edge, ElementId, Value};

/// An edge reached through a [StrategyGraph].
#[derive(Clone)]
pub struct StrategyEdge {
  edge: Edge,
  graph: StrategyGraph,
}

impl StrategyEdge {
  pub(crate) fn new(edge: Edge, graph: StrategyGraph) -> Self {
    Self { edge, graph }
  }

  pub fn base_edge(&self) -> &Edge {
    &self.edge
  }

  pub fn context(&self) -> Context<StrategyEdge> {
    Context::new(self.graph.base_graph().clone(), self.clone())
  }

  pub fn id(&self) -> GraphResult<ElementId> {
    let ctx = self.context();
    self.graph.compose(|s| s.edge_id(&ctx), base::edge_id(&ctx))(())
  }

  pub fn label(&self) -> GraphResult<String> {
    let ctx = self.context();
    self.graph.compose(|s| s.edge_label(&ctx), base::edge_label(&ctx))(())
  }

  pub fn graph(&self) -> GraphResult<StrategyGraph> {
    let ctx = self.context();
    self.graph.compose(|s| s.edge_graph(&ctx), base::edge_graph(&ctx))(())
  }

  pub fn keys(&self) -> GraphResult<BTreeSet<String>> {
    let ctx = self.context();
    self.graph.compose(|s| s.edge_keys(&ctx), base::edge_keys(&ctx))(())
  }

  pub fn property(&self, key: &str) -> GraphResult<Option<StrategyProperty>> {
    let ctx = self.context();
    let property = self.graph.compose(
      |s| s.edge_get_property(&ctx),
      base::edge_get_property(&ctx),
    )(key.to_string())?;
    Ok(property.map(|p| StrategyProperty::new(p, self.graph.clone())))
  }

  /// Sets a property, replacing any value under `key`.
  #[instrument(level = "trace", skip(self, value))]
  pub fn set_property(&self, key: &str, value: impl Into<Value>) -> GraphResult<StrategyProperty> {
    let ctx = self.context();
    let property = self
      .graph
      .compose(|s| s.edge_property(&ctx), base::edge_property(&ctx))((
      key.to_string(),
      value.into(),
    ))?;
    Ok(StrategyProperty::new(property, self.graph.clone()))
  }

  pub fn value(&self, key: &str) -> GraphResult<Option<Value>> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.edge_value(&ctx), base::edge_value(&ctx))(key.to_string())
  }

  pub fn properties(&self, keys: &[&str]) -> GraphResult<Vec<StrategyProperty>> {
    let ctx = self.context();
    let properties = self
      .graph
      .compose(|s| s.edge_properties(&ctx), base::edge_properties(&ctx))(owned(keys))?;
    Ok(
      properties
        .into_iter()
        .map(|p| StrategyProperty::new(p, self.graph.clone()))
        .collect(),
    )
  }

  pub fn values(&self, keys: &[&str]) -> GraphResult<Vec<Value>> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.edge_values(&ctx), base::edge_values(&ctx))(owned(keys))
  }

  /// Out vertex, in vertex, or both in that order.
  pub fn vertices(&self, direction: Direction) -> GraphResult<Vec<StrategyVertex>> {
    let ctx = self.context();
    let vertices = self
      .graph
      .compose(|s| s.edge_vertices(&ctx), base::edge_vertices(&ctx))(direction)?;
    Ok(
      vertices
        .into_iter()
        .map(|v| self.graph.wrap_vertex(v))
        .collect(),
    )
  }

  #[instrument(level = "trace", skip(self))]
  pub fn remove(&self) -> GraphResult<()> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.remove_edge(&ctx), base::remove_edge(&ctx))(())
  }
}

impl StrategyWrapped for StrategyEdge {
  fn strategy_graph(&self) -> &StrategyGraph {
    &self.graph
  }
}

impl PartialEq for StrategyEdge {
  fn eq(&self, other: &Self) -> bool {
    self.edge == other.edge
  }
}

impl Eq for StrategyEdge {}

impl fmt::Debug for StrategyEdge {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "se[{}]", self.edge)
  }
}
