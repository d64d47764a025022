//! Strategy-wrapped vertex property.

use std::collections::BTreeSet;
use std::fmt;

use super::{Context, StrategyGraph, StrategyVertex, StrategyWrapped, base};
use crate::error::GraphResult;
use crate::structure::{ElementId, Value, VertexProperty};

/// A vertex property reached through a [StrategyGraph].
#[derive(Clone)]
pub struct StrategyVertexProperty {
  property: VertexProperty,
  graph: StrategyGraph,
}

impl StrategyVertexProperty {
  pub(crate) fn new(property: VertexProperty, graph: StrategyGraph) -> Self {
    Self { property, graph }
  }

  pub fn base_vertex_property(&self) -> &VertexProperty {
    &self.property
  }

  pub fn context(&self) -> Context<StrategyVertexProperty> {
    Context::new(self.graph.base_graph().clone(), self.clone())
  }

  pub fn id(&self) -> GraphResult<ElementId> {
    let ctx = self.context();
    self.graph.compose(
      |s| s.vertex_property_id(&ctx),
      base::vertex_property_id(&ctx),
    )(())
  }

  pub fn key(&self) -> GraphResult<String> {
    let ctx = self.context();
    self.graph.compose(
      |s| s.vertex_property_key(&ctx),
      base::vertex_property_key(&ctx),
    )(())
  }

  pub fn value(&self) -> GraphResult<Value> {
    let ctx = self.context();
    self.graph.compose(
      |s| s.vertex_property_value(&ctx),
      base::vertex_property_value(&ctx),
    )(())
  }

  /// Same as [key](Self::key) unless a strategy says otherwise.
  pub fn label(&self) -> GraphResult<String> {
    let ctx = self.context();
    self.graph.compose(
      |s| s.vertex_property_label(&ctx),
      base::vertex_property_label(&ctx),
    )(())
  }

  pub fn graph(&self) -> GraphResult<StrategyGraph> {
    let ctx = self.context();
    self.graph.compose(
      |s| s.vertex_property_graph(&ctx),
      base::vertex_property_graph(&ctx),
    )(())
  }

  pub fn keys(&self) -> GraphResult<BTreeSet<String>> {
    let ctx = self.context();
    self.graph.compose(
      |s| s.vertex_property_keys(&ctx),
      base::vertex_property_keys(&ctx),
    )(())
  }

  /// The vertex owning this property.
  pub fn element(&self) -> GraphResult<StrategyVertex> {
    let ctx = self.context();
    let vertex = self.graph.compose(
      |s| s.vertex_property_element(&ctx),
      base::vertex_property_element(&ctx),
    )(())?;
    Ok(self.graph.wrap_vertex(vertex))
  }

  pub fn remove(&self) -> GraphResult<()> {
    let ctx = self.context();
    self.graph.compose(
      |s| s.remove_vertex_property(&ctx),
      base::remove_vertex_property(&ctx),
    )(())
  }
}

impl StrategyWrapped for StrategyVertexProperty {
  fn strategy_graph(&self) -> &StrategyGraph {
    &self.graph
  }
}

impl PartialEq for StrategyVertexProperty {
  fn eq(&self, other: &Self) -> bool {
    self.property == other.property
  }
}

impl fmt::Debug for StrategyVertexProperty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "svp[{}]", self.property)
  }
}
