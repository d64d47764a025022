//! Ordered composition of strategies.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, instrument};

use super::{
  Context, GraphStrategy, StrategyEdge, StrategyGraph, StrategyProperty, StrategyVariables,
  StrategyVertex, StrategyVertexProperty, Transform, chain,
};
use crate::structure::{Direction, Edge, ElementId, KeyValues, Property, Value, Vertex, VertexProperty};

/// A list of strategies applied in insertion order.
///
/// For `[s1, s2, s3]` every operation runs `s1`'s handler first, which calls `s2`'s, which
/// calls `s3`'s, which calls the handler the sequence was applied to. The empty sequence
/// leaves every operation untouched.
///
/// Clones share the same list: a strategy [added](SequenceStrategy::add) through any clone is
/// seen by every composition made afterwards. The list is snapshotted per composition, so a
/// chain already built is never affected.
#[derive(Clone, Default)]
pub struct SequenceStrategy {
  strategies: Arc<RwLock<Vec<Arc<dyn GraphStrategy>>>>,
}

impl SequenceStrategy {
  pub fn new(strategies: Vec<Arc<dyn GraphStrategy>>) -> Self {
    Self {
      strategies: Arc::new(RwLock::new(strategies)),
    }
  }

  /// Appends `strategy`, making it the innermost of the sequence.
  pub fn add(&self, strategy: impl GraphStrategy + 'static) {
    self.add_shared(Arc::new(strategy));
  }

  pub fn add_shared(&self, strategy: Arc<dyn GraphStrategy>) {
    debug!(strategy = strategy.name(), "adding strategy to sequence");
    self
      .strategies
      .write()
      .unwrap_or_else(PoisonError::into_inner)
      .push(strategy);
  }

  pub fn len(&self) -> usize {
    self.snapshot().len()
  }

  pub fn is_empty(&self) -> bool {
    self.snapshot().is_empty()
  }

  fn snapshot(&self) -> Vec<Arc<dyn GraphStrategy>> {
    self
      .strategies
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .clone()
  }

  /// Asks every member for its transform of one operation and chains them, first member
  /// outermost.
  #[instrument(level = "trace", skip_all)]
  fn compose<A: 'static, R: 'static>(
    &self,
    hook: impl Fn(&dyn GraphStrategy) -> Transform<A, R>,
  ) -> Transform<A, R> {
    let transforms: Vec<Transform<A, R>> = self
      .snapshot()
      .iter()
      .map(|strategy| hook(strategy.as_ref()))
      .collect();
    Box::new(move |base| chain(transforms, base))
  }
}

/// Builds a sequence from strategies of mixed types.
#[macro_export]
macro_rules! sequence {
  ($($strategy:expr),* $(,)?) => {
    $crate::strategy::SequenceStrategy::new(vec![
      $(::std::sync::Arc::new($strategy) as ::std::sync::Arc<dyn $crate::strategy::GraphStrategy>),*
    ])
  };
}

impl fmt::Debug for SequenceStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list()
      .entries(self.snapshot().iter().map(|s| s.name()))
      .finish()
  }
}

impl GraphStrategy for SequenceStrategy {
  fn add_vertex(&self, ctx: &Context<StrategyGraph>) -> Transform<KeyValues, Option<Vertex>> {
    self.compose(|s| s.add_vertex(ctx))
  }

  fn graph_vertices(&self, ctx: &Context<StrategyGraph>) -> Transform<Vec<ElementId>, Vec<Vertex>> {
    self.compose(|s| s.graph_vertices(ctx))
  }

  fn graph_edges(&self, ctx: &Context<StrategyGraph>) -> Transform<Vec<ElementId>, Vec<Edge>> {
    self.compose(|s| s.graph_edges(ctx))
  }

  fn graph_close(&self, ctx: &Context<StrategyGraph>) -> Transform<(), ()> {
    self.compose(|s| s.graph_close(ctx))
  }

  fn add_edge(
    &self,
    ctx: &Context<StrategyVertex>,
  ) -> Transform<(String, Vertex, KeyValues), Edge> {
    self.compose(|s| s.add_edge(ctx))
  }

  fn remove_vertex(&self, ctx: &Context<StrategyVertex>) -> Transform<(), ()> {
    self.compose(|s| s.remove_vertex(ctx))
  }

  fn vertex_get_property(
    &self,
    ctx: &Context<StrategyVertex>,
  ) -> Transform<String, Option<VertexProperty>> {
    self.compose(|s| s.vertex_get_property(ctx))
  }

  fn vertex_property(
    &self,
    ctx: &Context<StrategyVertex>,
  ) -> Transform<(String, Value), VertexProperty> {
    self.compose(|s| s.vertex_property(ctx))
  }

  fn vertex_id(&self, ctx: &Context<StrategyVertex>) -> Transform<(), ElementId> {
    self.compose(|s| s.vertex_id(ctx))
  }

  fn vertex_graph(&self, ctx: &Context<StrategyVertex>) -> Transform<(), StrategyGraph> {
    self.compose(|s| s.vertex_graph(ctx))
  }

  fn vertex_label(&self, ctx: &Context<StrategyVertex>) -> Transform<(), String> {
    self.compose(|s| s.vertex_label(ctx))
  }

  fn vertex_keys(&self, ctx: &Context<StrategyVertex>) -> Transform<(), BTreeSet<String>> {
    self.compose(|s| s.vertex_keys(ctx))
  }

  fn vertex_value(&self, ctx: &Context<StrategyVertex>) -> Transform<String, Option<Value>> {
    self.compose(|s| s.vertex_value(ctx))
  }

  fn vertex_properties(
    &self,
    ctx: &Context<StrategyVertex>,
  ) -> Transform<Vec<String>, Vec<VertexProperty>> {
    self.compose(|s| s.vertex_properties(ctx))
  }

  fn vertex_values(&self, ctx: &Context<StrategyVertex>) -> Transform<Vec<String>, Vec<Value>> {
    self.compose(|s| s.vertex_values(ctx))
  }

  fn vertex_vertices(
    &self,
    ctx: &Context<StrategyVertex>,
  ) -> Transform<(Direction, Vec<String>), Vec<Vertex>> {
    self.compose(|s| s.vertex_vertices(ctx))
  }

  fn vertex_edges(
    &self,
    ctx: &Context<StrategyVertex>,
  ) -> Transform<(Direction, Vec<String>), Vec<Edge>> {
    self.compose(|s| s.vertex_edges(ctx))
  }

  fn remove_edge(&self, ctx: &Context<StrategyEdge>) -> Transform<(), ()> {
    self.compose(|s| s.remove_edge(ctx))
  }

  fn edge_get_property(&self, ctx: &Context<StrategyEdge>) -> Transform<String, Option<Property>> {
    self.compose(|s| s.edge_get_property(ctx))
  }

  fn edge_property(&self, ctx: &Context<StrategyEdge>) -> Transform<(String, Value), Property> {
    self.compose(|s| s.edge_property(ctx))
  }

  fn edge_id(&self, ctx: &Context<StrategyEdge>) -> Transform<(), ElementId> {
    self.compose(|s| s.edge_id(ctx))
  }

  fn edge_graph(&self, ctx: &Context<StrategyEdge>) -> Transform<(), StrategyGraph> {
    self.compose(|s| s.edge_graph(ctx))
  }

  fn edge_label(&self, ctx: &Context<StrategyEdge>) -> Transform<(), String> {
    self.compose(|s| s.edge_label(ctx))
  }

  fn edge_keys(&self, ctx: &Context<StrategyEdge>) -> Transform<(), BTreeSet<String>> {
    self.compose(|s| s.edge_keys(ctx))
  }

  fn edge_value(&self, ctx: &Context<StrategyEdge>) -> Transform<String, Option<Value>> {
    self.compose(|s| s.edge_value(ctx))
  }

  fn edge_properties(&self, ctx: &Context<StrategyEdge>) -> Transform<Vec<String>, Vec<Property>> {
    self.compose(|s| s.edge_properties(ctx))
  }

  fn edge_values(&self, ctx: &Context<StrategyEdge>) -> Transform<Vec<String>, Vec<Value>> {
    self.compose(|s| s.edge_values(ctx))
  }

  fn edge_vertices(&self, ctx: &Context<StrategyEdge>) -> Transform<Direction, Vec<Vertex>> {
    self.compose(|s| s.edge_vertices(ctx))
  }

  fn remove_vertex_property(&self, ctx: &Context<StrategyVertexProperty>) -> Transform<(), ()> {
    self.compose(|s| s.remove_vertex_property(ctx))
  }

  fn vertex_property_id(&self, ctx: &Context<StrategyVertexProperty>) -> Transform<(), ElementId> {
    self.compose(|s| s.vertex_property_id(ctx))
  }

  fn vertex_property_key(&self, ctx: &Context<StrategyVertexProperty>) -> Transform<(), String> {
    self.compose(|s| s.vertex_property_key(ctx))
  }

  fn vertex_property_value(&self, ctx: &Context<StrategyVertexProperty>) -> Transform<(), Value> {
    self.compose(|s| s.vertex_property_value(ctx))
  }

  fn vertex_property_element(
    &self,
    ctx: &Context<StrategyVertexProperty>,
  ) -> Transform<(), Vertex> {
    self.compose(|s| s.vertex_property_element(ctx))
  }

  fn vertex_property_label(&self, ctx: &Context<StrategyVertexProperty>) -> Transform<(), String> {
    self.compose(|s| s.vertex_property_label(ctx))
  }

  fn vertex_property_graph(
    &self,
    ctx: &Context<StrategyVertexProperty>,
  ) -> Transform<(), StrategyGraph> {
    self.compose(|s| s.vertex_property_graph(ctx))
  }

  fn vertex_property_keys(
    &self,
    ctx: &Context<StrategyVertexProperty>,
  ) -> Transform<(), BTreeSet<String>> {
    self.compose(|s| s.vertex_property_keys(ctx))
  }

  fn remove_property(&self, ctx: &Context<StrategyProperty>) -> Transform<(), ()> {
    self.compose(|s| s.remove_property(ctx))
  }

  fn property_key(&self, ctx: &Context<StrategyProperty>) -> Transform<(), String> {
    self.compose(|s| s.property_key(ctx))
  }

  fn property_value(&self, ctx: &Context<StrategyProperty>) -> Transform<(), Value> {
    self.compose(|s| s.property_value(ctx))
  }

  fn variable_keys(&self, ctx: &Context<StrategyVariables>) -> Transform<(), BTreeSet<String>> {
    self.compose(|s| s.variable_keys(ctx))
  }

  fn variable_get(&self, ctx: &Context<StrategyVariables>) -> Transform<String, Option<Value>> {
    self.compose(|s| s.variable_get(ctx))
  }

  fn variable_set(&self, ctx: &Context<StrategyVariables>) -> Transform<(String, Value), ()> {
    self.compose(|s| s.variable_set(ctx))
  }

  fn variable_remove(&self, ctx: &Context<StrategyVariables>) -> Transform<String, ()> {
    self.compose(|s| s.variable_remove(ctx))
  }

  fn variable_as_map(
    &self,
    ctx: &Context<StrategyVariables>,
  ) -> Transform<(), BTreeMap<String, Value>> {
    self.compose(|s| s.variable_as_map(ctx))
  }
}
