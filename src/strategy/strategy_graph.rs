//! A graph whose every operation runs through the active strategy.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, instrument};

use super::{
  Context, GraphStrategy, Handler, SequenceStrategy, StrategyEdge, StrategyVariables,
  StrategyVertex, StrategyWrapped, Transform, base,
};
use crate::error::GraphResult;
use crate::structure::{Edge, ElementId, Graph, KeyValues, Vertex};

/// Holds the [GraphStrategy] of a [StrategyGraph]. Replacing it affects every later call.
pub struct Strategy {
  graph_strategy: RwLock<Arc<dyn GraphStrategy>>,
}

impl Strategy {
  fn new(graph_strategy: Arc<dyn GraphStrategy>) -> Self {
    Self {
      graph_strategy: RwLock::new(graph_strategy),
    }
  }

  pub fn graph_strategy(&self) -> Arc<dyn GraphStrategy> {
    Arc::clone(
      &self
        .graph_strategy
        .read()
        .unwrap_or_else(PoisonError::into_inner),
    )
  }

  pub fn set_graph_strategy(&self, strategy: impl GraphStrategy + 'static) {
    self.set_shared(Arc::new(strategy));
  }

  pub fn set_shared(&self, strategy: Arc<dyn GraphStrategy>) {
    debug!(strategy = strategy.name(), "setting graph strategy");
    *self
      .graph_strategy
      .write()
      .unwrap_or_else(PoisonError::into_inner) = strategy;
  }

  /// Resets to the empty sequence.
  pub fn clear(&self) {
    self.set_graph_strategy(SequenceStrategy::default());
  }
}

struct Inner {
  base: Arc<dyn Graph>,
  strategy: Strategy,
}

/// Wraps a base [Graph] and routes every operation on it, and on every vertex, edge,
/// property and variable reached through it, through [Strategy::graph_strategy].
///
/// Cheap to clone; clones share the base graph and the strategy.
#[derive(Clone)]
pub struct StrategyGraph {
  inner: Arc<Inner>,
}

impl StrategyGraph {
  /// Wraps `base` with the empty sequence, under which every call behaves natively.
  pub fn new(base: Arc<dyn Graph>) -> Self {
    Self::with_strategy(base, SequenceStrategy::default())
  }

  pub fn with_strategy(base: Arc<dyn Graph>, strategy: impl GraphStrategy + 'static) -> Self {
    Self {
      inner: Arc::new(Inner {
        base,
        strategy: Strategy::new(Arc::new(strategy)),
      }),
    }
  }

  pub fn strategy(&self) -> &Strategy {
    &self.inner.strategy
  }

  pub fn base_graph(&self) -> &Arc<dyn Graph> {
    &self.inner.base
  }

  /// Context for graph-level hooks.
  pub fn graph_context(&self) -> Context<StrategyGraph> {
    Context::new(Arc::clone(&self.inner.base), self.clone())
  }

  pub fn ptr_eq(&self, other: &StrategyGraph) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }

  /// Runs the active strategy's transform of one operation around `base`.
  pub(crate) fn compose<A: 'static, R: 'static>(
    &self,
    hook: impl FnOnce(&dyn GraphStrategy) -> Transform<A, R>,
    base: Handler<A, R>,
  ) -> Handler<A, R> {
    let strategy = self.inner.strategy.graph_strategy();
    hook(strategy.as_ref())(base)
  }

  /// Adds a vertex. `Ok(None)` when a strategy short-circuited the call without a result.
  #[instrument(level = "trace", skip(self, key_values))]
  pub fn add_vertex(&self, key_values: KeyValues) -> GraphResult<Option<StrategyVertex>> {
    let ctx = self.graph_context();
    let vertex = self.compose(|s| s.add_vertex(&ctx), base::add_vertex(&ctx))(key_values)?;
    Ok(vertex.map(|v| self.wrap_vertex(v)))
  }

  /// Vertices by id, or all of them when `ids` is empty.
  #[instrument(level = "trace", skip(self))]
  pub fn vertices(&self, ids: &[ElementId]) -> GraphResult<Vec<StrategyVertex>> {
    let ctx = self.graph_context();
    let vertices =
      self.compose(|s| s.graph_vertices(&ctx), base::graph_vertices(&ctx))(ids.to_vec())?;
    Ok(vertices.into_iter().map(|v| self.wrap_vertex(v)).collect())
  }

  /// Edges by id, or all of them when `ids` is empty.
  #[instrument(level = "trace", skip(self))]
  pub fn edges(&self, ids: &[ElementId]) -> GraphResult<Vec<StrategyEdge>> {
    let ctx = self.graph_context();
    let edges = self.compose(|s| s.graph_edges(&ctx), base::graph_edges(&ctx))(ids.to_vec())?;
    Ok(edges.into_iter().map(|e| self.wrap_edge(e)).collect())
  }

  pub fn variables(&self) -> StrategyVariables {
    StrategyVariables::new(self.clone())
  }

  #[instrument(level = "trace", skip(self))]
  pub fn close(&self) -> GraphResult<()> {
    let ctx = self.graph_context();
    self.compose(|s| s.graph_close(&ctx), base::graph_close(&ctx))(())
  }

  pub fn wrap_vertex(&self, vertex: Vertex) -> StrategyVertex {
    StrategyVertex::new(vertex, self.clone())
  }

  pub fn wrap_edge(&self, edge: Edge) -> StrategyEdge {
    StrategyEdge::new(edge, self.clone())
  }
}

impl StrategyWrapped for StrategyGraph {
  fn strategy_graph(&self) -> &StrategyGraph {
    self
  }
}

impl fmt::Debug for StrategyGraph {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "strategygraph[{}]",
      self.inner.strategy.graph_strategy().name()
    )
  }
}
