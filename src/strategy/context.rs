//! Per-call context handed to strategy hooks.

use std::sync::Arc;

use super::StrategyGraph;
use crate::structure::Graph;

/// Implemented by every strategy-wrapped type so a hook can reach the owning graph.
pub trait StrategyWrapped {
  fn strategy_graph(&self) -> &StrategyGraph;
}

/// The base graph and the wrapped instance a call originated from.
///
/// Built fresh for every call and never mutated.
#[derive(Clone)]
pub struct Context<C> {
  base_graph: Arc<dyn Graph>,
  current: C,
}

impl<C> Context<C> {
  pub fn new(base_graph: Arc<dyn Graph>, current: C) -> Self {
    Self {
      base_graph,
      current,
    }
  }

  /// The unwrapped graph. Calls made through it bypass every strategy.
  pub fn base_graph(&self) -> &Arc<dyn Graph> {
    &self.base_graph
  }

  /// The wrapped graph, vertex, edge, property or variables the call was made on.
  pub fn current(&self) -> &C {
    &self.current
  }
}

impl<C: StrategyWrapped> Context<C> {
  pub fn strategy_graph(&self) -> &StrategyGraph {
    self.current.strategy_graph()
  }
}
