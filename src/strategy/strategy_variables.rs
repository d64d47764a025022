//! Strategy-wrapped graph variables.

use std::collections::{BTreeMap, BTreeSet};

use tracing::instrument;

use super::{Context, StrategyGraph, StrategyWrapped, base};
use crate::error::GraphResult;
use crate::structure::Value;

/// The variables of a [StrategyGraph]. Every call runs through the strategy.
#[derive(Clone, Debug)]
pub struct StrategyVariables {
  graph: StrategyGraph,
}

impl StrategyVariables {
  pub(crate) fn new(graph: StrategyGraph) -> Self {
    Self { graph }
  }

  pub fn context(&self) -> Context<StrategyVariables> {
    Context::new(self.graph.base_graph().clone(), self.clone())
  }

  pub fn keys(&self) -> GraphResult<BTreeSet<String>> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.variable_keys(&ctx), base::variable_keys(&ctx))(())
  }

  pub fn get(&self, key: &str) -> GraphResult<Option<Value>> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.variable_get(&ctx), base::variable_get(&ctx))(key.to_string())
  }

  #[instrument(level = "trace", skip(self, value))]
  pub fn set(&self, key: &str, value: impl Into<Value>) -> GraphResult<()> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.variable_set(&ctx), base::variable_set(&ctx))((
      key.to_string(),
      value.into(),
    ))
  }

  pub fn remove(&self, key: &str) -> GraphResult<()> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.variable_remove(&ctx), base::variable_remove(&ctx))(key.to_string())
  }

  pub fn as_map(&self) -> GraphResult<BTreeMap<String, Value>> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.variable_as_map(&ctx), base::variable_as_map(&ctx))(())
  }
}

impl StrategyWrapped for StrategyVariables {
  fn strategy_graph(&self) -> &StrategyGraph {
    &self.graph
  }
}
