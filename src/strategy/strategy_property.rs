//! Strategy-wrapped edge property.

use std::fmt;

use super::{Context, StrategyGraph, StrategyWrapped, base};
use crate::error::GraphResult;
use crate::structure::{Property, Value};

/// An edge property reached through a [StrategyGraph].
#[derive(Clone)]
pub struct StrategyProperty {
  property: Property,
  graph: StrategyGraph,
}

impl StrategyProperty {
  pub(crate) fn new(property: Property, graph: StrategyGraph) -> Self {
    Self { property, graph }
  }

  pub fn base_property(&self) -> &Property {
    &self.property
  }

  pub fn context(&self) -> Context<StrategyProperty> {
    Context::new(self.graph.base_graph().clone(), self.clone())
  }

  pub fn key(&self) -> GraphResult<String> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.property_key(&ctx), base::property_key(&ctx))(())
  }

  pub fn value(&self) -> GraphResult<Value> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.property_value(&ctx), base::property_value(&ctx))(())
  }

  pub fn remove(&self) -> GraphResult<()> {
    let ctx = self.context();
    self
      .graph
      .compose(|s| s.remove_property(&ctx), base::remove_property(&ctx))(())
  }
}

impl StrategyWrapped for StrategyProperty {
  fn strategy_graph(&self) -> &StrategyGraph {
    &self.graph
  }
}

impl PartialEq for StrategyProperty {
  fn eq(&self, other: &Self) -> bool {
    self.property == other.property
  }
}

impl fmt::Debug for StrategyProperty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "sp[{}]", self.property)
  }
}
