//! Element predicates used by `has` filters and graph steps.

use std::fmt;

use super::{Filter, Traverser};
use crate::error::{GraphResult, TraversalError, TraversalResult};
use crate::strategy::{StrategyEdge, StrategyGraph, StrategyVertex};
use crate::structure::{ElementId, Value};

/// What a [HasContainer] inspects.
#[derive(Debug, Clone, PartialEq)]
pub enum HasKey {
  Id,
  Label,
  Property(String),
}

/// How the inspected value is compared.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
  Eq(Value),
  Neq(Value),
  Within(Vec<Value>),
  /// The property is present, whatever its value.
  Exists,
}

impl Predicate {
  fn test(&self, value: &Value) -> bool {
    match self {
      Predicate::Eq(expected) => value == expected,
      Predicate::Neq(expected) => value != expected,
      Predicate::Within(values) => values.contains(value),
      Predicate::Exists => true,
    }
  }
}

impl fmt::Display for Predicate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Predicate::Eq(v) => write!(f, "eq({})", v),
      Predicate::Neq(v) => write!(f, "neq({})", v),
      Predicate::Within(vs) => write!(f, "within({})", Value::List(vs.clone())),
      Predicate::Exists => write!(f, "exists"),
    }
  }
}

/// One `has` condition on a vertex or edge.
///
/// Property conditions hold when any value under the key satisfies the predicate; an element
/// without the key never satisfies one.
#[derive(Debug, Clone, PartialEq)]
pub struct HasContainer {
  pub key: HasKey,
  pub predicate: Predicate,
}

impl HasContainer {
  pub fn new(key: HasKey, predicate: Predicate) -> Self {
    Self { key, predicate }
  }

  /// `key == value`.
  pub fn property(key: impl Into<String>, value: impl Into<Value>) -> Self {
    Self::new(HasKey::Property(key.into()), Predicate::Eq(value.into()))
  }

  pub fn exists(key: impl Into<String>) -> Self {
    Self::new(HasKey::Property(key.into()), Predicate::Exists)
  }

  pub fn label(label: impl Into<String>) -> Self {
    Self::new(HasKey::Label, Predicate::Eq(Value::String(label.into())))
  }

  pub fn ids(ids: &[ElementId]) -> Self {
    Self::new(
      HasKey::Id,
      Predicate::Within(ids.iter().map(|id| id_value(*id)).collect()),
    )
  }

  pub fn test_vertex(&self, vertex: &StrategyVertex) -> GraphResult<bool> {
    match &self.key {
      HasKey::Id => Ok(self.predicate.test(&id_value(vertex.id()?))),
      HasKey::Label => Ok(self.predicate.test(&Value::String(vertex.label()?))),
      HasKey::Property(key) => Ok(self.test_values(&vertex.values(&[key.as_str()])?)),
    }
  }

  pub fn test_edge(&self, edge: &StrategyEdge) -> GraphResult<bool> {
    match &self.key {
      HasKey::Id => Ok(self.predicate.test(&id_value(edge.id()?))),
      HasKey::Label => Ok(self.predicate.test(&Value::String(edge.label()?))),
      HasKey::Property(key) => Ok(self.test_values(&edge.values(&[key.as_str()])?)),
    }
  }

  fn test_values(&self, values: &[Value]) -> bool {
    values.iter().any(|v| self.predicate.test(v))
  }

  /// True when `vertex` satisfies every container.
  pub fn test_all_vertex(containers: &[HasContainer], vertex: &StrategyVertex) -> GraphResult<bool> {
    for container in containers {
      if !container.test_vertex(vertex)? {
        return Ok(false);
      }
    }
    Ok(true)
  }

  /// True when `edge` satisfies every container.
  pub fn test_all_edge(containers: &[HasContainer], edge: &StrategyEdge) -> GraphResult<bool> {
    for container in containers {
      if !container.test_edge(edge)? {
        return Ok(false);
      }
    }
    Ok(true)
  }
}

fn id_value(id: ElementId) -> Value {
  Value::Int(id.0 as i64)
}

impl fmt::Display for HasContainer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.key {
      HasKey::Id => write!(f, "~id.{}", self.predicate),
      HasKey::Label => write!(f, "~label.{}", self.predicate),
      HasKey::Property(key) => write!(f, "{}.{}", key, self.predicate),
    }
  }
}

/// Filters traversers holding vertices or edges by a set of [HasContainer]s.
pub struct HasFilter {
  graph: StrategyGraph,
  containers: Vec<HasContainer>,
}

impl HasFilter {
  pub fn new(graph: StrategyGraph, containers: Vec<HasContainer>) -> Self {
    Self { graph, containers }
  }
}

impl Filter<Value> for HasFilter {
  fn test(&mut self, traverser: &Traverser<Value>) -> TraversalResult<bool> {
    match traverser.get() {
      Value::Vertex(v) => Ok(HasContainer::test_all_vertex(
        &self.containers,
        &self.graph.wrap_vertex(v.clone()),
      )?),
      Value::Edge(e) => Ok(HasContainer::test_all_edge(
        &self.containers,
        &self.graph.wrap_edge(e.clone()),
      )?),
      other => Err(TraversalError::NotAnElement {
        step: "has",
        found: other.to_string(),
      }),
    }
  }
}
