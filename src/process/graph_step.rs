//! Source step reading vertices or edges from a strategy-wrapped graph.

use std::collections::VecDeque;
use std::fmt;

use tracing::{instrument, trace};

use super::{HasContainer, Step, Traverser};
use crate::error::TraversalResult;
use crate::path::Labels;
use crate::strategy::StrategyGraph;
use crate::structure::{ElementId, Value};

/// Which elements a [GraphStep] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
  Vertex,
  Edge,
}

/// Emits vertices or edges by id (all of them when no ids are given) that satisfy every
/// [HasContainer]. Reads go through the graph's strategy. The candidate elements are read on the
/// first pull; has containers are tested one element per pull.
pub struct GraphStep {
  graph: StrategyGraph,
  kind: ElementKind,
  ids: Vec<ElementId>,
  has_containers: Vec<HasContainer>,
  pending: Option<VecDeque<Value>>,
  labels: Labels,
}

impl GraphStep {
  pub fn new(graph: StrategyGraph, kind: ElementKind, ids: Vec<ElementId>) -> Self {
    Self {
      graph,
      kind,
      ids,
      has_containers: Vec::new(),
      pending: None,
      labels: Labels::new(),
    }
  }

  pub fn with_has_container(mut self, container: HasContainer) -> Self {
    self.has_containers.push(container);
    self
  }

  pub fn has_containers(&self) -> &[HasContainer] {
    &self.has_containers
  }

  /// Reads the candidate elements. Has containers are applied later, one pull at a time.
  #[instrument(level = "trace", skip(self), fields(kind = ?self.kind))]
  fn load(&self) -> TraversalResult<VecDeque<Value>> {
    let elements: VecDeque<Value> = match self.kind {
      ElementKind::Vertex => self
        .graph
        .vertices(&self.ids)?
        .into_iter()
        .map(|v| Value::Vertex(v.base_vertex().clone()))
        .collect(),
      ElementKind::Edge => self
        .graph
        .edges(&self.ids)?
        .into_iter()
        .map(|e| Value::Edge(e.base_edge().clone()))
        .collect(),
    };
    trace!(count = elements.len(), "graph step loaded");
    Ok(elements)
  }

  fn passes(&self, element: &Value) -> TraversalResult<bool> {
    if self.has_containers.is_empty() {
      return Ok(true);
    }
    let passes = match element {
      Value::Vertex(v) => {
        HasContainer::test_all_vertex(&self.has_containers, &self.graph.wrap_vertex(v.clone()))?
      }
      Value::Edge(e) => {
        HasContainer::test_all_edge(&self.has_containers, &self.graph.wrap_edge(e.clone()))?
      }
      _ => false,
    };
    Ok(passes)
  }
}

impl Step<Value> for GraphStep {
  fn process_next_start(&mut self) -> TraversalResult<Option<Traverser<Value>>> {
    if self.pending.is_none() {
      self.pending = Some(self.load()?);
    }
    loop {
      let Some(element) = self.pending.as_mut().and_then(VecDeque::pop_front) else {
        return Ok(None);
      };
      if self.passes(&element)? {
        return Ok(Some(Traverser::new(element)));
      }
      trace!(step = self.name(), "filtered out");
    }
  }

  fn labels(&self) -> &Labels {
    &self.labels
  }

  fn add_label(&mut self, label: &str) {
    self.labels.insert(label);
  }

  fn name(&self) -> &'static str {
    "GraphStep"
  }
}

impl fmt::Display for GraphStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let kind = match self.kind {
      ElementKind::Vertex => "vertex",
      ElementKind::Edge => "edge",
    };
    write!(f, "GraphStep({}", kind)?;
    if !self.ids.is_empty() {
      let ids: Vec<String> = self.ids.iter().map(ToString::to_string).collect();
      write!(f, ",[{}]", ids.join(", "))?;
    }
    for container in &self.has_containers {
      write!(f, ",{}", container)?;
    }
    write!(f, ")")
  }
}
