//! Fluent driver over a chain of steps.

use super::{
  ElementKind, Filter, FilterStep, FlatMapStep, GraphStep, HasContainer, HasFilter, MapStep,
  SelectStep, StartStep, Step, Traverser,
};
use crate::error::{TraversalError, TraversalResult};
use crate::path::{Path, Pop};
use crate::strategy::StrategyGraph;
use crate::structure::{Direction, ElementId, Value};

/// A pipeline of steps, evaluated lazily as it is iterated.
///
/// Builder methods append a step and return the extended traversal. Iterating pulls one
/// traverser at a time from the last step; the first error ends the item with `Err`.
pub struct Traversal<T> {
  end: Box<dyn Step<T>>,
  graph: Option<StrategyGraph>,
}

impl<T: Clone + 'static> Traversal<T> {
  /// A traversal ending in `step`.
  pub fn new(step: impl Step<T> + 'static) -> Self {
    Self {
      end: Box::new(step),
      graph: None,
    }
  }

  /// A traversal starting from `objects`.
  pub fn from_objects<I>(objects: I) -> Self
  where
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
  {
    Self::new(StartStep::new(objects))
  }

  /// Graph used by vertex, edge and `has` steps.
  pub fn with_graph(mut self, graph: StrategyGraph) -> Self {
    self.graph = Some(graph);
    self
  }

  pub fn graph(&self) -> Option<&StrategyGraph> {
    self.graph.as_ref()
  }

  fn map_end<S>(self, build: impl FnOnce(Box<dyn Step<T>>) -> S) -> Self
  where
    S: Step<T> + 'static,
  {
    let Traversal { end, graph } = self;
    Traversal {
      end: Box::new(build(end)),
      graph,
    }
  }

  pub fn filter(self, filter: impl Filter<T> + 'static) -> Self {
    self.map_end(|end| FilterStep::new(end, filter))
  }

  /// One-to-one map; the new object extends the path.
  pub fn map<F>(self, map: F) -> Self
  where
    F: FnMut(&Traverser<T>) -> TraversalResult<T> + 'static,
  {
    self.map_end(|end| MapStep::new(end, map))
  }

  /// One-to-many map; every new object extends its own copy of the path.
  pub fn flat_map<F>(self, flat_map: F) -> Self
  where
    F: FnMut(&Traverser<T>) -> TraversalResult<Vec<T>> + 'static,
  {
    self.map_end(|end| FlatMapStep::new(end, flat_map))
  }

  /// Labels the last step, so its output objects can be selected later.
  pub fn as_(mut self, label: &str) -> Self {
    self.end.add_label(label);
    self
  }

  /// Replaces each object by the one its path holds under `label`.
  pub fn select(self, label: &str, pop: Pop) -> Self
  where
    T: From<Vec<T>>,
  {
    let label = label.to_string();
    self.map_end(move |end| SelectStep::new(end, label, pop))
  }

  /// Next object, or `None` when exhausted.
  pub fn next_object(&mut self) -> TraversalResult<Option<T>> {
    Ok(self.end.pull_next()?.map(Traverser::into_object))
  }

  /// Drains the traversal into its objects.
  pub fn to_list(self) -> TraversalResult<Vec<T>> {
    Iterator::map(self, |traverser| traverser.map(Traverser::into_object)).collect()
  }

  /// Drains the traversal into the paths of its traversers.
  pub fn paths(self) -> TraversalResult<Vec<Path<T>>> {
    Iterator::map(self, |traverser| traverser.map(|t| t.path().clone())).collect()
  }
}

impl Traversal<Value> {
  /// Vertices of `graph` by id, all of them when `ids` is empty.
  pub fn vertices(graph: &StrategyGraph, ids: &[ElementId]) -> Self {
    Self::new(GraphStep::new(graph.clone(), ElementKind::Vertex, ids.to_vec()))
      .with_graph(graph.clone())
  }

  /// Edges of `graph` by id, all of them when `ids` is empty.
  pub fn edges(graph: &StrategyGraph, ids: &[ElementId]) -> Self {
    Self::new(GraphStep::new(graph.clone(), ElementKind::Edge, ids.to_vec()))
      .with_graph(graph.clone())
  }

  /// Keeps vertices and edges satisfying `container`.
  pub fn has(self, container: HasContainer) -> Self {
    match self.graph.clone() {
      Some(graph) => self.filter(HasFilter::new(graph, vec![container])),
      None => self.filter(MissingGraph("has")),
    }
  }

  pub fn out(self, labels: &[&str]) -> Self {
    self.adjacent("out", Direction::Out, labels)
  }

  pub fn in_(self, labels: &[&str]) -> Self {
    self.adjacent("in", Direction::In, labels)
  }

  pub fn both(self, labels: &[&str]) -> Self {
    self.adjacent("both", Direction::Both, labels)
  }

  fn adjacent(self, step: &'static str, direction: Direction, labels: &[&str]) -> Self {
    let graph = self.graph.clone();
    let labels: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
    self.flat_map(move |traverser| {
      let graph = graph
        .as_ref()
        .ok_or(TraversalError::MissingGraph { step })?;
      let vertex = match traverser.get() {
        Value::Vertex(v) => graph.wrap_vertex(v.clone()),
        other => {
          return Err(TraversalError::NotAnElement {
            step,
            found: other.to_string(),
          });
        }
      };
      let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
      Ok(
        vertex
          .vertices(direction, &labels)?
          .into_iter()
          .map(|v| Value::Vertex(v.base_vertex().clone()))
          .collect(),
      )
    })
  }

  /// Property values of vertices and edges under `keys`, all of them when `keys` is empty.
  pub fn values(self, keys: &[&str]) -> Self {
    let graph = self.graph.clone();
    let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    self.flat_map(move |traverser| {
      let graph = graph
        .as_ref()
        .ok_or(TraversalError::MissingGraph { step: "values" })?;
      let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
      match traverser.get() {
        Value::Vertex(v) => Ok(graph.wrap_vertex(v.clone()).values(&keys)?),
        Value::Edge(e) => Ok(graph.wrap_edge(e.clone()).values(&keys)?),
        other => Err(TraversalError::NotAnElement {
          step: "values",
          found: other.to_string(),
        }),
      }
    })
  }
}

/// Fails every traverser: the step needs a graph the traversal does not have.
struct MissingGraph(&'static str);

impl Filter<Value> for MissingGraph {
  fn test(&mut self, _traverser: &Traverser<Value>) -> TraversalResult<bool> {
    Err(TraversalError::MissingGraph { step: self.0 })
  }
}

impl<T: Clone> Iterator for Traversal<T> {
  type Item = TraversalResult<Traverser<T>>;

  fn next(&mut self) -> Option<Self::Item> {
    self.end.pull_next().transpose()
  }
}
