//! Tests for `Traversal`.

use std::sync::Arc;

use crate::error::TraversalError;
use crate::path::{Labels, Pop};
use crate::process::{HasContainer, Traversal, Traverser};
use crate::strategy::StrategyGraph;
use crate::structure::{Graph, KeyValues, MemoryGraph, Value, t};

fn modern() -> StrategyGraph {
  let g = MemoryGraph::new();
  let marko = g
    .add_vertex(KeyValues::from([(t::LABEL, "person"), ("name", "marko")]))
    .unwrap();
  let vadas = g
    .add_vertex(KeyValues::from([(t::LABEL, "person"), ("name", "vadas")]))
    .unwrap();
  let josh = g
    .add_vertex(KeyValues::from([(t::LABEL, "person"), ("name", "josh")]))
    .unwrap();
  let lop = g
    .add_vertex(KeyValues::from([(t::LABEL, "software"), ("name", "lop")]))
    .unwrap();
  g.add_edge(marko.id, "knows", vadas.id, KeyValues::new()).unwrap();
  g.add_edge(marko.id, "knows", josh.id, KeyValues::new()).unwrap();
  g.add_edge(marko.id, "created", lop.id, KeyValues::new()).unwrap();
  g.add_edge(josh.id, "created", lop.id, KeyValues::new()).unwrap();
  StrategyGraph::new(Arc::new(g))
}

fn strings(values: Vec<Value>) -> Vec<String> {
  values.iter().map(ToString::to_string).collect()
}

#[test]
fn filter_and_map_over_objects() {
  let out = Traversal::from_objects(1..=6)
    .filter(|t: &Traverser<i32>| t.get() % 2 == 0)
    .map(|t: &Traverser<i32>| Ok(t.get() + 1))
    .to_list()
    .unwrap();
  assert_eq!(out, vec![3, 5, 7]);
}

#[test]
fn paths_record_each_step() {
  let paths = Traversal::from_objects(vec![1])
    .map(|t: &Traverser<i32>| Ok(t.get() * 2))
    .paths()
    .unwrap();
  assert_eq!(paths.len(), 1);
  assert_eq!(paths[0].objects(), vec![&1, &2]);
}

#[test]
fn next_object_pulls_one_at_a_time() {
  let mut traversal = Traversal::from_objects(vec!["a", "b"]);
  assert_eq!(traversal.next_object().unwrap(), Some("a"));
  assert_eq!(traversal.next_object().unwrap(), Some("b"));
  assert_eq!(traversal.next_object().unwrap(), None);
}

#[test]
fn out_then_values() {
  let graph = modern();
  let names = Traversal::vertices(&graph, &[])
    .has(HasContainer::property("name", "marko"))
    .out(&["knows"])
    .values(&["name"])
    .to_list()
    .unwrap();
  assert_eq!(strings(names), vec!["vadas", "josh"]);
}

#[test]
fn in_and_both() {
  let graph = modern();
  let creators = Traversal::vertices(&graph, &[])
    .has(HasContainer::label("software"))
    .in_(&["created"])
    .values(&["name"])
    .to_list()
    .unwrap();
  assert_eq!(strings(creators), vec!["marko", "josh"]);

  let josh_neighbors = Traversal::vertices(&graph, &[])
    .has(HasContainer::property("name", "josh"))
    .both(&[])
    .values(&["name"])
    .to_list()
    .unwrap();
  assert_eq!(josh_neighbors.len(), 2);
}

#[test]
fn select_labeled_step() {
  let graph = modern();
  let out = Traversal::vertices(&graph, &[])
    .has(HasContainer::property("name", "marko"))
    .as_("a")
    .out(&["created"])
    .select("a", Pop::First)
    .values(&["name"])
    .to_list()
    .unwrap();
  assert_eq!(strings(out), vec!["marko"]);
}

#[test]
fn path_through_graph() {
  let graph = modern();
  let paths = Traversal::vertices(&graph, &[])
    .has(HasContainer::property("name", "josh"))
    .as_("start")
    .out(&[])
    .paths()
    .unwrap();
  assert_eq!(paths.len(), 1);
  assert_eq!(paths[0].size(), 2);
  assert_eq!(paths[0].labels()[0], &Labels::single("start"));
}

#[test]
fn graph_steps_need_a_graph() {
  let result = Traversal::from_objects(vec![Value::from(1)])
    .values(&["name"])
    .to_list();
  assert_eq!(result, Err(TraversalError::MissingGraph { step: "values" }));

  let result = Traversal::from_objects(vec![Value::from(1)])
    .has(HasContainer::exists("name"))
    .to_list();
  assert_eq!(result, Err(TraversalError::MissingGraph { step: "has" }));
}

#[test]
fn adjacency_needs_vertices() {
  let graph = modern();
  let result = Traversal::from_objects(vec![Value::from("x")])
    .with_graph(graph)
    .out(&[])
    .to_list();
  assert!(matches!(
    result,
    Err(TraversalError::NotAnElement { step: "out", .. })
  ));
}

#[test]
fn iterates_traversers() {
  let graph = modern();
  let count = Traversal::edges(&graph, &[])
    .filter(|t: &Traverser<Value>| t.bulk() == 1)
    .count();
  assert_eq!(count, 4);
}
