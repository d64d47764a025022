//! Tests for `GraphStep`, `HasContainer` and `HasFilter`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::TraversalError;
use crate::process::{
  ElementKind, Filter, GraphStep, HasContainer, HasFilter, HasKey, Predicate, Step, Traversal,
  Traverser,
};
use crate::strategy::{
  Context, GraphStrategy, Handler, StrategyGraph, StrategyVertex, Transform, handler, transform,
};
use crate::structure::{ElementId, Graph, KeyValues, MemoryGraph, Value, t};

fn modern() -> (StrategyGraph, Vec<ElementId>) {
  let g = MemoryGraph::new();
  let marko = g
    .add_vertex(KeyValues::from([(t::LABEL, "person"), ("name", "marko")]))
    .unwrap();
  let vadas = g
    .add_vertex(KeyValues::from([(t::LABEL, "person"), ("name", "vadas")]))
    .unwrap();
  let lop = g
    .add_vertex(KeyValues::from([(t::LABEL, "software"), ("name", "lop")]))
    .unwrap();
  let knows = g
    .add_edge(marko.id, "knows", vadas.id, KeyValues::new().with("weight", 0.5))
    .unwrap();
  let created = g
    .add_edge(marko.id, "created", lop.id, KeyValues::new().with("weight", 0.4))
    .unwrap();
  (
    StrategyGraph::new(Arc::new(g)),
    vec![marko.id, vadas.id, lop.id, knows.id, created.id],
  )
}

fn names(step: &mut GraphStep) -> Vec<String> {
  let mut out = Vec::new();
  while let Some(traverser) = step.pull_next().unwrap() {
    match traverser.get() {
      Value::Vertex(v) => out.push(v.label.clone()),
      Value::Edge(e) => out.push(e.label.clone()),
      other => panic!("unexpected {}", other),
    }
  }
  out
}

#[test]
fn emits_every_vertex() {
  let (graph, _) = modern();
  let mut step = GraphStep::new(graph, ElementKind::Vertex, Vec::new());
  assert_eq!(names(&mut step), vec!["person", "person", "software"]);
}

#[test]
fn emits_edges_by_id() {
  let (graph, ids) = modern();
  let mut step = GraphStep::new(graph, ElementKind::Edge, vec![ids[4]]);
  assert_eq!(names(&mut step), vec!["created"]);
}

#[test]
fn has_containers_narrow_the_source() {
  let (graph, _) = modern();
  let mut step = GraphStep::new(graph, ElementKind::Vertex, Vec::new())
    .with_has_container(HasContainer::label("person"))
    .with_has_container(HasContainer::property("name", "vadas"));
  let out = step.pull_next().unwrap().unwrap();
  assert_eq!(
    out.get().as_vertex().map(|v| v.label.as_str()),
    Some("person")
  );
  assert!(step.pull_next().unwrap().is_none());
}

#[test]
fn reads_lazily() {
  let (graph, _) = modern();
  let mut step = GraphStep::new(graph.clone(), ElementKind::Vertex, Vec::new());
  graph.add_vertex(KeyValues::new()).unwrap();
  assert_eq!(names(&mut step).len(), 4);
}

#[test]
fn display_lists_ids_and_containers() {
  let (graph, _) = modern();
  let step = GraphStep::new(graph, ElementKind::Vertex, vec![ElementId(1), ElementId(2)])
    .with_has_container(HasContainer::property("name", "marko"));
  assert_eq!(step.to_string(), "GraphStep(vertex,[1, 2],name.eq(marko))");
  assert_eq!(step.has_containers().len(), 1);
}

#[test]
fn predicates() {
  let (graph, ids) = modern();
  let marko = graph.vertices(&[ids[0]]).unwrap().remove(0);

  let neq = HasContainer::new(HasKey::Property("name".into()), Predicate::Neq("vadas".into()));
  assert!(neq.test_vertex(&marko).unwrap());

  let within = HasContainer::new(
    HasKey::Property("name".into()),
    Predicate::Within(vec!["lop".into(), "marko".into()]),
  );
  assert!(within.test_vertex(&marko).unwrap());

  assert!(HasContainer::exists("name").test_vertex(&marko).unwrap());
  assert!(!HasContainer::exists("age").test_vertex(&marko).unwrap());
  assert!(HasContainer::ids(&[ids[0]]).test_vertex(&marko).unwrap());
  assert!(!HasContainer::ids(&[ids[1]]).test_vertex(&marko).unwrap());

  let absent = HasContainer::new(HasKey::Property("age".into()), Predicate::Neq(1.into()));
  assert!(!absent.test_vertex(&marko).unwrap());
}

#[test]
fn edge_containers() {
  let (graph, ids) = modern();
  let knows = graph.edges(&[ids[3]]).unwrap().remove(0);
  assert!(HasContainer::label("knows").test_edge(&knows).unwrap());
  assert!(HasContainer::property("weight", 0.5).test_edge(&knows).unwrap());
  assert!(
    !HasContainer::test_all_edge(
      &[HasContainer::label("knows"), HasContainer::property("weight", 0.4)],
      &knows
    )
    .unwrap()
  );
}

#[test]
fn container_display() {
  assert_eq!(HasContainer::label("person").to_string(), "~label.eq(person)");
  assert_eq!(HasContainer::exists("age").to_string(), "age.exists");
  assert_eq!(
    HasContainer::ids(&[ElementId(1), ElementId(3)]).to_string(),
    "~id.within([1, 3])"
  );
}

#[test]
fn has_filter_rejects_non_elements() {
  let (graph, _) = modern();
  let mut filter = HasFilter::new(graph, vec![HasContainer::exists("name")]);
  let result = filter.test(&Traverser::new(Value::from(1)));
  assert_eq!(
    result,
    Err(TraversalError::NotAnElement {
      step: "has",
      found: "1".to_string()
    })
  );
}

/// Counts label reads.
struct CountLabels(Arc<AtomicUsize>);

impl GraphStrategy for CountLabels {
  fn vertex_label(&self, _ctx: &Context<StrategyVertex>) -> Transform<(), String> {
    let reads = Arc::clone(&self.0);
    transform(move |next: Handler<(), String>| {
      handler(move |()| {
        reads.fetch_add(1, Ordering::SeqCst);
        next(())
      })
    })
  }
}

#[test]
fn has_containers_are_tested_one_pull_at_a_time() {
  let base = MemoryGraph::new();
  for _ in 0..100 {
    base
      .add_vertex(KeyValues::from([(t::LABEL, "person")]))
      .unwrap();
  }
  let reads = Arc::new(AtomicUsize::new(0));
  let graph = StrategyGraph::with_strategy(Arc::new(base), CountLabels(Arc::clone(&reads)));
  let step = GraphStep::new(graph, ElementKind::Vertex, Vec::new())
    .with_has_container(HasContainer::label("person"));
  let mut traversal = Traversal::new(step);

  assert!(traversal.next_object().unwrap().is_some());
  assert_eq!(reads.load(Ordering::SeqCst), 1);
  assert!(traversal.next_object().unwrap().is_some());
  assert_eq!(reads.load(Ordering::SeqCst), 2);
}

#[test]
fn failing_elements_are_skipped_lazily() {
  let base = MemoryGraph::new();
  for label in ["software", "software", "person", "software"] {
    base.add_vertex(KeyValues::from([(t::LABEL, label)])).unwrap();
  }
  let reads = Arc::new(AtomicUsize::new(0));
  let graph = StrategyGraph::with_strategy(Arc::new(base), CountLabels(Arc::clone(&reads)));
  let mut step = GraphStep::new(graph, ElementKind::Vertex, Vec::new())
    .with_has_container(HasContainer::label("person"));

  assert_eq!(names(&mut step), vec!["person"]);
  assert_eq!(reads.load(Ordering::SeqCst), 4);
}
