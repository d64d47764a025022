//! Tests for `SequenceStrategy`.

use std::sync::{Arc, Mutex};

use crate::structure::{KeyValues, MemoryGraph, Value, Vertex};
use crate::strategy::{
  Context, GraphStrategy, Handler, SequenceStrategy, StrategyGraph, Transform, base, handler,
  transform,
};

/// Appends `key -> value` to the add-vertex arguments and records that it ran.
struct Tag {
  key: &'static str,
  value: &'static str,
  log: Arc<Mutex<Vec<&'static str>>>,
}

impl GraphStrategy for Tag {
  fn add_vertex(&self, _ctx: &Context<StrategyGraph>) -> Transform<KeyValues, Option<Vertex>> {
    let (key, value, log) = (self.key, self.value, Arc::clone(&self.log));
    transform(move |next: Handler<KeyValues, Option<Vertex>>| {
      handler(move |kv: KeyValues| {
        log.lock().unwrap().push(value);
        next(kv.with(key, value))
      })
    })
  }
}

fn tag(value: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> Tag {
  Tag {
    key: "tag",
    value,
    log: Arc::clone(log),
  }
}

fn graph() -> StrategyGraph {
  StrategyGraph::new(Arc::new(MemoryGraph::new()))
}

#[test]
fn empty_sequence_is_identity() {
  let g = graph();
  let ctx = g.graph_context();
  let seq = SequenceStrategy::default();
  assert!(seq.is_empty());
  let h = seq.add_vertex(&ctx)(base::add_vertex(&ctx));
  let v = h(KeyValues::from([("name", "x")])).unwrap().unwrap();
  assert_eq!(
    g.base_graph().vertex_value(v.id, "name").unwrap(),
    Some(Value::from("x"))
  );
}

#[test]
fn members_run_in_insertion_order() {
  let log = Arc::new(Mutex::new(Vec::new()));
  let seq = SequenceStrategy::default();
  seq.add(tag("a", &log));
  seq.add(tag("b", &log));
  seq.add(tag("c", &log));
  let g = graph();
  let ctx = g.graph_context();
  let v = seq.add_vertex(&ctx)(base::add_vertex(&ctx))(KeyValues::new())
    .unwrap()
    .unwrap();
  assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
  let values = g
    .base_graph()
    .vertex_values(v.id, &["tag".to_string()])
    .unwrap();
  assert_eq!(values, vec![Value::from("a"), Value::from("b"), Value::from("c")]);
}

#[test]
fn add_is_visible_to_clones() {
  let log = Arc::new(Mutex::new(Vec::new()));
  let seq = SequenceStrategy::default();
  let shared = seq.clone();
  seq.add(tag("late", &log));
  assert_eq!(shared.len(), 1);
  let g = graph();
  let ctx = g.graph_context();
  shared.add_vertex(&ctx)(base::add_vertex(&ctx))(KeyValues::new()).unwrap();
  assert_eq!(*log.lock().unwrap(), vec!["late"]);
}

#[test]
fn composed_chain_is_unaffected_by_later_add() {
  let log = Arc::new(Mutex::new(Vec::new()));
  let seq = SequenceStrategy::default();
  seq.add(tag("a", &log));
  let g = graph();
  let ctx = g.graph_context();
  let h = seq.add_vertex(&ctx)(base::add_vertex(&ctx));
  seq.add(tag("b", &log));
  h(KeyValues::new()).unwrap();
  assert_eq!(*log.lock().unwrap(), vec!["a"]);
}

#[test]
fn sequences_nest() {
  let log = Arc::new(Mutex::new(Vec::new()));
  let inner = SequenceStrategy::default();
  inner.add(tag("inner1", &log));
  inner.add(tag("inner2", &log));
  let outer = crate::sequence![tag("outer1", &log), inner, tag("outer2", &log)];
  let g = graph();
  let ctx = g.graph_context();
  outer.add_vertex(&ctx)(base::add_vertex(&ctx))(KeyValues::new()).unwrap();
  assert_eq!(
    *log.lock().unwrap(),
    vec!["outer1", "inner1", "inner2", "outer2"]
  );
}

#[test]
fn debug_lists_member_names() {
  let log = Arc::new(Mutex::new(Vec::new()));
  let seq = SequenceStrategy::default();
  seq.add(tag("a", &log));
  let rendered = format!("{:?}", seq);
  assert!(rendered.contains("Tag"), "{}", rendered);
}
