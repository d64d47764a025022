//! Tests for `MapStep`, `FlatMapStep` and `SelectStep`.

use crate::error::{PathError, TraversalError};
use crate::path::{Labels, Pop};
use crate::process::{FlatMapStep, MapStep, SelectStep, StartStep, Step, Traverser};
use crate::structure::Value;

fn drain<T: Clone>(step: &mut dyn Step<T>) -> Vec<Traverser<T>> {
  let mut out = Vec::new();
  while let Some(t) = step.pull_next().unwrap() {
    out.push(t);
  }
  out
}

#[test]
fn map_extends_path() {
  let mut step = MapStep::new(Box::new(StartStep::new(vec![1, 2])), |t: &Traverser<i32>| {
    Ok(t.get() * 10)
  });
  let out = drain(&mut step);
  assert_eq!(out.len(), 2);
  assert_eq!(out[0].get(), &10);
  assert_eq!(out[0].path().objects(), vec![&1, &10]);
  assert_eq!(out[1].path().objects(), vec![&2, &20]);
}

#[test]
fn map_errors_stop_the_pull() {
  let mut step = MapStep::new(Box::new(StartStep::new(vec![1])), |_: &Traverser<i32>| {
    Err(TraversalError::MissingGraph { step: "map" })
  });
  assert_eq!(
    step.pull_next(),
    Err(TraversalError::MissingGraph { step: "map" })
  );
}

#[test]
fn flat_map_branches_share_the_parent_path() {
  let mut step = FlatMapStep::new(Box::new(StartStep::new(vec![1, 2])), |t: &Traverser<i32>| {
    Ok(vec![*t.get(); *t.get() as usize])
  });
  let out = drain(&mut step);
  let objects: Vec<i32> = out.iter().map(|t| *t.get()).collect();
  assert_eq!(objects, vec![1, 2, 2]);
  assert!(
    out[1]
      .path()
      .previous()
      .unwrap()
      .ptr_eq(out[2].path().previous().unwrap())
  );
}

#[test]
fn flat_map_skips_empty_expansions() {
  let mut step = FlatMapStep::new(Box::new(StartStep::new(vec![0, 0, 3])), |t: &Traverser<i32>| {
    Ok(if *t.get() == 0 { Vec::new() } else { vec![*t.get()] })
  });
  let out = drain(&mut step);
  assert_eq!(out.len(), 1);
  assert_eq!(out[0].get(), &3);
}

fn labeled_start() -> Box<dyn Step<Value>> {
  let mut start = StartStep::new(vec![Value::from("a")]);
  start.add_label("x");
  let mut second = MapStep::new(Box::new(start), |_: &Traverser<Value>| Ok(Value::from("b")));
  second.add_label("x");
  let third = MapStep::new(Box::new(second), |_: &Traverser<Value>| Ok(Value::from("c")));
  Box::new(third)
}

#[test]
fn select_by_pop() {
  let mut first = SelectStep::new(labeled_start(), "x", Pop::First);
  assert_eq!(first.pull_next().unwrap().unwrap().get(), &Value::from("a"));

  let mut last = SelectStep::new(labeled_start(), "x", Pop::Last);
  assert_eq!(last.pull_next().unwrap().unwrap().get(), &Value::from("b"));

  let mut all = SelectStep::new(labeled_start(), "x", Pop::All);
  let t = all.pull_next().unwrap().unwrap();
  assert_eq!(
    t.get(),
    &Value::List(vec![Value::from("a"), Value::from("b")])
  );
  assert_eq!(t.path().size(), 4);
  assert!(all.pull_next().unwrap().is_none());
}

#[test]
fn select_missing_label_fails() {
  let mut step = SelectStep::new(labeled_start(), "y", Pop::First);
  assert_eq!(
    step.pull_next(),
    Err(TraversalError::Path(PathError::LabelNotFound {
      label: "y".to_string()
    }))
  );
}

#[test]
fn select_all_missing_label_is_empty_list() {
  let mut step = SelectStep::new(labeled_start(), "y", Pop::All);
  let t = step.pull_next().unwrap().unwrap();
  assert_eq!(t.get(), &Value::List(Vec::new()));
  assert!(!t.path().labels().contains(&&Labels::single("y")));
}
