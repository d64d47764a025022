//! Tests for `Path::retract`.

use super::{Labels, Path};
use crate::error::PathError;

#[test]
fn retract_removes_every_matching_segment() {
  let p = Path::empty()
    .extend("a", Labels::new())
    .extend("b", ["L"])
    .extend("c", Labels::new())
    .extend("d", ["L"]);
  let r = p.retract(&Labels::single("L")).unwrap();
  assert_eq!(r.objects(), vec![&"a", &"c"]);
  assert_eq!(r.size(), 2);
  assert!(!r.has_label("L"));

  // The original is untouched.
  assert_eq!(p.objects(), vec![&"a", &"b", &"c", &"d"]);
  assert_eq!(p.get_all("L"), vec![&"b", &"d"]);
}

#[test]
fn retract_shares_segments_older_than_the_oldest_match() {
  let base = Path::empty()
    .extend("a", ["keep"])
    .extend("b", Labels::new());
  let p = base.extend("c", ["drop"]).extend("d", Labels::new());
  let r = p.retract(&Labels::single("drop")).unwrap();
  assert_eq!(r.objects(), vec![&"a", &"b", &"d"]);
  assert!(r.previous().unwrap().ptr_eq(&base));
}

#[test]
fn retract_of_head_returns_previous() {
  let base = Path::empty().extend(1, Labels::new());
  let p = base.extend(2, ["x"]);
  let r = p.retract(&Labels::single("x")).unwrap();
  assert!(r.ptr_eq(&base));
}

#[test]
fn retract_of_oldest_rebuilds_whole_chain() {
  let p = Path::empty()
    .extend(1, ["x"])
    .extend(2, ["y"])
    .extend(3, Labels::new());
  let r = p.retract(&Labels::single("x")).unwrap();
  assert_eq!(r.objects(), vec![&2, &3]);
  assert_eq!(r.labels()[0], &Labels::single("y"));
  assert_eq!(p.size(), 3);
}

#[test]
fn retract_of_every_segment_yields_empty_path() {
  let p = Path::empty().extend(1, ["x"]).extend(2, ["x", "y"]);
  let r = p.retract(&Labels::single("x")).unwrap();
  assert!(r.is_empty());
}

#[test]
fn segment_with_several_labels_is_removed_whole() {
  let p = Path::empty()
    .extend("a", Labels::new())
    .extend("b", ["x", "y"]);
  let r = p.retract(&Labels::single("x")).unwrap();
  assert_eq!(r.objects(), vec![&"a"]);
  assert!(!r.has_label("y"));
}

#[test]
fn retract_with_several_labels() {
  let p = Path::empty()
    .extend(1, ["x"])
    .extend(2, Labels::new())
    .extend(3, ["y"])
    .extend(4, ["z"]);
  let r = p.retract(&["x", "y"].into()).unwrap();
  assert_eq!(r.objects(), vec![&2, &4]);
  assert!(r.has_label("z"));
}

#[test]
fn retract_of_absent_label_is_identity() {
  let p = Path::empty().extend(1, ["x"]).extend(2, Labels::new());
  let r = p.retract(&Labels::single("nope")).unwrap();
  assert!(r.ptr_eq(&p));
  assert_eq!(r, p);
  let r = p.retract(&Labels::new()).unwrap();
  assert!(r.ptr_eq(&p));
}

#[test]
fn retract_on_empty_path_is_invalid() {
  let p: Path<i32> = Path::empty();
  assert!(matches!(
    p.retract(&Labels::single("x")),
    Err(PathError::InvalidOperation {
      operation: "retract",
      ..
    })
  ));
}

#[test]
fn retracted_path_keeps_extending_independently() {
  let p = Path::empty().extend("a", ["x"]).extend("b", Labels::new());
  let r = p.retract(&Labels::single("x")).unwrap();
  let r2 = r.extend("c", ["x"]);
  assert_eq!(r2.objects(), vec![&"b", &"c"]);
  assert_eq!(r2.get_first("x"), Ok(&"c"));
  assert_eq!(p.get_first("x"), Ok(&"a"));
}
