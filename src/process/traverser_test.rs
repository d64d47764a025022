//! Tests for `Traverser`.

use crate::error::{PathError, TraversalError};
use crate::path::Labels;
use crate::process::Traverser;

#[test]
fn new_traverser_path_holds_its_object() {
  let t = Traverser::new(1);
  assert_eq!(t.get(), &1);
  assert_eq!(t.path().objects(), vec![&1]);
  assert_eq!(t.bulk(), 1);
}

#[test]
fn split_branches_without_touching_parent() {
  let parent = Traverser::new("a");
  let left = parent.split("b", ["x"]);
  let right = parent.split("c", Labels::new());
  assert_eq!(parent.path().size(), 1);
  assert_eq!(left.path().objects(), vec![&"a", &"b"]);
  assert_eq!(right.path().objects(), vec![&"a", &"c"]);
  assert!(left.path().has_label("x"));
  assert!(!right.path().has_label("x"));
  assert!(left.path().previous().unwrap().ptr_eq(right.path().previous().unwrap()));
}

#[test]
fn labels_added_and_dropped() {
  let mut t = Traverser::new(1).split(2, Labels::new());
  t.add_labels(["x"]).unwrap();
  assert_eq!(t.path().get_first("x"), Ok(&2));
  t.drop_labels(&Labels::single("x")).unwrap();
  assert_eq!(t.path().objects(), vec![&1]);
}

#[test]
fn bulk_survives_split() {
  let mut t = Traverser::new(1);
  t.set_bulk(3);
  assert_eq!(t.split(2, Labels::new()).bulk(), 3);
}

#[test]
fn path_errors_convert() {
  let e: TraversalError = PathError::LabelNotFound {
    label: "x".to_string(),
  }
  .into();
  assert!(matches!(e, TraversalError::Path(PathError::LabelNotFound { .. })));
}
