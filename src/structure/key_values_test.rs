//! Tests for `KeyValues`.

use crate::error::GraphError;
use crate::structure::{ElementId, KeyValues, Value, t};

#[test]
fn from_flat_pairs_items() {
  let kv = KeyValues::from_flat(vec!["name".into(), "marko".into(), "age".into(), 29.into()])
    .unwrap();
  assert_eq!(kv.len(), 2);
  assert_eq!(kv.get("name"), Some(&Value::from("marko")));
  assert_eq!(kv.get("age"), Some(&Value::from(29)));
}

#[test]
fn from_flat_rejects_odd_length() {
  let r = KeyValues::from_flat(vec!["name".into()]);
  assert!(matches!(r, Err(GraphError::InvalidKeyValues { .. })));
}

#[test]
fn from_flat_rejects_non_string_keys() {
  let r = KeyValues::from_flat(vec![1.into(), "x".into()]);
  assert!(matches!(r, Err(GraphError::InvalidKeyValues { .. })));
}

#[test]
fn reserved_keys() {
  let kv = KeyValues::new()
    .with(t::LABEL, "person")
    .with(t::ID, 42)
    .with("name", "josh");
  assert_eq!(kv.label().unwrap(), Some("person"));
  assert_eq!(kv.id().unwrap(), Some(ElementId(42)));
  let props: Vec<_> = kv.properties().collect();
  assert_eq!(props, vec![("name", &Value::from("josh"))]);
}

#[test]
fn bad_reserved_values_are_rejected() {
  let kv = KeyValues::new().with(t::LABEL, 1);
  assert!(kv.label().is_err());
  let kv = KeyValues::new().with(t::ID, -1);
  assert!(kv.id().is_err());
}

#[test]
fn repeated_keys_are_kept() {
  let mut kv = KeyValues::from([("any", "a"), ("any", "b"), ("other", "c")]);
  assert_eq!(kv.get_all("any").len(), 2);
  assert_eq!(kv.remove_key("any"), 2);
  assert_eq!(kv.len(), 1);
}

#[test]
fn replace_value_rewrites_matches() {
  let mut kv = KeyValues::from([("a", "working1"), ("b", "other")]);
  kv.replace_value(&Value::from("working1"), "working2");
  assert_eq!(kv.get("a"), Some(&Value::from("working2")));
  assert_eq!(kv.get("b"), Some(&Value::from("other")));
}
