//! Constructor arguments for vertices and edges.

use super::{ElementId, Value};
use crate::error::{GraphError, GraphResult};

/// Reserved keys understood by every graph.
pub mod t {
  /// Requests a specific element id. The value must be an integer.
  pub const ID: &str = "~id";
  /// Sets the element label. The value must be a string.
  pub const LABEL: &str = "~label";
}

/// Ordered key/value pairs passed to `add_vertex` and `add_edge`.
///
/// Keys may repeat; graphs with list cardinality keep every value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValues {
  pairs: Vec<(String, Value)>,
}

impl KeyValues {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds from an alternating `key, value, key, value...` list.
  pub fn from_flat(items: Vec<Value>) -> GraphResult<Self> {
    if items.len() % 2 != 0 {
      return Err(GraphError::InvalidKeyValues {
        reason: format!("expected an even number of items, got {}", items.len()),
      });
    }
    let mut pairs = Vec::with_capacity(items.len() / 2);
    let mut iter = items.into_iter();
    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
      match key {
        Value::String(key) => pairs.push((key, value)),
        other => {
          return Err(GraphError::InvalidKeyValues {
            reason: format!("keys must be strings, got {}", other.type_name()),
          });
        }
      }
    }
    Ok(Self { pairs })
  }

  /// Appends a pair, builder style.
  pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.push(key, value);
    self
  }

  pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
    self.pairs.push((key.into(), value.into()));
  }

  /// First value for `key`.
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
  }

  pub fn get_all(&self, key: &str) -> Vec<&Value> {
    self
      .pairs
      .iter()
      .filter(|(k, _)| k == key)
      .map(|(_, v)| v)
      .collect()
  }

  /// Removes every pair with `key`, returning how many were removed.
  pub fn remove_key(&mut self, key: &str) -> usize {
    let before = self.pairs.len();
    self.pairs.retain(|(k, _)| k != key);
    before - self.pairs.len()
  }

  /// Replaces every value equal to `from` with `to`.
  pub fn replace_value(&mut self, from: &Value, to: impl Into<Value>) {
    let to = to.into();
    for (_, value) in self.pairs.iter_mut() {
      if value == from {
        *value = to.clone();
      }
    }
  }

  /// Label requested through [t::LABEL].
  pub fn label(&self) -> GraphResult<Option<&str>> {
    match self.get(t::LABEL) {
      None => Ok(None),
      Some(Value::String(label)) => Ok(Some(label)),
      Some(other) => Err(GraphError::InvalidKeyValues {
        reason: format!("{} must be a string, got {}", t::LABEL, other.type_name()),
      }),
    }
  }

  /// Id requested through [t::ID].
  pub fn id(&self) -> GraphResult<Option<ElementId>> {
    match self.get(t::ID) {
      None => Ok(None),
      Some(Value::Int(id)) if *id >= 0 => Ok(Some(ElementId(*id as u64))),
      Some(other) => Err(GraphError::InvalidKeyValues {
        reason: format!(
          "{} must be a non-negative integer, got {}",
          t::ID,
          other
        ),
      }),
    }
  }

  /// Pairs that are properties, i.e. not reserved keys.
  pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
    self
      .pairs
      .iter()
      .filter(|(k, _)| k != t::ID && k != t::LABEL)
      .map(|(k, v)| (k.as_str(), v))
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
    self.pairs.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn len(&self) -> usize {
    self.pairs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for KeyValues {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      pairs: iter
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    }
  }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for KeyValues {
  fn from(pairs: [(K, V); N]) -> Self {
    pairs.into_iter().collect()
  }
}
