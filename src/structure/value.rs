//! Dynamically typed values held by properties, variables and traversers.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Edge, Vertex};

/// A property value or traversal object.
///
/// Floats compare and hash by bit pattern so that `Value` can be used as a map key and as a
/// path object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
  Null,
  Bool(bool),
  Int(i64),
  Float(f64),
  String(String),
  List(Vec<Value>),
  Vertex(Vertex),
  Edge(Edge),
}

impl Value {
  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null)
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::String(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_int(&self) -> Option<i64> {
    match self {
      Value::Int(i) => Some(*i),
      _ => None,
    }
  }

  pub fn as_vertex(&self) -> Option<&Vertex> {
    match self {
      Value::Vertex(v) => Some(v),
      _ => None,
    }
  }

  pub fn as_edge(&self) -> Option<&Edge> {
    match self {
      Value::Edge(e) => Some(e),
      _ => None,
    }
  }

  pub fn as_list(&self) -> Option<&[Value]> {
    match self {
      Value::List(items) => Some(items),
      _ => None,
    }
  }

  /// Short type name used in error messages.
  pub fn type_name(&self) -> &'static str {
    match self {
      Value::Null => "null",
      Value::Bool(_) => "bool",
      Value::Int(_) => "int",
      Value::Float(_) => "float",
      Value::String(_) => "string",
      Value::List(_) => "list",
      Value::Vertex(_) => "vertex",
      Value::Edge(_) => "edge",
    }
  }
}

impl PartialEq for Value {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Value::Null, Value::Null) => true,
      (Value::Bool(a), Value::Bool(b)) => a == b,
      (Value::Int(a), Value::Int(b)) => a == b,
      (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
      (Value::String(a), Value::String(b)) => a == b,
      (Value::List(a), Value::List(b)) => a == b,
      (Value::Vertex(a), Value::Vertex(b)) => a == b,
      (Value::Edge(a), Value::Edge(b)) => a == b,
      _ => false,
    }
  }
}

impl Eq for Value {}

impl Hash for Value {
  fn hash<H: Hasher>(&self, state: &mut H) {
    std::mem::discriminant(self).hash(state);
    match self {
      Value::Null => {}
      Value::Bool(b) => b.hash(state),
      Value::Int(i) => i.hash(state),
      Value::Float(f) => f.to_bits().hash(state),
      Value::String(s) => s.hash(state),
      Value::List(items) => items.hash(state),
      Value::Vertex(v) => v.hash(state),
      Value::Edge(e) => e.hash(state),
    }
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Null => write!(f, "null"),
      Value::Bool(b) => write!(f, "{}", b),
      Value::Int(i) => write!(f, "{}", i),
      Value::Float(x) => write!(f, "{}", x),
      Value::String(s) => write!(f, "{}", s),
      Value::List(items) => {
        write!(f, "[")?;
        for (i, item) in items.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write!(f, "{}", item)?;
        }
        write!(f, "]")
      }
      Value::Vertex(v) => write!(f, "{}", v),
      Value::Edge(e) => write!(f, "{}", e),
    }
  }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Value::String(s.to_string())
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Value::String(s)
  }
}

impl From<i64> for Value {
  fn from(i: i64) -> Self {
    Value::Int(i)
  }
}

impl From<i32> for Value {
  fn from(i: i32) -> Self {
    Value::Int(i64::from(i))
  }
}

impl From<f64> for Value {
  fn from(x: f64) -> Self {
    Value::Float(x)
  }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self {
    Value::Bool(b)
  }
}

impl From<Vec<Value>> for Value {
  fn from(items: Vec<Value>) -> Self {
    Value::List(items)
  }
}

impl From<Vertex> for Value {
  fn from(v: Vertex) -> Self {
    Value::Vertex(v)
  }
}

impl From<Edge> for Value {
  fn from(e: Edge) -> Self {
    Value::Edge(e)
  }
}
