//! Configuration for [MemoryGraph](crate::structure::MemoryGraph), loaded from JSON or env.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::GraphError;

/// Env var selecting [GraphConfig::default_cardinality] (`single` or `list`).
pub const ENV_CARDINALITY: &str = "PATHWEAVE_CARDINALITY";
/// Env var overriding [GraphConfig::default_vertex_label].
pub const ENV_VERTEX_LABEL: &str = "PATHWEAVE_VERTEX_LABEL";
/// Env var overriding [GraphConfig::default_edge_label].
pub const ENV_EDGE_LABEL: &str = "PATHWEAVE_EDGE_LABEL";

/// How setting a vertex property treats existing values under the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
  /// Setting replaces every existing value.
  Single,
  /// Setting appends another value.
  #[default]
  List,
}

impl fmt::Display for Cardinality {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Cardinality::Single => write!(f, "single"),
      Cardinality::List => write!(f, "list"),
    }
  }
}

impl FromStr for Cardinality {
  type Err = GraphError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "single" => Ok(Cardinality::Single),
      "list" => Ok(Cardinality::List),
      other => Err(GraphError::Config {
        reason: format!("unknown cardinality {:?}, expected single or list", other),
      }),
    }
  }
}

/// Reference graph settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
  pub default_cardinality: Cardinality,
  /// Label of vertices added without `~label`.
  pub default_vertex_label: String,
  /// Label used when an edge is added with an empty label.
  pub default_edge_label: String,
}

impl Default for GraphConfig {
  fn default() -> Self {
    Self {
      default_cardinality: Cardinality::default(),
      default_vertex_label: "vertex".to_string(),
      default_edge_label: "edge".to_string(),
    }
  }
}

impl GraphConfig {
  /// Defaults overridden by the `PATHWEAVE_*` env vars that are set.
  pub fn from_env() -> Result<Self, GraphError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Like [GraphConfig::from_env] with a custom variable source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GraphError> {
    let mut config = Self::default();
    if let Some(cardinality) = lookup(ENV_CARDINALITY) {
      config.default_cardinality = cardinality.parse()?;
    }
    if let Some(label) = lookup(ENV_VERTEX_LABEL) {
      config.default_vertex_label = non_empty(ENV_VERTEX_LABEL, label)?;
    }
    if let Some(label) = lookup(ENV_EDGE_LABEL) {
      config.default_edge_label = non_empty(ENV_EDGE_LABEL, label)?;
    }
    Ok(config)
  }

  /// Loads a config from `path`. Missing fields take their defaults.
  #[instrument(level = "trace", skip(path))]
  pub fn from_json_file(path: &Path) -> Result<Self, std::io::Error> {
    let bytes = std::fs::read(path)?;
    serde_json::from_slice(&bytes)
      .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
  }

  /// Saves the config to `path` as pretty JSON, creating parent directories.
  #[instrument(level = "trace", skip(self, path))]
  pub fn save_json(&self, path: &Path) -> Result<(), std::io::Error> {
    let json = serde_json::to_string_pretty(self)
      .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
  }
}

fn non_empty(var: &str, value: String) -> Result<String, GraphError> {
  if value.trim().is_empty() {
    return Err(GraphError::Config {
      reason: format!("{} must not be empty", var),
    });
  }
  Ok(value)
}
