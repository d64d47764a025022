//! In-memory reference [Graph].

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::{info, instrument};

use super::{
  Direction, Edge, ElementId, Graph, KeyValues, Property, Value, Variables, Vertex, VertexProperty,
};
use crate::config::{Cardinality, GraphConfig};
use crate::error::{GraphError, GraphResult};

struct VertexRecord {
  label: String,
  properties: Vec<VertexProperty>,
}

struct EdgeRecord {
  edge: Edge,
  properties: IndexMap<String, Value>,
}

#[derive(Default)]
struct State {
  next_id: u64,
  vertices: BTreeMap<ElementId, VertexRecord>,
  edges: BTreeMap<ElementId, EdgeRecord>,
}

impl State {
  /// Takes `requested` if free, else the next unused id.
  fn allocate(&mut self, requested: Option<ElementId>) -> GraphResult<ElementId> {
    match requested {
      Some(id) => {
        if self.vertices.contains_key(&id) || self.edges.contains_key(&id) {
          return Err(GraphError::InvalidKeyValues {
            reason: format!("element id {} is already in use", id),
          });
        }
        self.next_id = self.next_id.max(id.0 + 1);
        Ok(id)
      }
      None => {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        Ok(id)
      }
    }
  }

  fn vertex(&self, id: ElementId) -> GraphResult<&VertexRecord> {
    self
      .vertices
      .get(&id)
      .ok_or(GraphError::VertexNotFound { id })
  }

  fn vertex_mut(&mut self, id: ElementId) -> GraphResult<&mut VertexRecord> {
    self
      .vertices
      .get_mut(&id)
      .ok_or(GraphError::VertexNotFound { id })
  }

  fn edge(&self, id: ElementId) -> GraphResult<&EdgeRecord> {
    self.edges.get(&id).ok_or(GraphError::EdgeNotFound { id })
  }

  fn edge_mut(&mut self, id: ElementId) -> GraphResult<&mut EdgeRecord> {
    self.edges.get_mut(&id).ok_or(GraphError::EdgeNotFound { id })
  }

  fn set_vertex_property(
    &mut self,
    cardinality: Cardinality,
    id: ElementId,
    key: &str,
    value: Value,
  ) -> GraphResult<VertexProperty> {
    self.vertex(id)?;
    let property_id = self.allocate(None)?;
    let record = self.vertex_mut(id)?;
    if cardinality == Cardinality::Single {
      record.properties.retain(|p| p.key != key);
    }
    let property = VertexProperty {
      id: property_id,
      vertex: id,
      key: key.to_string(),
      value,
    };
    record.properties.push(property.clone());
    Ok(property)
  }
}

/// Thread-safe graph held entirely in memory.
///
/// Vertices, edges and vertex properties draw ids from one counter. Vertex properties follow
/// [GraphConfig::default_cardinality]; edge properties always replace. Every call after
/// [Graph::close] fails with [GraphError::Closed].
pub struct MemoryGraph {
  config: GraphConfig,
  state: RwLock<State>,
  variables: MemoryVariables,
  closed: Arc<AtomicBool>,
}

impl MemoryGraph {
  pub fn new() -> Self {
    Self::with_config(GraphConfig::default())
  }

  pub fn with_config(config: GraphConfig) -> Self {
    let closed = Arc::new(AtomicBool::new(false));
    Self {
      config,
      state: RwLock::new(State::default()),
      variables: MemoryVariables {
        values: RwLock::new(BTreeMap::new()),
        closed: Arc::clone(&closed),
      },
      closed,
    }
  }

  pub fn config(&self) -> &GraphConfig {
    &self.config
  }

  pub fn is_closed(&self) -> bool {
    self.closed.load(Ordering::Acquire)
  }

  pub fn vertex_count(&self) -> GraphResult<usize> {
    Ok(self.read()?.vertices.len())
  }

  pub fn edge_count(&self) -> GraphResult<usize> {
    Ok(self.read()?.edges.len())
  }

  fn read(&self) -> GraphResult<RwLockReadGuard<'_, State>> {
    if self.is_closed() {
      return Err(GraphError::Closed);
    }
    Ok(self.state.read().unwrap_or_else(PoisonError::into_inner))
  }

  fn write(&self) -> GraphResult<RwLockWriteGuard<'_, State>> {
    if self.is_closed() {
      return Err(GraphError::Closed);
    }
    Ok(self.state.write().unwrap_or_else(PoisonError::into_inner))
  }
}

impl Default for MemoryGraph {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Debug for MemoryGraph {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
    write!(
      f,
      "memorygraph[vertices:{} edges:{}]",
      state.vertices.len(),
      state.edges.len()
    )
  }
}

fn matches_keys(key: &str, keys: &[String]) -> bool {
  keys.is_empty() || keys.iter().any(|k| k == key)
}

impl Graph for MemoryGraph {
  #[instrument(level = "trace", skip(self, key_values))]
  fn add_vertex(&self, key_values: KeyValues) -> GraphResult<Vertex> {
    let label = key_values
      .label()?
      .unwrap_or(self.config.default_vertex_label.as_str())
      .to_string();
    let requested = key_values.id()?;
    let mut state = self.write()?;
    let id = state.allocate(requested)?;
    state.vertices.insert(
      id,
      VertexRecord {
        label: label.clone(),
        properties: Vec::new(),
      },
    );
    for (key, value) in key_values.properties() {
      state.set_vertex_property(self.config.default_cardinality, id, key, value.clone())?;
    }
    Ok(Vertex { id, label })
  }

  fn vertices(&self, ids: &[ElementId]) -> GraphResult<Vec<Vertex>> {
    let state = self.read()?;
    let to_vertex = |(id, record): (&ElementId, &VertexRecord)| Vertex {
      id: *id,
      label: record.label.clone(),
    };
    if ids.is_empty() {
      return Ok(state.vertices.iter().map(to_vertex).collect());
    }
    Ok(
      ids
        .iter()
        .filter_map(|id| state.vertices.get_key_value(id))
        .map(to_vertex)
        .collect(),
    )
  }

  fn edges(&self, ids: &[ElementId]) -> GraphResult<Vec<Edge>> {
    let state = self.read()?;
    if ids.is_empty() {
      return Ok(state.edges.values().map(|r| r.edge.clone()).collect());
    }
    Ok(
      ids
        .iter()
        .filter_map(|id| state.edges.get(id))
        .map(|r| r.edge.clone())
        .collect(),
    )
  }

  #[instrument(level = "trace", skip(self, key_values))]
  fn add_edge(
    &self,
    out_vertex: ElementId,
    label: &str,
    in_vertex: ElementId,
    key_values: KeyValues,
  ) -> GraphResult<Edge> {
    let label = if label.is_empty() {
      self.config.default_edge_label.clone()
    } else {
      label.to_string()
    };
    let requested = key_values.id()?;
    let mut state = self.write()?;
    state.vertex(out_vertex)?;
    state.vertex(in_vertex)?;
    let id = state.allocate(requested)?;
    let edge = Edge {
      id,
      label,
      out_vertex,
      in_vertex,
    };
    let properties = key_values
      .properties()
      .map(|(k, v)| (k.to_string(), v.clone()))
      .collect();
    state.edges.insert(
      id,
      EdgeRecord {
        edge: edge.clone(),
        properties,
      },
    );
    Ok(edge)
  }

  #[instrument(level = "trace", skip(self))]
  fn remove_vertex(&self, id: ElementId) -> GraphResult<()> {
    let mut state = self.write()?;
    state
      .vertices
      .remove(&id)
      .ok_or(GraphError::VertexNotFound { id })?;
    state
      .edges
      .retain(|_, r| r.edge.out_vertex != id && r.edge.in_vertex != id);
    Ok(())
  }

  #[instrument(level = "trace", skip(self))]
  fn remove_edge(&self, id: ElementId) -> GraphResult<()> {
    let mut state = self.write()?;
    state
      .edges
      .remove(&id)
      .map(|_| ())
      .ok_or(GraphError::EdgeNotFound { id })
  }

  fn vertex_properties(
    &self,
    id: ElementId,
    keys: &[String],
  ) -> GraphResult<Vec<VertexProperty>> {
    let state = self.read()?;
    Ok(
      state
        .vertex(id)?
        .properties
        .iter()
        .filter(|p| matches_keys(&p.key, keys))
        .cloned()
        .collect(),
    )
  }

  #[instrument(level = "trace", skip(self, value))]
  fn set_vertex_property(
    &self,
    id: ElementId,
    key: &str,
    value: Value,
  ) -> GraphResult<VertexProperty> {
    let mut state = self.write()?;
    state.set_vertex_property(self.config.default_cardinality, id, key, value)
  }

  fn remove_vertex_property(&self, property: &VertexProperty) -> GraphResult<()> {
    let mut state = self.write()?;
    let record = state.vertex_mut(property.vertex)?;
    let before = record.properties.len();
    record.properties.retain(|p| p.id != property.id);
    if record.properties.len() == before {
      return Err(GraphError::PropertyNotFound {
        id: property.vertex,
        key: property.key.clone(),
      });
    }
    Ok(())
  }

  fn edge_properties(&self, id: ElementId, keys: &[String]) -> GraphResult<Vec<Property>> {
    let state = self.read()?;
    Ok(
      state
        .edge(id)?
        .properties
        .iter()
        .filter(|(k, _)| matches_keys(k, keys))
        .map(|(k, v)| Property {
          element: id,
          key: k.clone(),
          value: v.clone(),
        })
        .collect(),
    )
  }

  fn set_edge_property(&self, id: ElementId, key: &str, value: Value) -> GraphResult<Property> {
    let mut state = self.write()?;
    state
      .edge_mut(id)?
      .properties
      .insert(key.to_string(), value.clone());
    Ok(Property {
      element: id,
      key: key.to_string(),
      value,
    })
  }

  fn remove_edge_property(&self, property: &Property) -> GraphResult<()> {
    let mut state = self.write()?;
    state
      .edge_mut(property.element)?
      .properties
      .shift_remove(&property.key)
      .map(|_| ())
      .ok_or_else(|| GraphError::PropertyNotFound {
        id: property.element,
        key: property.key.clone(),
      })
  }

  fn vertex_edges(
    &self,
    id: ElementId,
    direction: Direction,
    labels: &[String],
  ) -> GraphResult<Vec<Edge>> {
    let state = self.read()?;
    state.vertex(id)?;
    Ok(
      state
        .edges
        .values()
        .map(|r| &r.edge)
        .filter(|e| match direction {
          Direction::Out => e.out_vertex == id,
          Direction::In => e.in_vertex == id,
          Direction::Both => e.out_vertex == id || e.in_vertex == id,
        })
        .filter(|e| matches_keys(&e.label, labels))
        .cloned()
        .collect(),
    )
  }

  fn edge_vertices(&self, id: ElementId, direction: Direction) -> GraphResult<Vec<Vertex>> {
    let state = self.read()?;
    let edge = &state.edge(id)?.edge;
    let ids = match direction {
      Direction::Out => vec![edge.out_vertex],
      Direction::In => vec![edge.in_vertex],
      Direction::Both => vec![edge.out_vertex, edge.in_vertex],
    };
    ids
      .into_iter()
      .map(|vid| {
        state.vertex(vid).map(|r| Vertex {
          id: vid,
          label: r.label.clone(),
        })
      })
      .collect()
  }

  fn variables(&self) -> &dyn Variables {
    &self.variables
  }

  fn close(&self) -> GraphResult<()> {
    if !self.closed.swap(true, Ordering::AcqRel) {
      let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
      info!(
        vertices = state.vertices.len(),
        edges = state.edges.len(),
        "memory graph closed"
      );
    }
    Ok(())
  }
}

/// Variables of a [MemoryGraph]. Closed together with the graph.
pub struct MemoryVariables {
  values: RwLock<BTreeMap<String, Value>>,
  closed: Arc<AtomicBool>,
}

impl MemoryVariables {
  fn check_open(&self) -> GraphResult<()> {
    if self.closed.load(Ordering::Acquire) {
      return Err(GraphError::Closed);
    }
    Ok(())
  }
}

impl Variables for MemoryVariables {
  fn keys(&self) -> GraphResult<BTreeSet<String>> {
    self.check_open()?;
    let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
    Ok(values.keys().cloned().collect())
  }

  fn get(&self, key: &str) -> GraphResult<Option<Value>> {
    self.check_open()?;
    let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
    Ok(values.get(key).cloned())
  }

  fn set(&self, key: &str, value: Value) -> GraphResult<()> {
    self.check_open()?;
    let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
    values.insert(key.to_string(), value);
    Ok(())
  }

  fn remove(&self, key: &str) -> GraphResult<()> {
    self.check_open()?;
    let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
    values.remove(key);
    Ok(())
  }

  fn as_map(&self) -> GraphResult<BTreeMap<String, Value>> {
    self.check_open()?;
    let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
    Ok(values.clone())
  }
}
