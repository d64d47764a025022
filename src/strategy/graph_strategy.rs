//! The closed set of interceptable graph operations.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::{
  Context, StrategyEdge, StrategyGraph, StrategyProperty, StrategyVariables, StrategyVertex,
  StrategyVertexProperty, Transform, identity,
};
use crate::structure::{Direction, Edge, ElementId, KeyValues, Property, Value, Vertex, VertexProperty};

/// Intercepts graph operations.
///
/// Every hook returns a [Transform] over the handler for one operation. Hooks left at their
/// default return [identity], so a strategy only overrides the operations it cares about.
/// A transform may run code before or after calling the next handler, rewrite its arguments
/// or result, skip it altogether, or fail.
pub trait GraphStrategy: Send + Sync {
  /// Name used in logs.
  fn name(&self) -> &'static str {
    std::any::type_name::<Self>()
  }

  // graph

  /// Returning `Ok(None)` short-circuits vertex creation.
  fn add_vertex(&self, _ctx: &Context<StrategyGraph>) -> Transform<KeyValues, Option<Vertex>> {
    identity()
  }

  fn graph_vertices(&self, _ctx: &Context<StrategyGraph>) -> Transform<Vec<ElementId>, Vec<Vertex>> {
    identity()
  }

  fn graph_edges(&self, _ctx: &Context<StrategyGraph>) -> Transform<Vec<ElementId>, Vec<Edge>> {
    identity()
  }

  fn graph_close(&self, _ctx: &Context<StrategyGraph>) -> Transform<(), ()> {
    identity()
  }

  // vertex

  /// Arguments are the label, the in vertex and the edge key/values.
  fn add_edge(
    &self,
    _ctx: &Context<StrategyVertex>,
  ) -> Transform<(String, Vertex, KeyValues), Edge> {
    identity()
  }

  fn remove_vertex(&self, _ctx: &Context<StrategyVertex>) -> Transform<(), ()> {
    identity()
  }

  fn vertex_get_property(
    &self,
    _ctx: &Context<StrategyVertex>,
  ) -> Transform<String, Option<VertexProperty>> {
    identity()
  }

  /// Setting a property.
  fn vertex_property(
    &self,
    _ctx: &Context<StrategyVertex>,
  ) -> Transform<(String, Value), VertexProperty> {
    identity()
  }

  fn vertex_id(&self, _ctx: &Context<StrategyVertex>) -> Transform<(), ElementId> {
    identity()
  }

  fn vertex_graph(&self, _ctx: &Context<StrategyVertex>) -> Transform<(), StrategyGraph> {
    identity()
  }

  fn vertex_label(&self, _ctx: &Context<StrategyVertex>) -> Transform<(), String> {
    identity()
  }

  fn vertex_keys(&self, _ctx: &Context<StrategyVertex>) -> Transform<(), BTreeSet<String>> {
    identity()
  }

  fn vertex_value(&self, _ctx: &Context<StrategyVertex>) -> Transform<String, Option<Value>> {
    identity()
  }

  fn vertex_properties(
    &self,
    _ctx: &Context<StrategyVertex>,
  ) -> Transform<Vec<String>, Vec<VertexProperty>> {
    identity()
  }

  fn vertex_values(&self, _ctx: &Context<StrategyVertex>) -> Transform<Vec<String>, Vec<Value>> {
    identity()
  }

  fn vertex_vertices(
    &self,
    _ctx: &Context<StrategyVertex>,
  ) -> Transform<(Direction, Vec<String>), Vec<Vertex>> {
    identity()
  }

  fn vertex_edges(
    &self,
    _ctx: &Context<StrategyVertex>,
  ) -> Transform<(Direction, Vec<String>), Vec<Edge>> {
    identity()
  }

  // edge

  fn remove_edge(&self, _ctx: &Context<StrategyEdge>) -> Transform<(), ()> {
    identity()
  }

  fn edge_get_property(&self, _ctx: &Context<StrategyEdge>) -> Transform<String, Option<Property>> {
    identity()
  }

  fn edge_property(&self, _ctx: &Context<StrategyEdge>) -> Transform<(String, Value), Property> {
    identity()
  }

  fn edge_id(&self, _ctx: &Context<StrategyEdge>) -> Transform<(), ElementId> {
    identity()
  }

  fn edge_graph(&self, _ctx: &Context<StrategyEdge>) -> Transform<(), StrategyGraph> {
    identity()
  }

  fn edge_label(&self, _ctx: &Context<StrategyEdge>) -> Transform<(), String> {
    identity()
  }

  fn edge_keys(&self, _ctx: &Context<StrategyEdge>) -> Transform<(), BTreeSet<String>> {
    identity()
  }

  fn edge_value(&self, _ctx: &Context<StrategyEdge>) -> Transform<String, Option<Value>> {
    identity()
  }

  fn edge_properties(&self, _ctx: &Context<StrategyEdge>) -> Transform<Vec<String>, Vec<Property>> {
    identity()
  }

  fn edge_values(&self, _ctx: &Context<StrategyEdge>) -> Transform<Vec<String>, Vec<Value>> {
    identity()
  }

  fn edge_vertices(&self, _ctx: &Context<StrategyEdge>) -> Transform<Direction, Vec<Vertex>> {
    identity()
  }

  // vertex property

  fn remove_vertex_property(&self, _ctx: &Context<StrategyVertexProperty>) -> Transform<(), ()> {
    identity()
  }

  fn vertex_property_id(&self, _ctx: &Context<StrategyVertexProperty>) -> Transform<(), ElementId> {
    identity()
  }

  fn vertex_property_key(&self, _ctx: &Context<StrategyVertexProperty>) -> Transform<(), String> {
    identity()
  }

  fn vertex_property_value(&self, _ctx: &Context<StrategyVertexProperty>) -> Transform<(), Value> {
    identity()
  }

  fn vertex_property_element(
    &self,
    _ctx: &Context<StrategyVertexProperty>,
  ) -> Transform<(), Vertex> {
    identity()
  }

  /// A vertex property's label is its key.
  fn vertex_property_label(&self, _ctx: &Context<StrategyVertexProperty>) -> Transform<(), String> {
    identity()
  }

  fn vertex_property_graph(
    &self,
    _ctx: &Context<StrategyVertexProperty>,
  ) -> Transform<(), StrategyGraph> {
    identity()
  }

  /// Keys of the property's own properties.
  fn vertex_property_keys(
    &self,
    _ctx: &Context<StrategyVertexProperty>,
  ) -> Transform<(), BTreeSet<String>> {
    identity()
  }

  // property

  fn remove_property(&self, _ctx: &Context<StrategyProperty>) -> Transform<(), ()> {
    identity()
  }

  fn property_key(&self, _ctx: &Context<StrategyProperty>) -> Transform<(), String> {
    identity()
  }

  fn property_value(&self, _ctx: &Context<StrategyProperty>) -> Transform<(), Value> {
    identity()
  }

  // variables

  fn variable_keys(&self, _ctx: &Context<StrategyVariables>) -> Transform<(), BTreeSet<String>> {
    identity()
  }

  fn variable_get(&self, _ctx: &Context<StrategyVariables>) -> Transform<String, Option<Value>> {
    identity()
  }

  fn variable_set(&self, _ctx: &Context<StrategyVariables>) -> Transform<(String, Value), ()> {
    identity()
  }

  fn variable_remove(&self, _ctx: &Context<StrategyVariables>) -> Transform<String, ()> {
    identity()
  }

  fn variable_as_map(
    &self,
    _ctx: &Context<StrategyVariables>,
  ) -> Transform<(), BTreeMap<String, Value>> {
    identity()
  }
}

/// Every operation a [GraphStrategy] can intercept, one per hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
  AddVertex,
  GraphVertices,
  GraphEdges,
  GraphClose,
  AddEdge,
  RemoveVertex,
  VertexGetProperty,
  VertexProperty,
  VertexId,
  VertexGraph,
  VertexLabel,
  VertexKeys,
  VertexValue,
  VertexProperties,
  VertexValues,
  VertexVertices,
  VertexEdges,
  RemoveEdge,
  EdgeGetProperty,
  EdgeProperty,
  EdgeId,
  EdgeGraph,
  EdgeLabel,
  EdgeKeys,
  EdgeValue,
  EdgeProperties,
  EdgeValues,
  EdgeVertices,
  RemoveVertexProperty,
  VertexPropertyId,
  VertexPropertyKey,
  VertexPropertyValue,
  VertexPropertyElement,
  VertexPropertyLabel,
  VertexPropertyGraph,
  VertexPropertyKeys,
  RemoveProperty,
  PropertyKey,
  PropertyValue,
  VariableKeys,
  VariableGet,
  VariableSet,
  VariableRemove,
  VariableAsMap,
}

impl Operation {
  pub const ALL: [Operation; 44] = [
    Operation::AddVertex,
    Operation::GraphVertices,
    Operation::GraphEdges,
    Operation::GraphClose,
    Operation::AddEdge,
    Operation::RemoveVertex,
    Operation::VertexGetProperty,
    Operation::VertexProperty,
    Operation::VertexId,
    Operation::VertexGraph,
    Operation::VertexLabel,
    Operation::VertexKeys,
    Operation::VertexValue,
    Operation::VertexProperties,
    Operation::VertexValues,
    Operation::VertexVertices,
    Operation::VertexEdges,
    Operation::RemoveEdge,
    Operation::EdgeGetProperty,
    Operation::EdgeProperty,
    Operation::EdgeId,
    Operation::EdgeGraph,
    Operation::EdgeLabel,
    Operation::EdgeKeys,
    Operation::EdgeValue,
    Operation::EdgeProperties,
    Operation::EdgeValues,
    Operation::EdgeVertices,
    Operation::RemoveVertexProperty,
    Operation::VertexPropertyId,
    Operation::VertexPropertyKey,
    Operation::VertexPropertyValue,
    Operation::VertexPropertyElement,
    Operation::VertexPropertyLabel,
    Operation::VertexPropertyGraph,
    Operation::VertexPropertyKeys,
    Operation::RemoveProperty,
    Operation::PropertyKey,
    Operation::PropertyValue,
    Operation::VariableKeys,
    Operation::VariableGet,
    Operation::VariableSet,
    Operation::VariableRemove,
    Operation::VariableAsMap,
  ];

  /// Name of the [GraphStrategy] method that intercepts this operation.
  pub fn hook_name(self) -> &'static str {
    match self {
      Operation::AddVertex => "add_vertex",
      Operation::GraphVertices => "graph_vertices",
      Operation::GraphEdges => "graph_edges",
      Operation::GraphClose => "graph_close",
      Operation::AddEdge => "add_edge",
      Operation::RemoveVertex => "remove_vertex",
      Operation::VertexGetProperty => "vertex_get_property",
      Operation::VertexProperty => "vertex_property",
      Operation::VertexId => "vertex_id",
      Operation::VertexGraph => "vertex_graph",
      Operation::VertexLabel => "vertex_label",
      Operation::VertexKeys => "vertex_keys",
      Operation::VertexValue => "vertex_value",
      Operation::VertexProperties => "vertex_properties",
      Operation::VertexValues => "vertex_values",
      Operation::VertexVertices => "vertex_vertices",
      Operation::VertexEdges => "vertex_edges",
      Operation::RemoveEdge => "remove_edge",
      Operation::EdgeGetProperty => "edge_get_property",
      Operation::EdgeProperty => "edge_property",
      Operation::EdgeId => "edge_id",
      Operation::EdgeGraph => "edge_graph",
      Operation::EdgeLabel => "edge_label",
      Operation::EdgeKeys => "edge_keys",
      Operation::EdgeValue => "edge_value",
      Operation::EdgeProperties => "edge_properties",
      Operation::EdgeValues => "edge_values",
      Operation::EdgeVertices => "edge_vertices",
      Operation::RemoveVertexProperty => "remove_vertex_property",
      Operation::VertexPropertyId => "vertex_property_id",
      Operation::VertexPropertyKey => "vertex_property_key",
      Operation::VertexPropertyValue => "vertex_property_value",
      Operation::VertexPropertyElement => "vertex_property_element",
      Operation::VertexPropertyLabel => "vertex_property_label",
      Operation::VertexPropertyGraph => "vertex_property_graph",
      Operation::VertexPropertyKeys => "vertex_property_keys",
      Operation::RemoveProperty => "remove_property",
      Operation::PropertyKey => "property_key",
      Operation::PropertyValue => "property_value",
      Operation::VariableKeys => "variable_keys",
      Operation::VariableGet => "variable_get",
      Operation::VariableSet => "variable_set",
      Operation::VariableRemove => "variable_remove",
      Operation::VariableAsMap => "variable_as_map",
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.hook_name())
  }
}
