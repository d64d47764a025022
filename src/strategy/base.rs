//! Native handlers: each operation carried out directly on the base graph.
//!
//! Wrapped types apply the active strategy around these. A hook can also pass one of them to
//! a transform explicitly to run a chain that stays local to that hook, for example
//! `self.add_vertex(&graph_ctx)(base::add_vertex(&graph_ctx))(key_values)`.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::{
  Context, Handler, StrategyEdge, StrategyGraph, StrategyProperty, StrategyVariables,
  StrategyVertex, StrategyVertexProperty, handler,
};
use crate::error::GraphError;
use crate::structure::{Direction, Edge, ElementId, KeyValues, Property, Value, Vertex, VertexProperty};

// graph

pub fn add_vertex(ctx: &Context<StrategyGraph>) -> Handler<KeyValues, Option<Vertex>> {
  let graph = Arc::clone(ctx.base_graph());
  handler(move |key_values| graph.add_vertex(key_values).map(Some))
}

pub fn graph_vertices(ctx: &Context<StrategyGraph>) -> Handler<Vec<ElementId>, Vec<Vertex>> {
  let graph = Arc::clone(ctx.base_graph());
  handler(move |ids: Vec<ElementId>| graph.vertices(&ids))
}

pub fn graph_edges(ctx: &Context<StrategyGraph>) -> Handler<Vec<ElementId>, Vec<Edge>> {
  let graph = Arc::clone(ctx.base_graph());
  handler(move |ids: Vec<ElementId>| graph.edges(&ids))
}

pub fn graph_close(ctx: &Context<StrategyGraph>) -> Handler<(), ()> {
  let graph = Arc::clone(ctx.base_graph());
  handler(move |()| graph.close())
}

// vertex

pub fn add_edge(ctx: &Context<StrategyVertex>) -> Handler<(String, Vertex, KeyValues), Edge> {
  let graph = Arc::clone(ctx.base_graph());
  let out = ctx.current().base_vertex().id;
  handler(move |(label, in_vertex, key_values): (String, Vertex, KeyValues)| {
    graph.add_edge(out, &label, in_vertex.id, key_values)
  })
}

pub fn remove_vertex(ctx: &Context<StrategyVertex>) -> Handler<(), ()> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_vertex().id;
  handler(move |()| graph.remove_vertex(id))
}

pub fn vertex_get_property(ctx: &Context<StrategyVertex>) -> Handler<String, Option<VertexProperty>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_vertex().id;
  handler(move |key: String| graph.vertex_property(id, &key))
}

pub fn vertex_property(ctx: &Context<StrategyVertex>) -> Handler<(String, Value), VertexProperty> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_vertex().id;
  handler(move |(key, value): (String, Value)| graph.set_vertex_property(id, &key, value))
}

pub fn vertex_id(ctx: &Context<StrategyVertex>) -> Handler<(), ElementId> {
  let id = ctx.current().base_vertex().id;
  handler(move |()| Ok(id))
}

pub fn vertex_graph(ctx: &Context<StrategyVertex>) -> Handler<(), StrategyGraph> {
  let graph = ctx.strategy_graph().clone();
  handler(move |()| Ok(graph.clone()))
}

pub fn vertex_label(ctx: &Context<StrategyVertex>) -> Handler<(), String> {
  let label = ctx.current().base_vertex().label.clone();
  handler(move |()| Ok(label.clone()))
}

pub fn vertex_keys(ctx: &Context<StrategyVertex>) -> Handler<(), BTreeSet<String>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_vertex().id;
  handler(move |()| graph.vertex_keys(id))
}

pub fn vertex_value(ctx: &Context<StrategyVertex>) -> Handler<String, Option<Value>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_vertex().id;
  handler(move |key: String| graph.vertex_value(id, &key))
}

pub fn vertex_properties(
  ctx: &Context<StrategyVertex>,
) -> Handler<Vec<String>, Vec<VertexProperty>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_vertex().id;
  handler(move |keys: Vec<String>| graph.vertex_properties(id, &keys))
}

pub fn vertex_values(ctx: &Context<StrategyVertex>) -> Handler<Vec<String>, Vec<Value>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_vertex().id;
  handler(move |keys: Vec<String>| graph.vertex_values(id, &keys))
}

pub fn vertex_vertices(
  ctx: &Context<StrategyVertex>,
) -> Handler<(Direction, Vec<String>), Vec<Vertex>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_vertex().id;
  handler(move |(direction, labels): (Direction, Vec<String>)| {
    graph.vertex_vertices(id, direction, &labels)
  })
}

pub fn vertex_edges(ctx: &Context<StrategyVertex>) -> Handler<(Direction, Vec<String>), Vec<Edge>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_vertex().id;
  handler(move |(direction, labels): (Direction, Vec<String>)| {
    graph.vertex_edges(id, direction, &labels)
  })
}

// edge

pub fn remove_edge(ctx: &Context<StrategyEdge>) -> Handler<(), ()> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_edge().id;
  handler(move |()| graph.remove_edge(id))
}

pub fn edge_get_property(ctx: &Context<StrategyEdge>) -> Handler<String, Option<Property>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_edge().id;
  handler(move |key: String| graph.edge_property(id, &key))
}

pub fn edge_property(ctx: &Context<StrategyEdge>) -> Handler<(String, Value), Property> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_edge().id;
  handler(move |(key, value): (String, Value)| graph.set_edge_property(id, &key, value))
}

pub fn edge_id(ctx: &Context<StrategyEdge>) -> Handler<(), ElementId> {
  let id = ctx.current().base_edge().id;
  handler(move |()| Ok(id))
}

pub fn edge_graph(ctx: &Context<StrategyEdge>) -> Handler<(), StrategyGraph> {
  let graph = ctx.strategy_graph().clone();
  handler(move |()| Ok(graph.clone()))
}

pub fn edge_label(ctx: &Context<StrategyEdge>) -> Handler<(), String> {
  let label = ctx.current().base_edge().label.clone();
  handler(move |()| Ok(label.clone()))
}

pub fn edge_keys(ctx: &Context<StrategyEdge>) -> Handler<(), BTreeSet<String>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_edge().id;
  handler(move |()| graph.edge_keys(id))
}

pub fn edge_value(ctx: &Context<StrategyEdge>) -> Handler<String, Option<Value>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_edge().id;
  handler(move |key: String| graph.edge_value(id, &key))
}

pub fn edge_properties(ctx: &Context<StrategyEdge>) -> Handler<Vec<String>, Vec<Property>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_edge().id;
  handler(move |keys: Vec<String>| graph.edge_properties(id, &keys))
}

pub fn edge_values(ctx: &Context<StrategyEdge>) -> Handler<Vec<String>, Vec<Value>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_edge().id;
  handler(move |keys: Vec<String>| graph.edge_values(id, &keys))
}

pub fn edge_vertices(ctx: &Context<StrategyEdge>) -> Handler<Direction, Vec<Vertex>> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_edge().id;
  handler(move |direction| graph.edge_vertices(id, direction))
}

// vertex property

pub fn remove_vertex_property(ctx: &Context<StrategyVertexProperty>) -> Handler<(), ()> {
  let graph = Arc::clone(ctx.base_graph());
  let property = ctx.current().base_vertex_property().clone();
  handler(move |()| graph.remove_vertex_property(&property))
}

pub fn vertex_property_id(ctx: &Context<StrategyVertexProperty>) -> Handler<(), ElementId> {
  let id = ctx.current().base_vertex_property().id;
  handler(move |()| Ok(id))
}

pub fn vertex_property_key(ctx: &Context<StrategyVertexProperty>) -> Handler<(), String> {
  let key = ctx.current().base_vertex_property().key.clone();
  handler(move |()| Ok(key.clone()))
}

pub fn vertex_property_value(ctx: &Context<StrategyVertexProperty>) -> Handler<(), Value> {
  let value = ctx.current().base_vertex_property().value.clone();
  handler(move |()| Ok(value.clone()))
}

pub fn vertex_property_element(ctx: &Context<StrategyVertexProperty>) -> Handler<(), Vertex> {
  let graph = Arc::clone(ctx.base_graph());
  let id = ctx.current().base_vertex_property().vertex;
  handler(move |()| {
    graph
      .vertices(&[id])?
      .into_iter()
      .next()
      .ok_or(GraphError::VertexNotFound { id })
  })
}

pub fn vertex_property_label(ctx: &Context<StrategyVertexProperty>) -> Handler<(), String> {
  let key = ctx.current().base_vertex_property().key.clone();
  handler(move |()| Ok(key.clone()))
}

pub fn vertex_property_graph(ctx: &Context<StrategyVertexProperty>) -> Handler<(), StrategyGraph> {
  let graph = ctx.strategy_graph().clone();
  handler(move |()| Ok(graph.clone()))
}

/// Vertex properties carry no properties of their own, so this is always empty.
pub fn vertex_property_keys(
  _ctx: &Context<StrategyVertexProperty>,
) -> Handler<(), BTreeSet<String>> {
  handler(|()| Ok(BTreeSet::new()))
}

// property

pub fn remove_property(ctx: &Context<StrategyProperty>) -> Handler<(), ()> {
  let graph = Arc::clone(ctx.base_graph());
  let property = ctx.current().base_property().clone();
  handler(move |()| graph.remove_edge_property(&property))
}

pub fn property_key(ctx: &Context<StrategyProperty>) -> Handler<(), String> {
  let key = ctx.current().base_property().key.clone();
  handler(move |()| Ok(key.clone()))
}

pub fn property_value(ctx: &Context<StrategyProperty>) -> Handler<(), Value> {
  let value = ctx.current().base_property().value.clone();
  handler(move |()| Ok(value.clone()))
}

// variables

pub fn variable_keys(ctx: &Context<StrategyVariables>) -> Handler<(), BTreeSet<String>> {
  let graph = Arc::clone(ctx.base_graph());
  handler(move |()| graph.variables().keys())
}

pub fn variable_get(ctx: &Context<StrategyVariables>) -> Handler<String, Option<Value>> {
  let graph = Arc::clone(ctx.base_graph());
  handler(move |key: String| graph.variables().get(&key))
}

pub fn variable_set(ctx: &Context<StrategyVariables>) -> Handler<(String, Value), ()> {
  let graph = Arc::clone(ctx.base_graph());
  handler(move |(key, value): (String, Value)| graph.variables().set(&key, value))
}

pub fn variable_remove(ctx: &Context<StrategyVariables>) -> Handler<String, ()> {
  let graph = Arc::clone(ctx.base_graph());
  handler(move |key: String| graph.variables().remove(&key))
}

pub fn variable_as_map(ctx: &Context<StrategyVariables>) -> Handler<(), BTreeMap<String, Value>> {
  let graph = Arc::clone(ctx.base_graph());
  handler(move |()| graph.variables().as_map())
}
