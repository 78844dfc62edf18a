// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`ComponentGraph`] instances from given components and
//! connections.

use petgraph::graph::DiGraph;

use crate::component::GraphDescriptor;
use crate::{
    component_category::CategoryPredicates, Component, ComponentDescriptor, ComponentGraphConfig,
    Connection, Edge, Error, Node,
};

use super::{CategoryMap, ComponentGraph, EdgeMap, NodeIndexMap};

/// `ComponentGraph` instantiation.
impl<N, E> ComponentGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Creates a new [`ComponentGraph`] from the given components and connections.
    ///
    /// Returns an error if the graph is invalid.  Duplicate component ids and
    /// connections listed more than once are rejected.
    pub fn try_new<NodeIterator: IntoIterator<Item = N>, EdgeIterator: IntoIterator<Item = E>>(
        components: NodeIterator,
        connections: EdgeIterator,
        config: ComponentGraphConfig,
    ) -> Result<Self, Error> {
        let (graph, node_indices, category_indices) = Self::create_graph(components)?;

        let mut cg = Self {
            graph,
            node_indices,
            category_indices,
            edges: EdgeMap::new(),
            config,
        };
        cg.add_connections(connections)?;

        cg.validate()?;

        tracing::debug!(
            "Built component graph with {} components and {} connections.",
            cg.graph.node_count(),
            cg.graph.edge_count()
        );

        Ok(cg)
    }

    fn create_graph(
        components: impl IntoIterator<Item = N>,
    ) -> Result<(DiGraph<N, ()>, NodeIndexMap, CategoryMap), Error> {
        let mut graph = DiGraph::new();
        let mut indices = NodeIndexMap::new();
        let mut categories = CategoryMap::new();

        for component in components {
            let cid = component.component_id();

            if component.is_unspecified() {
                return Err(Error::invalid_component(format!(
                    "ComponentCategory not specified for component: {cid}"
                )));
            }
            if indices.contains_key(&cid) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate component ID found: {cid}"
                )));
            }

            let kind = component.category().kind();
            let idx = graph.add_node(component);
            indices.insert(cid, idx);
            categories.entry(kind).or_default().push(idx);
        }

        Ok((graph, indices, categories))
    }

    fn add_connections(&mut self, connections: impl IntoIterator<Item = E>) -> Result<(), Error> {
        for connection in connections {
            let sid = connection.source();
            let did = connection.destination();

            for cid in [sid, did] {
                if !self.node_indices.contains_key(&cid) {
                    return Err(Error::invalid_connection(format!(
                        "Connection:({sid}, {did}) Can't find a component with ID {cid}"
                    )));
                }
            }

            let source_idx = self.node_indices[&sid];
            let dest_idx = self.node_indices[&did];
            if self.edges.contains_key(&(source_idx, dest_idx)) {
                return Err(Error::invalid_connection(format!(
                    "Duplicate connection found: ({sid}, {did})"
                )));
            }
            self.edges.insert((source_idx, dest_idx), connection);
            self.graph.add_edge(source_idx, dest_idx, ());
        }

        Ok(())
    }
}

/// Instantiation from raw descriptors.
impl ComponentGraph<Component, Connection> {
    /// Creates a new [`ComponentGraph`] from raw component descriptors and
    /// connections, with the default configuration.
    ///
    /// Returns an error if a descriptor is malformed or the graph is invalid.
    pub fn build(
        components: impl IntoIterator<Item = ComponentDescriptor>,
        connections: impl IntoIterator<Item = Connection>,
    ) -> Result<Self, Error> {
        Self::build_with_config(components, connections, ComponentGraphConfig::default())
    }

    /// Same as [`build`][Self::build], with the given configuration.
    pub fn build_with_config(
        components: impl IntoIterator<Item = ComponentDescriptor>,
        connections: impl IntoIterator<Item = Connection>,
        config: ComponentGraphConfig,
    ) -> Result<Self, Error> {
        let components = components
            .into_iter()
            .map(Component::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(components, connections, config)
    }

    /// Creates a new [`ComponentGraph`] from a JSON document with
    /// `components` and `connections` lists.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Self::from_json_with_config(json, ComponentGraphConfig::default())
    }

    /// Same as [`from_json`][Self::from_json], with the given configuration.
    pub fn from_json_with_config(json: &str, config: ComponentGraphConfig) -> Result<Self, Error> {
        let descriptor: GraphDescriptor = serde_json::from_str(json).map_err(|e| {
            Error::invalid_graph(format!("Malformed component graph description: {e}"))
        })?;
        Self::build_with_config(descriptor.components, descriptor.connections, config)
    }
}
