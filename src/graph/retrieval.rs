// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving components and connections from a [`ComponentGraph`].

use crate::iterators::{CategoryMembers, Components, Connections, Neighbors};
use crate::{CategoryKind, ComponentCategory, ComponentGraph, Edge, Error, Node};

/// `Component` and `Connection` retrieval.
impl<N, E> ComponentGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the component with the given `component_id`, if it exists.
    pub fn component(&self, component_id: u64) -> Result<&N, Error> {
        self.node_indices
            .get(&component_id)
            .map(|i| &self.graph[*i])
            .ok_or_else(|| {
                Error::component_not_found(format!("Component with id {} not found.", component_id))
            })
    }

    /// Returns an iterator over the components in the graph.
    pub fn components(&self) -> Components<'_, N> {
        Components {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the connections in the graph.
    pub fn connections(&self) -> Connections<'_, N, E> {
        Connections {
            cg: self,
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns an iterator over all components of the given category,
    /// whatever their sub-type.
    ///
    /// The iterator is empty if there are no such components.
    pub fn components_by_category(&self, kind: CategoryKind) -> CategoryMembers<'_, N> {
        CategoryMembers {
            graph: &self.graph,
            iter: self
                .category_indices
                .get(&kind)
                .map(|indices| indices.as_slice())
                .unwrap_or(&[])
                .iter(),
        }
    }

    /// Returns an iterator over the components whose category and sub-type
    /// both match `category`.
    ///
    /// The iterator is empty if there are no such components.
    pub fn components_by_type(
        &self,
        category: ComponentCategory,
    ) -> impl Iterator<Item = &N> + '_ {
        self.components_by_category(category.kind())
            .filter(move |n| n.category() == category)
    }

    /// Returns an iterator over the *predecessors* of the component with the
    /// given `component_id`.
    ///
    /// Returns an error if the given `component_id` does not exist.
    pub fn predecessors(&self, component_id: u64) -> Result<Neighbors<'_, N>, Error> {
        self.node_indices
            .get(&component_id)
            .map(|&index| Neighbors {
                graph: &self.graph,
                iter: self
                    .graph
                    .neighbors_directed(index, petgraph::Direction::Incoming),
            })
            .ok_or_else(|| {
                Error::component_not_found(format!("Component with id {} not found.", component_id))
            })
    }

    /// Returns an iterator over the *successors* of the component with the
    /// given `component_id`.
    ///
    /// Returns an error if the given `component_id` does not exist.
    pub fn successors(&self, component_id: u64) -> Result<Neighbors<'_, N>, Error> {
        self.node_indices
            .get(&component_id)
            .map(|&index| Neighbors {
                graph: &self.graph,
                iter: self
                    .graph
                    .neighbors_directed(index, petgraph::Direction::Outgoing),
            })
            .ok_or_else(|| {
                Error::component_not_found(format!("Component with id {} not found.", component_id))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{
        ComponentGraphBuilder, TestComponent, TestConnection, TestPredicates,
    };
    use crate::{BatteryType, ComponentGraphConfig, EvChargerType, InverterType};

    fn nodes_and_edges() -> (Vec<TestComponent>, Vec<TestConnection>) {
        let components = vec![
            TestComponent::new(6, ComponentCategory::Meter),
            TestComponent::new(1, ComponentCategory::Grid),
            TestComponent::new(7, ComponentCategory::Inverter(InverterType::Battery)),
            TestComponent::new(3, ComponentCategory::Meter),
            TestComponent::new(5, ComponentCategory::Battery(BatteryType::Unspecified)),
            TestComponent::new(8, ComponentCategory::Battery(BatteryType::LiIon)),
            TestComponent::new(4, ComponentCategory::Inverter(InverterType::Battery)),
            TestComponent::new(2, ComponentCategory::Meter),
        ];
        let connections = vec![
            TestConnection::new(3, 4),
            TestConnection::new(1, 2),
            TestConnection::new(7, 8),
            TestConnection::new(4, 5),
            TestConnection::new(2, 3),
            TestConnection::new(6, 7),
            TestConnection::new(2, 6),
        ];

        (components, connections)
    }

    fn graph() -> Result<ComponentGraph<TestComponent, TestConnection>, Error> {
        let (components, connections) = nodes_and_edges();
        ComponentGraph::try_new(components, connections, ComponentGraphConfig::default())
    }

    #[test]
    fn test_component() -> Result<(), Error> {
        let graph = graph()?;

        assert_eq!(
            graph.component(1),
            Ok(&TestComponent::new(1, ComponentCategory::Grid))
        );
        assert_eq!(
            graph.component(5),
            Ok(&TestComponent::new(
                5,
                ComponentCategory::Battery(BatteryType::Unspecified)
            ))
        );
        assert_eq!(
            graph.component(9),
            Err(Error::component_not_found("Component with id 9 not found."))
        );

        let (components, _) = nodes_and_edges();
        for component in &components {
            assert_eq!(graph.component(component.component_id()), Ok(component));
        }

        Ok(())
    }

    #[test]
    fn test_components() -> Result<(), Error> {
        let (components, _) = nodes_and_edges();
        let graph = graph()?;

        assert!(graph.components().eq(&components));
        assert!(graph.components().filter(|x| x.is_battery()).eq(&[
            TestComponent::new(5, ComponentCategory::Battery(BatteryType::Unspecified)),
            TestComponent::new(8, ComponentCategory::Battery(BatteryType::LiIon))
        ]));

        Ok(())
    }

    #[test]
    fn test_components_by_category() -> Result<(), Error> {
        let graph = graph()?;

        assert!(graph.components_by_category(CategoryKind::Meter).eq(&[
            TestComponent::new(6, ComponentCategory::Meter),
            TestComponent::new(3, ComponentCategory::Meter),
            TestComponent::new(2, ComponentCategory::Meter),
        ]));
        assert!(graph.components_by_category(CategoryKind::Battery).eq(&[
            TestComponent::new(5, ComponentCategory::Battery(BatteryType::Unspecified)),
            TestComponent::new(8, ComponentCategory::Battery(BatteryType::LiIon))
        ]));
        assert_eq!(graph.components_by_category(CategoryKind::Chp).count(), 0);

        assert!(graph
            .components_by_type(ComponentCategory::Battery(BatteryType::LiIon))
            .eq(&[TestComponent::new(
                8,
                ComponentCategory::Battery(BatteryType::LiIon)
            )]));
        assert!(graph
            .components_by_type(ComponentCategory::Inverter(InverterType::Battery))
            .map(|n| n.component_id())
            .eq([7, 4]));
        assert_eq!(
            graph
                .components_by_type(ComponentCategory::Inverter(InverterType::Solar))
                .count(),
            0
        );

        Ok(())
    }

    #[test]
    fn test_components_by_category_from_builder() -> Result<(), Error> {
        let mut builder = ComponentGraphBuilder::new();
        let grid = builder.grid();
        let bat_meter = builder.meter_bat_chain(2, 1);
        let pv_meter = builder.meter_pv_chain(3);
        let ev_meter = builder.meter();
        let ev_charger = builder.ev_charger();
        builder
            .connect(grid, bat_meter)
            .connect(grid, pv_meter)
            .connect(grid, ev_meter)
            .connect(ev_meter, ev_charger);
        let graph = builder.build(None)?;

        assert_eq!(graph.components_by_category(CategoryKind::Meter).count(), 3);
        assert_eq!(
            graph.components_by_category(CategoryKind::Inverter).count(),
            5
        );
        assert!(graph
            .components_by_category(CategoryKind::Inverter)
            .all(|n| n.is_inverter()));
        assert_eq!(
            graph
                .components_by_type(ComponentCategory::Inverter(InverterType::Solar))
                .count(),
            3
        );
        assert!(graph
            .components_by_type(ComponentCategory::EvCharger(EvChargerType::Ac))
            .map(|n| n.component_id())
            .eq([ev_charger.component_id()]));

        Ok(())
    }

    #[test]
    fn test_connections() -> Result<(), Error> {
        let (_, connections) = nodes_and_edges();
        let graph = graph()?;

        assert!(graph.connections().eq(&connections));

        assert!(graph
            .connections()
            .filter(|x| x.source() == 2)
            .eq(&[TestConnection::new(2, 3), TestConnection::new(2, 6)]));

        Ok(())
    }

    #[test]
    fn test_neighbors() -> Result<(), Error> {
        let graph = graph()?;

        assert!(graph.predecessors(1).is_ok_and(|x| x.eq(&[])));

        assert!(graph
            .predecessors(3)
            .is_ok_and(|x| x.eq(&[TestComponent::new(2, ComponentCategory::Meter)])));

        assert!(graph
            .successors(1)
            .is_ok_and(|x| x.eq(&[TestComponent::new(2, ComponentCategory::Meter)])));

        assert!(graph.successors(2).is_ok_and(|x| {
            x.eq(&[
                TestComponent::new(6, ComponentCategory::Meter),
                TestComponent::new(3, ComponentCategory::Meter),
            ])
        }));

        assert!(graph.successors(5).is_ok_and(|x| x.eq(&[])));

        assert!(graph
            .predecessors(32)
            .is_err_and(|e| e == Error::component_not_found("Component with id 32 not found.")));
        assert!(graph
            .successors(32)
            .is_err_and(|e| e == Error::component_not_found("Component with id 32 not found.")));

        Ok(())
    }
}
