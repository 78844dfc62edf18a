// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating the root, acyclicity and connectedness of a
//! [`ComponentGraph`].

use std::collections::BTreeSet;

use crate::{component_category::CategoryPredicates, iterators::Neighbors, Edge, Error, Node};

use super::ComponentGraphValidator;

impl<'a, N, E> ComponentGraphValidator<'a, N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the successors of a component that is known to be in the graph.
    fn successors_of(&self, cid: u64) -> Result<Neighbors<'a, N>, Error> {
        self.cg.successors(cid).map_err(|e| {
            Error::internal(format!(
                "Component index out of sync with graph: {}",
                e.description()
            ))
        })
    }

    /// Returns the only grid component in the graph.
    pub(super) fn find_root(&self) -> Result<&'a N, Error> {
        let mut roots_iter = self.cg.components().filter(|n| n.is_grid());

        let root = roots_iter
            .next()
            .ok_or_else(|| Error::invalid_graph("No grid component found."))?;

        if roots_iter.next().is_some() {
            return Err(Error::invalid_graph("Multiple grid components found."));
        }

        Ok(root)
    }

    /// Validates that all components are connected into a single graph.
    ///
    /// It does so by ensuring that all the components are reachable by
    /// traversing the graph from the root node.
    pub(super) fn validate_connected_graph(&self, root: &N) -> Result<(), Error> {
        let root_id = root.component_id();
        let mut visited = BTreeSet::new();
        let mut queue = vec![root_id];
        visited.insert(root_id);
        while let Some(node_id) = queue.pop() {
            for successor in self.successors_of(node_id)? {
                if visited.insert(successor.component_id()) {
                    queue.push(successor.component_id());
                }
            }
        }

        let unvisited = self
            .cg
            .components()
            .map(|n| n.component_id())
            .filter(|id| !visited.contains(id))
            .collect::<Vec<_>>();

        if !unvisited.is_empty() {
            return Err(Error::invalid_graph(format!(
                "Nodes {:?} are not connected to the root.",
                unvisited
            )));
        }

        Ok(())
    }

    /// Validates that there are no cycles in the graph.
    ///
    /// If a cycle is detected, an error is returned, that lists the nodes in
    /// the cycle.
    pub(super) fn validate_acyclicity(&self) -> Result<(), Error> {
        let mut finished = BTreeSet::new();
        for node in self.cg.components() {
            self.visit_for_cycles(node, &mut vec![], &mut finished)?;
        }
        Ok(())
    }

    fn visit_for_cycles(
        &self,
        node: &N,
        path: &mut Vec<u64>,
        finished: &mut BTreeSet<u64>,
    ) -> Result<(), Error> {
        let cid = node.component_id();
        if finished.contains(&cid) {
            return Ok(());
        }

        path.push(cid);
        for successor in self.successors_of(cid)? {
            if let Some(first_occurance) = path
                .iter()
                .position(|id| *id == successor.component_id())
            {
                return Err(Error::invalid_graph(format!(
                    "Cycle detected: {} -> {}",
                    path[first_occurance..]
                        .iter()
                        .map(|x| x.to_string())
                        .collect::<Vec<_>>()
                        .join(" -> "),
                    successor.component_id()
                )));
            }
            self.visit_for_cycles(successor, path, finished)?;
        }
        path.pop();
        finished.insert(cid);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::component_category::BatteryType;
    use crate::graph::test_utils::{TestComponent, TestConnection};
    use crate::ComponentCategory;
    use crate::ComponentGraph;
    use crate::ComponentGraphConfig;
    use crate::Error;
    use crate::InverterType;
    use crate::{Edge, Node};

    fn nodes_and_edges() -> (Vec<TestComponent>, Vec<TestConnection>) {
        let components = vec![
            TestComponent::new(6, ComponentCategory::Meter),
            TestComponent::new(1, ComponentCategory::Grid),
            TestComponent::new(7, ComponentCategory::Inverter(InverterType::Battery)),
            TestComponent::new(10, ComponentCategory::Inverter(InverterType::Solar)),
            TestComponent::new(3, ComponentCategory::Meter),
            TestComponent::new(5, ComponentCategory::Battery(BatteryType::Unspecified)),
            TestComponent::new(8, ComponentCategory::Battery(BatteryType::Unspecified)),
            TestComponent::new(4, ComponentCategory::Inverter(InverterType::Battery)),
            TestComponent::new(2, ComponentCategory::Meter),
            TestComponent::new(9, ComponentCategory::Meter),
        ];
        let connections = vec![
            TestConnection::new(3, 4),
            TestConnection::new(1, 2),
            TestConnection::new(7, 8),
            TestConnection::new(4, 5),
            TestConnection::new(2, 3),
            TestConnection::new(6, 7),
            TestConnection::new(2, 6),
            TestConnection::new(2, 9),
            TestConnection::new(9, 10),
        ];

        (components, connections)
    }

    fn strict() -> ComponentGraphConfig {
        ComponentGraphConfig {
            require_grid_root: true,
            require_acyclic: true,
        }
    }

    #[test]
    fn test_root_validation() {
        let config = strict();
        let (mut components, mut connections) = nodes_and_edges();

        components.retain(|c| c.category() != ComponentCategory::Grid);
        connections.retain(|c| c.source() != 1);
        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e == Error::invalid_graph("No grid component found.")),
        );
        assert!(ComponentGraph::try_new(
            components.clone(),
            connections.clone(),
            ComponentGraphConfig::default()
        )
        .is_ok());

        components.push(TestComponent::new(1, ComponentCategory::Grid));
        connections.push(TestConnection::new(1, 2));
        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_ok()
        );

        components.push(TestComponent::new(11, ComponentCategory::Grid));
        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e == Error::invalid_graph("Multiple grid components found."))
        );
    }

    #[test]
    fn test_connected_graph_validation() {
        let config = strict();
        let (mut components, mut connections) = nodes_and_edges();

        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_ok()
        );
        components.push(TestComponent::new(11, ComponentCategory::Meter));
        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(
                    |e| e == Error::invalid_graph("Nodes [11] are not connected to the root.")
                )
        );

        components.push(TestComponent::new(12, ComponentCategory::Meter));

        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(
                    |e| e == Error::invalid_graph("Nodes [11, 12] are not connected to the root.")
                )
        );

        connections.push(TestConnection::new(11, 12));

        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(
                    |e| e == Error::invalid_graph("Nodes [11, 12] are not connected to the root.")
                )
        );

        // Unconnected components are fine without a required root.
        assert!(ComponentGraph::try_new(
            components.clone(),
            connections.clone(),
            ComponentGraphConfig::default()
        )
        .is_ok());

        connections.pop();
        components.pop();
        components.pop();

        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_ok()
        );
    }

    #[test]
    fn test_acyclicity_validation() {
        let config = strict();
        let (components, mut connections) = nodes_and_edges();

        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_ok()
        );

        // add cycles at different levels
        connections.push(TestConnection::new(3, 2));
        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e == Error::invalid_graph("Cycle detected: 2 -> 3 -> 2")),
        );
        assert!(ComponentGraph::try_new(
            components.clone(),
            connections.clone(),
            ComponentGraphConfig::default()
        )
        .is_ok());

        connections.pop();
        connections.push(TestConnection::new(4, 2));
        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e == Error::invalid_graph("Cycle detected: 2 -> 3 -> 4 -> 2"))
        );

        connections.pop();
        connections.push(TestConnection::new(5, 2));
        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e == Error::invalid_graph("Cycle detected: 2 -> 3 -> 4 -> 5 -> 2"))
        );

        connections.pop();
        connections.push(TestConnection::new(5, 4));
        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e == Error::invalid_graph("Cycle detected: 4 -> 5 -> 4"))
        );

        connections.pop();
        connections.push(TestConnection::new(9, 2));
        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e == Error::invalid_graph("Cycle detected: 2 -> 9 -> 2"))
        );

        connections.pop();
        connections.push(TestConnection::new(4, 4));
        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e == Error::invalid_graph("Cycle detected: 4 -> 4"))
        );

        connections.pop();
        assert!(
            ComponentGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_ok()
        );
    }
}
