// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains methods that help with graph traversal.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;

use crate::{ComponentGraph, Edge, Error, Node};

/// Traversal methods.
impl<N, E> ComponentGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the neighbors of `from` in the given direction, to seed a
    /// depth-first search that doesn't include `from` itself.
    fn start_search(
        &self,
        from: u64,
        direction: petgraph::Direction,
    ) -> Result<(Vec<NodeIndex>, HashSet<NodeIndex>), Error> {
        let index = self.node_indices.get(&from).ok_or_else(|| {
            Error::component_not_found(format!("Component with id {} not found.", from))
        })?;
        let stack = self.graph.neighbors_directed(*index, direction).collect();
        Ok((stack, HashSet::from([*index])))
    }

    fn find(
        &self,
        from: u64,
        mut pred: impl FnMut(&N) -> bool,
        direction: petgraph::Direction,
    ) -> Result<Option<&N>, Error> {
        let (mut stack, mut visited) = self.start_search(from, direction)?;

        while let Some(index) = stack.pop() {
            if !visited.insert(index) {
                continue;
            }
            let node = &self.graph[index];
            if pred(node) {
                return Ok(Some(node));
            }

            let neighbors = self.graph.neighbors_directed(index, direction);
            stack.extend(neighbors);
        }

        Ok(None)
    }

    fn find_all_in(
        &self,
        from: u64,
        mut pred: impl FnMut(&N) -> bool,
        direction: petgraph::Direction,
    ) -> Result<Vec<&N>, Error> {
        let (mut stack, mut visited) = self.start_search(from, direction)?;
        let mut found = vec![];

        while let Some(index) = stack.pop() {
            if !visited.insert(index) {
                continue;
            }
            let node = &self.graph[index];
            if pred(node) {
                found.push(node);
            }

            let neighbors = self.graph.neighbors_directed(index, direction);
            stack.extend(neighbors);
        }

        Ok(found)
    }

    /// Find the node that satisfies the given predicate starting from the given
    /// node and traversing away from the root.
    ///
    /// The starting node itself is not considered.
    pub fn find_successor(
        &self,
        from: u64,
        pred: impl FnMut(&N) -> bool,
    ) -> Result<Option<&N>, Error> {
        self.find(from, pred, petgraph::Direction::Outgoing)
    }

    /// Find the node that satisfies the given predicate starting from the given
    /// node and traversing towards the root.
    ///
    /// The starting node itself is not considered.
    pub fn find_predecessor(
        &self,
        from: u64,
        pred: impl FnMut(&N) -> bool,
    ) -> Result<Option<&N>, Error> {
        self.find(from, pred, petgraph::Direction::Incoming)
    }

    /// Find all the nodes reachable from the given node, traversing away from
    /// the root, that satisfy the given predicate.
    ///
    /// Every node is visited at most once, even if the graph has cycles.
    pub fn find_all(
        &self,
        from: u64,
        pred: impl FnMut(&N) -> bool,
    ) -> Result<Vec<&N>, Error> {
        self.find_all_in(from, pred, petgraph::Direction::Outgoing)
    }
}
