// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating a [`ComponentGraph`].

mod validate_graph;

use crate::{ComponentGraph, Edge, Error, Node};

pub(crate) struct ComponentGraphValidator<'a, N, E>
where
    N: Node,
    E: Edge,
{
    cg: &'a ComponentGraph<N, E>,
}

impl<N, E> ComponentGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Runs the topology checks enabled in the graph's configuration.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let validator = ComponentGraphValidator { cg: self };

        if self.config.require_acyclic {
            validator.validate_acyclicity()?;
        }
        if self.config.require_grid_root {
            let root = validator.find_root()?;
            validator.validate_connected_graph(root)?;
        }

        Ok(())
    }
}
