// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A human readable listing of a [`ComponentGraph`].

use std::fmt::Display;

use crate::{ComponentGraph, Edge, Node};

impl<N, E> Display for ComponentGraph<N, E>
where
    N: Node,
    E: Edge,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Components:")?;
        for component in self.components() {
            writeln!(f, "  {}:{}", component.category(), component.component_id())?;
        }
        writeln!(f, "Connections:")?;
        for connection in self.connections() {
            writeln!(f, "  {} -> {}", connection.source(), connection.destination())?;
        }
        Ok(())
    }
}
