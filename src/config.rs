// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the `ComponentGraph`.

/// Configuration options for the `ComponentGraph`.
///
/// All checks are disabled by default, in which case the graph mirrors its
/// input: unconnected components and cycles, including self-loops, are kept
/// as they are.
#[derive(Clone, Default, Debug)]
pub struct ComponentGraphConfig {
    /// Whether to require exactly one grid component, from which all other
    /// components are reachable.
    pub require_grid_root: bool,

    /// Whether to reject graphs that contain cycles.
    pub require_acyclic: bool,
}
