// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `graph` module.
//!
//! - the `TestComponent` and `TestConnection` types, which implement the `Node`
//!   and `Edge` traits respectively.
//! - the `ComponentGraphBuilder`, which can declaratively build complex
//!   component graph configurations for use in tests.
//! - the `TestPredicates` trait, with shorthands for checking the category of
//!   a `Node` in search predicates.

use crate::{
    BatteryType, ComponentCategory, ComponentGraph, ComponentGraphConfig, Edge, Error,
    EvChargerType, InverterType, Node,
};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestComponent(u64, ComponentCategory);

impl TestComponent {
    pub(crate) fn new(id: u64, category: ComponentCategory) -> Self {
        TestComponent(id, category)
    }
}

impl Node for TestComponent {
    fn component_id(&self) -> u64 {
        self.0
    }

    fn category(&self) -> ComponentCategory {
        self.1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestConnection(u64, u64);

impl TestConnection {
    pub(crate) fn new(source: u64, destination: u64) -> Self {
        TestConnection(source, destination)
    }
}

impl Edge for TestConnection {
    fn source(&self) -> u64 {
        self.0
    }

    fn destination(&self) -> u64 {
        self.1
    }
}

/// Category checks used by the traversal and retrieval tests.
pub(crate) trait TestPredicates: Node {
    fn is_meter(&self) -> bool {
        self.category() == ComponentCategory::Meter
    }

    fn is_battery(&self) -> bool {
        matches!(self.category(), ComponentCategory::Battery(_))
    }

    fn is_inverter(&self) -> bool {
        matches!(self.category(), ComponentCategory::Inverter(_))
    }

    fn is_battery_inverter(&self) -> bool {
        self.category() == ComponentCategory::Inverter(InverterType::Battery)
    }

    fn is_pv_inverter(&self) -> bool {
        self.category() == ComponentCategory::Inverter(InverterType::Solar)
    }
}

impl<T: Node> TestPredicates for T {}

/// Represents a component added to the `ComponentGraphBuilder`.
#[derive(Eq, Hash, PartialEq, Copy, Clone)]
pub(crate) struct ComponentHandle(u64);

impl ComponentHandle {
    /// Returns the component ID of the component.
    pub(crate) fn component_id(&self) -> u64 {
        self.0
    }
}

/// A builder for creating complex component graph configurations easily, for
/// use in tests.
pub(crate) struct ComponentGraphBuilder {
    components: Vec<TestComponent>,
    connections: Vec<TestConnection>,
    next_id: u64,
}

impl ComponentGraphBuilder {
    /// Creates a new `ComponentGraphBuilder`.
    pub(crate) fn new() -> Self {
        ComponentGraphBuilder {
            components: Vec::new(),
            connections: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds a component to the graph and returns its handle.
    pub(crate) fn add_component(&mut self, category: ComponentCategory) -> ComponentHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.components.push(TestComponent::new(id, category));
        ComponentHandle(id)
    }

    /// Adds a grid component to the graph and returns its handle.
    pub(crate) fn grid(&mut self) -> ComponentHandle {
        self.add_component(ComponentCategory::Grid)
    }

    /// Adds a meter to the graph and returns its handle.
    pub(crate) fn meter(&mut self) -> ComponentHandle {
        self.add_component(ComponentCategory::Meter)
    }

    /// Adds a battery to the graph and returns its handle.
    pub(crate) fn battery(&mut self) -> ComponentHandle {
        self.add_component(ComponentCategory::Battery(BatteryType::LiIon))
    }

    /// Adds a battery inverter to the graph and returns its handle.
    pub(crate) fn battery_inverter(&mut self) -> ComponentHandle {
        self.add_component(ComponentCategory::Inverter(InverterType::Battery))
    }

    /// Adds a solar inverter to the graph and returns its handle.
    pub(crate) fn solar_inverter(&mut self) -> ComponentHandle {
        self.add_component(ComponentCategory::Inverter(InverterType::Solar))
    }

    /// Adds an EV charger to the graph and returns its handle.
    pub(crate) fn ev_charger(&mut self) -> ComponentHandle {
        self.add_component(ComponentCategory::EvCharger(EvChargerType::Ac))
    }

    /// Connects two components in the graph.
    pub(crate) fn connect(&mut self, from: ComponentHandle, to: ComponentHandle) -> &mut Self {
        self.connections.push(TestConnection::new(from.0, to.0));
        self
    }

    /// Adds a meter, followed by the given number of inverters and batteries,
    /// and returns a handle to the meter.
    pub(crate) fn meter_bat_chain(
        &mut self,
        num_inverters: usize,
        num_batteries: usize,
    ) -> ComponentHandle {
        let meter = self.meter();
        let mut inverters = vec![];
        for _ in 0..num_inverters {
            let inverter = self.battery_inverter();
            self.connect(meter, inverter);
            inverters.push(inverter);
        }
        for _ in 0..num_batteries {
            let battery = self.battery();
            for inverter in &inverters {
                self.connect(*inverter, battery);
            }
        }
        meter
    }

    /// Adds a meter, followed by the given number of PV inverters, and returns a
    /// handle to the meter.
    pub(crate) fn meter_pv_chain(&mut self, num_inverters: usize) -> ComponentHandle {
        let meter = self.meter();
        for _ in 0..num_inverters {
            let inverter = self.solar_inverter();
            self.connect(meter, inverter);
        }
        meter
    }

    /// Builds and returns the component graph from the components and
    /// connections added to the builder.
    pub(crate) fn build(
        &self,
        config: Option<ComponentGraphConfig>,
    ) -> Result<ComponentGraph<TestComponent, TestConnection>, Error> {
        ComponentGraph::try_new(
            self.components.clone(),
            self.connections.clone(),
            config.unwrap_or_default(),
        )
    }
}
