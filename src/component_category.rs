// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `ComponentCategory` enum, which represents the
//! category of a component, together with the sub-types that refine some of
//! the categories.

use crate::graph_traits::Node;
use serde::Deserialize;
use std::fmt::Display;
use std::str::FromStr;

/// Represents the type of an inverter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InverterType {
    Unspecified,
    Solar,
    Battery,
    Hybrid,
}

impl Display for InverterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InverterType::Unspecified => write!(f, "Unspecified"),
            InverterType::Solar => write!(f, "Solar"),
            InverterType::Battery => write!(f, "Battery"),
            InverterType::Hybrid => write!(f, "Hybrid"),
        }
    }
}

/// Represents the type of a battery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryType {
    Unspecified,
    LiIon,
    NaIon,
}

impl Display for BatteryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatteryType::Unspecified => write!(f, "Unspecified"),
            BatteryType::LiIon => write!(f, "LiIon"),
            BatteryType::NaIon => write!(f, "NaIon"),
        }
    }
}

/// Represents the type of an EV charger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvChargerType {
    Unspecified,
    Ac,
    Dc,
    Hybrid,
}

impl Display for EvChargerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvChargerType::Unspecified => write!(f, "Unspecified"),
            EvChargerType::Ac => write!(f, "AC"),
            EvChargerType::Dc => write!(f, "DC"),
            EvChargerType::Hybrid => write!(f, "Hybrid"),
        }
    }
}

/// Represents the category of a component.
///
/// Categories that can be refined further carry their sub-type, so a
/// sub-type can never be attached to a category it doesn't belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    Unspecified,
    Grid,
    Meter,
    Battery(BatteryType),
    Inverter(InverterType),
    EvCharger(EvChargerType),
    Converter,
    CryptoMiner,
    Electrolyzer,
    Chp,
    Precharger,
    Fuse,
    VoltageTransformer,
    Hvac,
    Relay,
}

impl ComponentCategory {
    /// Returns the category without its sub-type.
    pub fn kind(&self) -> CategoryKind {
        match self {
            ComponentCategory::Unspecified => CategoryKind::Unspecified,
            ComponentCategory::Grid => CategoryKind::Grid,
            ComponentCategory::Meter => CategoryKind::Meter,
            ComponentCategory::Battery(_) => CategoryKind::Battery,
            ComponentCategory::Inverter(_) => CategoryKind::Inverter,
            ComponentCategory::EvCharger(_) => CategoryKind::EvCharger,
            ComponentCategory::Converter => CategoryKind::Converter,
            ComponentCategory::CryptoMiner => CategoryKind::CryptoMiner,
            ComponentCategory::Electrolyzer => CategoryKind::Electrolyzer,
            ComponentCategory::Chp => CategoryKind::Chp,
            ComponentCategory::Precharger => CategoryKind::Precharger,
            ComponentCategory::Fuse => CategoryKind::Fuse,
            ComponentCategory::VoltageTransformer => CategoryKind::VoltageTransformer,
            ComponentCategory::Hvac => CategoryKind::Hvac,
            ComponentCategory::Relay => CategoryKind::Relay,
        }
    }
}

impl Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentCategory::Unspecified => write!(f, "Unspecified"),
            ComponentCategory::Grid => write!(f, "Grid"),
            ComponentCategory::Meter => write!(f, "Meter"),
            ComponentCategory::Battery(battery_type) => write!(f, "Battery({})", battery_type),
            ComponentCategory::Inverter(inverter_type) => write!(f, "{}Inverter", inverter_type),
            ComponentCategory::EvCharger(ev_charger_type) => {
                write!(f, "EVCharger({})", ev_charger_type)
            }
            ComponentCategory::Converter => write!(f, "Converter"),
            ComponentCategory::CryptoMiner => write!(f, "CryptoMiner"),
            ComponentCategory::Electrolyzer => write!(f, "Electrolyzer"),
            ComponentCategory::Chp => write!(f, "CHP"),
            ComponentCategory::Precharger => write!(f, "Precharger"),
            ComponentCategory::Fuse => write!(f, "Fuse"),
            ComponentCategory::VoltageTransformer => write!(f, "VoltageTransformer"),
            ComponentCategory::Hvac => write!(f, "HVAC"),
            ComponentCategory::Relay => write!(f, "Relay"),
        }
    }
}

/// The category of a component, without any sub-type.
///
/// This is what component descriptors name in their `category` field, and
/// what [`ComponentGraph::components_by_category`][crate::ComponentGraph::components_by_category]
/// groups components by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Unspecified,
    Grid,
    Meter,
    Battery,
    Inverter,
    EvCharger,
    Converter,
    CryptoMiner,
    Electrolyzer,
    Chp,
    Precharger,
    Fuse,
    VoltageTransformer,
    Hvac,
    Relay,
}

impl CategoryKind {
    /// The categories that can be refined by a sub-type.
    pub(crate) const WITH_SUB_TYPE: [CategoryKind; 3] = [
        CategoryKind::Battery,
        CategoryKind::Inverter,
        CategoryKind::EvCharger,
    ];

    /// Returns the snake case name used for this category in component
    /// descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            CategoryKind::Unspecified => "unspecified",
            CategoryKind::Grid => "grid",
            CategoryKind::Meter => "meter",
            CategoryKind::Battery => "battery",
            CategoryKind::Inverter => "inverter",
            CategoryKind::EvCharger => "ev_charger",
            CategoryKind::Converter => "converter",
            CategoryKind::CryptoMiner => "crypto_miner",
            CategoryKind::Electrolyzer => "electrolyzer",
            CategoryKind::Chp => "chp",
            CategoryKind::Precharger => "precharger",
            CategoryKind::Fuse => "fuse",
            CategoryKind::VoltageTransformer => "voltage_transformer",
            CategoryKind::Hvac => "hvac",
            CategoryKind::Relay => "relay",
        }
    }

    /// Returns true if components of this category can carry a sub-type.
    pub fn has_sub_type(&self) -> bool {
        Self::WITH_SUB_TYPE.contains(self)
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
            .map_err(|_| format!("Unknown component category: {s}"))
    }
}

impl Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Predicates for checking the component category of a `Node`.
pub(crate) trait CategoryPredicates: Node {
    fn is_unspecified(&self) -> bool {
        self.category() == ComponentCategory::Unspecified
    }

    fn is_grid(&self) -> bool {
        self.category() == ComponentCategory::Grid
    }
}

/// Implement the `CategoryPredicates` trait for all types that implement the
/// `Node` trait.
impl<T: Node> CategoryPredicates for T {}
