// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Concrete component and connection types, and the raw descriptors they are
//! built from.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::component_category::{
    BatteryType, CategoryKind, ComponentCategory, EvChargerType, InverterType,
};
use crate::{Edge, Error, Node};

/// A microgrid component, as stored in a [`ComponentGraph`][crate::ComponentGraph]
/// built from descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    id: u64,
    category: ComponentCategory,
}

impl Component {
    /// Creates a new component.
    pub fn new(id: u64, category: ComponentCategory) -> Self {
        Self { id, category }
    }

    /// Returns the id of the component.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Node for Component {
    fn component_id(&self) -> u64 {
        self.id
    }

    fn category(&self) -> ComponentCategory {
        self.category
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.category, self.id)
    }
}

/// A directed connection between two components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Connection {
    start: u64,
    end: u64,
}

impl Connection {
    /// Creates a new connection from `start` to `end`.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Returns the id of the component the connection starts at.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Returns the id of the component the connection ends at.
    pub fn end(&self) -> u64 {
        self.end
    }
}

impl Edge for Connection {
    fn source(&self) -> u64 {
        self.start
    }

    fn destination(&self) -> u64 {
        self.end
    }
}

impl std::fmt::Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// The raw description of a component, as delivered by the microgrid API.
///
/// Sub-types are nested under the name of their category:
///
/// ```json
/// {"id": 4, "category": "inverter", "inverter": {"type": "solar"}}
/// ```
///
/// Fields other than `id`, `category` and the sub-type blocks are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ComponentDescriptor {
    pub id: u64,
    pub category: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl ComponentDescriptor {
    /// Creates a descriptor without any sub-type.
    pub fn new(id: u64, category: impl Into<String>) -> Self {
        Self {
            id,
            category: category.into(),
            metadata: Map::new(),
        }
    }

    /// Adds a sub-type block, keyed by `category`, with the given `type`.
    pub fn with_type(mut self, category: impl Into<String>, sub_type: impl Into<String>) -> Self {
        let mut block = Map::new();
        block.insert("type".to_string(), Value::String(sub_type.into()));
        self.metadata.insert(category.into(), Value::Object(block));
        self
    }
}

/// The raw description of a whole microgrid, as read from JSON.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct GraphDescriptor {
    pub(crate) components: Vec<ComponentDescriptor>,
    #[serde(default)]
    pub(crate) connections: Vec<Connection>,
}

impl TryFrom<ComponentDescriptor> for Component {
    type Error = Error;

    fn try_from(descriptor: ComponentDescriptor) -> Result<Self, Error> {
        let cid = descriptor.id;
        let kind: CategoryKind = serde_json::from_value(Value::String(descriptor.category.clone()))
            .map_err(|_| {
                Error::invalid_component(format!(
                    "Unknown ComponentCategory '{}' for component: {cid}",
                    descriptor.category
                ))
            })?;

        for other in CategoryKind::WITH_SUB_TYPE {
            if other != kind && descriptor.metadata.contains_key(other.name()) {
                return Err(Error::invalid_component(format!(
                    "Component {cid} of category {kind} can't have a sub-type for category {other}."
                )));
            }
        }

        let block = descriptor.metadata.get(kind.name());
        if !kind.has_sub_type() && block.is_some_and(has_type_field) {
            return Err(Error::invalid_component(format!(
                "Component {cid} of category {kind} can't have a sub-type."
            )));
        }

        let category = match kind {
            CategoryKind::Unspecified => ComponentCategory::Unspecified,
            CategoryKind::Grid => ComponentCategory::Grid,
            CategoryKind::Meter => ComponentCategory::Meter,
            CategoryKind::Battery => ComponentCategory::Battery(sub_type(
                cid,
                kind,
                block,
                BatteryType::Unspecified,
            )?),
            CategoryKind::Inverter => ComponentCategory::Inverter(sub_type(
                cid,
                kind,
                block,
                InverterType::Unspecified,
            )?),
            CategoryKind::EvCharger => ComponentCategory::EvCharger(sub_type(
                cid,
                kind,
                block,
                EvChargerType::Unspecified,
            )?),
            CategoryKind::Converter => ComponentCategory::Converter,
            CategoryKind::CryptoMiner => ComponentCategory::CryptoMiner,
            CategoryKind::Electrolyzer => ComponentCategory::Electrolyzer,
            CategoryKind::Chp => ComponentCategory::Chp,
            CategoryKind::Precharger => ComponentCategory::Precharger,
            CategoryKind::Fuse => ComponentCategory::Fuse,
            CategoryKind::VoltageTransformer => ComponentCategory::VoltageTransformer,
            CategoryKind::Hvac => ComponentCategory::Hvac,
            CategoryKind::Relay => ComponentCategory::Relay,
        };

        Ok(Component::new(cid, category))
    }
}

/// Returns true if `block` is an object with a non-null `type` field.
fn has_type_field(block: &Value) -> bool {
    matches!(block, Value::Object(fields) if fields.get("type").is_some_and(|t| !t.is_null()))
}

/// Reads the `type` field out of a sub-type block.
///
/// A missing block, or a block without a `type`, means the sub-type is
/// unspecified.
fn sub_type<T: DeserializeOwned>(
    cid: u64,
    kind: CategoryKind,
    block: Option<&Value>,
    unspecified: T,
) -> Result<T, Error> {
    let Some(block) = block else {
        return Ok(unspecified);
    };
    let Value::Object(fields) = block else {
        return Err(Error::invalid_component(format!(
            "Malformed {kind} type for component {cid}: {block}"
        )));
    };
    match fields.get("type") {
        None | Some(Value::Null) => Ok(unspecified),
        Some(value) => serde_json::from_value(value.clone()).map_err(|_| {
            Error::invalid_component(format!(
                "Invalid {kind} type {value} for component: {cid}"
            ))
        }),
    }
}
