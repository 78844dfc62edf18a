// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits that need to be implemented by the types
//! that represent a node and an edge.

use crate::component_category::ComponentCategory;

/**
This trait needs to be implemented by the type that represents a node.

The crate ships [`Component`][crate::Component], which is what
[`ComponentGraph::build`][crate::ComponentGraph::build] produces from raw
descriptors.  Other component types, for example ones generated from protobuf
definitions, can be used directly by implementing this trait.

<details>
<summary>Example implementation for a generated component type:</summary>

```ignore
impl frequenz_reporting_bridge::Node for pb::Component {
    fn component_id(&self) -> u64 {
        self.id as u64
    }

    fn category(&self) -> frequenz_reporting_bridge::ComponentCategory {
        use frequenz_reporting_bridge as rb;

        match pb::ComponentCategory::try_from(self.category) {
            Ok(pb::ComponentCategory::Grid) => rb::ComponentCategory::Grid,
            Ok(pb::ComponentCategory::Meter) => rb::ComponentCategory::Meter,
            Ok(pb::ComponentCategory::Inverter) => {
                rb::ComponentCategory::Inverter(match self.inverter_type() {
                    pb::InverterType::Solar => rb::InverterType::Solar,
                    pb::InverterType::Battery => rb::InverterType::Battery,
                    pb::InverterType::Hybrid => rb::InverterType::Hybrid,
                    pb::InverterType::Unspecified => rb::InverterType::Unspecified,
                })
            }
            // ...
            _ => rb::ComponentCategory::Unspecified,
        }
    }
}
```

</details>
*/
pub trait Node {
    /// Returns the component id of the component.
    fn component_id(&self) -> u64;
    /// Returns the category of the component.
    fn category(&self) -> ComponentCategory;
}

/**
This trait needs to be implemented by the type that represents a connection.

<details>
<summary>Example implementation for a generated connection type:</summary>

```ignore
impl frequenz_reporting_bridge::Edge for pb::ComponentConnection {
    fn source(&self) -> u64 {
        self.source_component_id
    }

    fn destination(&self) -> u64 {
        self.destination_component_id
    }
}
```

</details>
*/
pub trait Edge {
    /// Returns the source component id of the connection.
    fn source(&self) -> u64;
    /// Returns the destination component id of the connection.
    fn destination(&self) -> u64;
}
