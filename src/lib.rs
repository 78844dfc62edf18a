// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Frequenz Reporting Bridge

This library turns the batched responses of the Frequenz reporting service
into a stream of individual samples, and describes the microgrid the samples
come from as a graph of components.

## Receiving samples

The reporting service delivers data in pages, each holding many raw
[`MetricSample`]s.  A [`BatchReceiver`] wraps such a stream of pages and hands
out one [`Sample`] at a time through the pull-based [`Receiver`] trait:

```ignore
let mut receiver = single_metric_receiver(
    &client, microgrid_id, component_id, Metric::AcActivePower, start, end, None,
);
while receiver.ready().await? {
    let sample = receiver.consume()?;
    println!("{sample}");
}
```

[`ready`][Receiver::ready] is the only operation that waits.  It is
cancellation safe: dropping it before it completes doesn't lose any data.

Receivers are usually created from a [`ReportingClient`] with
[`list_microgrid_components_data_receiver`] or [`single_metric_receiver`].

## The component graph

A [`ComponentGraph`] holds the components of a microgrid and the connections
between them, indexed for lookups by id and by category.  It can be built
from [`Component`]s and [`Connection`]s with
[`build`][ComponentGraph::build], or from a JSON description with
[`from_json`][ComponentGraph::from_json].

Any other component and connection types can be used as well, by
implementing the [`Node`] and [`Edge`] traits for them and calling
[`try_new`][ComponentGraph::try_new].

Every graph is checked for duplicate component ids, components without a
category, and connections to unknown components.  Stricter topology checks
can be enabled with a [`ComponentGraphConfig`].
*/

mod client;
pub use client::{
    list_microgrid_components_data_receiver, single_metric_receiver, ComponentsDataQuery,
    ReportingClient,
};

mod component;
pub use component::{Component, ComponentDescriptor, Connection};

mod component_category;
pub use component_category::{
    BatteryType, CategoryKind, ComponentCategory, EvChargerType, InverterType,
};

mod config;
pub use config::ComponentGraphConfig;

mod graph;
pub use graph::{iterators, ComponentGraph};

mod graph_traits;
pub use graph_traits::{Edge, Node};

mod error;
pub use error::{Error, ErrorKind};

mod receiver;
pub use receiver::{BatchReceiver, Receiver};

mod sample;
pub use sample::{Metric, MetricSample, Quantity, Sample};
