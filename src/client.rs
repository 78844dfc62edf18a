// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Creating receivers from a reporting service client.

use chrono::{DateTime, Utc};
use futures::Stream;

use crate::{BatchReceiver, Error, Metric, MetricSample};

/// The parameters of a request for component data.
///
/// The query is passed on to the [`ReportingClient`] as it is.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentsDataQuery {
    /// Pairs of a microgrid id and the ids of the components in it.
    pub microgrid_components: Vec<(u64, Vec<u64>)>,
    pub metrics: Vec<Metric>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// The resampling period in seconds, or `None` for raw data.
    pub resolution: Option<u32>,
    pub include_states: bool,
    pub include_bounds: bool,
}

impl ComponentsDataQuery {
    /// Creates a query for raw data, without states or bounds.
    pub fn new(
        microgrid_components: Vec<(u64, Vec<u64>)>,
        metrics: Vec<Metric>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            microgrid_components,
            metrics,
            start,
            end,
            resolution: None,
            include_states: false,
            include_bounds: false,
        }
    }

    pub fn with_resolution(mut self, resolution: Option<u32>) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_states(mut self, include_states: bool) -> Self {
        self.include_states = include_states;
        self
    }

    pub fn with_bounds(mut self, include_bounds: bool) -> Self {
        self.include_bounds = include_bounds;
        self
    }
}

/**
A client of the reporting service, that delivers component data in batches.

Implementations own the transport.  Failures while fetching a batch are
reported as stream items, using [`Error::transport`].

```ignore
struct MyClient { /* ... */ }

impl ReportingClient for MyClient {
    type Batch = Vec<MetricSample>;
    type Source = BoxStream<'static, Result<Vec<MetricSample>, Error>>;

    fn list_microgrid_components_data_batch(
        &self,
        query: &ComponentsDataQuery,
    ) -> Self::Source {
        // fetch pages for `query` ...
    }
}
```
*/
pub trait ReportingClient {
    /// A single page of data.
    type Batch: IntoIterator<Item = MetricSample, IntoIter: Send> + Send;

    /// The stream of pages returned for a query.
    type Source: Stream<Item = Result<Self::Batch, Error>> + Unpin + Send;

    /// Starts streaming the data selected by `query`.
    fn list_microgrid_components_data_batch(&self, query: &ComponentsDataQuery) -> Self::Source;
}

/// Returns a receiver of the samples selected by `query`, one at a time.
pub fn list_microgrid_components_data_receiver<C: ReportingClient>(
    client: &C,
    query: &ComponentsDataQuery,
) -> BatchReceiver<C::Source, C::Batch> {
    tracing::debug!(
        "Requesting {} metric(s) for {} microgrid(s) from {} to {}.",
        query.metrics.len(),
        query.microgrid_components.len(),
        query.start,
        query.end
    );
    BatchReceiver::new(client.list_microgrid_components_data_batch(query))
}

/// Returns a receiver of the samples of a single metric of a single
/// component.
pub fn single_metric_receiver<C: ReportingClient>(
    client: &C,
    microgrid_id: u64,
    component_id: u64,
    metric: Metric,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    resolution: Option<u32>,
) -> BatchReceiver<C::Source, C::Batch> {
    let query = ComponentsDataQuery::new(
        vec![(microgrid_id, vec![component_id])],
        vec![metric],
        start,
        end,
    )
    .with_resolution(resolution);
    list_microgrid_components_data_receiver(client, &query)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::TimeZone;
    use futures::stream::{self, Iter};
    use futures::StreamExt;

    use super::*;
    use crate::{Quantity, Receiver, Sample};

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    type Pages = Iter<std::vec::IntoIter<Result<Vec<MetricSample>, Error>>>;

    /// Serves stored samples in pages of `page_size`, remembering the last
    /// query it was given.
    struct MockClient {
        data: Vec<MetricSample>,
        page_size: usize,
        last_query: Mutex<Option<ComponentsDataQuery>>,
    }

    impl MockClient {
        fn new(page_size: usize) -> Self {
            let mut data = vec![];
            for secs in 0..5 {
                for (component_id, metric) in [
                    (4, Metric::AcActivePower),
                    (4, Metric::BatterySocPct),
                    (7, Metric::AcActivePower),
                ] {
                    data.push(MetricSample {
                        timestamp: ts(secs),
                        microgrid_id: 1,
                        component_id,
                        metric,
                        value: (component_id * 100) as f64 + secs as f64,
                    });
                }
            }
            Self {
                data,
                page_size,
                last_query: Mutex::new(None),
            }
        }
    }

    impl ReportingClient for MockClient {
        type Batch = Vec<MetricSample>;
        type Source = Pages;

        fn list_microgrid_components_data_batch(&self, query: &ComponentsDataQuery) -> Pages {
            *self.last_query.lock().unwrap() = Some(query.clone());

            let selected: Vec<MetricSample> = self
                .data
                .iter()
                .filter(|s| {
                    query.metrics.contains(&s.metric)
                        && query.start <= s.timestamp
                        && s.timestamp < query.end
                        && query.microgrid_components.iter().any(|(mid, cids)| {
                            *mid == s.microgrid_id && cids.contains(&s.component_id)
                        })
                })
                .cloned()
                .collect();
            let pages: Vec<_> = selected
                .chunks(self.page_size)
                .map(|page| Ok(page.to_vec()))
                .collect();
            stream::iter(pages)
        }
    }

    #[test]
    fn test_query_builder() {
        let query = ComponentsDataQuery::new(
            vec![(1, vec![4, 7])],
            vec![Metric::AcActivePower],
            ts(0),
            ts(60),
        );
        assert_eq!(query.resolution, None);
        assert!(!query.include_states);
        assert!(!query.include_bounds);

        let query = query
            .with_resolution(Some(15))
            .with_states(true)
            .with_bounds(true);
        assert_eq!(query.resolution, Some(15));
        assert!(query.include_states);
        assert!(query.include_bounds);
        assert_eq!(query.microgrid_components, vec![(1, vec![4, 7])]);
    }

    #[tokio::test]
    async fn test_components_data_receiver() -> Result<(), Error> {
        let client = MockClient::new(2);
        let query = ComponentsDataQuery::new(
            vec![(1, vec![4, 7])],
            vec![Metric::AcActivePower],
            ts(1),
            ts(3),
        )
        .with_states(true);

        let mut receiver = list_microgrid_components_data_receiver(&client, &query);
        let mut values = vec![];
        while let Some(sample) = receiver.receive().await? {
            values.push(sample.value().base_value());
        }
        assert_eq!(values, vec![401.0, 701.0, 402.0, 702.0]);
        assert_eq!(*client.last_query.lock().unwrap(), Some(query));

        Ok(())
    }

    #[tokio::test]
    async fn test_single_metric_receiver() -> Result<(), Error> {
        let client = MockClient::new(3);
        let mut receiver =
            single_metric_receiver(&client, 1, 4, Metric::BatterySocPct, ts(0), ts(10), Some(1));

        let mut samples = vec![];
        while receiver.ready().await? {
            samples.push(receiver.consume()?);
        }
        assert_eq!(
            samples,
            (0..5)
                .map(|secs| Sample::new(ts(secs), Quantity::new(400.0 + secs as f64)))
                .collect::<Vec<_>>()
        );

        let query = client.last_query.lock().unwrap().clone();
        assert_eq!(
            query,
            Some(
                ComponentsDataQuery::new(
                    vec![(1, vec![4])],
                    vec![Metric::BatterySocPct],
                    ts(0),
                    ts(10)
                )
                .with_resolution(Some(1))
            )
        );

        Ok(())
    }

    /// Compiles only if every client's receiver implements `Receiver`.
    fn generic_receiver<C: ReportingClient>(
        client: &C,
        query: &ComponentsDataQuery,
    ) -> impl Receiver<Sample<Quantity>> {
        list_microgrid_components_data_receiver(client, query)
    }

    #[tokio::test]
    async fn test_receiver_from_any_client() -> Result<(), Error> {
        let client = MockClient::new(4);
        let query = ComponentsDataQuery::new(
            vec![(1, vec![7])],
            vec![Metric::AcActivePower],
            ts(3),
            ts(10),
        );

        let samples = generic_receiver(&client, &query)
            .into_stream()
            .collect::<Vec<_>>()
            .await;
        assert_eq!(
            samples,
            vec![
                Ok(Sample::new(ts(3), Quantity::new(703.0))),
                Ok(Sample::new(ts(4), Quantity::new(704.0))),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_selection() -> Result<(), Error> {
        let client = MockClient::new(2);
        let mut receiver =
            single_metric_receiver(&client, 2, 4, Metric::AcActivePower, ts(0), ts(10), None);

        assert!(!receiver.ready().await?);
        assert!(receiver
            .consume()
            .is_err_and(|e| e == Error::invalid_state("Receiver stopped.")));

        Ok(())
    }
}
