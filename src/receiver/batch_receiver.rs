// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A [`Receiver`] that flattens a stream of batches into single samples.

use async_trait::async_trait;
use futures::{Stream, StreamExt};

use super::Receiver;
use crate::{Error, MetricSample, Quantity, Sample};

/// The state of a [`BatchReceiver`].
#[derive(Debug)]
enum State {
    /// No sample is buffered, but more may follow.
    Empty,
    /// A sample is waiting to be consumed.
    Buffered(Sample<Quantity>),
    /// The source is exhausted.  Never left once entered.
    Terminal,
}

/// A [`Receiver`] of samples from a source that delivers them in batches.
///
/// The source is a stream of batches, each of which can be iterated over to
/// get the [`MetricSample`]s in it.  The stream ending is the signal that
/// there is no more data.  Samples are delivered in the order of the batches
/// and then in the order within each batch; empty batches are skipped.
///
/// The receiver owns its source and drops it as soon as the source is
/// exhausted, or together with the receiver otherwise.
pub struct BatchReceiver<S, B>
where
    B: IntoIterator<Item = MetricSample>,
{
    source: Option<S>,
    batch: Option<B::IntoIter>,
    state: State,
}

impl<S, B> BatchReceiver<S, B>
where
    S: Stream<Item = Result<B, Error>> + Unpin,
    B: IntoIterator<Item = MetricSample>,
{
    /// Creates a new `BatchReceiver` that takes its batches from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source: Some(source),
            batch: None,
            state: State::Empty,
        }
    }

    /// Returns true if the source is exhausted.
    pub fn is_stopped(&self) -> bool {
        matches!(self.state, State::Terminal)
    }
}

#[async_trait]
impl<S, B> Receiver<Sample<Quantity>> for BatchReceiver<S, B>
where
    S: Stream<Item = Result<B, Error>> + Unpin + Send,
    B: IntoIterator<Item = MetricSample> + Send,
    B::IntoIter: Send,
{
    async fn ready(&mut self) -> Result<bool, Error> {
        loop {
            match self.state {
                State::Buffered(_) => return Ok(true),
                State::Terminal => return Ok(false),
                State::Empty => {}
            }

            if let Some(entry) = self.batch.as_mut().and_then(Iterator::next) {
                self.state = State::Buffered(entry.into());
                continue;
            }
            self.batch = None;

            // The source is only dropped when entering the terminal state.
            let Some(source) = self.source.as_mut() else {
                self.state = State::Terminal;
                continue;
            };

            // Nothing is modified until the next batch has arrived, so
            // dropping this future while it waits leaves the receiver as it
            // was.
            match source.next().await {
                Some(Ok(batch)) => {
                    tracing::trace!("Received a new batch of samples.");
                    self.batch = Some(batch.into_iter());
                }
                Some(Err(err)) => {
                    tracing::warn!("Failed to receive the next batch of samples: {}", err);
                    return Err(err);
                }
                None => {
                    tracing::debug!("Batch source exhausted, stopping receiver.");
                    self.source = None;
                    self.state = State::Terminal;
                }
            }
        }
    }

    fn consume(&mut self) -> Result<Sample<Quantity>, Error> {
        match std::mem::replace(&mut self.state, State::Empty) {
            State::Buffered(sample) => Ok(sample),
            State::Terminal => {
                self.state = State::Terminal;
                Err(Error::invalid_state("Receiver stopped."))
            }
            State::Empty => Err(Error::invalid_state(
                "No sample available, `ready()` must return true before calling `consume()`.",
            )),
        }
    }
}
