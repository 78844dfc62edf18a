// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The pull-based `Receiver` protocol, and its implementation over batched
//! data sources.

mod batch_receiver;
pub use batch_receiver::BatchReceiver;

use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};

use crate::Error;

/**
A receiver of values, that are pulled one at a time.

Receiving a value is split in two steps: [`ready`][Receiver::ready] waits
until a value is available, and [`consume`][Receiver::consume] takes it.
Only `ready` can suspend, so `consume` can be called from synchronous code
once `ready` has returned `true`.

```ignore
while receiver.ready().await? {
    let sample = receiver.consume()?;
    println!("{sample}");
}
```
*/
#[async_trait]
pub trait Receiver<T: Send>: Send {
    /// Waits until a value is available.
    ///
    /// Returns `false` once the receiver has no more values to deliver.
    /// Calling it again before the value has been consumed returns the same
    /// result without doing anything else.
    async fn ready(&mut self) -> Result<bool, Error>;

    /// Takes the value made available by the last call to
    /// [`ready`][Receiver::ready].
    ///
    /// Returns an `InvalidState` error if no value is available.
    fn consume(&mut self) -> Result<T, Error>;

    /// Waits for the next value and takes it.
    ///
    /// Returns `None` once the receiver has no more values to deliver.
    async fn receive(&mut self) -> Result<Option<T>, Error> {
        if self.ready().await? {
            self.consume().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Turns the receiver into a [`Stream`][futures::Stream], which ends when
    /// the receiver has no more values to deliver.
    ///
    /// Errors are passed on as items; whether to keep polling after one is up
    /// to the caller.
    fn into_stream(self) -> BoxStream<'static, Result<T, Error>>
    where
        Self: Sized + 'static,
        T: 'static,
    {
        futures::stream::unfold(self, |mut receiver| async move {
            match receiver.receive().await {
                Ok(Some(value)) => Some((Ok(value), receiver)),
                Ok(None) => None,
                Err(err) => Some((Err(err), receiver)),
            }
        })
        .boxed()
    }
}
