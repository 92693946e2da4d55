// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::trace;
use async_channel::Receiver;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::pin_project;
use tether_core::{Cancellable, Completion, Publisher, PublisherExt};

/// Stream of the values of a publisher, returned by
/// [`into_stream`](PublisherStreamExt::into_stream).
///
/// Holds the subscription; dropping the stream cancels it.
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct PublisherStream<T, E> {
    #[pin]
    receiver: Receiver<Result<T, E>>,
    cancellable: Cancellable,
}

impl<T, E> PublisherStream<T, E> {
    /// Cancels the subscription. Items already buffered are still yielded, then
    /// the stream ends.
    pub fn cancel(&mut self) {
        self.cancellable.cancel();
        self.receiver.close();
    }
}

impl<T, E> Stream for PublisherStream<T, E> {
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().receiver.poll_next(cx)
    }
}

/// Extension trait bridging publishers into async streams.
pub trait PublisherStreamExt: Publisher + Sized {
    /// Subscribes with unlimited demand and buffers everything in an unbounded
    /// channel.
    ///
    /// Values arrive as `Ok`, a failure arrives as a final `Err`, and
    /// [`Completion::Finished`] ends the stream.
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use tether_core::PassthroughSubject;
    /// use tether_exec::PublisherStreamExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let subject = PassthroughSubject::<i32, String>::new();
    /// let mut stream = subject.clone().into_stream();
    ///
    /// subject.send(1).unwrap();
    /// subject.fail("boom".to_string()).unwrap();
    ///
    /// assert_eq!(stream.next().await, Some(Ok(1)));
    /// assert_eq!(stream.next().await, Some(Err("boom".to_string())));
    /// assert_eq!(stream.next().await, None);
    /// # }
    /// ```
    fn into_stream(self) -> PublisherStream<Self::Output, Self::Failure>
    where
        Self::Output: Send + 'static,
        Self::Failure: Send + 'static;
}

impl<P> PublisherStreamExt for P
where
    P: Publisher + Sized,
{
    fn into_stream(self) -> PublisherStream<P::Output, P::Failure>
    where
        P::Output: Send + 'static,
        P::Failure: Send + 'static,
    {
        let (sender, receiver) = async_channel::unbounded();
        let completion_sender = sender.clone();

        let cancellable = self.sink(
            move |value| {
                // A closed channel means the stream was dropped or cancelled.
                let _ = sender.try_send(Ok(value));
            },
            move |completion| {
                if let Completion::Failure(error) = completion {
                    trace!("publisher stream received failure");
                    let _ = completion_sender.try_send(Err(error));
                }
                completion_sender.close();
            },
        );

        PublisherStream {
            receiver,
            cancellable,
        }
    }
}
