// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{AnyPublisher, BoxSubscriber, Cancellable, Completion, Publisher, Sink};
use alloc::sync::Arc;

/// Convenience methods available on every [`Publisher`].
pub trait PublisherExt: Publisher {
    /// Attaches a closure subscriber with unlimited demand.
    ///
    /// The returned [`Cancellable`] keeps the subscription alive; dropping it cancels.
    ///
    /// # Example
    ///
    /// ```
    /// use tether_core::{Completion, PassthroughSubject, PublisherExt};
    /// use std::sync::{Arc, Mutex};
    ///
    /// let subject = PassthroughSubject::<i32, String>::new();
    /// let received = Arc::new(Mutex::new(Vec::new()));
    ///
    /// let values = Arc::clone(&received);
    /// let _cancellable = subject.sink(
    ///     move |value| values.lock().unwrap().push(value),
    ///     |completion| assert_eq!(completion, Completion::Finished),
    /// );
    ///
    /// subject.send(1).unwrap();
    /// subject.send(2).unwrap();
    /// subject.finish().unwrap();
    ///
    /// assert_eq!(*received.lock().unwrap(), vec![1, 2]);
    /// ```
    fn sink<F, C>(&self, receive_value: F, receive_completion: C) -> Cancellable
    where
        F: Fn(Self::Output) + Send + Sync + 'static,
        C: Fn(Completion<Self::Failure>) + Send + Sync + 'static,
        Self::Output: Send + 'static,
        Self::Failure: Send + 'static,
    {
        let sink = Arc::new(Sink::new(receive_value, receive_completion));
        let subscriber: BoxSubscriber<Self::Output, Self::Failure> = sink.clone();
        self.receive_subscriber(subscriber);
        Cancellable::new(move || sink.cancel())
    }

    /// Like [`sink`](PublisherExt::sink), ignoring the terminal event.
    fn sink_values<F>(&self, receive_value: F) -> Cancellable
    where
        F: Fn(Self::Output) + Send + Sync + 'static,
        Self::Output: Send + 'static,
        Self::Failure: Send + 'static,
    {
        self.sink(receive_value, |_| {})
    }

    /// Erases the concrete publisher type.
    fn boxed(self) -> AnyPublisher<Self::Output, Self::Failure>
    where
        Self: Sized + 'static,
    {
        AnyPublisher::new(self)
    }
}

impl<P> PublisherExt for P where P: Publisher + ?Sized {}
