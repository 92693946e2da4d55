// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value transformation that leaves the subscription untouched.

use alloc::sync::Arc;
use core::marker::PhantomData;
use tether_core::{BoxSubscriber, Completion, Demand, Publisher, Subscriber, Subscription};

/// Publisher returned by [`map`](MapExt::map).
#[must_use = "publishers do nothing until subscribed"]
pub struct Map<P, F> {
    upstream: P,
    transform: Arc<F>,
}

impl<P: Clone, F> Clone for Map<P, F> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<P, F, U> Publisher for Map<P, F>
where
    P: Publisher,
    P::Output: 'static,
    P::Failure: 'static,
    F: Fn(P::Output) -> U + Send + Sync + 'static,
    U: 'static,
{
    type Output = U;
    type Failure = P::Failure;

    fn receive_subscriber(&self, subscriber: BoxSubscriber<U, P::Failure>) {
        self.upstream.receive_subscriber(Arc::new(MapSubscriber {
            downstream: subscriber,
            transform: Arc::clone(&self.transform),
            _input: PhantomData,
        }));
    }
}

// The upstream subscription is handed straight to the downstream, so demand and
// cancellation bypass this subscriber entirely.
struct MapSubscriber<T, U, E, F> {
    downstream: BoxSubscriber<U, E>,
    transform: Arc<F>,
    _input: PhantomData<fn(T)>,
}

impl<T, U, E, F> Subscriber for MapSubscriber<T, U, E, F>
where
    F: Fn(T) -> U + Send + Sync,
{
    type Input = T;
    type Failure = E;

    fn receive_subscription(&self, subscription: Arc<dyn Subscription>) {
        self.downstream.receive_subscription(subscription);
    }

    fn receive(&self, input: T) -> Demand {
        self.downstream.receive((self.transform)(input))
    }

    fn receive_completion(&self, completion: Completion<E>) {
        self.downstream.receive_completion(completion);
    }
}

/// Extension trait providing the `map` operator for publishers.
pub trait MapExt: Publisher + Sized {
    /// Transforms every value with `transform`; completion passes through unchanged.
    ///
    /// ```rust
    /// use tether_core::{PassthroughSubject, PublisherExt};
    /// use tether_stream::MapExt;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let subject = PassthroughSubject::<i32>::new();
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    ///
    /// let sink = Arc::clone(&seen);
    /// let _cancellable = subject
    ///     .clone()
    ///     .map(|value| value * 10)
    ///     .sink_values(move |value| sink.lock().unwrap().push(value));
    ///
    /// subject.send(4).unwrap();
    /// assert_eq!(*seen.lock().unwrap(), vec![40]);
    /// ```
    fn map<F, U>(self, transform: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U + Send + Sync + 'static;
}

impl<P> MapExt for P
where
    P: Publisher + Sized,
{
    fn map<F, U>(self, transform: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U + Send + Sync + 'static,
    {
        Map {
            upstream: self,
            transform: Arc::new(transform),
        }
    }
}
