// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A subscriber that records what it receives.

use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tether_core::mutex::Mutex;
use tether_core::{Completion, Demand, Subscriber, Subscription};

/// Records values, completions and the subscription it was handed.
///
/// Demand is manual unless an initial demand is given with
/// [`with_demand`](CapturingSubscriber::with_demand). The subscription is dropped on
/// completion, mirroring what a well-behaved subscriber does.
pub struct CapturingSubscriber<T, E = Infallible> {
    initial_demand: Demand,
    subscription: Mutex<Option<Arc<dyn Subscription>>>,
    subscriptions_received: AtomicUsize,
    values: Mutex<Vec<T>>,
    completions: Mutex<Vec<Completion<E>>>,
}

impl<T, E> CapturingSubscriber<T, E> {
    /// Creates a subscriber that requests nothing on its own.
    #[must_use]
    pub fn new() -> Self {
        Self::with_demand(Demand::none())
    }

    /// Creates a subscriber that requests `demand` as soon as it is subscribed.
    #[must_use]
    pub fn with_demand(demand: Demand) -> Self {
        Self {
            initial_demand: demand,
            subscription: Mutex::new(None),
            subscriptions_received: AtomicUsize::new(0),
            values: Mutex::new(Vec::new()),
            completions: Mutex::new(Vec::new()),
        }
    }

    /// The subscription currently held, if any.
    pub fn subscription(&self) -> Option<Arc<dyn Subscription>> {
        self.subscription.lock().clone()
    }

    /// Number of times `receive_subscription` was called.
    pub fn subscriptions_received(&self) -> usize {
        self.subscriptions_received.load(Ordering::SeqCst)
    }

    /// Requests `demand` on the held subscription. Returns `false` if there is none.
    pub fn request(&self, demand: Demand) -> bool {
        let subscription = self.subscription();
        match subscription {
            Some(subscription) => {
                subscription.request(demand);
                true
            }
            None => false,
        }
    }

    /// Cancels and releases the held subscription.
    pub fn cancel(&self) {
        let subscription = self.subscription.lock().take();
        if let Some(subscription) = subscription {
            subscription.cancel();
        }
    }

    pub fn completions(&self) -> Vec<Completion<E>>
    where
        E: Clone,
    {
        self.completions.lock().clone()
    }

    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.lock().clone()
    }

    pub fn value_count(&self) -> usize {
        self.values.lock().len()
    }
}

impl<T, E> Default for CapturingSubscriber<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Subscriber for CapturingSubscriber<T, E>
where
    T: Send,
    E: Send,
{
    type Input = T;
    type Failure = E;

    fn receive_subscription(&self, subscription: Arc<dyn Subscription>) {
        self.subscriptions_received.fetch_add(1, Ordering::SeqCst);
        *self.subscription.lock() = Some(Arc::clone(&subscription));
        if !self.initial_demand.is_none() {
            subscription.request(self.initial_demand);
        }
    }

    fn receive(&self, input: T) -> Demand {
        self.values.lock().push(input);
        Demand::none()
    }

    fn receive_completion(&self, completion: Completion<E>) {
        let subscription = self.subscription.lock().take();
        self.completions.lock().push(completion);
        drop(subscription);
    }
}
