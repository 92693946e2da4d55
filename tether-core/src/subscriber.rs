// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Completion, Demand, Subscription};
use alloc::sync::Arc;

/// Receives values and a terminal event from a publisher.
///
/// Subscribers are shared (`Arc`) between the publisher that feeds them and whoever
/// owns them, so every callback takes `&self` and implementations use interior
/// mutability.
pub trait Subscriber: Send + Sync {
    /// Type of the values received.
    type Input;
    /// Type of the failure that may terminate the stream.
    type Failure;

    /// Called once when the subscriber is attached to a publisher.
    fn receive_subscription(&self, subscription: Arc<dyn Subscription>);

    /// Called for every value. Returns additional demand on top of what was already
    /// requested.
    fn receive(&self, input: Self::Input) -> Demand;

    /// Called at most once, after which nothing else is delivered.
    fn receive_completion(&self, completion: Completion<Self::Failure>);
}

/// A type-erased, shared subscriber.
pub type BoxSubscriber<T, E> = Arc<dyn Subscriber<Input = T, Failure = E>>;
