// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::BoxSubscriber;
use alloc::sync::Arc;

/// Produces a sequence of values followed by an optional terminal event.
///
/// Attaching a subscriber hands it a [`Subscription`](crate::Subscription) via
/// [`Subscriber::receive_subscription`](crate::Subscriber::receive_subscription);
/// values only start flowing once the subscriber requests demand on it.
pub trait Publisher: Send + Sync {
    /// Type of the values produced.
    type Output;
    /// Type of the failure that may terminate the stream.
    type Failure;

    /// Attaches `subscriber` to this publisher.
    fn receive_subscriber(&self, subscriber: BoxSubscriber<Self::Output, Self::Failure>);
}

impl<P> Publisher for Arc<P>
where
    P: Publisher + ?Sized,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn receive_subscriber(&self, subscriber: BoxSubscriber<Self::Output, Self::Failure>) {
        (**self).receive_subscriber(subscriber);
    }
}
