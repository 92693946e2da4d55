// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Demand;

/// The link between one publisher and one subscriber.
///
/// A subscription is handed to the subscriber through
/// [`Subscriber::receive_subscription`](crate::Subscriber::receive_subscription).
/// The subscriber drives it: nothing flows until demand is requested, and
/// `cancel` tears the link down.
///
/// Both methods may be called from any thread, any number of times.
pub trait Subscription: Send + Sync {
    /// Signals that the subscriber is ready for up to `demand` more values.
    fn request(&self, demand: Demand);

    /// Stops delivery and releases upstream resources. Idempotent.
    fn cancel(&self);
}
