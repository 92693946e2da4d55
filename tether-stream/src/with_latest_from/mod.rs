// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `with_latest_from` operator for publishers.
//!
//! The operator pairs every value of the trigger publisher (`self`) with the most
//! recent value of a sampled publisher (`other`).
//!
//! # Behavior
//!
//! - Emissions are triggered **only** by the trigger publisher
//! - Sampled values are stored but never trigger an emission
//! - Until the sampled publisher emits, the second element of the pair is `None`
//! - Completion and failure come **only** from the trigger publisher; the sampled
//!   publisher's termination is ignored and its last value stays in use
//! - Nothing is subscribed upstream until the downstream requests demand, and that
//!   happens at most once per subscription
//!
//! # Examples
//!
//! ```rust
//! use tether_core::{PassthroughSubject, PublisherExt};
//! use tether_stream::WithLatestFromExt;
//! use std::sync::{Arc, Mutex};
//!
//! let clicks = PassthroughSubject::<&str>::new();
//! let theme = PassthroughSubject::<&str>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! let _cancellable = clicks
//!     .clone()
//!     .with_latest_from(theme.clone())
//!     .sink_values(move |pair| sink.lock().unwrap().push(pair));
//!
//! clicks.send("save").unwrap();
//! theme.send("dark").unwrap();
//! clicks.send("load").unwrap();
//!
//! assert_eq!(
//!     *seen.lock().unwrap(),
//!     vec![("save", None), ("load", Some("dark"))]
//! );
//! ```

mod implementation;

use alloc::sync::Arc;
use implementation::WithLatestFromSubscription;
use tether_core::{BoxSubscriber, Publisher};

/// Publisher returned by [`with_latest_from`](WithLatestFromExt::with_latest_from).
///
/// Stateless until subscribed: it only stores the two upstream publishers, and each
/// subscriber gets an independent subscription with its own latest value.
#[derive(Clone)]
#[must_use = "publishers do nothing until subscribed"]
pub struct WithLatestFrom<P, O> {
    trigger: P,
    sampled: O,
}

impl<P, O> Publisher for WithLatestFrom<P, O>
where
    P: Publisher + Clone + 'static,
    O: Publisher<Failure = P::Failure> + Clone + 'static,
    P::Output: Send + 'static,
    O::Output: Clone + Send + 'static,
    P::Failure: Send + 'static,
{
    type Output = (P::Output, Option<O::Output>);
    type Failure = P::Failure;

    fn receive_subscriber(&self, subscriber: BoxSubscriber<Self::Output, Self::Failure>) {
        let subscription = WithLatestFromSubscription::new(
            Arc::clone(&subscriber),
            self.trigger.clone(),
            self.sampled.clone(),
        );
        subscriber.receive_subscription(subscription);
    }
}

/// Extension trait providing the `with_latest_from` operator for publishers.
pub trait WithLatestFromExt: Publisher + Sized {
    /// Combines each value of `self` with the latest value of `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - Sampled publisher whose latest value is attached to every
    ///   emission of `self`. Must share the failure type of `self`.
    ///
    /// # Returns
    ///
    /// A publisher of `(Self::Output, Option<O::Output>)` that completes or fails
    /// exactly when `self` does.
    ///
    /// # Thread Safety
    ///
    /// The two upstreams may emit on different threads. The latest value is guarded
    /// by a lock that is only held for the read or the overwrite itself.
    ///
    /// # See Also
    ///
    /// - [`map`](crate::MapExt::map) - Flattens nested pairs when chaining
    fn with_latest_from<O>(self, other: O) -> WithLatestFrom<Self, O>
    where
        O: Publisher<Failure = Self::Failure>;
}

impl<P> WithLatestFromExt for P
where
    P: Publisher + Sized,
{
    fn with_latest_from<O>(self, other: O) -> WithLatestFrom<Self, O>
    where
        O: Publisher<Failure = Self::Failure>,
    {
        WithLatestFrom {
            trigger: self,
            sampled: other,
        }
    }
}
