// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! RAII cancellation handle.

use crate::Subscription;
use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

/// Cancels whatever it guards when [`cancel`](Cancellable::cancel) is called or when
/// it is dropped, whichever comes first.
///
/// # Example
///
/// ```
/// use tether_core::{Cancellable, PassthroughSubject, PublisherExt};
/// use std::convert::Infallible;
///
/// let subject = PassthroughSubject::<i32, Infallible>::new();
/// let mut bag = Vec::new();
///
/// subject.sink_values(|value| println!("{value}")).store_in(&mut bag);
/// assert_eq!(subject.subscriber_count(), 1);
///
/// bag.clear();
/// assert_eq!(subject.subscriber_count(), 0);
/// ```
#[must_use = "dropping a Cancellable cancels it immediately"]
pub struct Cancellable {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Cancellable {
    /// Wraps a cancel action. The action runs at most once.
    pub fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Runs the cancel action if it has not run yet.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Returns `true` once the cancel action has run.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_none()
    }

    /// Moves this handle into `bag`, tying its lifetime to the collection.
    pub fn store_in(self, bag: &mut Vec<Cancellable>) {
        bag.push(self);
    }
}

impl From<Arc<dyn Subscription>> for Cancellable {
    fn from(subscription: Arc<dyn Subscription>) -> Self {
        Cancellable::new(move || subscription.cancel())
    }
}

impl Drop for Cancellable {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Cancellable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cancellable")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
