// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{BoxSubscriber, Publisher};
use alloc::sync::Arc;

/// A type-erased publisher.
///
/// Cloning is cheap: all clones share the same underlying publisher.
pub struct AnyPublisher<T, E> {
    inner: Arc<dyn Publisher<Output = T, Failure = E>>,
}

impl<T, E> AnyPublisher<T, E> {
    pub fn new<P>(publisher: P) -> Self
    where
        P: Publisher<Output = T, Failure = E> + 'static,
    {
        Self {
            inner: Arc::new(publisher),
        }
    }
}

impl<T, E> Clone for AnyPublisher<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, E> Publisher for AnyPublisher<T, E> {
    type Output = T;
    type Failure = E;

    fn receive_subscriber(&self, subscriber: BoxSubscriber<T, E>) {
        self.inner.receive_subscriber(subscriber);
    }
}
