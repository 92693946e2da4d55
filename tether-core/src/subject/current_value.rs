// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::implementation::SubjectCore;
use crate::{BoxSubscriber, Completion, Publisher, SubjectError};
use core::convert::Infallible;

/// A subject that remembers the last value sent.
///
/// Each subscriber receives the current value on its first non-zero demand
/// request, then every later value like a [`PassthroughSubject`](super::PassthroughSubject).
///
/// ```
/// use tether_core::{CurrentValueSubject, PublisherExt};
/// use std::sync::{Arc, Mutex};
///
/// let subject = CurrentValueSubject::<&str>::new("idle");
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// let _cancellable = subject.sink_values(move |state| sink.lock().unwrap().push(state));
/// subject.send("busy").unwrap();
///
/// assert_eq!(*seen.lock().unwrap(), vec!["idle", "busy"]);
/// assert_eq!(subject.value(), "busy");
/// ```
pub struct CurrentValueSubject<T, E = Infallible> {
    core: SubjectCore<T, E>,
}

impl<T, E> CurrentValueSubject<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            core: SubjectCore::new(Some(initial)),
        }
    }

    /// The most recently sent value (or the initial one).
    #[must_use]
    pub fn value(&self) -> T {
        // The core is always created with a value and `send` only ever replaces it.
        self.core
            .current()
            .unwrap_or_else(|| unreachable!("current value subject without a value"))
    }

    /// Replaces the current value and broadcasts it.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already completed.
    pub fn send(&self, value: T) -> Result<(), SubjectError> {
        self.core.send(value, true)
    }

    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already completed.
    pub fn send_completion(&self, completion: Completion<E>) -> Result<(), SubjectError> {
        self.core.send_completion(completion)
    }

    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already completed.
    pub fn finish(&self) -> Result<(), SubjectError> {
        self.send_completion(Completion::Finished)
    }

    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already completed.
    pub fn fail(&self, error: E) -> Result<(), SubjectError> {
        self.send_completion(Completion::Failure(error))
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.core.is_closed()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.core.subscriber_count()
    }
}

impl<T, E> Clone for CurrentValueSubject<T, E> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<T, E> Publisher for CurrentValueSubject<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    type Output = T;
    type Failure = E;

    fn receive_subscriber(&self, subscriber: BoxSubscriber<T, E>) {
        self.core.subscribe(subscriber);
    }
}
