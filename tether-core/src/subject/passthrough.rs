// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::implementation::SubjectCore;
use crate::{BoxSubscriber, Completion, Publisher, SubjectError};
use core::convert::Infallible;

/// A hot subject that broadcasts values to the subscribers currently attached.
///
/// Values sent while a subscriber has no outstanding demand are dropped for that
/// subscriber. See the [module documentation](crate::subject) for an example.
pub struct PassthroughSubject<T, E = Infallible> {
    core: SubjectCore<T, E>,
}

impl<T, E> PassthroughSubject<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Creates an open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: SubjectCore::new(None),
        }
    }

    /// Sends a value to every subscriber with demand.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already completed.
    pub fn send(&self, value: T) -> Result<(), SubjectError> {
        self.core.send(value, false)
    }

    /// Sends the terminal event and detaches every subscriber.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already completed.
    pub fn send_completion(&self, completion: Completion<E>) -> Result<(), SubjectError> {
        self.core.send_completion(completion)
    }

    /// Shorthand for `send_completion(Completion::Finished)`.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already completed.
    pub fn finish(&self) -> Result<(), SubjectError> {
        self.send_completion(Completion::Finished)
    }

    /// Shorthand for `send_completion(Completion::Failure(error))`.
    ///
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

    /// Number of attached subscribers. Cancelled subscribers are removed eagerly.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.core.subscriber_count()
    }
}

impl<T, E> Default for PassthroughSubject<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for PassthroughSubject<T, E> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<T, E> Publisher for PassthroughSubject<T, E>
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
