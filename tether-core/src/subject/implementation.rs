// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::{debug, trace};
use crate::mutex::Mutex;
use crate::{BoxSubscriber, Completion, Demand, SubjectError, Subscription};
use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;
use core::mem;

pub(crate) struct SubjectState<T, E> {
    pub(crate) completion: Option<Completion<E>>,
    pub(crate) current: Option<T>,
    pub(crate) conduits: Vec<Arc<Conduit<T, E>>>,
}

/// Shared machinery behind every subject: a list of per-subscriber conduits.
///
/// The state lock only guards the bookkeeping; it is always released before a
/// subscriber is called.
pub(crate) struct SubjectCore<T, E> {
    state: Arc<Mutex<SubjectState<T, E>>>,
}

impl<T, E> SubjectCore<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    pub(crate) fn new(current: Option<T>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                completion: None,
                current,
                conduits: Vec::new(),
            })),
        }
    }

    pub(crate) fn subscribe(&self, subscriber: BoxSubscriber<T, E>) {
        let conduit = Arc::new(Conduit::new(Arc::downgrade(&self.state), Arc::clone(&subscriber)));

        let completion = {
            let mut state = self.state.lock();
            match &state.completion {
                Some(completion) => Some(completion.clone()),
                None => {
                    state.conduits.push(Arc::clone(&conduit));
                    None
                }
            }
        };

        subscriber.receive_subscription(conduit.clone());

        if let Some(completion) = completion {
            conduit.complete(completion);
        }
    }

    /// Broadcasts `value`; when `retain` is set it also becomes the current value.
    pub(crate) fn send(&self, value: T, retain: bool) -> Result<(), SubjectError> {
        let conduits = {
            let mut state = self.state.lock();
            if state.completion.is_some() {
                return Err(SubjectError::Closed);
            }
            if retain {
                state.current = Some(value.clone());
            }
            state.conduits.clone()
        };

        for conduit in conduits {
            conduit.deliver(value.clone());
        }
        Ok(())
    }

    pub(crate) fn send_completion(&self, completion: Completion<E>) -> Result<(), SubjectError> {
        let conduits = {
            let mut state = self.state.lock();
            if state.completion.is_some() {
                return Err(SubjectError::Closed);
            }
            state.completion = Some(completion.clone());
            mem::take(&mut state.conduits)
        };

        debug!("subject completed, notifying {} subscribers", conduits.len());
        for conduit in conduits {
            conduit.complete(completion.clone());
        }
        Ok(())
    }

    pub(crate) fn current(&self) -> Option<T> {
        self.state.lock().current.clone()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.state.lock().completion.is_some()
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.state.lock().conduits.len()
    }
}

impl<T, E> Clone for SubjectCore<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

struct ConduitLink<T, E> {
    subscriber: Option<BoxSubscriber<T, E>>,
    demand: Demand,
    awaiting_first_request: bool,
}

/// The subscription a subject hands to each subscriber.
///
/// Holds the subscriber until cancellation or completion and only a weak pointer
/// back to the subject, so a dropped subject does not linger through its
/// subscribers.
pub(crate) struct Conduit<T, E> {
    subject: Weak<Mutex<SubjectState<T, E>>>,
    link: Mutex<ConduitLink<T, E>>,
}

impl<T, E> Conduit<T, E>
where
    T: Clone + Send + 'static,
    E: Send + 'static,
{
    fn new(subject: Weak<Mutex<SubjectState<T, E>>>, subscriber: BoxSubscriber<T, E>) -> Self {
        Self {
            subject,
            link: Mutex::new(ConduitLink {
                subscriber: Some(subscriber),
                demand: Demand::none(),
                awaiting_first_request: true,
            }),
        }
    }

    /// Delivers `value` if the subscriber is still attached and has demand left;
    /// otherwise the value is dropped for this subscriber.
    pub(crate) fn deliver(&self, value: T) {
        let subscriber = {
            let mut link = self.link.lock();
            if link.subscriber.is_none() || !link.demand.take_one() {
                return;
            }
            link.subscriber.clone()
        };

        if let Some(subscriber) = subscriber {
            let additional = subscriber.receive(value);
            if !additional.is_none() {
                self.link.lock().demand += additional;
            }
        }
    }

    pub(crate) fn complete(&self, completion: Completion<E>) {
        let subscriber = self.link.lock().subscriber.take();
        if let Some(subscriber) = subscriber {
            subscriber.receive_completion(completion);
        }
    }

    fn detach(&self) {
        if let Some(state) = self.subject.upgrade() {
            state
                .lock()
                .conduits
                .retain(|conduit| !core::ptr::eq(Arc::as_ptr(conduit), self));
        }
    }
}

impl<T, E> Subscription for Conduit<T, E>
where
    T: Clone + Send + 'static,
    E: Send + 'static,
{
    fn request(&self, demand: Demand) {
        if demand.is_none() {
            return;
        }

        let replay = {
            let mut link = self.link.lock();
            if link.subscriber.is_none() {
                return;
            }
            link.demand += demand;
            mem::replace(&mut link.awaiting_first_request, false)
        };

        if replay {
            let current = self.subject.upgrade().and_then(|state| {
                let state = state.lock();
                match state.completion {
                    Some(_) => None,
                    None => state.current.clone(),
                }
            });
            if let Some(value) = current {
                self.deliver(value);
            }
        }
    }

    fn cancel(&self) {
        let subscriber = self.link.lock().subscriber.take();
        if subscriber.is_some() {
            trace!("subject subscription cancelled");
            self.detach();
        }
        drop(subscriber);
    }
}
