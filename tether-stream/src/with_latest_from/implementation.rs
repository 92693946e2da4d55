// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::{debug, trace};
use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;
use core::mem;
use tether_core::mutex::Mutex;
use tether_core::{
    BoxSubscriber, Cancellable, Completion, Demand, Publisher, PublisherExt, Subscription,
};

type Pair<P, O> = (<P as Publisher>::Output, Option<<O as Publisher>::Output>);

enum Phase<P, O> {
    /// Subscribed downstream, no demand yet: the upstream publishers are parked here.
    Created { trigger: P, sampled: O },
    /// Upstream subscriptions established (or being established).
    Active { upstreams: Vec<Cancellable> },
    Terminated,
    Cancelled,
}

/// Subscription object linking a trigger and a sampled publisher to one downstream
/// subscriber.
///
/// Ownership runs one way: this object owns the upstream [`Cancellable`]s, while the
/// upstream handlers only hold a `Weak` to it. The downstream holds this object
/// through its subscription and this object holds the downstream until the trigger
/// terminates or the downstream cancels, which is when that cycle is broken.
///
/// Locks are never held while calling into the downstream or either upstream.
pub(crate) struct WithLatestFromSubscription<P, O>
where
    P: Publisher,
    O: Publisher<Failure = P::Failure>,
{
    this: Weak<Self>,
    downstream: Mutex<Option<BoxSubscriber<Pair<P, O>, P::Failure>>>,
    phase: Mutex<Phase<P, O>>,
    latest: Mutex<Option<O::Output>>,
}

impl<P, O> WithLatestFromSubscription<P, O>
where
    P: Publisher + 'static,
    O: Publisher<Failure = P::Failure> + 'static,
    P::Output: Send + 'static,
    O::Output: Clone + Send + 'static,
    P::Failure: Send + 'static,
{
    pub(crate) fn new(
        downstream: BoxSubscriber<Pair<P, O>, P::Failure>,
        trigger: P,
        sampled: O,
    ) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            this: this.clone(),
            downstream: Mutex::new(Some(downstream)),
            phase: Mutex::new(Phase::Created { trigger, sampled }),
            latest: Mutex::new(None),
        })
    }

    /// Moves `Created` to `Active` and subscribes upstream. Any later call is a no-op.
    fn connect(&self) {
        let (trigger, sampled) = {
            let mut phase = self.phase.lock();
            let active = Phase::Active {
                upstreams: Vec::with_capacity(2),
            };
            match mem::replace(&mut *phase, active) {
                Phase::Created { trigger, sampled } => (trigger, sampled),
                other => {
                    *phase = other;
                    trace!("with_latest_from: already connected, request ignored");
                    return;
                }
            }
        };

        debug!("with_latest_from: connecting upstreams");

        // Sampled first, so a value it replays on subscription is visible to the
        // trigger's first emission.
        let on_sample = self.this.clone();
        let sampled_link = sampled.sink(
            move |value| {
                if let Some(this) = on_sample.upgrade() {
                    this.store_latest(value);
                }
            },
            |_| {},
        );
        self.retain(sampled_link);

        let on_trigger = self.this.clone();
        let on_termination = self.this.clone();
        let trigger_link = trigger.sink(
            move |value| {
                if let Some(this) = on_trigger.upgrade() {
                    this.forward(value);
                }
            },
            move |completion| {
                if let Some(this) = on_termination.upgrade() {
                    this.terminate(completion);
                }
            },
        );
        self.retain(trigger_link);
    }

    /// Keeps `link` alive while active; a link that arrives after termination or
    /// cancellation is cancelled on the spot.
    fn retain(&self, link: Cancellable) {
        let mut phase = self.phase.lock();
        if let Phase::Active { upstreams } = &mut *phase {
            upstreams.push(link);
            return;
        }
        drop(phase);
        trace!("with_latest_from: upstream attached after shutdown, cancelling it");
        drop(link);
    }

    fn store_latest(&self, value: O::Output) {
        let _previous = self.latest.lock().replace(value);
    }

    fn forward(&self, value: P::Output) {
        let Some(downstream) = self.downstream.lock().clone() else {
            return;
        };
        let latest = self.latest.lock().clone();
        // Both upstreams run with unlimited demand, so additional demand is moot.
        let _ = downstream.receive((value, latest));
    }

    fn terminate(&self, completion: Completion<P::Failure>) {
        let downstream = self.downstream.lock().take();
        if let Some(downstream) = downstream {
            debug!("with_latest_from: trigger terminated, forwarding completion");
            downstream.receive_completion(completion);
        }
        let phase = mem::replace(&mut *self.phase.lock(), Phase::Terminated);
        drop(phase);
    }
}

impl<P, O> Subscription for WithLatestFromSubscription<P, O>
where
    P: Publisher + 'static,
    O: Publisher<Failure = P::Failure> + 'static,
    P::Output: Send + 'static,
    O::Output: Clone + Send + 'static,
    P::Failure: Send + 'static,
{
    fn request(&self, demand: Demand) {
        if demand.is_none() {
            return;
        }
        self.connect();
    }

    fn cancel(&self) {
        let downstream = self.downstream.lock().take();
        let phase = mem::replace(&mut *self.phase.lock(), Phase::Cancelled);
        if downstream.is_some() {
            debug!("with_latest_from: cancelled by downstream");
        }
        drop(phase);
        drop(downstream);
    }
}
