// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Closure-based subscriber with unlimited demand.

use crate::logging::trace;
use crate::mutex::Mutex;
use crate::{Completion, Demand, Subscriber, Subscription};
use alloc::boxed::Box;
use alloc::sync::Arc;
use core::mem;

type ValueHandler<T> = Box<dyn Fn(T) + Send + Sync>;
type CompletionHandler<E> = Box<dyn Fn(Completion<E>) + Send + Sync>;

struct Handlers<T, E> {
    receive_value: ValueHandler<T>,
    receive_completion: CompletionHandler<E>,
}

enum Link {
    Awaiting,
    Subscribed(Arc<dyn Subscription>),
    Closed,
}

/// A subscriber that requests unlimited demand as soon as it is attached and hands
/// everything it receives to two closures.
///
/// Once the sink completes or is cancelled it drops both its subscription and its
/// closures, so nothing captured by them outlives the stream.
///
/// Usually created through [`PublisherExt::sink`](crate::PublisherExt::sink).
pub struct Sink<T, E> {
    link: Mutex<Link>,
    handlers: Mutex<Option<Arc<Handlers<T, E>>>>,
}

impl<T, E> Sink<T, E> {
    pub fn new<F, C>(receive_value: F, receive_completion: C) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
        C: Fn(Completion<E>) + Send + Sync + 'static,
    {
        Self {
            link: Mutex::new(Link::Awaiting),
            handlers: Mutex::new(Some(Arc::new(Handlers {
                receive_value: Box::new(receive_value),
                receive_completion: Box::new(receive_completion),
            }))),
        }
    }

    /// Cancels the upstream subscription and drops the closures.
    pub fn cancel(&self) {
        let link = mem::replace(&mut *self.link.lock(), Link::Closed);
        let handlers = self.handlers.lock().take();
        if let Link::Subscribed(subscription) = link {
            trace!("sink cancelled");
            subscription.cancel();
        }
        drop(handlers);
    }
}

impl<T, E> Subscriber for Sink<T, E>
where
    T: Send,
    E: Send,
{
    type Input = T;
    type Failure = E;

    fn receive_subscription(&self, subscription: Arc<dyn Subscription>) {
        {
            let mut link = self.link.lock();
            if matches!(*link, Link::Awaiting) {
                *link = Link::Subscribed(Arc::clone(&subscription));
            } else {
                drop(link);
                subscription.cancel();
                return;
            }
        }
        subscription.request(Demand::Unlimited);
    }

    fn receive(&self, input: T) -> Demand {
        let handlers = self.handlers.lock().clone();
        if let Some(handlers) = handlers {
            (handlers.receive_value)(input);
        }
        Demand::none()
    }

    fn receive_completion(&self, completion: Completion<E>) {
        let link = mem::replace(&mut *self.link.lock(), Link::Closed);
        let handlers = self.handlers.lock().take();
        drop(link);
        if let Some(handlers) = handlers {
            (handlers.receive_completion)(completion);
        }
    }
}
