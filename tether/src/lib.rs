// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Tether
//!
//! Push-based reactive publishers with demand-driven subscriptions.
//!
//! ## Overview
//!
//! A [`Publisher`] produces values for any number of [`Subscriber`]s. Each
//! subscriber receives a [`Subscription`] through which it requests values
//! ([`Demand`]) or cancels. Operators are extension traits that wrap one publisher
//! in another and never start work before demand arrives.
//!
//! The centrepiece is [`with_latest_from`](prelude::WithLatestFromExt::with_latest_from):
//! every value of a trigger publisher is paired with the most recent value of a
//! sampled publisher, and only the trigger decides when the pipeline ends.
//!
//! ## Quick Start
//!
//! ```rust
//! use tether_rx::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let requests = PassthroughSubject::<u32>::new();
//! let user = CurrentValueSubject::<&str>::new("guest");
//! let log = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&log);
//! let _cancellable = requests
//!     .clone()
//!     .with_latest_from(user.clone())
//!     .map(|(request, user)| format!("{request} by {}", user.unwrap_or("nobody")))
//!     .sink_values(move |line| sink.lock().unwrap().push(line));
//!
//! requests.send(1).unwrap();
//! user.send("alice").unwrap();
//! requests.send(2).unwrap();
//!
//! assert_eq!(*log.lock().unwrap(), vec!["1 by guest", "2 by alice"]);
//! ```
//!
//! ## Async consumers
//!
//! [`PublisherStreamExt::into_stream`](prelude::PublisherStreamExt::into_stream)
//! adapts any publisher to a `futures::Stream` of `Result<T, E>`.

pub use tether_core::{
    AnyPublisher, BoxSubscriber, Cancellable, Completion, CurrentValueSubject, Demand,
    PassthroughSubject, Publisher, PublisherExt, Sink, SubjectError, Subscriber, Subscription,
};
pub use tether_exec::{PublisherStream, PublisherStreamExt};
pub use tether_stream::{Map, MapExt, WithLatestFrom, WithLatestFromExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use tether_core::{
        Cancellable, Completion, CurrentValueSubject, Demand, PassthroughSubject, Publisher,
        PublisherExt,
    };
    pub use tether_exec::PublisherStreamExt;
    pub use tether_stream::prelude::*;
}
