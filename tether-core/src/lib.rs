// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core protocol of the tether push-based reactive streams.
//!
//! Three traits make up the protocol:
//!
//! - [`Publisher`] produces values and attaches subscribers.
//! - [`Subscriber`] receives a [`Subscription`], values and one [`Completion`].
//! - [`Subscription`] lets the subscriber [`request`](Subscription::request) more
//!   [`Demand`] or [`cancel`](Subscription::cancel).
//!
//! On top of it the crate ships the pieces needed to drive and observe pipelines:
//! the [`subject`]s, the closure [`Sink`] with its RAII [`Cancellable`], and the
//! type-erased [`AnyPublisher`].
//!
//! Every callback runs synchronously on the thread that triggered it; the crate
//! spawns nothing.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

pub mod any_publisher;
pub mod cancellable;
pub mod completion;
pub mod demand;
mod logging;
pub mod mutex;
pub mod publisher;
pub mod publisher_ext;
pub mod sink;
pub mod subject;
pub mod subject_error;
pub mod subscriber;
pub mod subscription;

pub use self::any_publisher::AnyPublisher;
pub use self::cancellable::Cancellable;
pub use self::completion::Completion;
pub use self::demand::Demand;
pub use self::publisher::Publisher;
pub use self::publisher_ext::PublisherExt;
pub use self::sink::Sink;
pub use self::subject::{CurrentValueSubject, PassthroughSubject};
pub use self::subject_error::SubjectError;
pub use self::subscriber::{BoxSubscriber, Subscriber};
pub use self::subscription::Subscription;
