// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the tether reactive library.
//!
//! This crate is meant for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `CapturingSubscriber<T, E>`
//!
//! A subscriber that records everything it receives and exposes its subscription, so
//! tests can drive demand and cancellation by hand:
//!
//! ```rust
//! use tether_core::{Completion, Demand, PassthroughSubject, Publisher};
//! use tether_test_utils::CapturingSubscriber;
//! use std::sync::Arc;
//!
//! let subject = PassthroughSubject::<i32>::new();
//! let subscriber = Arc::new(CapturingSubscriber::new());
//! subject.receive_subscriber(subscriber.clone());
//!
//! subscriber.request(Demand::Unlimited);
//! subject.send(7).unwrap();
//! subject.finish().unwrap();
//!
//! assert_eq!(subscriber.values(), vec![7]);
//! assert_eq!(subscriber.completions(), vec![Completion::Finished]);
//! ```
//!
//! ## `TestError`
//!
//! A cloneable failure type for exercising error paths.
//!
//! ## Fixtures
//!
//! - `Person` - the "latest state" side of most scenarios
//! - `Event` - the "trigger" side of most scenarios
//!
//! ## Async helpers
//!
//! [`helpers::assert_no_element_emitted`] and [`helpers::unwrap_stream`] work on any
//! `futures::Stream`, typically one produced by `tether-exec`.

pub mod capturing_subscriber;
pub mod event;
pub mod helpers;
pub mod person;
pub mod test_data;
pub mod test_error;

pub use capturing_subscriber::CapturingSubscriber;
pub use event::Event;
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream};
pub use person::Person;
pub use test_error::TestError;
