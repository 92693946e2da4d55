// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subjects.
//!
//! A subject is both the imperative entry point for pushing values into a pipeline
//! and a [`Publisher`](crate::Publisher) that any number of subscribers can attach to.
//!
//! ## Characteristics
//!
//! - **Hot**: subscribers only see values sent after they requested demand
//!   ([`CurrentValueSubject`] additionally replays its current value once).
//! - **Synchronous**: `send` delivers on the calling thread before returning.
//! - **Thread-safe**: cheap to clone; all clones share the same state. The internal
//!   lock is never held while a subscriber runs, so subscribers may call back into
//!   the subject.
//! - **Terminal**: after `finish`/`fail`, every subscriber is detached and further
//!   sends return [`SubjectError::Closed`](crate::SubjectError::Closed). Late
//!   subscribers receive the terminal event straight away.
//!
//! ## Example
//!
//! ```
//! use tether_core::{Completion, PassthroughSubject, PublisherExt};
//! use std::sync::{Arc, Mutex};
//!
//! let subject = PassthroughSubject::<i32, String>::new();
//! let log = Arc::new(Mutex::new(Vec::new()));
//!
//! let values = Arc::clone(&log);
//! let completions = Arc::clone(&log);
//! let _cancellable = subject.sink(
//!     move |value| values.lock().unwrap().push(format!("value {value}")),
//!     move |completion| {
//!         if let Completion::Failure(error) = completion {
//!             completions.lock().unwrap().push(format!("failure {error}"));
//!         }
//!     },
//! );
//!
//! subject.send(1).unwrap();
//! subject.fail("boom".to_string()).unwrap();
//! assert!(subject.send(2).is_err());
//!
//! assert_eq!(*log.lock().unwrap(), vec!["value 1", "failure boom"]);
//! ```

mod current_value;
pub(crate) mod implementation;
mod passthrough;

pub use current_value::CurrentValueSubject;
pub use passthrough::PassthroughSubject;
