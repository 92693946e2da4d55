// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reactive operators for tether publishers.
//!
//! Every operator is an extension trait implemented for all
//! [`Publisher`](tether_core::Publisher)s, returning a new publisher that does
//! nothing until a subscriber attaches and requests demand.
//!
//! ## Operators
//!
//! - **[`with_latest_from`](WithLatestFromExt::with_latest_from)**: pairs each value
//!   of a trigger publisher with the latest value of a sampled publisher
//! - **[`map`](MapExt::map)**: transforms values, passing the subscription through
//!
//! ## Pattern: Enriching Events with Context
//!
//! Operators chain, so several context sources can be attached to one trigger. The
//! nested pairs are flattened with `map`:
//!
//! ```rust
//! use tether_core::{PassthroughSubject, PublisherExt};
//! use tether_stream::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let requests = PassthroughSubject::<u32>::new();
//! let user = PassthroughSubject::<&str>::new();
//! let locale = PassthroughSubject::<&str>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! let _cancellable = requests
//!     .clone()
//!     .with_latest_from(user.clone())
//!     .with_latest_from(locale.clone())
//!     .map(|((request, user), locale)| (request, user, locale))
//!     .sink_values(move |row| sink.lock().unwrap().push(row));
//!
//! user.send("alice").unwrap();
//! requests.send(1).unwrap();
//! locale.send("en").unwrap();
//! requests.send(2).unwrap();
//!
//! assert_eq!(
//!     *seen.lock().unwrap(),
//!     vec![(1, Some("alice"), None), (2, Some("alice"), Some("en"))]
//! );
//! ```
//!
//! ## Memory Usage
//!
//! - **[`with_latest_from`](WithLatestFromExt::with_latest_from)**: $O(1)$ per
//!   subscription - one latest value
//! - **[`map`](MapExt::map)**: $O(1)$ - no buffering

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

mod logging;
pub mod map;
pub mod prelude;
pub mod with_latest_from;

pub use self::map::{Map, MapExt};
pub use self::with_latest_from::{WithLatestFrom, WithLatestFromExt};
