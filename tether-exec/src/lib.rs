// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consuming tether publishers from async code.
//!
//! [`PublisherStreamExt::into_stream`] turns any publisher into a
//! [`futures::Stream`] of `Result<T, E>`, so pipelines can be driven with
//! `StreamExt::next().await` inside any executor.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

pub mod into_stream;
mod logging;

pub use into_stream::{PublisherStream, PublisherStreamExt};
