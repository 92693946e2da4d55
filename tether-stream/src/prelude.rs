// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all operator extension traits.
//!
//! ```ignore
//! use tether_stream::prelude::*;
//!
//! let enriched = clicks.with_latest_from(config).map(|(click, config)| ...);
//! ```

pub use crate::map::MapExt;
pub use crate::with_latest_from::WithLatestFromExt;
