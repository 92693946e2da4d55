// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// Something that happened, identified by a sequence id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Event {
    pub id: u64,
    pub kind: String,
}

impl Event {
    #[must_use]
    pub const fn new(id: u64, kind: String) -> Self {
        Self { id, kind }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event[id={}, kind={}]", self.id, self.kind)
    }
}
