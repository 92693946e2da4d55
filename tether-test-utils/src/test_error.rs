// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

/// Failure type used to exercise error paths in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TestError {
    #[error("Injected failure: {0}")]
    Injected(String),

    #[error("Upstream unavailable")]
    Unavailable,
}

impl TestError {
    pub fn injected(message: impl Into<String>) -> Self {
        Self::Injected(message.into())
    }
}
