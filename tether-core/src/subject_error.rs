// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors specific to subject operations.
///
/// These describe misuse of a subject by the code pushing into it. They are never
/// delivered to subscribers, which only see the subject's own `Failure` type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject already sent its terminal event and accepts nothing else.
    #[error("Subject is closed")]
    Closed,
}
