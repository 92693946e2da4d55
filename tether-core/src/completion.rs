// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Terminal event of a publisher.
///
/// After a publisher sends a `Completion` it emits nothing else to that subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<E> {
    /// The publisher finished normally.
    Finished,
    /// The publisher terminated with an error.
    Failure(E),
}

impl<E> Completion<E> {
    /// Returns `true` if this is `Finished`.
    pub const fn is_finished(&self) -> bool {
        matches!(self, Completion::Finished)
    }

    /// Returns `true` if this is a `Failure`.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Completion::Failure(_))
    }

    /// Converts into the failure, discarding `Finished`.
    pub fn failure(self) -> Option<E> {
        match self {
            Completion::Finished => None,
            Completion::Failure(e) => Some(e),
        }
    }

    /// Maps the failure with `f`, leaving `Finished` untouched.
    pub fn map_failure<F, G>(self, f: G) -> Completion<F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Completion::Finished => Completion::Finished,
            Completion::Failure(e) => Completion::Failure(f(e)),
        }
    }
}
