// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Backpressure accounting for subscriptions.

use core::ops::{Add, AddAssign};

/// How many more values a subscriber is willing to receive.
///
/// Demand only ever grows through [`Subscription::request`](crate::Subscription::request)
/// and [`Subscriber::receive`](crate::Subscriber::receive); publishers consume it one
/// value at a time with [`Demand::take_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demand {
    /// No upper bound.
    Unlimited,
    /// At most this many values.
    Max(usize),
}

impl Demand {
    /// No demand at all.
    #[must_use]
    pub const fn none() -> Self {
        Demand::Max(0)
    }

    #[must_use]
    pub const fn max(count: usize) -> Self {
        Demand::Max(count)
    }

    #[must_use]
    pub const fn unlimited() -> Self {
        Demand::Unlimited
    }

    /// Returns `true` if no further value may be delivered.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Demand::Max(0))
    }

    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        matches!(self, Demand::Unlimited)
    }

    /// Consumes one unit of demand, returning `false` if there was none left.
    ///
    /// Unlimited demand is never exhausted.
    pub fn take_one(&mut self) -> bool {
        match self {
            Demand::Unlimited => true,
            Demand::Max(0) => false,
            Demand::Max(n) => {
                *n -= 1;
                true
            }
        }
    }
}

impl Default for Demand {
    fn default() -> Self {
        Demand::none()
    }
}

impl Add for Demand {
    type Output = Demand;

    fn add(self, rhs: Demand) -> Demand {
        match (self, rhs) {
            (Demand::Max(a), Demand::Max(b)) => a.checked_add(b).map_or(Demand::Unlimited, Demand::Max),
            _ => Demand::Unlimited,
        }
    }
}

impl AddAssign for Demand {
    fn add_assign(&mut self, rhs: Demand) {
        *self = *self + rhs;
    }
}
