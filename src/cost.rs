//! The extended-natural cost domain `ℕ ∪ {∞}` used throughout the solver
//! (spec §3 "Cost matrix"). Every arithmetic operation here propagates
//! infinity rather than panicking, wrapping, or falling back to floating
//! point `+∞` (spec §9 "Infinity handling").

use std::fmt;
use std::ops::Add;

/// A non-negative cost: a finite integer, or infinite (an absent edge or
/// a self-edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    /// A concrete, non-negative cost.
    Finite(u64),
    /// No edge, or a masked-out row/column/self-edge.
    Infinite,
}

impl Cost {
    /// The additive identity.
    pub const ZERO: Cost = Cost::Finite(0);

    /// `true` for [`Cost::Finite`].
    pub fn is_finite(self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// `true` for [`Cost::Infinite`].
    pub fn is_infinite(self) -> bool {
        matches!(self, Cost::Infinite)
    }

    /// The underlying value, or `None` if infinite.
    pub fn finite(self) -> Option<u64> {
        match self {
            Cost::Finite(v) => Some(v),
            Cost::Infinite => None,
        }
    }

    /// Saturating addition: `∞ + x = ∞` for any `x`; an overflowing sum of
    /// two finite costs saturates to `∞` rather than wrapping (spec §7
    /// "Numerical").
    pub fn saturating_add(self, other: Cost) -> Cost {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => match a.checked_add(b) {
                Some(v) => Cost::Finite(v),
                None => Cost::Infinite,
            },
            _ => Cost::Infinite,
        }
    }

    /// Saturating subtraction used by matrix reduction: `∞ − x ≡ ∞` (spec
    /// §4.2); `other` is assumed not to exceed any finite value it is
    /// subtracted from, since reduction only ever subtracts a row/column
    /// minimum.
    pub fn saturating_sub(self, other: u64) -> Cost {
        match self {
            Cost::Finite(a) => Cost::Finite(a.saturating_sub(other)),
            Cost::Infinite => Cost::Infinite,
        }
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        self.saturating_add(rhs)
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::ZERO
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{v}"),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_addition_saturates_on_overflow() {
        let a = Cost::Finite(u64::MAX - 1);
        let b = Cost::Finite(2);
        assert_eq!(a.saturating_add(b), Cost::Infinite);
    }

    #[test]
    fn infinite_propagates_through_addition() {
        assert_eq!(Cost::Infinite.saturating_add(Cost::Finite(5)), Cost::Infinite);
        assert_eq!(Cost::Finite(5).saturating_add(Cost::Infinite), Cost::Infinite);
    }

    #[test]
    fn infinite_is_unaffected_by_subtraction() {
        assert_eq!(Cost::Infinite.saturating_sub(7), Cost::Infinite);
    }

    #[test]
    fn ordering_places_every_finite_value_below_infinite() {
        assert!(Cost::Finite(1_000_000) < Cost::Infinite);
        assert!(Cost::Finite(1) < Cost::Finite(2));
    }
}
