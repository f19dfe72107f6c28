//! Edge capacities.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Add;

use crate::error::CoreResult;
use crate::numeric::{Units, ensure_non_negative};

/// Capacity of an edge, or the remaining room on it.
///
/// `Unbounded` stands for unlimited supply or demand (super-source and
/// super-sink arcs). It orders above every finite value, so a running
/// minimum can start from it without a numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Capacity {
    Finite(Units),
    Unbounded,
}

impl Capacity {
    /// Finite capacity, rejecting negative values.
    pub fn finite(units: Units) -> CoreResult<Self> {
        ensure_non_negative(units, "capacity").map(Capacity::Finite)
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Capacity::Unbounded)
    }

    /// The finite value, if any.
    pub fn units(self) -> Option<Units> {
        match self {
            Capacity::Finite(units) => Some(units),
            Capacity::Unbounded => None,
        }
    }

    /// Strictly positive room (unbounded counts as positive).
    pub fn is_positive(self) -> bool {
        match self {
            Capacity::Finite(units) => units > 0,
            Capacity::Unbounded => true,
        }
    }

    /// Room left once `flow` is pushed through.
    pub fn residual(self, flow: Units) -> Capacity {
        match self {
            Capacity::Finite(units) => Capacity::Finite(units - flow),
            Capacity::Unbounded => Capacity::Unbounded,
        }
    }

    /// `flow` fills a strictly positive finite capacity exactly.
    pub fn is_saturated_by(self, flow: Units) -> bool {
        matches!(self, Capacity::Finite(units) if units > 0 && flow == units)
    }
}

impl Ord for Capacity {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Capacity::Finite(a), Capacity::Finite(b)) => a.cmp(b),
            (Capacity::Finite(_), Capacity::Unbounded) => Ordering::Less,
            (Capacity::Unbounded, Capacity::Finite(_)) => Ordering::Greater,
            (Capacity::Unbounded, Capacity::Unbounded) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Capacity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Saturating sum; anything plus `Unbounded` is `Unbounded`.
impl Add for Capacity {
    type Output = Capacity;

    fn add(self, rhs: Capacity) -> Capacity {
        match (self, rhs) {
            (Capacity::Finite(a), Capacity::Finite(b)) => Capacity::Finite(a.saturating_add(b)),
            _ => Capacity::Unbounded,
        }
    }
}

impl From<Units> for Capacity {
    fn from(units: Units) -> Self {
        Capacity::Finite(units)
    }
}

// Untyped integer literals default to i32.
impl From<i32> for Capacity {
    fn from(units: i32) -> Self {
        Capacity::Finite(Units::from(units))
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Finite(units) => write!(f, "{}", units),
            Capacity::Unbounded => f.write_str("unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_orders_above_finite() {
        assert!(Capacity::Finite(i64::MAX) < Capacity::Unbounded);
        assert_eq!(
            Capacity::Unbounded.min(Capacity::Finite(7)),
            Capacity::Finite(7)
        );
        assert_eq!(
            Capacity::Finite(3).min(Capacity::Finite(9)),
            Capacity::Finite(3)
        );
    }

    #[test]
    fn residual_and_saturation() {
        let cap = Capacity::Finite(10);
        assert_eq!(cap.residual(4), Capacity::Finite(6));
        assert!(cap.is_saturated_by(10));
        assert!(!cap.is_saturated_by(9));
        assert!(!Capacity::Finite(0).is_saturated_by(0));
        assert!(!Capacity::Unbounded.is_saturated_by(1_000_000));
        assert_eq!(Capacity::Unbounded.residual(5), Capacity::Unbounded);
    }

    #[test]
    fn residual_of_reverse_edge_is_pushed_flow() {
        // Reverse edges have capacity 0 and carry the negated flow.
        assert_eq!(Capacity::Finite(0).residual(-8), Capacity::Finite(8));
    }

    #[test]
    fn finite_rejects_negative() {
        assert!(Capacity::finite(-1).is_err());
        assert_eq!(Capacity::finite(0).unwrap(), Capacity::Finite(0));
    }

    #[test]
    fn literals_convert() {
        assert_eq!(Capacity::from(5), Capacity::Finite(5));
        assert_eq!(Capacity::from(5_i64), Capacity::Finite(5));
    }

    #[test]
    fn sum_saturates() {
        assert_eq!(
            Capacity::Finite(2) + Capacity::Finite(3),
            Capacity::Finite(5)
        );
        assert_eq!(Capacity::Finite(2) + Capacity::Unbounded, Capacity::Unbounded);
        assert_eq!(
            Capacity::Finite(i64::MAX) + Capacity::Finite(1),
            Capacity::Finite(i64::MAX)
        );
    }
}
