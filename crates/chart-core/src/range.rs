// File: crates/chart-core/src/range.rs
// Summary: Closed interval along one axis, with merge and degenerate-width handling.

use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]`.
///
/// [`Range::EMPTY`] is the identity for [`Range::merge`]: it has `min = +inf`
/// and `max = -inf`, so it stays empty until a finite sample is included.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const EMPTY: Range = Range { min: f64::INFINITY, max: f64::NEG_INFINITY };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest range containing both inputs.
    pub fn merge(self, other: Range) -> Range {
        Range { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Grow the range to contain `v`. NaN is ignored.
    pub fn include(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    /// True until at least one finite value has been included.
    pub fn is_empty(&self) -> bool {
        !(self.min <= self.max)
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Widen a zero-width range symmetrically so it can be divided by.
    pub fn widened(self) -> Range {
        if self.min < self.max {
            return self;
        }
        let half = (self.min.abs() * 0.1).max(0.5);
        Range { min: self.min - half, max: self.max + half }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<f64> for Range {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut r = Range::EMPTY;
        for v in iter {
            r.include(v);
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_is_merge_identity() {
        let r = Range::new(-2.0, 3.0);
        assert_eq!(Range::EMPTY.merge(r), r);
        assert_eq!(r.merge(Range::EMPTY), r);
        assert!(Range::EMPTY.is_empty());
        assert!(!Range::EMPTY.is_finite());
    }

    #[test]
    fn collect_skips_nan() {
        let r: Range = [3.0, f64::NAN, -1.0, 7.5].into_iter().collect();
        assert_eq!(r, Range::new(-1.0, 7.5));
    }

    #[test]
    fn widened_only_touches_degenerate() {
        assert_eq!(Range::new(1.0, 2.0).widened(), Range::new(1.0, 2.0));
        assert_eq!(Range::new(0.0, 0.0).widened(), Range::new(-0.5, 0.5));
        assert_eq!(Range::new(100.0, 100.0).widened(), Range::new(90.0, 110.0));
    }

    fn finite_range() -> impl Strategy<Value = Range> {
        (-1e9f64..1e9, -1e9f64..1e9).prop_map(|(a, b)| Range::new(a.min(b), a.max(b)))
    }

    proptest! {
        #[test]
        fn merge_is_associative(a in finite_range(), b in finite_range(), c in finite_range()) {
            prop_assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
        }

        #[test]
        fn merge_is_commutative(a in finite_range(), b in finite_range()) {
            prop_assert_eq!(a.merge(b), b.merge(a));
        }

        #[test]
        fn merge_is_idempotent(a in finite_range()) {
            prop_assert_eq!(a.merge(a), a);
        }
    }
}
