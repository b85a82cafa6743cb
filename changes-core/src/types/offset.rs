//! Rational bar offsets for exact event ordering
//!
//! Positions within a bar come from upstream analysis as fractions of a
//! whole note. Rationals keep ties exact: 1/3 and 2/6 compare equal, and no
//! float rounding can reorder two events that share a beat.

use num_rational::Ratio;
use num_traits::Zero;

/// Exact position of a chord within its bar (fraction of a whole note).
/// Uses i64 for large numerator/denominator support
pub type Offset = Ratio<i64>;

/// Helper to create an Offset from a ratio n/d
#[inline]
pub fn offset(n: i64, d: i64) -> Offset {
    Ratio::new(n, d)
}

/// Offset of the first event in a bar
#[inline]
pub fn bar_start() -> Offset {
    Offset::zero()
}
