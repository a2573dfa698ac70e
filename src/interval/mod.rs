//! Sound interval arithmetic.
//!
//! Every operation here returns an enclosure: for any concrete operands
//! inside the input intervals, the exact result lies inside the output.
//! Results may be wider than necessary, never narrower.
//!
//! Division is the one place where soundness costs all precision. A divisor
//! that contains or touches zero yields [`Interval::ENTIRE`] instead of an
//! error; callers that need a tighter bound must split the box and retry.
//!
//! The empty interval is not a value of [`Interval`]. Code that needs it
//! (for example a branch that provably contributes nothing) uses
//! `Option<Interval>` with `None` as the identity of union.

mod reduce;
mod value;

pub use reduce::{reduce_pair, reduce_value, Extremum};
pub use value::Value;

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{MosboundError, Result};

/// A closed interval `[lo, hi]` with `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// The whole real line, `[-inf, +inf]`.
    pub const ENTIRE: Interval = Interval {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Create an interval, rejecting reversed or NaN bounds.
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        // `!(lo <= hi)` also catches NaN on either side
        if !(lo <= hi) {
            return Err(MosboundError::InvalidInterval { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Degenerate interval `[x, x]`.
    pub const fn point(x: f64) -> Self {
        Self { lo: x, hi: x }
    }

    /// Build from two endpoints in any order.
    pub(crate) fn spanning(a: f64, b: f64) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    /// Enclose four corner results.
    fn from_corners(corners: [f64; 4]) -> Self {
        let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self { lo, hi }
    }

    /// Lower bound.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Width `hi - lo`.
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// True if both bounds are finite.
    pub fn is_bounded(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }

    /// True if `x` lies inside the interval.
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// True if `other` lies entirely inside this interval.
    pub fn encloses(&self, other: &Interval) -> bool {
        self.lo <= other.lo && other.hi <= self.hi
    }

    /// Smallest interval containing both operands.
    pub fn union(self, other: Interval) -> Interval {
        Interval {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    /// Enclosure of `max(0, x)`.
    ///
    /// Used for overdrive and drain-source quantities, which contribute
    /// nothing once they go negative.
    pub fn clamp_non_negative(self) -> Interval {
        Interval {
            lo: self.lo.max(0.0),
            hi: self.hi.max(0.0),
        }
    }

    /// Multiply by a scalar.
    pub fn scale(self, c: f64) -> Interval {
        Interval::spanning(self.lo * c, self.hi * c)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::point(0.0)
    }
}

impl From<f64> for Interval {
    fn from(x: f64) -> Self {
        Interval::point(x)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval {
            lo: self.lo + rhs.lo,
            hi: self.hi + rhs.hi,
        }
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval {
            lo: -self.hi,
            hi: -self.lo,
        }
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        self + (-rhs)
    }
}

impl Mul for Interval {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        Interval::from_corners([
            self.lo * rhs.lo,
            self.lo * rhs.hi,
            self.hi * rhs.lo,
            self.hi * rhs.hi,
        ])
    }
}

impl Div for Interval {
    type Output = Interval;

    fn div(self, rhs: Interval) -> Interval {
        if rhs.lo * rhs.hi <= 0.0 {
            log::debug!("divisor {} touches zero, quotient is unbounded", rhs);
            return Interval::ENTIRE;
        }
        Interval::from_corners([
            self.lo / rhs.lo,
            self.lo / rhs.hi,
            self.hi / rhs.lo,
            self.hi / rhs.hi,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn iv(lo: f64, hi: f64) -> Interval {
        Interval::new(lo, hi).unwrap()
    }

    #[test]
    fn test_new_rejects_reversed_bounds() {
        assert!(Interval::new(1.0, 2.0).is_ok());
        assert!(Interval::new(2.0, 2.0).is_ok());
        assert_eq!(
            Interval::new(2.0, 1.0),
            Err(MosboundError::InvalidInterval { lo: 2.0, hi: 1.0 })
        );
        assert!(Interval::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_add_sub_neg() {
        let a = iv(1.0, 2.0);
        let b = iv(-3.0, 5.0);
        assert_eq!(a + b, iv(-2.0, 7.0));
        assert_eq!(-b, iv(-5.0, 3.0));
        assert_eq!(a - b, iv(-4.0, 5.0));
    }

    #[test]
    fn test_mult_mixed_signs() {
        assert_eq!(iv(-1.0, 2.0) * iv(3.0, 4.0), iv(-4.0, 8.0));
        assert_eq!(iv(-2.0, -1.0) * iv(-3.0, 4.0), iv(-8.0, 6.0));
        assert_eq!(iv(-1.0, 1.0) * iv(-1.0, 1.0), iv(-1.0, 1.0));
    }

    #[test]
    fn test_div_straddling_zero_is_unbounded() {
        let q = iv(1.0, 2.0) / iv(-1.0, 1.0);
        assert_eq!(q, Interval::ENTIRE);
        assert!(!q.is_bounded());

        // Touching zero counts as straddling
        assert_eq!(iv(1.0, 2.0) / iv(0.0, 1.0), Interval::ENTIRE);
    }

    #[test]
    fn test_div_positive_divisor() {
        let q = iv(1.0, 2.0) / iv(2.0, 3.0);
        assert!(q.is_bounded());
        assert!(q.contains(1.0 / 3.0));
        assert!(q.contains(1.0));
        assert_relative_eq!(q.lo(), 1.0 / 3.0);
        assert_relative_eq!(q.hi(), 1.0);
    }

    #[test]
    fn test_union_and_clamp() {
        assert_eq!(iv(0.0, 1.0).union(iv(3.0, 4.0)), iv(0.0, 4.0));
        assert_eq!(iv(-2.0, 1.0).clamp_non_negative(), iv(0.0, 1.0));
        assert_eq!(iv(-2.0, -1.0).clamp_non_negative(), iv(0.0, 0.0));
    }

    #[test]
    fn test_mult_is_sound_on_samples() {
        let a = iv(-1.5, 0.5);
        let b = iv(-0.25, 2.0);
        let p = a * b;
        for i in 0..=10 {
            for j in 0..=10 {
                let x = a.lo() + a.width() * i as f64 / 10.0;
                let y = b.lo() + b.width() * j as f64 / 10.0;
                assert!(p.contains(x * y), "{} * {} escaped {}", x, y, p);
            }
        }
    }
}
