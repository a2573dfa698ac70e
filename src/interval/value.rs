//! Scalar-or-interval quantities.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Interval;

/// A voltage, current, or gradient component.
///
/// Arithmetic between two scalars stays scalar. As soon as one operand is an
/// interval, the other is lifted with [`Value::fix`] and the result is an
/// interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Scalar(f64),
    Interval(Interval),
}

impl Value {
    /// Zero scalar.
    pub const ZERO: Value = Value::Scalar(0.0);

    /// Lift to an interval; a scalar becomes `[x, x]`.
    pub fn fix(self) -> Interval {
        match self {
            Value::Scalar(x) => Interval::point(x),
            Value::Interval(i) => i,
        }
    }

    /// True for the interval case.
    pub fn is_interval(&self) -> bool {
        matches!(self, Value::Interval(_))
    }

    /// The scalar, if this is one.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(x) => Some(*x),
            Value::Interval(_) => None,
        }
    }

    /// Lower bound (the value itself for a scalar).
    pub fn lo(&self) -> f64 {
        self.fix().lo()
    }

    /// Upper bound (the value itself for a scalar).
    pub fn hi(&self) -> f64 {
        self.fix().hi()
    }

    /// True if `x` is enclosed by this value.
    pub fn contains(&self, x: f64) -> bool {
        self.fix().contains(x)
    }

    fn lift2(
        self,
        rhs: Value,
        scalar: impl FnOnce(f64, f64) -> f64,
        interval: impl FnOnce(Interval, Interval) -> Interval,
    ) -> Value {
        match (self, rhs) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(scalar(a, b)),
            (a, b) => Value::Interval(interval(a.fix(), b.fix())),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(x)
    }
}

impl From<Interval> for Value {
    fn from(i: Interval) -> Self {
        Value::Interval(i)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(x) => write!(f, "{}", x),
            Value::Interval(i) => write!(f, "{}", i),
        }
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        self.lift2(rhs, |a, b| a + b, |a, b| a + b)
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        self.lift2(rhs, |a, b| a - b, |a, b| a - b)
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        self.lift2(rhs, |a, b| a * b, |a, b| a * b)
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        self.lift2(rhs, |a, b| a / b, |a, b| a / b)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::Scalar(x) => Value::Scalar(-x),
            Value::Interval(i) => Value::Interval(-i),
        }
    }
}
