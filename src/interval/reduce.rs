//! Corner reductions.
//!
//! Interval-mode device evaluation needs the extreme endpoint of each
//! terminal voltage, and the elementwise extreme of two gradient bounds.
//! Those are the only two shapes reduced here.

use super::Value;

/// The binary operator a reduction folds with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

impl Extremum {
    /// Apply the operator to two scalars.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Extremum::Min => a.min(b),
            Extremum::Max => a.max(b),
        }
    }
}

/// Collapse an interval to its extreme endpoint. A scalar is returned as is.
pub fn reduce_value(op: Extremum, v: Value) -> f64 {
    match v {
        Value::Scalar(x) => x,
        Value::Interval(i) => op.apply(i.lo(), i.hi()),
    }
}

/// Collapse a stacked pair of 3-vectors to one 3-vector, elementwise.
pub fn reduce_pair(op: Extremum, a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [op.apply(a[0], b[0]), op.apply(a[1], b[1]), op.apply(a[2], b[2])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    #[test]
    fn test_reduce_value() {
        let v = Value::Interval(Interval::new(-1.0, 4.0).unwrap());
        assert_eq!(reduce_value(Extremum::Min, v), -1.0);
        assert_eq!(reduce_value(Extremum::Max, v), 4.0);
        assert_eq!(reduce_value(Extremum::Max, Value::Scalar(2.5)), 2.5);
    }

    #[test]
    fn test_reduce_pair() {
        let a = [1.0, -2.0, 3.0];
        let b = [0.0, 5.0, 3.5];
        assert_eq!(reduce_pair(Extremum::Min, a, b), [0.0, -2.0, 3.0]);
        assert_eq!(reduce_pair(Extremum::Max, a, b), [1.0, 5.0, 3.5]);
    }
}
