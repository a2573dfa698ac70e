//! Error types for the Mosbound evaluator.
//!
//! Device physics never fails on well-formed input. Everything reported here
//! is a wiring or parameter mistake made by whoever built the circuit.

use thiserror::Error;

/// Result type alias using [`MosboundError`].
pub type Result<T> = std::result::Result<T, MosboundError>;

/// Unified error type for all Mosbound operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MosboundError {
    // ============ Construction Errors ============
    /// Interval bounds out of order or NaN
    #[error("Invalid interval [{lo}, {hi}]: lower bound must not exceed upper bound")]
    InvalidInterval { lo: f64, hi: f64 },

    /// Invalid model parameter
    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    /// Device terminal references a node outside the circuit
    #[error("Device {device} references node {node}, but the circuit has only {num_nodes} nodes")]
    NodeOutOfRange {
        device: usize,
        node: usize,
        num_nodes: usize,
    },

    // ============ Evaluation Errors ============
    /// Voltage assignment does not cover a referenced node
    #[error("Voltage assignment has {len} entries but node {node} is referenced")]
    MissingNode { node: usize, len: usize },
}

impl MosboundError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create a missing node error
    pub fn missing_node(node: usize, len: usize) -> Self {
        Self::MissingNode { node, len }
    }
}
