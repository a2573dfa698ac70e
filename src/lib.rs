//! # Mosbound
//!
//! Sound current bounds for MOSFET networks at DC.
//!
//! This library evaluates the node current balance of a transistor circuit
//! for exact node voltages and for voltage ranges. An external verifier uses
//! the results to prove where a DC operating point can or cannot lie.
//!
//! ## Architecture
//!
//! - [`interval`] - Sound interval arithmetic and the scalar-or-interval [`Value`]
//! - [`components`] - The square-law MOSFET model (current and gradient)
//! - [`circuit`] - Device aggregation into the node current balance
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use mosbound::{Circuit, Interval, Mosfet, MosfetModel, NodeId, Value};
//!
//! let model = Arc::new(MosfetModel::nfet(1.0, 1.0, 2.0)?);
//! let m = Mosfet::new(NodeId(0), NodeId(2), NodeId(1), model);
//! let circuit = Circuit::new(3, vec![m])?;
//!
//! let point = circuit.balance(&[Value::Scalar(0.0), Value::Scalar(1.0), Value::Scalar(3.0)])?;
//! assert_eq!(point[0], Value::Scalar(3.0));
//!
//! let boxed = [
//!     Value::Scalar(0.0),
//!     Value::Interval(Interval::new(0.5, 1.5)?),
//!     Value::Scalar(3.0),
//! ];
//! let bound = circuit.balance(&boxed)?;
//! assert!(bound[0].contains(3.0));
//! # Ok::<(), mosbound::MosboundError>(())
//! ```
//!
//! ## Soundness
//!
//! Interval results always enclose every value reachable from inside the
//! input ranges. A quotient whose divisor range touches zero is the whole
//! real line; split the voltage box and evaluate again for a tighter bound.
//!
//! All types are immutable after construction and `Send + Sync`, so
//! independent voltage assignments may be evaluated concurrently.

pub mod circuit;
pub mod components;
pub mod error;
pub mod interval;

// Re-export main types for convenience
pub use circuit::{Circuit, DriverFrame, NodeId};
pub use components::{Mosfet, MosfetModel, Polarity};
pub use error::{MosboundError, Result};
pub use interval::{Interval, Value};
