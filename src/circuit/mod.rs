//! Circuit representation and node current balance.
//!
//! A [`Circuit`] is an ordered list of devices over a fixed set of nodes.
//! It holds no evaluation state; every call takes a fresh voltage
//! assignment indexed by node.

mod graph;
mod types;
mod validate;

pub use graph::{Circuit, DriverFrame};
pub use types::*;
pub use validate::validate_devices;
