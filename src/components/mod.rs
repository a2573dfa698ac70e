//! Device models.
//!
//! Every device exposes its current and the gradient of that current with
//! respect to its terminal voltages, for point voltages and for voltage
//! intervals alike.

mod mosfet;

pub use mosfet::{Mosfet, MosfetModel, Polarity};
