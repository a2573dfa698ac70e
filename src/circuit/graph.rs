//! Circuit structure and node current balance.

use super::types::{DeviceId, NodeId};
use super::validate::validate_devices;
use crate::components::Mosfet;
use crate::error::Result;
use crate::interval::Value;

/// Balance vector packaged for the external equilibrium driver.
///
/// The driver expects two leading slots ahead of the balance vector. Neither
/// is produced by this crate and both are always `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverFrame {
    pub reserved: [Option<Vec<Value>>; 2],
    pub balance: Vec<Value>,
}

/// A transistor network ready for evaluation.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// All devices in the circuit
    pub devices: Vec<Mosfet>,

    /// Number of nodes
    pub num_nodes: usize,
}

impl Circuit {
    /// Build a circuit, checking every device terminal against `num_nodes`.
    pub fn new(num_nodes: usize, devices: Vec<Mosfet>) -> Result<Self> {
        validate_devices(num_nodes, &devices)?;
        Ok(Circuit { devices, num_nodes })
    }

    /// Net current leaving each node through the devices (KCL residual).
    ///
    /// Each device's drain-to-source current is added at its source and
    /// subtracted at its drain. At an equilibrium every entry is zero; in
    /// interval mode every entry of an equilibrium box contains zero.
    pub fn balance(&self, voltages: &[Value]) -> Result<Vec<Value>> {
        let mut i_node = vec![Value::ZERO; self.num_nodes];

        for (idx, device) in self.devices.iter().enumerate() {
            let ids = device.current(voltages)?;
            log::trace!("{} {}: ids = {}", DeviceId(idx), device.model(), ids);

            let s = device.source().index();
            let d = device.drain().index();
            i_node[s] = i_node[s] + ids;
            i_node[d] = i_node[d] - ids;
        }

        Ok(i_node)
    }

    /// Partials of [`Circuit::balance`] with respect to every node voltage.
    ///
    /// Row `n` holds the gradient of the balance at node `n`. Each device
    /// gradient is stamped into the source row with a positive sign and into
    /// the drain row with a negative sign, at its three terminal columns.
    pub fn jacobian(&self, voltages: &[Value]) -> Result<Vec<Vec<Value>>> {
        let n = self.num_nodes;
        let mut jac = vec![vec![Value::ZERO; n]; n];

        for (idx, device) in self.devices.iter().enumerate() {
            let grad = device.gradient(voltages)?;
            log::trace!(
                "{} {}: grad = [{}, {}, {}]",
                DeviceId(idx),
                device.model(),
                grad[0],
                grad[1],
                grad[2]
            );

            let s = device.source().index();
            let d = device.drain().index();
            for (col, g) in device.nodes.iter().map(NodeId::index).zip(grad) {
                jac[s][col] = jac[s][col] + g;
                jac[d][col] = jac[d][col] - g;
            }
        }

        Ok(jac)
    }

    /// [`Circuit::balance`] in the layout the equilibrium driver calls with.
    pub fn driver_frame(&self, voltages: &[Value]) -> Result<DriverFrame> {
        Ok(DriverFrame {
            reserved: [None, None],
            balance: self.balance(voltages)?,
        })
    }
}
