//! Circuit validation.

use crate::components::Mosfet;
use crate::error::{MosboundError, Result};

/// Validate device wiring against the node count.
///
/// Checks that every terminal of every device is a node of the circuit, so
/// a voltage assignment covering all nodes covers every device.
pub fn validate_devices(num_nodes: usize, devices: &[Mosfet]) -> Result<()> {
    for (idx, device) in devices.iter().enumerate() {
        if let Some(node) = device.nodes.iter().find(|n| n.index() >= num_nodes) {
            return Err(MosboundError::NodeOutOfRange {
                device: idx,
                node: node.index(),
                num_nodes,
            });
        }
    }

    Ok(())
}
