//! Power/idle controller.

use crate::error::PortError;
use crate::ports::{MachinePorts, OutputLines};

/// Release all drive lines, cut motor power and hold for the settle delay.
///
/// Run after every pattern run or homing sequence; the settle delay lets the
/// driver stage discharge before the next enable.
pub fn shutdown<P: MachinePorts>(ports: &mut P, settle_ticks: u32) -> Result<(), PortError> {
    ports.set_outputs(OutputLines::idle())?;
    ports.set_power(false)?;
    ports.wait_ticks(settle_ticks);
    Ok(())
}
