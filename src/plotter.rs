//! Plotter facade.
//!
//! Owns the machine ports and ties the run loop, homing and the power
//! controller together: every entry point leaves the machine powered down
//! when it returns, matching how the physical control loop hands back to
//! its idle state.

use crate::config::{HomingConfig, PowerConfig};
use crate::error::Result;
use crate::motion::{home_axes, run_pattern, shutdown, HomeOutcome, RunOutcome};
use crate::pattern::{builtin, MotionTable, PatternRegistry};
use crate::ports::MachinePorts;

/// High-level control of a two-axis sand plotter.
///
/// # Example
///
/// ```rust,ignore
/// use plotter_motion::{pattern::builtin, Plotter};
///
/// let mut plotter = Plotter::new(ports);
/// plotter.home_axes()?;
/// plotter.run_pattern(&builtin::SQUARE_SPIRAL)?;
/// ```
pub struct Plotter<P: MachinePorts> {
    ports: P,
    homing: HomingConfig,
    power: PowerConfig,
}

impl<P: MachinePorts> Plotter<P> {
    /// Create a plotter with the reference machine's timing.
    pub fn new(ports: P) -> Self {
        Self::with_timing(ports, HomingConfig::default(), PowerConfig::default())
    }

    /// Create a plotter with explicit timing configuration.
    pub fn with_timing(ports: P, homing: HomingConfig, power: PowerConfig) -> Self {
        Self {
            ports,
            homing,
            power,
        }
    }

    /// Access the underlying ports.
    #[inline]
    pub fn ports(&mut self) -> &mut P {
        &mut self.ports
    }

    /// Release the underlying ports.
    pub fn into_ports(self) -> P {
        self.ports
    }

    /// The homing configuration in use.
    #[inline]
    pub fn homing_config(&self) -> &HomingConfig {
        &self.homing
    }

    /// Trace a motion table, then power down.
    ///
    /// Returns [`RunOutcome::Aborted`] if the stop control or a limit
    /// sensor tripped mid-run; drive power is cut either way.
    pub fn run_pattern(&mut self, table: &MotionTable<'_>) -> Result<RunOutcome> {
        let outcome = run_pattern(&mut self.ports, table)?;
        shutdown(&mut self.ports, self.power.settle_ticks)?;
        Ok(outcome)
    }

    /// Trace a registered pattern by name, then power down.
    pub fn run_named(&mut self, name: &str, registry: &PatternRegistry<'_>) -> Result<RunOutcome> {
        let table = *registry.get_or_error(name)?;
        self.run_pattern(&table)
    }

    /// Re-trace the clearing raster over the whole surface, then power down.
    pub fn clear_surface(&mut self) -> Result<RunOutcome> {
        self.run_pattern(&builtin::ERASE)
    }

    /// Home both axes, offset into the drawing origin, then power down.
    pub fn home_axes(&mut self) -> Result<HomeOutcome> {
        let outcome = home_axes(&mut self.ports, &self.homing, self.power.settle_ticks)?;
        shutdown(&mut self.ports, self.power.settle_ticks)?;
        Ok(outcome)
    }

    /// Power down without running anything.
    pub fn shutdown(&mut self) -> Result<()> {
        shutdown(&mut self.ports, self.power.settle_ticks)?;
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<P: MachinePorts> Plotter<P> {
    /// Trace a configuration-loaded pattern, then power down.
    pub fn run_config_pattern(
        &mut self,
        pattern: &crate::config::PatternConfig,
    ) -> Result<RunOutcome> {
        pattern.with_table(|table| self.run_pattern(table))
    }
}
