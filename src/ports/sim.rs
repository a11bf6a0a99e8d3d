//! Recording simulator backend (std only).
//!
//! `SimPorts` records every output write, tick wait and power switch, and
//! lets tests script when the stop control or a limit sensor trips. The
//! fake clock advances instantly, so whole pattern runs execute in
//! microseconds on the host.

use super::{Axis, MachinePorts, OutputLines};
use crate::error::PortError;

/// One recorded port interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// A full output line write.
    Output(OutputLines),
    /// A busy wait of the given tick count.
    Wait(u32),
    /// A drive power switch.
    Power(bool),
}

/// Simulated machine backend.
///
/// Inputs are scripted by poll count: `trip_stop_after(n)` makes the first
/// `n` stop polls read released and every later one read held. Limit
/// sensors are scripted the same way per axis.
#[derive(Debug, Default)]
pub struct SimPorts {
    events: Vec<SimEvent>,
    elapsed_ticks: u64,
    power: bool,

    stop_after_polls: Option<u32>,
    stop_polls: u32,
    limit_after_polls: [Option<u32>; 2],
    limit_polls: [u32; 2],
}

impl SimPorts {
    /// Create a simulator with no scripted trips.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the stop control to read held from the `n`-th poll onward
    /// (zero-based: `trip_stop_after(0)` trips immediately).
    pub fn trip_stop_after(mut self, polls: u32) -> Self {
        self.stop_after_polls = Some(polls);
        self
    }

    /// Script an axis limit sensor to read tripped from the `n`-th poll
    /// onward.
    pub fn trip_limit_after(mut self, axis: Axis, polls: u32) -> Self {
        self.limit_after_polls[axis as usize] = Some(polls);
        self
    }

    /// All recorded interactions, in order.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Only the output line writes, in order.
    pub fn output_writes(&self) -> impl Iterator<Item = &OutputLines> {
        self.events.iter().filter_map(|e| match e {
            SimEvent::Output(lines) => Some(lines),
            _ => None,
        })
    }

    /// Number of tick waits recorded.
    pub fn wait_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::Wait(_)))
            .count()
    }

    /// Total simulated time in ticks.
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// Current drive power state.
    pub fn power(&self) -> bool {
        self.power
    }

    /// Count leading-edge pulse writes per axis: `(x_edges, y_edges)`.
    ///
    /// A rising edge is a write asserting an axis pulse that was previously
    /// released, which is what the motor driver counts as one step.
    pub fn pulse_edges(&self) -> (u32, u32) {
        let mut x_level = false;
        let mut y_level = false;
        let mut x_edges = 0;
        let mut y_edges = 0;
        for lines in self.output_writes() {
            if lines.x_pulse && !x_level {
                x_edges += 1;
            }
            if lines.y_pulse && !y_level {
                y_edges += 1;
            }
            x_level = lines.x_pulse;
            y_level = lines.y_pulse;
        }
        (x_edges, y_edges)
    }

    /// Clear the recorded event log (scripted trips are kept).
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.elapsed_ticks = 0;
    }

    /// Release both limit sensors, as the offset move off the sensors
    /// would physically do. Poll counters restart.
    pub fn release_limits(&mut self) {
        self.limit_after_polls = [None, None];
        self.limit_polls = [0, 0];
    }

    /// Release the stop control. Poll counters restart.
    pub fn release_stop(&mut self) {
        self.stop_after_polls = None;
        self.stop_polls = 0;
    }

    fn scripted(threshold: Option<u32>, polls: &mut u32) -> bool {
        let count = *polls;
        *polls += 1;
        match threshold {
            Some(after) => count >= after,
            None => false,
        }
    }
}

impl MachinePorts for SimPorts {
    fn set_outputs(&mut self, lines: OutputLines) -> Result<(), PortError> {
        self.events.push(SimEvent::Output(lines));
        Ok(())
    }

    fn stop_requested(&mut self) -> bool {
        Self::scripted(self.stop_after_polls, &mut self.stop_polls)
    }

    fn axis_limit(&mut self, axis: Axis) -> bool {
        let idx = axis as usize;
        Self::scripted(self.limit_after_polls[idx], &mut self.limit_polls[idx])
    }

    fn wait_ticks(&mut self, n: u32) {
        self.events.push(SimEvent::Wait(n));
        self.elapsed_ticks += u64::from(n);
    }

    fn set_power(&mut self, enabled: bool) -> Result<(), PortError> {
        self.power = enabled;
        self.events.push(SimEvent::Power(enabled));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut sim = SimPorts::new();
        sim.set_outputs(OutputLines::idle()).unwrap();
        sim.wait_ticks(500);
        sim.set_power(false).unwrap();

        assert_eq!(
            sim.events(),
            &[
                SimEvent::Output(OutputLines::idle()),
                SimEvent::Wait(500),
                SimEvent::Power(false),
            ]
        );
        assert_eq!(sim.elapsed_ticks(), 500);
        assert!(!sim.power());
    }

    #[test]
    fn test_scripted_stop() {
        let mut sim = SimPorts::new().trip_stop_after(2);
        assert!(!sim.stop_requested());
        assert!(!sim.stop_requested());
        assert!(sim.stop_requested());
        assert!(sim.stop_requested());
    }

    #[test]
    fn test_scripted_limit_is_per_axis() {
        let mut sim = SimPorts::new().trip_limit_after(Axis::Y, 0);
        assert!(!sim.axis_limit(Axis::X));
        assert!(sim.axis_limit(Axis::Y));

        sim.release_limits();
        assert!(!sim.axis_limit(Axis::Y));
    }

    #[test]
    fn test_pulse_edge_counting() {
        let mut sim = SimPorts::new();
        let high = OutputLines::idle().with_pulse(Axis::X, true);
        let low = OutputLines::idle();
        // Two full X pulses, held high in between counts once
        for lines in [high, high, low, high, low] {
            sim.set_outputs(lines).unwrap();
        }
        assert_eq!(sim.pulse_edges(), (2, 0));
    }
}
