//! Homing - driving each axis to its reference position.
//!
//! One axis at a time is stepped at a constant slow rate toward its limit
//! sensor. The sensor trip is the normal exit: drive power is cut and the
//! axis is known to sit at its mechanical reference. The stop control also
//! exits the loop, but leaves power handling to the caller. After both axes
//! are referenced, a fixed offset move backs the stylus off the sensors into
//! the drawing origin.

use crate::config::HomingConfig;
use crate::error::Result;
use crate::ports::{Axis, MachinePorts, OutputLines};

use super::plan::SegmentPlan;
use super::power::shutdown;
use super::step::StepEmitter;

/// Exit cause of a single-axis homing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisHomeOutcome {
    /// The axis reached its limit sensor; drive power has been cut.
    SensorReached,
    /// The stop control was read; power is untouched.
    Stopped,
}

/// Terminal state of a full homing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomeOutcome {
    /// Both axes referenced and the offset move finished.
    Completed,
    /// The stop control ended the sequence early.
    Aborted,
}

/// Drive one axis toward its limit sensor at constant rate.
///
/// Emits half-period pulse/release cycles in the configured homing
/// direction until the sensor trips (power is then cut and held for the
/// settle delay) or the stop control is read. Sensor and stop are sampled
/// between half-periods only — a started half-period always completes.
///
/// A stuck sensor or held stop control loops indefinitely; this is a
/// foreground control loop and the operator is the timeout.
pub fn home_axis<P: MachinePorts>(
    ports: &mut P,
    axis: Axis,
    cfg: &HomingConfig,
    settle_ticks: u32,
) -> Result<AxisHomeOutcome> {
    let driven = OutputLines::idle()
        .with_enable(true)
        .with_dir(axis, cfg.direction)
        .with_pulse(axis, true);
    let released = driven.with_pulse(axis, false);

    loop {
        if ports.axis_limit(axis) {
            shutdown(ports, settle_ticks)?;
            return Ok(AxisHomeOutcome::SensorReached);
        }
        if ports.stop_requested() {
            return Ok(AxisHomeOutcome::Stopped);
        }

        ports.set_outputs(driven)?;
        ports.wait_ticks(cfg.half_period_ticks);

        if ports.axis_limit(axis) {
            shutdown(ports, settle_ticks)?;
            return Ok(AxisHomeOutcome::SensorReached);
        }
        if ports.stop_requested() {
            return Ok(AxisHomeOutcome::Stopped);
        }

        ports.set_outputs(released)?;
        ports.wait_ticks(cfg.half_period_ticks);
    }
}

/// Home both axes and offset into the drawing origin.
///
/// X is homed to completion or stop, then the stop control is re-checked,
/// then Y likewise. The offset move steps both axes together as one
/// synthetic diagonal segment through the regular planner and emitter. It
/// does not sample the abort condition: it starts with the carriage parked
/// on the tripped sensors and exists to move off them.
pub fn home_axes<P: MachinePorts>(
    ports: &mut P,
    cfg: &HomingConfig,
    settle_ticks: u32,
) -> Result<HomeOutcome> {
    home_axis(ports, Axis::X, cfg, settle_ticks)?;
    if ports.stop_requested() {
        return Ok(HomeOutcome::Aborted);
    }

    home_axis(ports, Axis::Y, cfg, settle_ticks)?;
    if ports.stop_requested() {
        return Ok(HomeOutcome::Aborted);
    }

    offset_move(ports, cfg)
}

/// Back off the limit sensors into the drawing origin.
fn offset_move<P: MachinePorts>(ports: &mut P, cfg: &HomingConfig) -> Result<HomeOutcome> {
    let steps = cfg.offset_steps as i32;
    let plan = SegmentPlan::for_deltas(steps, steps);
    let emitter = StepEmitter::for_plan(&plan, cfg.offset_delay_ticks, 0);

    for sub in plan.sub_steps() {
        emitter.emit(ports, sub)?;
    }
    Ok(HomeOutcome::Completed)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::ports::sim::{SimEvent, SimPorts};
    use crate::ports::Direction;

    fn cfg() -> HomingConfig {
        HomingConfig {
            half_period_ticks: 500,
            direction: Direction::Negative,
            offset_steps: 4,
            offset_delay_ticks: 1000,
        }
    }

    #[test]
    fn test_sensor_trip_cuts_power() {
        // Sensor trips on the third sample, at the top of the second cycle
        let mut sim = SimPorts::new().trip_limit_after(Axis::X, 2);

        let outcome = home_axis(&mut sim, Axis::X, &cfg(), 15625).unwrap();
        assert_eq!(outcome, AxisHomeOutcome::SensorReached);
        assert!(!sim.power());

        // Shutdown settle wait is the last event
        assert_eq!(sim.events().last(), Some(&SimEvent::Wait(15625)));
    }

    #[test]
    fn test_stop_leaves_power_untouched() {
        let mut sim = SimPorts::new().trip_stop_after(1);

        let outcome = home_axis(&mut sim, Axis::Y, &cfg(), 15625).unwrap();
        assert_eq!(outcome, AxisHomeOutcome::Stopped);
        assert!(!sim
            .events()
            .iter()
            .any(|e| matches!(e, SimEvent::Power(_))));
    }

    #[test]
    fn test_homing_pulses_single_axis() {
        let mut sim = SimPorts::new().trip_limit_after(Axis::X, 4);
        home_axis(&mut sim, Axis::X, &cfg(), 100).unwrap();

        assert!(sim.output_writes().all(|w| !w.y_pulse));
        let (x_edges, y_edges) = sim.pulse_edges();
        assert!(x_edges >= 1);
        assert_eq!(y_edges, 0);
    }

    #[test]
    fn test_home_axes_runs_offset_after_both() {
        // Both sensors trip immediately; the offset move still emits its 4
        // diagonal sub-steps (it starts parked on the sensors)
        let mut sim = SimPorts::new()
            .trip_limit_after(Axis::X, 0)
            .trip_limit_after(Axis::Y, 0);

        let outcome = home_axes(&mut sim, &cfg(), 100).unwrap();
        assert_eq!(outcome, HomeOutcome::Completed);
        assert_eq!(sim.pulse_edges(), (4, 4));
    }

    #[test]
    fn test_home_axes_stop_button_aborts_sequence() {
        let mut sim = SimPorts::new().trip_stop_after(1);

        let outcome = home_axes(&mut sim, &cfg(), 100).unwrap();
        assert_eq!(outcome, HomeOutcome::Aborted);
    }
}
