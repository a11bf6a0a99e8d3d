//! Step waveform emission.
//!
//! One sub-step is one coordinated electrical waveform across both axes.
//! A fast axis packs two full pulses into the sub-step period; the total
//! period stays close to `delay_ticks` either way, which is what keeps the
//! two axes visually in lockstep over a whole segment.

use crate::error::PortError;
use crate::ports::{Direction, MachinePorts, OutputLines};

use super::plan::{SegmentPlan, SubStep};

/// Emits step waveforms for one planned segment.
///
/// Holds the per-segment constants (tick budget, indicator, directions);
/// the per-sub-step pulse state comes in through [`emit`](StepEmitter::emit).
#[derive(Debug, Clone, Copy)]
pub struct StepEmitter {
    delay_ticks: u32,
    indicator: u8,
    x_dir: Direction,
    y_dir: Direction,
}

impl StepEmitter {
    /// Create an emitter with explicit directions.
    pub fn new(delay_ticks: u32, indicator: u8, x_dir: Direction, y_dir: Direction) -> Self {
        Self {
            delay_ticks,
            indicator,
            x_dir,
            y_dir,
        }
    }

    /// Create an emitter for a planned segment.
    pub fn for_plan(plan: &SegmentPlan, delay_ticks: u32, indicator: u8) -> Self {
        Self::new(delay_ticks, indicator, plan.x_dir, plan.y_dir)
    }

    /// The tick budget of one sub-step.
    #[inline]
    pub fn delay_ticks(&self) -> u32 {
        self.delay_ticks
    }

    /// Emit one sub-step waveform.
    ///
    /// Phases, with enable asserted throughout:
    ///
    /// 1. both pulses as classified, held `delay / 2` if either axis is
    ///    fast, else `delay`
    /// 2. (x fast) X released, Y held, `delay / 2` — X's first pulse ends
    ///    while Y's single pulse continues
    /// 3. (y fast) mirror of phase 2
    /// 4. (either fast) both re-asserted, `delay / 2` — the fast axis's
    ///    second pulse
    /// 5. both released, directions held, `delay / 2` or `delay` as in
    ///    phase 1
    ///
    /// A phase, once started, always runs to completion; abort sampling
    /// happens between sub-steps, never in here.
    pub fn emit<P: MachinePorts>(&self, ports: &mut P, sub: SubStep) -> Result<(), PortError> {
        let rate_divisor = if sub.x_fast || sub.y_fast { 2 } else { 1 };

        let driven = OutputLines {
            x_pulse: sub.x_pulse,
            x_dir: self.x_dir,
            y_pulse: sub.y_pulse,
            y_dir: self.y_dir,
            enable: true,
            indicator: self.indicator,
        };

        ports.set_outputs(driven)?;
        ports.wait_ticks(self.delay_ticks / rate_divisor);

        if sub.x_fast {
            ports.set_outputs(OutputLines {
                x_pulse: false,
                ..driven
            })?;
            ports.wait_ticks(self.delay_ticks / 2);
        }

        if sub.y_fast {
            ports.set_outputs(OutputLines {
                y_pulse: false,
                ..driven
            })?;
            ports.wait_ticks(self.delay_ticks / 2);
        }

        if sub.x_fast || sub.y_fast {
            ports.set_outputs(driven)?;
            ports.wait_ticks(self.delay_ticks / 2);
        }

        ports.set_outputs(OutputLines {
            x_pulse: false,
            y_pulse: false,
            ..driven
        })?;
        ports.wait_ticks(self.delay_ticks / rate_divisor);

        Ok(())
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::ports::sim::{SimEvent, SimPorts};

    fn slow_sub() -> SubStep {
        SubStep {
            x_pulse: true,
            y_pulse: true,
            x_fast: false,
            y_fast: false,
        }
    }

    #[test]
    fn test_slow_sub_step_is_two_phases() {
        let mut sim = SimPorts::new();
        let emitter = StepEmitter::new(500, 0x03, Direction::Positive, Direction::Negative);
        emitter.emit(&mut sim, slow_sub()).unwrap();

        let waits: Vec<_> = sim
            .events()
            .iter()
            .filter_map(|e| match e {
                SimEvent::Wait(n) => Some(*n),
                _ => None,
            })
            .collect();
        assert_eq!(waits, vec![500, 500]);

        let writes: Vec<_> = sim.output_writes().collect();
        assert_eq!(writes.len(), 2);
        assert!(writes[0].x_pulse && writes[0].y_pulse && writes[0].enable);
        assert!(!writes[1].x_pulse && !writes[1].y_pulse && writes[1].enable);
        assert_eq!(writes[1].x_dir, Direction::Positive);
        assert_eq!(writes[1].y_dir, Direction::Negative);
    }

    #[test]
    fn test_fast_x_doubles_the_pulse() {
        let mut sim = SimPorts::new();
        let emitter = StepEmitter::new(500, 0, Direction::Positive, Direction::Positive);
        emitter
            .emit(
                &mut sim,
                SubStep {
                    x_pulse: true,
                    y_pulse: true,
                    x_fast: true,
                    y_fast: false,
                },
            )
            .unwrap();

        let waits: Vec<_> = sim
            .events()
            .iter()
            .filter_map(|e| match e {
                SimEvent::Wait(n) => Some(*n),
                _ => None,
            })
            .collect();
        // Four half-period phases: assert, x-released, re-assert, release
        assert_eq!(waits, vec![250, 250, 250, 250]);

        // X sees two rising edges inside one sub-step, Y only one
        assert_eq!(sim.pulse_edges(), (2, 1));
    }

    #[test]
    fn test_fast_sub_step_keeps_period() {
        let mut slow = SimPorts::new();
        let mut fast = SimPorts::new();
        let emitter = StepEmitter::new(400, 0, Direction::Positive, Direction::Positive);

        emitter.emit(&mut slow, slow_sub()).unwrap();
        emitter
            .emit(
                &mut fast,
                SubStep {
                    x_pulse: true,
                    y_pulse: true,
                    x_fast: false,
                    y_fast: true,
                },
            )
            .unwrap();

        // Total elapsed ticks per sub-step match regardless of classification
        assert_eq!(slow.elapsed_ticks(), 800);
        assert_eq!(fast.elapsed_ticks(), 800);
    }

    #[test]
    fn test_enable_held_through_all_phases() {
        let mut sim = SimPorts::new();
        let emitter = StepEmitter::new(100, 0, Direction::Negative, Direction::Positive);
        emitter
            .emit(
                &mut sim,
                SubStep {
                    x_pulse: true,
                    y_pulse: false,
                    x_fast: true,
                    y_fast: false,
                },
            )
            .unwrap();

        assert!(sim.output_writes().all(|w| w.enable));
    }
}
