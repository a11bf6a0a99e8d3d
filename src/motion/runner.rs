//! Pattern run loop.
//!
//! Walks a motion table segment by segment, planning each (dx, dy) entry and
//! emitting its sub-steps, with the abort condition sampled before every
//! emission. An abort ends the run at once; there is no resume — a re-run
//! starts over from the first segment.

use crate::error::Result;
use crate::pattern::MotionTable;
use crate::ports::MachinePorts;

use super::plan::SegmentPlan;
use super::step::StepEmitter;

/// Terminal state of a pattern run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunOutcome {
    /// All segments retired.
    Completed,
    /// Stop control or a limit sensor tripped mid-run.
    Aborted,
}

impl RunOutcome {
    /// Check if the run finished every segment.
    #[inline]
    pub fn is_completed(self) -> bool {
        matches!(self, RunOutcome::Completed)
    }
}

/// Trace a motion table.
///
/// For every delta entry of every segment: plan, then emit the plan's
/// sub-steps, sampling the composite abort condition before each one. When
/// the abort condition reads asserted at sub-step `j`, exactly `j` sub-steps
/// of that entry have been emitted and nothing after it runs.
///
/// Power is left as-is on both exits; cutting drive current after a run is
/// the [power controller](super::shutdown)'s job.
pub fn run_pattern<P: MachinePorts>(ports: &mut P, table: &MotionTable<'_>) -> Result<RunOutcome> {
    for segment in table.segments {
        for &dy in segment.dy {
            let plan = SegmentPlan::for_deltas(segment.dx, dy);
            let delay = table.delay.ticks_for(segment.dx);
            let emitter = StepEmitter::for_plan(&plan, delay, table.indicator);

            for sub in plan.sub_steps() {
                if ports.any_abort() {
                    return Ok(RunOutcome::Aborted);
                }
                emitter.emit(ports, sub)?;
            }
        }
    }
    Ok(RunOutcome::Completed)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::pattern::{DelayPlan, Segment};
    use crate::ports::sim::SimPorts;
    use crate::ports::Axis;

    fn table<'a>(segments: &'a [Segment<'a>]) -> MotionTable<'a> {
        MotionTable {
            segments,
            indicator: 0x0c,
            delay: DelayPlan::Uniform(300),
        }
    }

    #[test]
    fn test_completes_all_segments() {
        let segments = [
            Segment { dx: 5, dy: &[5] },
            Segment { dx: 0, dy: &[3, -3] },
        ];
        let mut sim = SimPorts::new();

        let outcome = run_pattern(&mut sim, &table(&segments)).unwrap();
        assert_eq!(outcome, RunOutcome::Completed);

        // 5 + 3 + 3 sub-steps, all slow: two writes each
        assert_eq!(sim.output_writes().count(), 22);
        assert_eq!(sim.pulse_edges(), (5, 11));
    }

    #[test]
    fn test_abort_is_immediate() {
        // Two segments of 10 slow sub-steps each; the abort condition trips
        // at the fourth sample of segment two (sub-step index 3)
        let segments = [
            Segment { dx: 10, dy: &[10] },
            Segment { dx: 10, dy: &[10] },
        ];
        let mut sim = SimPorts::new().trip_stop_after(13);

        let outcome = run_pattern(&mut sim, &table(&segments)).unwrap();
        assert_eq!(outcome, RunOutcome::Aborted);

        // 10 sub-steps of segment one, 3 of segment two, none after
        assert_eq!(sim.output_writes().count(), 2 * 13);
        assert_eq!(sim.pulse_edges(), (13, 13));
    }

    #[test]
    fn test_limit_sensor_aborts_like_stop() {
        let segments = [Segment { dx: 10, dy: &[10] }];
        let mut sim = SimPorts::new().trip_limit_after(Axis::Y, 6);

        let outcome = run_pattern(&mut sim, &table(&segments)).unwrap();
        assert_eq!(outcome, RunOutcome::Aborted);
        assert_eq!(sim.pulse_edges(), (6, 6));
    }

    #[test]
    fn test_per_segment_delay_selection() {
        let segments = [
            Segment { dx: 0, dy: &[2] },
            Segment { dx: 2, dy: &[2] },
        ];
        let t = MotionTable {
            segments: &segments,
            indicator: 0,
            delay: DelayPlan::ByAxis {
                y_only: 80,
                x_move: 1000,
            },
        };
        let mut sim = SimPorts::new();
        run_pattern(&mut sim, &t).unwrap();

        // Y-only sweep runs on the short delay, the X move on the long one
        assert_eq!(sim.elapsed_ticks(), 2 * (80 + 80) + 2 * (1000 + 1000));
    }

    #[test]
    fn test_zero_delta_entries_emit_nothing() {
        let segments = [Segment { dx: 0, dy: &[0, 0] }];
        let mut sim = SimPorts::new();

        let outcome = run_pattern(&mut sim, &table(&segments)).unwrap();
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(sim.events().len(), 0);
    }

    #[test]
    fn test_rerun_starts_from_the_first_segment() {
        let segments = [Segment { dx: 4, dy: &[4] }];
        let mut sim = SimPorts::new();

        run_pattern(&mut sim, &table(&segments)).unwrap();
        let first_run_writes = sim.output_writes().count();
        run_pattern(&mut sim, &table(&segments)).unwrap();

        assert_eq!(sim.output_writes().count(), first_run_writes * 2);
    }
}
