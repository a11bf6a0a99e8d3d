//! Motion module for plotter-motion.
//!
//! Provides segment planning, step waveform emission, the abort-aware
//! pattern run loop, homing and the power/idle controller.

mod homing;
mod plan;
mod power;
mod runner;
mod step;

pub use homing::{home_axes, home_axis, AxisHomeOutcome, HomeOutcome};
pub use plan::{SegmentPlan, SubStep};
pub use power::shutdown;
pub use runner::{run_pattern, RunOutcome};
pub use step::StepEmitter;
