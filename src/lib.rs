//! # plotter-motion
//!
//! Two-axis sand-plotter motion control with speed-balanced step generation
//! and embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Speed-balanced segments**: the shorter axis of a segment is driven at
//!   double pulse rate for its leading sub-steps so both axes finish together
//! - **embedded-hal 1.0**: `OutputPin`/`InputPin` for the drive and sensor
//!   lines, `DelayNs` for tick timing
//! - **no_std compatible**: the motion core works without the standard library
//! - **Abort-aware**: stop button and limit sensors are sampled between every
//!   sub-step; a trip terminates the run immediately, with no resume
//! - **Pattern tables as data**: compiled-in tables for the built-in patterns,
//!   TOML-loadable tables for everything else
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plotter_motion::{pattern::builtin, Plotter, RunOutcome};
//!
//! // Wire the machine through any MachinePorts backend
//! let mut plotter = Plotter::new(ports);
//!
//! // Trace the built-in square spiral, then cut drive power
//! match plotter.run_pattern(&builtin::SQUARE_SPIRAL)? {
//!     RunOutcome::Completed => {}
//!     RunOutcome::Aborted => {} // stop button or limit sensor tripped
//! }
//!
//! // Home both axes and offset into the drawing origin
//! plotter.home_axes()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables TOML pattern loading and the `SimPorts` backend
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod pattern;
pub mod plotter;
pub mod ports;

// Re-exports for ergonomic API
pub use config::{HomingConfig, PowerConfig};
pub use error::{Error, Result};
pub use motion::{HomeOutcome, RunOutcome, SegmentPlan, StepEmitter, SubStep};
pub use pattern::{DelayPlan, MotionTable, PatternRegistry, Segment};
pub use plotter::Plotter;
pub use ports::{Axis, Direction, MachinePorts, OutputLines};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, validate_config, PlotterConfig};
