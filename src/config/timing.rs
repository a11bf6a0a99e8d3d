//! Machine timing configuration.

use serde::Deserialize;

use crate::ports::Direction;

/// Homing sequence parameters.
///
/// The defaults reproduce the reference machine: 500-tick half-periods
/// toward the negative end of each axis, then a 100-step diagonal offset at
/// a 1000-tick budget into the drawing origin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomingConfig {
    /// Ticks per half of a homing pulse cycle.
    #[serde(default = "default_half_period_ticks")]
    pub half_period_ticks: u32,

    /// Travel direction toward the limit sensors.
    #[serde(default = "default_homing_direction")]
    pub direction: Direction,

    /// Diagonal steps from the sensors to the drawing origin.
    #[serde(default = "default_offset_steps")]
    pub offset_steps: u32,

    /// Tick budget per offset sub-step.
    #[serde(default = "default_offset_delay_ticks")]
    pub offset_delay_ticks: u32,
}

fn default_half_period_ticks() -> u32 {
    500
}

fn default_homing_direction() -> Direction {
    Direction::Negative
}

fn default_offset_steps() -> u32 {
    100
}

fn default_offset_delay_ticks() -> u32 {
    1000
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            half_period_ticks: default_half_period_ticks(),
            direction: default_homing_direction(),
            offset_steps: default_offset_steps(),
            offset_delay_ticks: default_offset_delay_ticks(),
        }
    }
}

/// Power controller parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PowerConfig {
    /// Ticks to hold after cutting drive power.
    #[serde(default = "default_settle_ticks")]
    pub settle_ticks: u32,
}

fn default_settle_ticks() -> u32 {
    15_625
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            settle_ticks: default_settle_ticks(),
        }
    }
}
