//! Pattern configuration from TOML (std only).

use serde::Deserialize;

use crate::pattern::{DelayPlan, MotionTable, Segment};

/// One segment as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SegmentConfig {
    /// X delta, constant across the segment's Y entries.
    pub dx: i32,
    /// Y deltas, one per sub-iteration.
    pub dy: Vec<i32>,
}

/// A named pattern from configuration.
///
/// ```toml
/// [patterns.logo]
/// indicator = 3
/// delay = { uniform = 500 }
/// segments = [
///     { dx = 0, dy = [11200] },
///     { dx = 5587, dy = [0] },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatternConfig {
    /// Indicator value shown while this pattern runs.
    #[serde(default)]
    pub indicator: u8,

    /// Step delay selection.
    pub delay: DelayPlan,

    /// Segments in trace order.
    pub segments: Vec<SegmentConfig>,
}

impl PatternConfig {
    /// Borrow the configured segments as run-loop segments.
    pub fn run_segments(&self) -> Vec<Segment<'_>> {
        self.segments
            .iter()
            .map(|s| Segment {
                dx: s.dx,
                dy: &s.dy,
            })
            .collect()
    }

    /// Materialize a motion table view of this pattern and pass it to `f`.
    ///
    /// The table borrows this config's storage, so it lives only for the
    /// duration of the call.
    pub fn with_table<R>(&self, f: impl FnOnce(&MotionTable<'_>) -> R) -> R {
        let segments = self.run_segments();
        let table = MotionTable {
            segments: &segments,
            indicator: self.indicator,
            delay: self.delay,
        };
        f(&table)
    }
}
