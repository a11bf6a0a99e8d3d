//! Compiled-in pattern tables.
//!
//! Only the formulaic patterns live here; hand-digitized artwork tables are
//! pattern data, loaded through the configuration layer instead.

use super::table::{DelayPlan, MotionTable, Segment};

/// Full-height Y sweep of the clearing raster, in steps.
const SWEEP_HEIGHT: i32 = 11_200;
/// X feed between clearing sweeps, in steps.
const FEED_WIDTH: i32 = 200;
/// Number of segments in the clearing raster.
const ERASE_LEN: usize = 113;

const SWEEP_UP: &[i32] = &[SWEEP_HEIGHT];
const SWEEP_DOWN: &[i32] = &[-SWEEP_HEIGHT];
const HOLD: &[i32] = &[0];

const ERASE_SEGMENTS: [Segment<'static>; ERASE_LEN] = build_erase();

/// Build the boustrophedon clearing raster: alternating full-height Y
/// sweeps with a short X feed between them, 56 columns wide.
const fn build_erase() -> [Segment<'static>; ERASE_LEN] {
    let mut segments = [Segment { dx: 0, dy: HOLD }; ERASE_LEN];
    let mut k = 0;
    while k < ERASE_LEN {
        segments[k] = if k % 2 == 1 {
            Segment {
                dx: FEED_WIDTH,
                dy: HOLD,
            }
        } else if (k / 2) % 2 == 0 {
            Segment {
                dx: 0,
                dy: SWEEP_UP,
            }
        } else {
            Segment {
                dx: 0,
                dy: SWEEP_DOWN,
            }
        };
        k += 1;
    }
    segments
}

/// Surface-clearing raster.
///
/// Y sweeps run on a short tick budget, the X feeds on a long one, so the
/// stylus wipes fast and advances slowly.
pub const ERASE: MotionTable<'static> = MotionTable {
    segments: &ERASE_SEGMENTS,
    indicator: 0x00,
    delay: DelayPlan::ByAxis {
        y_only: 80,
        x_move: 1000,
    },
};

/// Square spiral, wound from the outside in.
///
/// Twenty-one single-axis legs: out, up, back, down, each pair of legs
/// shrinking by a tenth of the full width.
pub const SQUARE_SPIRAL: MotionTable<'static> = MotionTable {
    segments: &[
        Segment { dx: 11_200, dy: &[0] },
        Segment { dx: 0, dy: &[11_200] },
        Segment { dx: -11_200, dy: &[0] },
        Segment { dx: 0, dy: &[-10_080] },
        Segment { dx: 10_080, dy: &[0] },
        Segment { dx: 0, dy: &[8_960] },
        Segment { dx: -8_960, dy: &[0] },
        Segment { dx: 0, dy: &[-7_840] },
        Segment { dx: 7_840, dy: &[0] },
        Segment { dx: 0, dy: &[6_720] },
        Segment { dx: -6_720, dy: &[0] },
        Segment { dx: 0, dy: &[-5_600] },
        Segment { dx: 5_600, dy: &[0] },
        Segment { dx: 0, dy: &[4_480] },
        Segment { dx: -4_480, dy: &[0] },
        Segment { dx: 0, dy: &[-3_360] },
        Segment { dx: 3_360, dy: &[0] },
        Segment { dx: 0, dy: &[2_240] },
        Segment { dx: -2_240, dy: &[0] },
        Segment { dx: 0, dy: &[-1_120] },
        Segment { dx: 1_120, dy: &[0] },
    ],
    indicator: 0x30,
    delay: DelayPlan::Uniform(200),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erase_raster_shape() {
        assert_eq!(ERASE.segments.len(), 113);

        // Odd slots feed X, even slots sweep Y with alternating sign
        assert_eq!(ERASE.segments[0], Segment { dx: 0, dy: &[11_200] });
        assert_eq!(ERASE.segments[1], Segment { dx: 200, dy: &[0] });
        assert_eq!(ERASE.segments[2], Segment { dx: 0, dy: &[-11_200] });
        assert_eq!(ERASE.segments[4], Segment { dx: 0, dy: &[11_200] });

        // The raster ends on an upward sweep
        assert_eq!(ERASE.segments[112], Segment { dx: 0, dy: &[11_200] });
    }

    #[test]
    fn test_erase_net_y_is_one_sweep() {
        // 29 up-sweeps, 28 down-sweeps: the stylus finishes at the top
        let net: i64 = ERASE
            .segments
            .iter()
            .flat_map(|s| s.dy.iter())
            .map(|&dy| i64::from(dy))
            .sum();
        assert_eq!(net, i64::from(SWEEP_HEIGHT));
    }

    #[test]
    fn test_square_spiral_winds_to_the_center() {
        let net_x: i64 = SQUARE_SPIRAL
            .segments
            .iter()
            .map(|s| i64::from(s.dx) * s.dy.len() as i64)
            .sum();
        let net_y: i64 = SQUARE_SPIRAL
            .segments
            .iter()
            .flat_map(|s| s.dy.iter())
            .map(|&d| i64::from(d))
            .sum();

        // The spiral ends at the middle of the 11200-step square
        assert_eq!(net_x, 5_600);
        assert_eq!(net_y, 5_600);

        // Every leg is single-axis
        for s in SQUARE_SPIRAL.segments {
            let y_total: i64 = s.dy.iter().map(|&d| i64::from(d)).sum();
            assert!(s.dx == 0 || y_total == 0);
        }
    }
}
