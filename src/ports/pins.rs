//! embedded-hal 1.0 backend for the hardware seam.
//!
//! Wires [`MachinePorts`](super::MachinePorts) to `OutputPin` drive lines,
//! `InputPin` sensors and a `DelayNs` tick source.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::PortError;

use super::{Axis, Direction, MachinePorts, OutputLines};

/// Receiver for the status indicator value.
///
/// The indicator is a board-specific LED bank; implement this for whatever
/// drives it. `()` discards the value.
pub trait IndicatorSink {
    /// Show an indicator value.
    fn set_indicator(&mut self, value: u8);
}

impl IndicatorSink for () {
    fn set_indicator(&mut self, _value: u8) {}
}

/// The pulse/direction pin pair of one axis.
pub struct AxisPins<PUL, DIR>
where
    PUL: OutputPin,
    DIR: OutputPin,
{
    /// Pulse line.
    pub pulse: PUL,
    /// Direction line.
    pub dir: DIR,
}

impl<PUL, DIR> AxisPins<PUL, DIR>
where
    PUL: OutputPin,
    DIR: OutputPin,
{
    /// Pair a pulse and a direction pin.
    pub fn new(pulse: PUL, dir: DIR) -> Self {
        Self { pulse, dir }
    }
}

/// [`MachinePorts`] backend over embedded-hal 1.0 pins.
///
/// Sensor inputs are treated as active-high by default; call
/// [`active_low_sensors`](PinPorts::active_low_sensors) for normally-closed
/// (opener) contacts wired to pull-ups. A failed sensor read is reported as
/// tripped, so a broken wire stops the machine rather than letting it run
/// into the rail.
pub struct PinPorts<XP, XD, YP, YD, EN, ST, XL, YL, D, IND = ()>
where
    XP: OutputPin,
    XD: OutputPin,
    YP: OutputPin,
    YD: OutputPin,
    EN: OutputPin,
    ST: InputPin,
    XL: InputPin,
    YL: InputPin,
    D: DelayNs,
    IND: IndicatorSink,
{
    x: AxisPins<XP, XD>,
    y: AxisPins<YP, YD>,
    enable: EN,
    stop: ST,
    x_limit: XL,
    y_limit: YL,
    delay: D,
    indicator: IND,

    /// Nanoseconds per tick unit of the machine's timer.
    ns_per_tick: u32,

    /// Invert the DIR line level per axis (wiring-dependent).
    invert_x_dir: bool,
    invert_y_dir: bool,

    /// Sensor lines read low when tripped.
    sensors_active_low: bool,
}

impl<XP, XD, YP, YD, EN, ST, XL, YL, D, IND> PinPorts<XP, XD, YP, YD, EN, ST, XL, YL, D, IND>
where
    XP: OutputPin,
    XD: OutputPin,
    YP: OutputPin,
    YD: OutputPin,
    EN: OutputPin,
    ST: InputPin,
    XL: InputPin,
    YL: InputPin,
    D: DelayNs,
    IND: IndicatorSink,
{
    /// Wire up the machine.
    ///
    /// `ns_per_tick` scales the core's tick units onto the `DelayNs` source.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: AxisPins<XP, XD>,
        y: AxisPins<YP, YD>,
        enable: EN,
        stop: ST,
        x_limit: XL,
        y_limit: YL,
        delay: D,
        indicator: IND,
        ns_per_tick: u32,
    ) -> Self {
        Self {
            x,
            y,
            enable,
            stop,
            x_limit,
            y_limit,
            delay,
            indicator,
            ns_per_tick,
            invert_x_dir: false,
            invert_y_dir: false,
            sensors_active_low: false,
        }
    }

    /// Invert the X DIR line level.
    pub fn invert_x_dir(mut self, invert: bool) -> Self {
        self.invert_x_dir = invert;
        self
    }

    /// Invert the Y DIR line level.
    pub fn invert_y_dir(mut self, invert: bool) -> Self {
        self.invert_y_dir = invert;
        self
    }

    /// Treat sensor inputs as active-low (normally-closed contacts).
    pub fn active_low_sensors(mut self) -> Self {
        self.sensors_active_low = true;
        self
    }

    /// Release the wired pins.
    pub fn into_parts(self) -> (AxisPins<XP, XD>, AxisPins<YP, YD>, EN, ST, XL, YL, D) {
        (
            self.x,
            self.y,
            self.enable,
            self.stop,
            self.x_limit,
            self.y_limit,
            self.delay,
        )
    }

    fn dir_level(dir: Direction, invert: bool) -> bool {
        let high = matches!(dir, Direction::Positive);
        high != invert
    }

    fn set_level<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), PortError> {
        let result = if high { pin.set_high() } else { pin.set_low() };
        result.map_err(|_| PortError::OutputWrite)
    }

    fn read_sensor<P: InputPin>(pin: &mut P, active_low: bool) -> bool {
        match pin.is_high() {
            Ok(level) => level != active_low,
            // Unreadable sensor: report tripped
            Err(_) => true,
        }
    }
}

impl<XP, XD, YP, YD, EN, ST, XL, YL, D, IND> MachinePorts
    for PinPorts<XP, XD, YP, YD, EN, ST, XL, YL, D, IND>
where
    XP: OutputPin,
    XD: OutputPin,
    YP: OutputPin,
    YD: OutputPin,
    EN: OutputPin,
    ST: InputPin,
    XL: InputPin,
    YL: InputPin,
    D: DelayNs,
    IND: IndicatorSink,
{
    fn set_outputs(&mut self, lines: OutputLines) -> Result<(), PortError> {
        Self::set_level(&mut self.x.dir, Self::dir_level(lines.x_dir, self.invert_x_dir))?;
        Self::set_level(&mut self.y.dir, Self::dir_level(lines.y_dir, self.invert_y_dir))?;
        Self::set_level(&mut self.enable, lines.enable)?;
        Self::set_level(&mut self.x.pulse, lines.x_pulse)?;
        Self::set_level(&mut self.y.pulse, lines.y_pulse)?;
        self.indicator.set_indicator(lines.indicator);
        Ok(())
    }

    fn stop_requested(&mut self) -> bool {
        Self::read_sensor(&mut self.stop, false)
    }

    fn axis_limit(&mut self, axis: Axis) -> bool {
        match axis {
            Axis::X => Self::read_sensor(&mut self.x_limit, self.sensors_active_low),
            Axis::Y => Self::read_sensor(&mut self.y_limit, self.sensors_active_low),
        }
    }

    fn wait_ticks(&mut self, n: u32) {
        self.delay.delay_ns(n.saturating_mul(self.ns_per_tick));
    }

    fn set_power(&mut self, enabled: bool) -> Result<(), PortError> {
        if !enabled {
            // Release the pulse lines before dropping drive current
            Self::set_level(&mut self.x.pulse, false).map_err(|_| PortError::PowerSwitch)?;
            Self::set_level(&mut self.y.pulse, false).map_err(|_| PortError::PowerSwitch)?;
        }
        Self::set_level(&mut self.enable, enabled).map_err(|_| PortError::PowerSwitch)
    }
}
