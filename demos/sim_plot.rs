//! Simulated plot run.
//!
//! Homes the machine, traces the built-in square spiral on the recording
//! simulator and prints what the motors would have seen. No hardware
//! required.

use plotter_motion::pattern::builtin;
use plotter_motion::ports::sim::SimPorts;
use plotter_motion::ports::Axis;
use plotter_motion::{HomingConfig, Plotter, PowerConfig};

fn main() {
    println!("=== Simulated Plot Run ===\n");

    // Limit sensors "trip" after a few homing cycles on the simulator
    let sim = SimPorts::new()
        .trip_limit_after(Axis::X, 8)
        .trip_limit_after(Axis::Y, 8);

    let mut plotter = Plotter::with_timing(sim, HomingConfig::default(), PowerConfig::default());

    let outcome = plotter.home_axes().expect("homing failed");
    println!("Homing: {:?}", outcome);

    // The offset move backed the carriage off the sensors
    plotter.ports().release_limits();

    let spiral = &builtin::SQUARE_SPIRAL;
    println!(
        "\nTracing square spiral: {} segments, indicator {:#04x}",
        spiral.segments.len(),
        spiral.indicator
    );

    let outcome = plotter.run_pattern(spiral).expect("run failed");
    println!("Run: {:?}", outcome);

    let sim = plotter.into_ports();
    let (x_edges, y_edges) = sim.pulse_edges();
    println!("\n=== Machine trace ===");
    println!("X step edges:    {}", x_edges);
    println!("Y step edges:    {}", y_edges);
    println!("Tick waits:      {}", sim.wait_count());
    println!("Simulated ticks: {}", sim.elapsed_ticks());
    println!("Drive power:     {}", if sim.power() { "on" } else { "off" });
}
