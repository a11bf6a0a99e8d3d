//! Configuration-driven pattern execution.
//!
//! Parses a plotter configuration from TOML, validates it and traces one of
//! its patterns on the recording simulator.

use plotter_motion::config::parse_config;
use plotter_motion::ports::sim::SimPorts;
use plotter_motion::Plotter;

const CONFIG_TOML: &str = r#"
[homing]
half_period_ticks = 500
offset_steps = 100
offset_delay_ticks = 1000

[power]
settle_ticks = 15625

# A coarse round spiral: constant X feed while the Y delta tapers off
[patterns.round_spiral]
indicator = 12
delay = { uniform = 300 }
segments = [
    { dx = 0, dy = [5600] },
    { dx = 28, dy = [559, 231, 176, 148, 130, 117, 107, 99, 93, 88] },
    { dx = -25, dy = [-497, -205, -157, -132, -115, -104, -95, -88] },
]

# A short clearing wipe: fast Y sweeps, slow X feeds
[patterns.wipe]
delay = { by_axis = { y_only = 80, x_move = 1000 } }
segments = [
    { dx = 0, dy = [11200] },
    { dx = 200, dy = [0] },
    { dx = 0, dy = [-11200] },
]
"#;

fn main() {
    println!("=== Configuration-Driven Pattern ===\n");

    let config = parse_config(CONFIG_TOML).expect("configuration should parse");
    println!("Loaded {} pattern(s):", config.pattern_names().count());
    for name in config.pattern_names() {
        let pattern = config.pattern(name).unwrap();
        println!(
            "  {:<14} indicator {:#04x}, {} segment(s)",
            name,
            pattern.indicator,
            pattern.segments.len()
        );
    }

    let spiral = config.pattern("round_spiral").unwrap();
    let mut plotter = Plotter::with_timing(SimPorts::new(), config.homing.clone(), config.power);

    let outcome = plotter
        .run_config_pattern(spiral)
        .expect("run should not fail on the simulator");
    println!("\nround_spiral: {:?}", outcome);

    let sim = plotter.into_ports();
    let (x_edges, y_edges) = sim.pulse_edges();
    println!("X step edges: {}", x_edges);
    println!("Y step edges: {}", y_edges);
    println!("Simulated ticks: {}", sim.elapsed_ticks());
}
