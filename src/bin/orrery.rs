//! N-body Simulation Runner
//!
//! Loads a scenario (from a JSON file or a built-in preset), advances it for the
//! requested number of steps and prints per-body results and conservation
//! diagnostics. Optionally writes the final state and trajectories as JSON.
//!
//! Usage:
//!   cargo run --bin orrery -- [--preset sun-earth] [--steps 365] [--output out.json]
//!   cargo run --bin orrery -- path/to/scenario.json -vv

use std::path::PathBuf;
use std::time::Instant;

use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter};
use orrery::export;
use orrery::scenario::{ClusterConfig, Scenario};
use orrery::simulator::{Diagnostics, Simulator};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// Sun and Earth, one year at one-day steps
    SunEarth,
    /// Seeded synthetic cluster around a solar mass
    Cluster,
}

/// N-body Simulation Runner
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Runs a brute-force gravitational N-body simulation",
    long_about = None
)]
struct Args {
    /// Scenario file (JSON); overrides --preset
    scenario: Option<PathBuf>,

    /// Built-in scenario to use when no file is given
    #[arg(long, value_enum, default_value_t = Preset::SunEarth)]
    preset: Preset,

    /// Number of orbiting bodies for the cluster preset
    #[arg(long, default_value_t = 100)]
    count: usize,

    /// Random seed for the cluster preset
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Step size in seconds (overrides the scenario)
    #[arg(long)]
    dt: Option<f64>,

    /// Number of steps (overrides the scenario)
    #[arg(long)]
    steps: Option<u64>,

    /// Keep at most this many trajectory points per body
    #[arg(long)]
    trajectory_cap: Option<usize>,

    /// Print diagnostics every N steps (0 disables)
    #[arg(long, default_value_t = 0)]
    report_every: u64,

    /// Write the final state as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Include full trajectories in the JSON output
    #[arg(long, action = ArgAction::SetTrue)]
    trajectories: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn load_scenario(args: &Args) -> Result<Scenario> {
    let mut scenario = match (&args.scenario, args.preset) {
        (Some(path), _) => Scenario::from_file(path)?,
        (None, Preset::SunEarth) => Scenario::sun_earth(),
        (None, Preset::Cluster) => ClusterConfig::new()
            .with_count(args.count)
            .with_seed(args.seed)
            .generate()?,
    };

    if let Some(dt) = args.dt {
        scenario.dt = dt;
    }
    if let Some(steps) = args.steps {
        scenario.steps = steps;
    }
    if args.trajectory_cap.is_some() {
        scenario.trajectory_cap = args.trajectory_cap;
    }
    Ok(scenario)
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn print_diagnostics(diagnostics: &Diagnostics, initial_energy: f64) {
    let drift = if initial_energy != 0.0 {
        (diagnostics.total_energy() - initial_energy) / initial_energy.abs()
    } else {
        0.0
    };
    println!(
        "step {:>8}  t = {:>12.4e} s  E = {:>14.6e} J  dE/|E0| = {:>+10.3e}  |p| = {:.3e}",
        diagnostics.steps,
        diagnostics.elapsed,
        diagnostics.total_energy(),
        drift,
        diagnostics.momentum.magnitude()
    );
}

fn print_bodies(simulator: &Simulator) {
    print_section_header(format!("Bodies ({} total)", simulator.len()).as_str());
    println!(
        "{:<20} {:<40} {:<14} {:<10}",
        "Name", "Position (m)", "Speed (m/s)", "Points"
    );
    println!("-------------------------------------------------------");
    for body in simulator.bodies() {
        println!(
            "{:<20} {:<40} {:<14.4e} {:<10}",
            body.name,
            body.position().to_string(),
            body.velocity().magnitude(),
            body.trajectory().len()
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scenario = load_scenario(&args)?;
    info!(
        "Scenario '{}': {} bodies, dt = {} s, {} steps",
        scenario.name,
        scenario.bodies.len(),
        scenario.dt,
        scenario.steps
    );

    let mut simulator = scenario.build_simulator()?;
    let initial = simulator.diagnostics()?;

    print_section_header("Diagnostics");
    print_diagnostics(&initial, initial.total_energy());

    let start = Instant::now();
    for _ in 0..scenario.steps {
        simulator.step_simulation(scenario.dt)?;
        if args.report_every > 0 && simulator.steps() % args.report_every == 0 {
            print_diagnostics(&simulator.diagnostics()?, initial.total_energy());
        }
    }
    let elapsed = start.elapsed();

    let last = simulator.diagnostics()?;
    if args.report_every == 0 || simulator.steps() % args.report_every != 0 {
        print_diagnostics(&last, initial.total_energy());
    }

    print_bodies(&simulator);

    print_section_header("Performance");
    println!("Wall time: {:.3?}", elapsed);
    if scenario.steps > 0 {
        println!(
            "Per step:  {:.3} µs",
            elapsed.as_secs_f64() * 1e6 / scenario.steps as f64
        );
    }

    if let Some(path) = &args.output {
        export::write_json(&simulator, path, args.trajectories)?;
        println!("\nWrote final state to {}", path.display());
    }

    Ok(())
}
