//! Scenario driver
//!
//! Runs the staffing scenarios (built-in sweep, or a TOML scenario file
//! given as the first argument), prints per-scenario summaries, writes
//! the queue-length series and summary JSON to `results/`, and finishes
//! with the fixed-increment baseline for comparison.

use std::env;
use std::process;

use call_center::analysis::{print_comparison, ScenarioSummary};
use call_center::output;
use call_center::scenarios::{load_scenarios, run_all, staffing_sweep, Scenario};
use call_center::time_stepped::{self, TickConfig};

const DEFAULT_HORIZON: f64 = 100.0;
const DEFAULT_BASE_SEED: u64 = 42;
const OUTPUT_DIR: &str = "results";

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [scenarios.toml]", args[0]);
        eprintln!("Example: {} experiments/baseline.toml", args[0]);
        process::exit(1);
    }

    println!("=== Call Centre Queue Simulation ===");

    let scenarios: Vec<Scenario> = match args.get(1) {
        Some(path) => {
            println!("Loading scenarios from {}", path);
            load_scenarios(path).unwrap_or_else(|e| {
                eprintln!("Error loading scenario file: {}", e);
                process::exit(1);
            })
        }
        None => {
            println!(
                "Using built-in staffing sweep (horizon {}, base seed {})",
                DEFAULT_HORIZON, DEFAULT_BASE_SEED
            );
            staffing_sweep(DEFAULT_HORIZON, DEFAULT_BASE_SEED)
        }
    };

    println!("Running {} scenarios...", scenarios.len());
    let results = run_all(&scenarios).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    for result in &results {
        result.print_summary();
    }

    let summaries: Vec<ScenarioSummary> =
        results.iter().map(ScenarioSummary::from_result).collect();
    print_comparison(&summaries);

    match output::write_all(OUTPUT_DIR, &results) {
        Ok(_) => println!("\nResults written to ./{}/", OUTPUT_DIR),
        Err(e) => {
            eprintln!("Error writing results: {}", e);
            process::exit(1);
        }
    }

    print_time_stepped_baseline(&results.iter().map(|r| r.scenario.clone()).collect::<Vec<_>>());

    println!("\nSimulation complete.");
}

/// Rerun each scenario through the superseded fixed-increment model so
/// the two designs can be eyeballed side by side.
fn print_time_stepped_baseline(scenarios: &[Scenario]) {
    println!("\n=== Fixed-increment baseline (superseded design) ===");
    println!(
        "{:<16} {:>12} {:>12}",
        "scenario", "avg wait", "avg queue"
    );
    for scenario in scenarios {
        let ticks = scenario.config.horizon.round() as usize;
        let config = TickConfig::new(
            scenario.config.num_servers,
            scenario.config.arrival_rate.min(1.0),
            1.0 / scenario.config.service_rate,
            ticks,
        );
        match config {
            Ok(config) => {
                let result = time_stepped::run(&config, scenario.seed);
                println!(
                    "{:<16} {:>12.3} {:>12.3}",
                    scenario.name,
                    result.average_wait(),
                    result.average_queue_length().unwrap_or(0.0)
                );
            }
            Err(e) => println!("{:<16} skipped ({})", scenario.name, e),
        }
    }
}
