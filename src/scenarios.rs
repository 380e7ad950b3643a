//! Named simulation scenarios and the scenario runner
//!
//! A scenario is a `(name, config, seed)` triple. The driver either uses
//! the built-in staffing sweep (the original study's parameter set) or
//! loads a TOML scenario file, then runs every scenario independently —
//! in parallel, since runs share no state.

use std::error::Error;
use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::Deserialize;

use crate::simulator::Simulator;
use crate::{ConfigError, SimConfig, SimulationResult};

/// One named simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub config: SimConfig,
    /// Seed for this scenario's private random stream
    pub seed: u64,
}

impl Scenario {
    pub fn new(name: impl Into<String>, config: SimConfig, seed: u64) -> Self {
        Scenario {
            name: name.into(),
            config,
            seed,
        }
    }
}

/// The classic staffing sweep: 2, 3, and 5 agents against the same call
/// load (arrival rate 0.8, service rate 1.0).
pub fn staffing_sweep(horizon: f64, base_seed: u64) -> Vec<Scenario> {
    [2, 3, 5]
        .iter()
        .enumerate()
        .map(|(idx, &num_servers)| {
            let config = SimConfig {
                num_servers,
                arrival_rate: 0.8,
                service_rate: 1.0,
                horizon,
            };
            Scenario::new(
                format!("{}_agents", num_servers),
                config,
                base_seed + idx as u64,
            )
        })
        .collect()
}

/// TOML scenario file layout
///
/// ```toml
/// base_seed = 42
///
/// [[scenario]]
/// name = "2_agents"
/// num_servers = 2
/// arrival_rate = 0.8
/// service_rate = 1.0
/// horizon = 100.0
/// ```
#[derive(Debug, Clone, Deserialize)]
struct ScenarioFile {
    base_seed: u64,
    scenario: Vec<ScenarioParams>,
}

#[derive(Debug, Clone, Deserialize)]
struct ScenarioParams {
    name: String,
    num_servers: usize,
    arrival_rate: f64,
    service_rate: f64,
    horizon: f64,
    /// Overrides base_seed + index when present
    seed: Option<u64>,
}

impl ScenarioParams {
    fn to_scenario(&self, base_seed: u64, index: usize) -> Result<Scenario, ConfigError> {
        let config = SimConfig::new(
            self.num_servers,
            self.arrival_rate,
            self.service_rate,
            self.horizon,
        )?;
        let seed = self.seed.unwrap_or(base_seed + index as u64);
        Ok(Scenario::new(self.name.clone(), config, seed))
    }
}

/// Load and validate a TOML scenario file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    parse_scenarios(&contents)
}

fn parse_scenarios(contents: &str) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let file: ScenarioFile = toml::from_str(contents)?;
    let scenarios = file
        .scenario
        .iter()
        .enumerate()
        .map(|(idx, params)| params.to_scenario(file.base_seed, idx))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(scenarios)
}

/// Result of running one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub result: SimulationResult,
}

impl ScenarioResult {
    pub fn print_summary(&self) {
        println!("\n=== {} ===", self.scenario.name);
        println!(
            "Servers: {}, arrival rate {:.2}, service rate {:.2}, horizon {:.1}",
            self.scenario.config.num_servers,
            self.scenario.config.arrival_rate,
            self.scenario.config.service_rate,
            self.scenario.config.horizon
        );
        if self.result.is_empty() {
            println!("Warning: horizon too short, no events processed");
            return;
        }
        println!(
            "Events: {}, arrivals: {}, served: {}, still queued: {}",
            self.result.num_events(),
            self.result.total_arrivals,
            self.result.total_served,
            self.result.calls_remaining
        );
        println!(
            "Average wait: {:.3} ({} callers delayed)",
            self.result.average_wait(),
            self.result.wait_times.len()
        );
        println!(
            "Average queue length: {:.3} (max {})",
            self.result.average_queue_length().unwrap_or(0.0),
            self.result.max_queue_length()
        );
    }
}

/// Run a single scenario with its own seeded stream
pub fn run_scenario(scenario: &Scenario) -> Result<ScenarioResult, ConfigError> {
    let simulator = Simulator::seeded(scenario.config.clone(), scenario.seed)?;
    Ok(ScenarioResult {
        scenario: scenario.clone(),
        result: simulator.run(),
    })
}

/// Run every scenario, one rayon task each. Scenarios are independent
/// runs with no shared state, so ordering of execution cannot affect
/// the results; output order matches input order.
pub fn run_all(scenarios: &[Scenario]) -> Result<Vec<ScenarioResult>, ConfigError> {
    scenarios.par_iter().map(run_scenario).collect()
}
