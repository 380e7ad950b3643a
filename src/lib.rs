//! Call Centre Queue Simulation
//!
//! A continuous-time discrete-event model of a multi-server queue (an
//! M/M/c call centre): callers arrive as a Poisson stream, are served by
//! the first free agent, and otherwise wait in a FIFO queue. The engine
//! advances the clock directly to the next scheduled event rather than
//! stepping by fixed increments.
//!
//! Key pieces:
//! - `simulator`: the event-driven engine
//! - `variates`: injectable exponential-interval source (seeded or scripted)
//! - `scenarios`: named parameter sets and the scenario runner
//! - `time_stepped`: the cruder fixed-increment variant, kept as a baseline
//! - `output`: CSV/JSON export for analysis in Python (pandas, matplotlib)

pub mod analysis;
pub mod output;
pub mod scenarios;
pub mod simulator;
pub mod time_stepped;
pub mod variates;

use serde::Serialize;
use thiserror::Error;

/// Configuration rejected before any simulation starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("number of servers must be at least 1")]
    NoServers,

    #[error("arrival rate must be strictly positive and finite, got {0}")]
    InvalidArrivalRate(f64),

    #[error("service rate must be strictly positive and finite, got {0}")]
    InvalidServiceRate(f64),

    #[error("horizon must be non-negative and finite, got {0}")]
    InvalidHorizon(f64),

    #[error("arrival probability must be within [0, 1], got {0}")]
    InvalidArrivalProbability(f64),

    #[error("mean service length must be strictly positive and finite, got {0}")]
    InvalidServiceLength(f64),
}

/// Immutable parameters for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimConfig {
    /// Number of identical servers (call centre agents)
    pub num_servers: usize,
    /// Mean arrivals per unit time (Poisson stream rate)
    pub arrival_rate: f64,
    /// Mean departures per unit time per busy server
    pub service_rate: f64,
    /// Simulated-time cutoff; no event past this point is processed
    pub horizon: f64,
}

impl SimConfig {
    /// Build a validated configuration
    pub fn new(
        num_servers: usize,
        arrival_rate: f64,
        service_rate: f64,
        horizon: f64,
    ) -> Result<Self, ConfigError> {
        let config = SimConfig {
            num_servers,
            arrival_rate,
            service_rate,
            horizon,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants
    ///
    /// Rates must be strictly positive and finite, and there must be at
    /// least one server. A zero horizon is allowed and yields an empty
    /// result rather than an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_servers < 1 {
            return Err(ConfigError::NoServers);
        }
        if !(self.arrival_rate > 0.0) || !self.arrival_rate.is_finite() {
            return Err(ConfigError::InvalidArrivalRate(self.arrival_rate));
        }
        if !(self.service_rate > 0.0) || !self.service_rate.is_finite() {
            return Err(ConfigError::InvalidServiceRate(self.service_rate));
        }
        if !(self.horizon >= 0.0) || !self.horizon.is_finite() {
            return Err(ConfigError::InvalidHorizon(self.horizon));
        }
        Ok(())
    }

    /// Offered load per server, λ / (c·μ)
    pub fn utilization(&self) -> f64 {
        self.arrival_rate / (self.num_servers as f64 * self.service_rate)
    }
}

/// Output of one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// One entry per customer that experienced queueing delay
    pub wait_times: Vec<f64>,
    /// Waiting-queue length after each processed event, in event order
    pub queue_length_samples: Vec<usize>,
    /// Arrival events processed before the horizon
    pub total_arrivals: usize,
    /// Customers whose service completed before the horizon
    pub total_served: usize,
    /// Customers still waiting when the horizon was reached
    pub calls_remaining: usize,
}

impl SimulationResult {
    /// Mean observed wait. Customers who never queued are simply
    /// unrepresented; 0.0 when nobody waited.
    pub fn average_wait(&self) -> f64 {
        if self.wait_times.is_empty() {
            return 0.0;
        }
        self.wait_times.iter().sum::<f64>() / self.wait_times.len() as f64
    }

    /// Mean queue length over processed events, or None when the horizon
    /// was too short for any event at all.
    pub fn average_queue_length(&self) -> Option<f64> {
        if self.queue_length_samples.is_empty() {
            return None;
        }
        Some(
            self.queue_length_samples.iter().sum::<usize>() as f64
                / self.queue_length_samples.len() as f64,
        )
    }

    pub fn max_queue_length(&self) -> usize {
        self.queue_length_samples.iter().copied().max().unwrap_or(0)
    }

    /// Number of events processed before the horizon
    pub fn num_events(&self) -> usize {
        self.queue_length_samples.len()
    }

    /// True when no event fit inside the horizon. Non-fatal: the averages
    /// report as 0.0 / None rather than crashing.
    pub fn is_empty(&self) -> bool {
        self.queue_length_samples.is_empty()
    }
}
