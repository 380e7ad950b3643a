//! Fixed-increment baseline variant
//!
//! The original model advanced a discrete clock one tick at a time: each
//! tick a call arrives with fixed probability, every busy agent counts
//! down one tick, and a freed agent answers the oldest queued call on the
//! following tick. Waits are whole ticks. The event-driven engine in
//! [`crate::simulator`] supersedes this design; it stays here as a
//! comparison baseline for the same staffing scenarios.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Bernoulli, Distribution, Exp};

use crate::{ConfigError, SimulationResult};

/// Parameters for a fixed-increment run
#[derive(Debug, Clone, PartialEq)]
pub struct TickConfig {
    pub num_servers: usize,
    /// Probability of one call arriving in any given tick
    pub arrival_probability: f64,
    /// Mean service length in ticks (exponentially distributed, clamped
    /// to at least one tick)
    pub mean_service_ticks: f64,
    pub ticks: usize,
}

impl TickConfig {
    pub fn new(
        num_servers: usize,
        arrival_probability: f64,
        mean_service_ticks: f64,
        ticks: usize,
    ) -> Result<Self, ConfigError> {
        if num_servers < 1 {
            return Err(ConfigError::NoServers);
        }
        if !(0.0..=1.0).contains(&arrival_probability) {
            return Err(ConfigError::InvalidArrivalProbability(arrival_probability));
        }
        if !(mean_service_ticks > 0.0) || !mean_service_ticks.is_finite() {
            return Err(ConfigError::InvalidServiceLength(mean_service_ticks));
        }
        Ok(TickConfig {
            num_servers,
            arrival_probability,
            mean_service_ticks,
            ticks,
        })
    }
}

/// Run the tick-based model. `total_served` counts calls answered (taken
/// into service); every answered call contributes a wait observation,
/// zero when it was picked up the tick after arriving.
pub fn run(config: &TickConfig, seed: u64) -> SimulationResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let arrival = Bernoulli::new(config.arrival_probability)
        .expect("arrival probability must be within [0, 1]");
    let service = Exp::new(1.0 / config.mean_service_ticks)
        .expect("mean service length must be positive");

    // Per-call wait counter, oldest call at the front
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut busy_ticks = vec![0usize; config.num_servers];

    let mut wait_times = Vec::new();
    let mut queue_length_samples = Vec::new();
    let mut total_arrivals = 0;
    let mut total_served = 0;

    for _ in 0..config.ticks {
        if arrival.sample(&mut rng) {
            queue.push_back(0);
            total_arrivals += 1;
        }

        for remaining in busy_ticks.iter_mut() {
            if *remaining > 0 {
                *remaining -= 1;
            } else if let Some(waited) = queue.pop_front() {
                wait_times.push(waited as f64);
                total_served += 1;
                // The answering tick itself counts as one tick of service.
                let length = service.sample(&mut rng).floor() as usize;
                *remaining = length.saturating_sub(1).max(1);
            }
        }

        for waited in queue.iter_mut() {
            *waited += 1;
        }
        queue_length_samples.push(queue.len());
    }

    SimulationResult {
        wait_times,
        queue_length_samples,
        total_arrivals,
        total_served,
        calls_remaining: queue.len(),
    }
}
