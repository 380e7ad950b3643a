//! Event-driven queue engine
//!
//! Next-event time advance for an M/M/c queue: the clock jumps straight
//! to the earlier of the next arrival and the earliest pending departure.
//! An arriving customer takes a free server immediately or joins a FIFO
//! queue; a departing customer frees a server, which the oldest waiter
//! re-occupies at once. Wait times are recorded at the moment a waiter
//! enters service, and the queue length is sampled after every event.
//!
//! Numeric ties between an arrival and a departure resolve in favour of
//! the arrival. This is deliberate policy, not an accident of float
//! comparison; changing it changes the wait-time statistics.

use std::collections::VecDeque;

use crate::variates::{ExpSampler, IntervalSampler};
use crate::{ConfigError, SimConfig, SimulationResult};

/// One simulation run: configuration, injected interval source, and the
/// evolving state of the queueing system.
pub struct Simulator<S: IntervalSampler> {
    config: SimConfig,
    sampler: S,

    current_time: f64,
    next_arrival: f64,
    busy_servers: usize,
    /// Completion times of in-service customers, one per busy server.
    /// Scanned linearly for the minimum; server counts are small.
    pending_departures: Vec<f64>,
    /// Arrival times of customers waiting for a server, oldest first
    waiting: VecDeque<f64>,

    wait_times: Vec<f64>,
    queue_length_samples: Vec<usize>,
    total_arrivals: usize,
    total_served: usize,
}

impl Simulator<ExpSampler> {
    /// Production constructor: validated config plus a seeded generator
    pub fn seeded(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Simulator::new(config, ExpSampler::new(seed))
    }
}

impl<S: IntervalSampler> Simulator<S> {
    /// Build a simulator, rejecting invalid configuration up front
    pub fn new(config: SimConfig, sampler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let num_servers = config.num_servers;
        Ok(Simulator {
            config,
            sampler,
            current_time: 0.0,
            next_arrival: 0.0,
            busy_servers: 0,
            pending_departures: Vec::with_capacity(num_servers),
            waiting: VecDeque::new(),
            wait_times: Vec::new(),
            queue_length_samples: Vec::new(),
            total_arrivals: 0,
            total_served: 0,
        })
    }

    /// Replay the system from time 0 to the horizon and return the
    /// collected observations.
    pub fn run(mut self) -> SimulationResult {
        // One arrival is always scheduled before the loop starts.
        self.next_arrival = self.sample_interval(self.config.arrival_rate);

        loop {
            let next_departure = self.earliest_departure();
            let next_event = self.next_arrival.min(next_departure);
            if next_event > self.config.horizon {
                break;
            }
            self.current_time = next_event;

            // Arrivals win ties.
            if self.next_arrival <= next_departure {
                self.handle_arrival();
            } else {
                self.handle_departure();
            }

            self.queue_length_samples.push(self.waiting.len());

            debug_assert_eq!(self.busy_servers, self.pending_departures.len());
            debug_assert!(
                self.waiting.is_empty() || self.busy_servers == self.config.num_servers
            );
        }

        SimulationResult {
            wait_times: self.wait_times,
            queue_length_samples: self.queue_length_samples,
            total_arrivals: self.total_arrivals,
            total_served: self.total_served,
            calls_remaining: self.waiting.len(),
        }
    }

    /// Earliest pending completion, or +inf when every server is idle
    fn earliest_departure(&self) -> f64 {
        self.pending_departures
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    fn handle_arrival(&mut self) {
        self.total_arrivals += 1;
        if self.busy_servers < self.config.num_servers {
            self.start_service();
        } else {
            self.waiting.push_back(self.current_time);
        }
        self.next_arrival = self.current_time + self.sample_interval(self.config.arrival_rate);
    }

    fn handle_departure(&mut self) {
        let idx = self
            .pending_departures
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
            .expect("departure processed with no pending departures");
        self.pending_departures.swap_remove(idx);
        self.busy_servers -= 1;
        self.total_served += 1;

        if let Some(arrived_at) = self.waiting.pop_front() {
            self.wait_times.push(self.current_time - arrived_at);
            self.start_service();
        }
    }

    /// Occupy a free server and schedule its completion
    fn start_service(&mut self) {
        self.busy_servers += 1;
        let service = self.sample_interval(self.config.service_rate);
        self.pending_departures.push(self.current_time + service);
    }

    fn sample_interval(&mut self, rate: f64) -> f64 {
        let interval = self.sampler.exp_interval(rate);
        assert!(
            interval > 0.0,
            "interval sampler produced a non-positive interval: {}",
            interval
        );
        interval
    }
}
