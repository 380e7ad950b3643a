//! Summary statistics over scenario results

use serde::Serialize;

use crate::scenarios::ScenarioResult;

/// Headline metrics for one completed scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub num_servers: usize,
    pub num_events: usize,
    pub total_arrivals: usize,
    pub total_served: usize,
    pub callers_delayed: usize,
    pub calls_remaining: usize,
    pub average_wait: f64,
    pub average_queue_length: f64,
    pub max_queue_length: usize,
    /// Horizon too short for any event
    pub empty: bool,
}

impl ScenarioSummary {
    pub fn from_result(scenario_result: &ScenarioResult) -> Self {
        let result = &scenario_result.result;
        ScenarioSummary {
            name: scenario_result.scenario.name.clone(),
            num_servers: scenario_result.scenario.config.num_servers,
            num_events: result.num_events(),
            total_arrivals: result.total_arrivals,
            total_served: result.total_served,
            callers_delayed: result.wait_times.len(),
            calls_remaining: result.calls_remaining,
            average_wait: result.average_wait(),
            average_queue_length: result.average_queue_length().unwrap_or(0.0),
            max_queue_length: result.max_queue_length(),
            empty: result.is_empty(),
        }
    }
}

/// Print the cross-scenario comparison table
pub fn print_comparison(summaries: &[ScenarioSummary]) {
    println!("\n=== Scenario comparison ===");
    println!(
        "{:<16} {:>8} {:>10} {:>12} {:>12} {:>10}",
        "scenario", "servers", "arrivals", "avg wait", "avg queue", "max queue"
    );
    for summary in summaries {
        println!(
            "{:<16} {:>8} {:>10} {:>12.3} {:>12.3} {:>10}",
            summary.name,
            summary.num_servers,
            summary.total_arrivals,
            summary.average_wait,
            summary.average_queue_length,
            summary.max_queue_length
        );
    }
}

/// Mean of a slice, 0.0 when empty
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::Scenario;
    use crate::{SimConfig, SimulationResult};

    #[test]
    fn test_mean_and_std_dev() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((mean(&values) - 3.0).abs() < 1e-12);
        // Sample std dev of 1..5 is sqrt(2.5) ≈ 1.58
        assert!((std_dev(&values) - 2.5f64.sqrt()).abs() < 1e-12);

        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_dev(&[1.0]), 0.0);
    }

    #[test]
    fn summary_reflects_result() {
        let scenario = Scenario::new(
            "test",
            SimConfig::new(2, 0.8, 1.0, 100.0).unwrap(),
            42,
        );
        let result = SimulationResult {
            wait_times: vec![2.0, 4.0],
            queue_length_samples: vec![0, 1, 2, 1],
            total_arrivals: 4,
            total_served: 3,
            calls_remaining: 1,
        };
        let summary = ScenarioSummary::from_result(&crate::scenarios::ScenarioResult {
            scenario,
            result,
        });
        assert_eq!(summary.callers_delayed, 2);
        assert!((summary.average_wait - 3.0).abs() < 1e-12);
        assert!((summary.average_queue_length - 1.0).abs() < 1e-12);
        assert_eq!(summary.max_queue_length, 2);
        assert!(!summary.empty);
    }
}
