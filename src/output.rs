//! Result persistence
//!
//! Writes completed scenario results to disk for analysis in Python
//! (pandas, matplotlib): one `<scenario>_queue_lengths.csv` per scenario
//! with the `(event_index, queue_length)` series, and a `summary.json`
//! with run metadata and the headline metrics. Only successful results
//! reach this module; a failed run writes nothing.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::analysis::ScenarioSummary;
use crate::scenarios::ScenarioResult;
use crate::SimConfig;

#[derive(Debug, Clone, Serialize)]
struct QueueLengthRow {
    event_index: usize,
    queue_length: usize,
}

/// Top-level container for the summary JSON
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    pub metadata: RunMetadata,
    pub scenarios: Vec<ScenarioRecord>,
}

/// Metadata for reproducibility
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub timestamp: String,
    pub num_scenarios: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRecord {
    pub config: SimConfig,
    pub seed: u64,
    pub summary: ScenarioSummary,
}

impl RunOutput {
    pub fn from_results(results: &[ScenarioResult]) -> Self {
        let scenarios = results
            .iter()
            .map(|r| ScenarioRecord {
                config: r.scenario.config.clone(),
                seed: r.scenario.seed,
                summary: ScenarioSummary::from_result(r),
            })
            .collect();
        RunOutput {
            metadata: RunMetadata {
                timestamp: chrono::Utc::now().to_rfc3339(),
                num_scenarios: results.len(),
            },
            scenarios,
        }
    }

    pub fn write_summary_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Write one scenario's queue-length series as an ordered
/// `(event_index, queue_length)` table
pub fn write_queue_series<P: AsRef<Path>>(
    path: P,
    samples: &[usize],
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for (event_index, &queue_length) in samples.iter().enumerate() {
        wtr.serialize(QueueLengthRow {
            event_index,
            queue_length,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write everything for a completed batch of scenarios
///
/// Creates `<dir>/<scenario>_queue_lengths.csv` per scenario plus
/// `<dir>/summary.json`.
pub fn write_all<P: AsRef<Path>>(
    dir: P,
    results: &[ScenarioResult],
) -> Result<(), Box<dyn Error>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    for result in results {
        let filename = format!("{}_queue_lengths.csv", result.scenario.name);
        write_queue_series(dir.join(filename), &result.result.queue_length_samples)?;
    }

    RunOutput::from_results(results).write_summary_json(dir.join("summary.json"))?;
    Ok(())
}
