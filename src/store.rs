// src/store.rs
use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::charts::DailyCount;
use crate::error::{PipelineError, Result};
use crate::model::Corpus;

/// Read and parse the scraped corpus (`{ "data": [...] }`).
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let text = fs::read_to_string(path).map_err(|source| PipelineError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| PipelineError::InputJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Only the history is read back from a previous chart artifact.
#[derive(Deserialize)]
struct PriorCharts {
    #[serde(default, rename = "dailyJobCounts")]
    daily_job_counts: Vec<Value>,
}

/// Daily history from a previous chart artifact.
///
/// Never fails: a missing file means a first run, and an unreadable or
/// malformed one is reported and treated as empty history. Individual
/// malformed entries are dropped.
pub fn load_prior_history(path: &Path) -> Vec<DailyCount> {
    if !path.exists() {
        logd!("No prior chart artifact at {}", path.display());
        return Vec::new();
    }

    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            logw!("Could not read prior charts {}: {e}; starting with empty history", path.display());
            return Vec::new();
        }
    };
    let prior: PriorCharts = match serde_json::from_str(&text) {
        Ok(p) => p,
        Err(e) => {
            logw!("Prior charts {} are not valid: {e}; starting with empty history", path.display());
            return Vec::new();
        }
    };

    let total = prior.daily_job_counts.len();
    let entries: Vec<DailyCount> = prior
        .daily_job_counts
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();
    if entries.len() < total {
        logw!("Dropped {} malformed daily entries from {}", total - entries.len(), path.display());
    }
    logd!("Loaded {} days of history", entries.len());
    entries
}
