// src/model.rs
//
// Corpus and job records.
//
// A job is kept as its original JSON object so that fields the pipeline
// doesn't know about survive verbatim (same order, same JSON types).
// Recognized fields are read through accessors; enrichment writes
// `experienceRequired` and `classification` back into the same map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::consts::NOT_AVAILABLE;

/// Top-level input document: `{ "data": [Job...], ... }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Corpus {
    pub data: Vec<Job>,
    /// Any other top-level keys, preserved as-is.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Job(Map<String, Value>);

impl Job {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// String value of a field; non-strings and `null` read as absent.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Opaque id, rendered for diagnostics only.
    pub fn id(&self) -> String {
        match self.0.get("jobId") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => s!("?"),
            Some(other) => other.to_string(),
        }
    }

    pub fn company(&self) -> Option<&str> {
        self.str_field("company")
    }

    pub fn location(&self) -> Option<&str> {
        self.str_field("location")
    }

    pub fn title(&self) -> &str {
        self.str_field("title").unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.str_field("description").unwrap_or("")
    }

    pub fn yoe(&self) -> Option<&str> {
        self.str_field("yoe")
    }

    pub fn date_posted(&self) -> Option<&str> {
        self.str_field("datePosted")
    }

    pub fn experience_required(&self) -> Option<&str> {
        self.str_field("experienceRequired")
    }

    /// `classification.roleType`, if the job has been classified.
    pub fn role_type(&self) -> Option<&str> {
        self.0
            .get("classification")
            .and_then(|c| c.get("roleType"))
            .and_then(Value::as_str)
    }

    /// Role label used by the role breakdown.
    pub fn role_label(&self) -> &str {
        self.role_type().unwrap_or(NOT_AVAILABLE)
    }

    pub fn set_experience_required(&mut self, value: &str) {
        self.0.insert(s!("experienceRequired"), Value::String(s!(value)));
    }

    pub fn set_classification(&mut self, classification: &Classification) {
        // Serializing a plain struct of strings/floats cannot fail
        let value = serde_json::to_value(classification).unwrap_or(Value::Null);
        self.0.insert(s!("classification"), value);
    }
}

/// Classifier verdict attached to every enriched job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub role_type: String,
    pub confidence: f64,
    /// Weighted score per category, config order
    pub debug_scores: Map<String, Value>,
}
