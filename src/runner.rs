// src/runner.rs
use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;

use crate::{
    charts::{self, ChartData, TechMatcher},
    config::{options::PipelineOptions, taxonomy::Taxonomy},
    enrich::{EnrichStats, Enricher},
    error::{PipelineError, Result},
    file::{save_compressed, save_json_pretty, CompressStats},
    logging::fmt_elapsed,
    progress::Progress,
    store::{load_corpus, load_prior_history},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub enrich: EnrichStats,
    pub days: usize,
    pub charts_path: PathBuf,
    pub compressed_path: PathBuf,
    pub compress: CompressStats,
}

/// Built-in taxonomy, or the override file when one is configured.
pub fn load_taxonomy(opts: &PipelineOptions) -> Result<Taxonomy> {
    match &opts.taxonomy {
        Some(path) => {
            logd!("Loading taxonomy from {}", path.display());
            Taxonomy::load(path)
        }
        None => Ok(Taxonomy::default()),
    }
}

/// Category names in config order, for `--list-categories`.
pub fn list_categories(opts: &PipelineOptions) -> Result<Vec<String>> {
    let tax = load_taxonomy(opts)?;
    Ok(tax.category_names().map(String::from).collect())
}

/// Run the whole batch: load, enrich, aggregate, write both artifacts.
/// `today` bounds the daily history; callers pass the current UTC date.
pub fn run(
    opts: &PipelineOptions,
    today: NaiveDate,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let t0 = Instant::now();
    let charts_path = opts.charts_path();
    let compressed_path = opts.compressed_path();

    // Patterns first: a bad override fails before any I/O
    let taxonomy = load_taxonomy(opts)?;
    let enricher = Enricher::new(&taxonomy)?;
    let tech = TechMatcher::new(&taxonomy.tech)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Loading {}", opts.input.display()));
    }
    let mut corpus = load_corpus(&opts.input)?;
    logf!("Loaded {} jobs from {}", corpus.data.len(), opts.input.display());

    let enrich = enricher.enrich_all(&mut corpus.data, progress);
    logf!(
        "Enriched {} jobs ({} with experience, {} unclassified)",
        enrich.jobs, enrich.with_experience, enrich.unknown_role
    );

    let prior = load_prior_history(&charts_path);
    let charts: ChartData = charts::build_charts(&corpus.data, &taxonomy, &tech, &prior, today);
    let days = charts.daily_job_counts.len();

    save_json_pretty(&charts_path, &charts)?;
    logf!("Wrote {} ({days} days of history)", charts_path.display());

    let doc = serde_json::to_value(&corpus).map_err(|source| PipelineError::Serialize {
        path: compressed_path.clone(),
        source,
    })?;
    let compress = save_compressed(&compressed_path, doc)?;
    logf!("Wrote {}", compressed_path.display());

    logf!("Done in {}", fmt_elapsed(t0.elapsed().as_millis()));
    Ok(RunSummary { enrich, days, charts_path, compressed_path, compress })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn categories_come_from_override_when_given() {
        let dir = tempfile::tempdir().unwrap();
        let tax = dir.path().join("tax.json");
        std::fs::write(&tax, r#"{ "categories": [ { "name": "A" }, { "name": "B" } ], "nudges": [] }"#).unwrap();

        let mut opts = PipelineOptions::with_input("jobs.json");
        assert_eq!(list_categories(&opts).unwrap().len(), Taxonomy::default().categories.len());

        opts.taxonomy = Some(tax);
        assert_eq!(list_categories(&opts).unwrap(), ["A", "B"]);
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.events.push(format!("begin {total}")); }
        fn log(&mut self, _msg: &str) { self.events.push(s!("log")); }
        fn item_done(&mut self, done: usize) { self.events.push(format!("done {done}")); }
        fn finish(&mut self) { self.events.push(s!("finish")); }
    }

    #[test]
    fn progress_sink_sees_every_stage() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("jobs.json");
        let jobs: Vec<serde_json::Value> = (0..1500).map(|i| serde_json::json!({ "jobId": i })).collect();
        std::fs::write(&input, serde_json::json!({ "data": jobs }).to_string()).unwrap();

        let opts = PipelineOptions::with_input(&input);
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut rec = Recorder::default();
        let sink: &mut dyn Progress = &mut rec;

        let summary = run(&opts, today, Some(sink)).unwrap();
        assert_eq!(summary.enrich.jobs, 1500);
        assert_eq!(rec.events, ["log", "begin 1500", "done 1000", "finish"]);
        assert!(opts.charts_path().exists());
        assert!(opts.compressed_path().exists());
    }

    #[test]
    fn missing_input_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let opts = PipelineOptions::with_input(dir.path().join("absent.json"));
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let err = run(&opts, today, None).unwrap_err();
        assert!(matches!(err, PipelineError::InputRead { .. }));
        assert!(!Path::new(&opts.charts_path()).exists());
    }
}
