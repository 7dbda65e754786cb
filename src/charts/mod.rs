// src/charts/mod.rs
//! Chart datasets derived from the enriched corpus.

pub mod buckets;
pub mod counts;
pub mod daily;
pub mod tech;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::taxonomy::Taxonomy;
use crate::model::Job;

pub use daily::merge_daily_counts;
pub use tech::TechMatcher;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeCount {
    pub range: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyExperience {
    pub company: String,
    pub total_jobs: u64,
    pub distribution: Vec<RangeCount>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

/// The chart artifact (`charts_data.json`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub by_company: Vec<LabelCount>,
    pub by_location: Vec<LabelCount>,
    pub by_role_type: Vec<LabelCount>,
    pub tech_vs_role: BTreeMap<String, Vec<LabelCount>>,
    pub company_vs_experience: Vec<CompanyExperience>,
    pub daily_job_counts: Vec<DailyCount>,
    pub experience_ranges: Vec<String>,
    pub total_count: u64,
}

/// Build every chart dataset for one run.
pub fn build_charts(
    jobs: &[Job],
    taxonomy: &Taxonomy,
    tech: &TechMatcher,
    prior: &[DailyCount],
    today: NaiveDate,
) -> ChartData {
    let by_company = counts::by_company(jobs);
    let company_vs_experience = buckets::company_vs_experience(jobs, &by_company, &taxonomy.buckets);

    ChartData {
        by_location: counts::by_location(jobs),
        by_role_type: counts::by_role_type(jobs),
        tech_vs_role: tech::tech_vs_role(jobs, tech),
        company_vs_experience,
        daily_job_counts: merge_daily_counts(jobs, prior, today),
        experience_ranges: taxonomy.bucket_labels(),
        total_count: jobs.len() as u64,
        by_company,
    }
}
