// src/charts/counts.rs
use std::collections::HashMap;

use crate::config::consts::{TOP_COMPANIES, TOP_LOCATIONS};
use crate::model::Job;

use super::LabelCount;

/// Count jobs per key, most frequent first.
/// Missing or blank keys are skipped; equal counts keep first-seen order.
/// `limit` keeps only the top N.
pub fn count_by<'a, I, F>(jobs: I, key: F, limit: Option<usize>) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a Job>,
    F: Fn(&'a Job) -> Option<&'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut out: Vec<LabelCount> = Vec::new();

    for job in jobs {
        let Some(k) = key(job) else { continue };
        if k.trim().is_empty() { continue; }
        match index.get(k) {
            Some(&ix) => out[ix].count += 1,
            None => {
                index.insert(k, out.len());
                out.push(LabelCount { label: s!(k), count: 1 });
            }
        }
    }

    // sort_by is stable
    out.sort_by(|a, b| b.count.cmp(&a.count));
    if let Some(n) = limit {
        out.truncate(n);
    }
    out
}

pub fn by_company(jobs: &[Job]) -> Vec<LabelCount> {
    count_by(jobs, Job::company, Some(TOP_COMPANIES))
}

pub fn by_location(jobs: &[Job]) -> Vec<LabelCount> {
    count_by(jobs, Job::location, Some(TOP_LOCATIONS))
}

pub fn by_role_type(jobs: &[Job]) -> Vec<LabelCount> {
    count_by(jobs, |j| Some(j.role_label()), None)
}
