// src/charts/buckets.rs
//
// Experience buckets for the company x experience matrix. Reads the
// scraped `yoe` field (not the extracted `experienceRequired`).

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::taxonomy::ExperienceBucket;
use crate::model::Job;

use super::{CompanyExperience, LabelCount, RangeCount};

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+) *[-–] *([0-9]+)").expect("static regex"));

static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("static regex"));

/// Years value for a `yoe` string: a range averages its ends, otherwise the
/// first integer. Placeholders and text without digits give `None`.
pub fn parse_years(yoe: Option<&str>) -> Option<f64> {
    let raw = yoe?.trim();
    if raw.is_empty() || raw == "—" || raw == "-" {
        return None;
    }
    if let Some(c) = RANGE_RE.captures(raw) {
        let lo: f64 = c[1].parse().ok()?;
        let hi: f64 = c[2].parse().ok()?;
        return Some((lo + hi) / 2.0);
    }
    INT_RE.find(raw)?.as_str().parse().ok()
}

/// Index of the bucket holding `years`. Values between two buckets (e.g. 3.5
/// with 2-3 and 4-6) land where their floor does.
pub fn bucket_index(years: f64, buckets: &[ExperienceBucket]) -> Option<usize> {
    buckets
        .iter()
        .position(|b| b.contains(years))
        .or_else(|| buckets.iter().position(|b| b.contains(years.floor())))
}

/// One row per company in `companies` (already ranked), each with a full
/// bucket distribution. Jobs without a usable `yoe` count toward
/// `totalJobs` but not toward any bucket.
pub fn company_vs_experience(
    jobs: &[Job],
    companies: &[LabelCount],
    buckets: &[ExperienceBucket],
) -> Vec<CompanyExperience> {
    let wanted: HashSet<&str> = companies.iter().map(|c| c.label.as_str()).collect();
    let mut tallies: HashMap<&str, Vec<u64>> = HashMap::new();

    for job in jobs {
        let Some(company) = job.company().filter(|c| wanted.contains(c)) else { continue };
        let Some(ix) = parse_years(job.yoe()).and_then(|y| bucket_index(y, buckets)) else {
            continue;
        };
        tallies.entry(company).or_insert_with(|| vec![0; buckets.len()])[ix] += 1;
    }

    companies
        .iter()
        .map(|c| {
            let counts = tallies.get(c.label.as_str());
            let distribution = buckets
                .iter()
                .enumerate()
                .map(|(i, b)| RangeCount {
                    range: b.label.clone(),
                    count: counts.map_or(0, |v| v[i]),
                })
                .collect();
            CompanyExperience { company: c.label.clone(), total_jobs: c.count, distribution }
        })
        .collect()
}
