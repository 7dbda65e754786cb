// src/charts/daily.rs
//
// Per-day posting history. Each run counts the current corpus by posting
// date and folds the result into the history read from the previous chart
// artifact. A day's count only ever grows, today is never emitted (it is
// still filling up) and the oldest days fall off past the retention window.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::consts::DAILY_RETENTION;
use crate::core::dates::{format_day, parse_day, posted_date_utc};
use crate::model::Job;

use super::DailyCount;

/// Jobs per UTC posting date, days before `today` only.
pub fn current_counts(jobs: &[Job], today: NaiveDate) -> BTreeMap<NaiveDate, u64> {
    let mut out = BTreeMap::new();
    for job in jobs {
        let Some(day) = job.date_posted().and_then(posted_date_utc) else { continue };
        if day < today {
            *out.entry(day).or_insert(0) += 1;
        }
    }
    out
}

pub fn merge_daily_counts(jobs: &[Job], prior: &[DailyCount], today: NaiveDate) -> Vec<DailyCount> {
    let mut history: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for entry in prior {
        let Some(day) = parse_day(&entry.date) else {
            logd!("Dropping prior daily entry with bad date {:?}", entry.date);
            continue;
        };
        if day >= today {
            logd!("Dropping prior daily entry for {} (not before today)", entry.date);
            continue;
        }
        let slot = history.entry(day).or_insert(entry.count);
        *slot = (*slot).max(entry.count);
    }

    for (day, count) in current_counts(jobs, today) {
        let slot = history.entry(day).or_insert(count);
        if count > *slot {
            *slot = count;
        }
    }

    let skip = history.len().saturating_sub(DAILY_RETENTION);
    history
        .into_iter()
        .skip(skip)
        .map(|(day, count)| DailyCount { date: format_day(day), count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    fn posted(dates: &[&str]) -> Vec<Job> {
        dates
            .iter()
            .map(|d| serde_json::from_value(json!({ "datePosted": d })).unwrap())
            .collect()
    }

    fn entry(date: &str, count: u64) -> DailyCount {
        DailyCount { date: s!(date), count }
    }

    #[test]
    fn counts_never_decrease() {
        let jobs = posted(&["2024-01-01T10:00:00Z", "2024-01-01T12:00:00Z"]);
        let prior = [entry("2024-01-01", 5)];
        let out = merge_daily_counts(&jobs, &prior, day("2024-01-03"));
        assert_eq!(out, [entry("2024-01-01", 5)]);

        let prior = [entry("2024-01-01", 1)];
        let out = merge_daily_counts(&jobs, &prior, day("2024-01-03"));
        assert_eq!(out, [entry("2024-01-01", 2)]);
    }

    #[test]
    fn today_and_future_are_excluded() {
        let jobs = posted(&["2024-01-03T01:00:00Z", "2024-01-02", "2024-01-04"]);
        let prior = [entry("2024-01-03", 9), entry("2025-01-01", 1)];
        let out = merge_daily_counts(&jobs, &prior, day("2024-01-03"));
        assert_eq!(out, [entry("2024-01-02", 1)]);
    }

    #[test]
    fn bad_dates_are_skipped() {
        let jobs = posted(&["soon", ""]);
        let prior = [entry("yesterday", 3), entry("2023-12-31", 4)];
        let out = merge_daily_counts(&jobs, &prior, day("2024-01-03"));
        assert_eq!(out, [entry("2023-12-31", 4)]);
    }

    #[test]
    fn output_is_ascending_and_retained() {
        let start = day("2015-01-01");
        let prior: Vec<DailyCount> = (0..(DAILY_RETENTION as i64 + 10))
            .rev()
            .map(|i| DailyCount { date: format_day(start + chrono::Days::new(i as u64)), count: 1 })
            .collect();
        let out = merge_daily_counts(&[], &prior, day("2024-01-01"));

        assert_eq!(out.len(), DAILY_RETENTION);
        assert!(out.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(out[0].date, format_day(start + chrono::Days::new(10)));
    }

    #[test]
    fn utc_day_decides_bucket() {
        let jobs = posted(&["2024-01-01T23:30:00-02:00"]);
        let out = merge_daily_counts(&jobs, &[], day("2024-01-05"));
        assert_eq!(out, [entry("2024-01-02", 1)]);
    }
}
