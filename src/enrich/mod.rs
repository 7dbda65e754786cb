// src/enrich/mod.rs
//! Per-job enrichment: experience extraction + role classification.
//!
//! Every job gets `experienceRequired` (canonical string or "—") and a fresh
//! `classification`. Nothing here fails per job; an unreadable description
//! or a low-confidence verdict is encoded as "—".

pub mod classify;
pub mod experience;
pub mod keywords;

use crate::config::consts::{NO_EXPERIENCE, PROGRESS_EVERY, UNKNOWN_ROLE};
use crate::config::taxonomy::Taxonomy;
use crate::error::Result;
use crate::model::Job;
use crate::progress::Progress;

use classify::Classifier;
use experience::extract_experience;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnrichStats {
    pub jobs: usize,
    pub with_experience: usize,
    pub unknown_role: usize,
}

pub struct Enricher {
    classifier: Classifier,
}

impl Enricher {
    pub fn new(taxonomy: &Taxonomy) -> Result<Self> {
        Ok(Self { classifier: Classifier::new(taxonomy)? })
    }

    /// Enrich one job in place. Returns (has experience, role known).
    pub fn enrich_job(&self, job: &mut Job) -> (bool, bool) {
        let id = job.id();
        let experience = extract_experience(job.description(), &id);
        let found = experience.is_some();
        job.set_experience_required(experience.as_deref().unwrap_or(NO_EXPERIENCE));

        let verdict = self.classifier.classify(job.title(), job.description());
        let known = verdict.role_type != UNKNOWN_ROLE;
        job.set_classification(&verdict);
        (found, known)
    }

    pub fn enrich_all(&self, jobs: &mut [Job], mut progress: Option<&mut dyn Progress>) -> EnrichStats {
        let mut stats = EnrichStats { jobs: jobs.len(), ..EnrichStats::default() };

        if let Some(p) = progress.as_deref_mut() {
            p.begin(jobs.len());
        }
        for (i, job) in jobs.iter_mut().enumerate() {
            let (found, known) = self.enrich_job(job);
            if found { stats.with_experience += 1; }
            if !known { stats.unknown_role += 1; }

            if (i + 1) % PROGRESS_EVERY == 0 {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i + 1);
                }
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(v: serde_json::Value) -> Job {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn enrich_adds_derived_fields_and_keeps_the_rest() {
        let e = Enricher::new(&Taxonomy::default()).unwrap();
        let mut jobs = vec![
            job(json!({ "jobId": 1, "title": "Senior DevOps Engineer",
                        "description": "5+ years with kubernetes and terraform", "extra": [1] })),
            job(json!({ "jobId": 2, "title": "Barista" })),
        ];
        let stats = e.enrich_all(&mut jobs, None);

        assert_eq!(stats, EnrichStats { jobs: 2, with_experience: 1, unknown_role: 1 });
        assert_eq!(jobs[0].experience_required(), Some("5+"));
        assert_eq!(jobs[0].role_type(), Some("DevOps/SRE"));
        assert_eq!(jobs[0].fields()["extra"], json!([1]));
        assert_eq!(jobs[1].experience_required(), Some(NO_EXPERIENCE));
        assert_eq!(jobs[1].role_type(), Some(UNKNOWN_ROLE));
    }
}
