// src/charts/tech.rs
use std::collections::{BTreeMap, HashMap};

use regex::Regex;

use crate::config::consts::{UNCATEGORIZED, UNKNOWN_ROLE};
use crate::config::taxonomy::TechKeyword;
use crate::enrich::keywords::compile_pattern;
use crate::error::Result;
use crate::model::Job;

use super::LabelCount;

/// Tech keyword patterns, compiled once per run.
pub struct TechMatcher {
    entries: Vec<(String, Vec<Regex>)>,
}

impl TechMatcher {
    pub fn new(tech: &[TechKeyword]) -> Result<Self> {
        let mut entries = Vec::with_capacity(tech.len());
        for kw in tech {
            let context = format!("tech.{}", kw.label);
            let patterns = kw
                .patterns
                .iter()
                .map(|p| compile_pattern(&context, &format!("(?i){p}")))
                .collect::<Result<Vec<_>>>()?;
            entries.push((kw.label.clone(), patterns));
        }
        Ok(Self { entries })
    }

    /// Labels with at least one pattern hit in `text`, config order.
    pub fn labels_in<'m>(&'m self, text: &str) -> impl Iterator<Item = &'m str> {
        self.entries
            .iter()
            .filter(move |(_, pats)| pats.iter().any(|re| re.is_match(text)))
            .map(|(label, _)| label.as_str())
    }
}

fn counts_role(role: &str) -> bool {
    role != UNCATEGORIZED && role != UNKNOWN_ROLE
}

/// Per role, how many jobs mention each tech, most frequent first.
/// Unclassified and unknown roles are left out; roles come out in
/// lexical order.
pub fn tech_vs_role(jobs: &[Job], matcher: &TechMatcher) -> BTreeMap<String, Vec<LabelCount>> {
    let mut per_role: BTreeMap<String, (HashMap<&str, usize>, Vec<LabelCount>)> = BTreeMap::new();

    for job in jobs {
        let Some(role) = job.role_type().filter(|r| counts_role(r)) else { continue };
        let text = format!("{} {}", job.title(), job.description()).to_lowercase();

        for label in matcher.labels_in(&text) {
            let (index, list) = per_role.entry(s!(role)).or_default();
            match index.get(label) {
                Some(&ix) => list[ix].count += 1,
                None => {
                    index.insert(label, list.len());
                    list.push(LabelCount { label: s!(label), count: 1 });
                }
            }
        }
    }

    per_role
        .into_iter()
        .map(|(role, (_, mut list))| {
            list.sort_by(|a, b| b.count.cmp(&a.count));
            (role, list)
        })
        .collect()
}
