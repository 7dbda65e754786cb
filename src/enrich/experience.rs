// src/enrich/experience.rs
//
// Years-of-experience extraction from free-text job descriptions.
//
// Two regex families run over the description and their matches are pooled:
// - strict: number (+ optional range / `+`) + years unit + a context word
//   such as "experience" or "industry";
// - broad: optional `Experience:` / `Overall` prefix, `–`/`-`/`to` ranges,
//   `plus`/`+` suffixes, context word optional.
// The match with the largest plausible number wins and is reduced to
// `N`, `N+` or `N - M`.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{MAX_PLAUSIBLE_YEARS, MIN_BARE_YEARS};
use crate::core::sanitize::normalize_ws;

static STRICT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b[0-9]+\s*(?:(?:-|–|to)\s*[0-9]+\s*)?\+?\s*(?:years?|yrs?)\b",
        r"(?:\s+of)?\s+(?:experience|exp|professional|background|testing|industry|relevant|hands)",
    ))
    .expect("static regex")
});

static BROAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?:\b(?:experience|overall)\s*[:\-]?\s*)?",
        r"\b[0-9]+\s*(?:(?:-|–|to)\s*[0-9]+\s*)?(?:\+|\bplus\b)?\s*(?:years?|yrs?)\b",
        r"(?:\s+of)?(?:\s+overall)?(?:\s+(?:experience|exp)\b)?",
    ))
    .expect("static regex")
});

/// Text that disqualifies a broad match when it directly follows it.
static EDUCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*full[\s-]*time\s+education").expect("static regex"));

static RANGE_HINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-|–|\bto\b|\bplus\b").expect("static regex"));

static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("static regex"));

static PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:experience|overall)\s*[:\-]?\s*").expect("static regex")
});

static LEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+)(?:\s*(?:-|–|to)\s*([0-9]+))?\s*(\+|plus\b)?").expect("static regex")
});

#[derive(Clone, Debug, PartialEq, Eq)]
struct Candidate<'a> {
    start: usize,
    text: &'a str,
    max_years: u32,
}

fn max_int(text: &str) -> Option<u32> {
    INT_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .max()
}

fn candidates(description: &str) -> Vec<Candidate<'_>> {
    let strict = STRICT_RE.find_iter(description);
    let broad = BROAD_RE
        .find_iter(description)
        .filter(|m| !EDUCATION_RE.is_match(&description[m.end()..]));

    let mut out: Vec<Candidate<'_>> = strict
        .chain(broad)
        .filter_map(|m| {
            let max_years = max_int(m.as_str())?;
            Some(Candidate { start: m.start(), text: m.as_str(), max_years })
        })
        .collect();
    out.sort_by_key(|c| c.start);
    out
}

fn plausible(c: &Candidate<'_>) -> bool {
    let ranged = RANGE_HINT_RE.is_match(c.text);
    (ranged || c.max_years >= MIN_BARE_YEARS) && c.max_years < MAX_PLAUSIBLE_YEARS
}

/// Canonical experience string for a description, or `None` when nothing
/// plausible is mentioned. `job_id` only feeds diagnostics.
pub fn extract_experience(description: &str, job_id: &str) -> Option<String> {
    if description.trim().is_empty() {
        return None;
    }

    let mut best: Option<Candidate<'_>> = None;
    for c in candidates(description) {
        if !plausible(&c) {
            logd!("job {job_id}: discarded experience match {:?}", c.text);
            continue;
        }
        // strictly greater: ties keep the earlier occurrence
        if best.as_ref().is_none_or(|b| c.max_years > b.max_years) {
            best = Some(c);
        }
    }

    let chosen = best?;
    let normalized = normalize_experience(chosen.text);
    if normalized.is_none() {
        logd!("job {job_id}: could not normalize {:?}", chosen.text);
    }
    normalized
}

/// Reduce an experience phrase to `N`, `N+` or `N - M`.
/// Canonical strings map to themselves.
pub fn normalize_experience(raw: &str) -> Option<String> {
    let text = normalize_ws(raw);
    let rest = PREFIX_RE.replace(&text, "");
    let caps = LEADING_RE.captures(&rest)?;
    let low = &caps[1];

    Some(match (caps.get(2), caps.get(3)) {
        (Some(high), _) => format!("{low} - {}", high.as_str()),
        (None, Some(_)) => format!("{low}+"),
        (None, None) => s!(low),
    })
}
