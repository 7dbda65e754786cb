// src/enrich/classify.rs
//
// Keyword-scored role classification.
//
// Each category is scored from keyword hits in the normalized title and
// description (capped per source), title nudges, and a couple of
// co-occurrence bonuses, then scaled by the category weight. The winner has
// to clear a weak-win fallback, an unknown gate and a domain veto before it
// is reported.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::config::consts::{
    UNKNOWN_MIN_CONFIDENCE, UNKNOWN_MIN_SCORE, UNKNOWN_ROLE, WEAK_WIN_MARGIN, WEAK_WIN_SCORE,
};
use crate::config::taxonomy::{CategoryConfig, Taxonomy};
use crate::core::sanitize::normalize_for_match;
use crate::enrich::keywords::{compile_pattern, is_phrase, KeywordGroup};
use crate::error::Result;
use crate::model::Classification;

/* ---------------- Score table ---------------- */

const TITLE_PHRASE_PTS: f64 = 4.0;
const TITLE_PHRASE_CAP: f64 = 6.0;
const DESC_PHRASE_PTS: f64 = 2.0;
const DESC_PHRASE_CAP: f64 = 10.0;
const TITLE_TERM_PTS: f64 = 3.0;
const TITLE_TERM_CAP: f64 = 8.0;
const DESC_TERM_PTS: f64 = 1.0;
const DESC_TERM_CAP: f64 = 20.0;
const TITLE_BOOST_CAP: f64 = 6.0;
const TITLE_NEG_PTS: f64 = 2.5;
const TITLE_NEG_CAP: f64 = 12.0;
const DESC_NEG_PTS: f64 = 1.0;
const DESC_NEG_CAP: f64 = 30.0;

/// Bonus when every keyword set in `require` hits the description.
struct ProximityRule {
    category: &'static str,
    require: &'static [&'static [&'static str]],
    bonus: f64,
}

const PROXIMITY_RULES: &[ProximityRule] = &[
    ProximityRule {
        category: "DevOps/SRE",
        require: &[&["kubernetes", "k8s"], &["terraform"]],
        bonus: 2.0,
    },
    ProximityRule {
        category: "SoftwareDEV",
        require: &[&["mlops"], &["ci/cd"]],
        bonus: 3.0,
    },
];

/// Title overrides tried in order when the winner is weak.
static FALLBACKS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\b(qa|tester|quality|sdet)\b", "SoftwareQA"),
        (r"\b(devops|sre|site reliability)\b", "DevOps/SRE"),
        (r"\b(hardware|firmware|embedded|mechanical)\b", "HardwareQA"),
    ]
    .into_iter()
    .map(|(re, cat)| (Regex::new(re).expect("static regex"), cat))
    .collect()
});

/// Non-software domains a "QA" title can belong to.
static QA_DOMAIN_VETO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(mep|civil|construction)\b").expect("static regex"));

/// Titles that are clearly not tech roles; only reported in debug logs.
static NON_TECH_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(recruit\w*|talent acquisition|hr|compliance|civil|construction|mep|accountant|sales)\b")
        .expect("static regex")
});

struct CompiledCategory {
    name: String,
    terms: KeywordGroup,
    phrases: KeywordGroup,
    negative: KeywordGroup,
    title_boost: f64,
    weight: f64,
    proximity: Vec<(Vec<KeywordGroup>, f64)>,
}

impl CompiledCategory {
    fn compile(cfg: &CategoryConfig) -> Result<Self> {
        let ctx = |list: &str| format!("{}.{list}", cfg.name);

        let mut proximity = Vec::new();
        for rule in PROXIMITY_RULES.iter().filter(|r| r.category == cfg.name) {
            let groups = rule
                .require
                .iter()
                .map(|set| KeywordGroup::compile(&ctx("proximity"), set.iter().copied()))
                .collect::<Result<Vec<_>>>()?;
            proximity.push((groups, rule.bonus));
        }

        // a keyword filed under the wrong list is scored by its shape
        let (phrases, terms): (Vec<&str>, Vec<&str>) = cfg
            .terms
            .iter()
            .chain(&cfg.phrases)
            .map(|k| k.trim())
            .partition(|k| is_phrase(k));

        Ok(Self {
            name: cfg.name.clone(),
            terms: KeywordGroup::compile(&ctx("terms"), terms)?,
            phrases: KeywordGroup::compile(&ctx("phrases"), phrases)?,
            negative: KeywordGroup::compile(&ctx("negative"), cfg.negative.iter().map(String::as_str))?,
            title_boost: cfg.title_boost,
            weight: cfg.weight,
            proximity,
        })
    }

    /// Weighted score, nudges excluded.
    fn base_score(&self, title: &str, desc: &str) -> f64 {
        let t_phrase = self.phrases.count(title) as f64;
        let d_phrase = self.phrases.count(desc) as f64;
        let t_term = self.terms.count(title) as f64;
        let d_term = self.terms.count(desc) as f64;
        let t_neg = self.negative.count(title) as f64;
        let d_neg = self.negative.count(desc) as f64;

        let mut score = (t_phrase * TITLE_PHRASE_PTS).min(TITLE_PHRASE_CAP)
            + (d_phrase * DESC_PHRASE_PTS).min(DESC_PHRASE_CAP)
            + (t_term * TITLE_TERM_PTS).min(TITLE_TERM_CAP)
            + (d_term * DESC_TERM_PTS).min(DESC_TERM_CAP)
            + ((t_phrase + t_term) * self.title_boost).min(TITLE_BOOST_CAP)
            - (t_neg * TITLE_NEG_PTS).min(TITLE_NEG_CAP)
            - (d_neg * DESC_NEG_PTS).min(DESC_NEG_CAP);

        for (groups, bonus) in &self.proximity {
            if groups.iter().all(|g| g.is_match(desc)) {
                score += bonus;
            }
        }
        score
    }
}

struct CompiledNudge {
    category: usize,
    regex: Regex,
    boost: f64,
}

pub struct Classifier {
    categories: Vec<CompiledCategory>,
    nudges: Vec<CompiledNudge>,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// `0.6·tanh(margin/4) + 0.4·tanh(best/8)`, both terms floored at zero.
pub fn confidence(best: f64, margin: f64) -> f64 {
    0.6 * (margin.max(0.0) / 4.0).tanh() + 0.4 * (best.max(0.0) / 8.0).tanh()
}

impl Classifier {
    pub fn new(taxonomy: &Taxonomy) -> Result<Self> {
        let categories = taxonomy
            .categories
            .iter()
            .map(CompiledCategory::compile)
            .collect::<Result<Vec<_>>>()?;

        let mut nudges = Vec::with_capacity(taxonomy.nudges.len());
        for n in &taxonomy.nudges {
            let Some(category) = categories.iter().position(|c| c.name == n.cat) else {
                logw!("nudge for unknown category {:?} ignored", n.cat);
                continue;
            };
            let regex = compile_pattern(&format!("nudge {}", n.cat), &format!("(?i){}", n.regex))?;
            nudges.push(CompiledNudge { category, regex, boost: n.boost });
        }

        Ok(Self { categories, nudges })
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Weighted score per category, config order. Inputs are normalized text.
    pub fn scores(&self, title: &str, desc: &str) -> Vec<f64> {
        let mut raw: Vec<f64> = self
            .categories
            .iter()
            .map(|c| c.base_score(title, desc))
            .collect();
        for n in &self.nudges {
            if n.regex.is_match(title) {
                raw[n.category] += n.boost;
            }
        }
        raw.iter()
            .zip(&self.categories)
            .map(|(s, c)| s * c.weight)
            .collect()
    }

    pub fn classify(&self, title: &str, description: &str) -> Classification {
        let title = normalize_for_match(title);
        let desc = normalize_for_match(description);
        let scores = self.scores(&title, &desc);

        let mut order: Vec<usize> = (0..scores.len()).collect();
        // stable: equal scores keep config order
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let best = order.first().map_or(f64::NEG_INFINITY, |&i| scores[i]);
        let second = order.get(1).map_or(f64::NEG_INFINITY, |&i| scores[i]);
        let margin = best - second;
        let conf = confidence(best, margin);

        let mut role: &str = order.first().map_or(UNKNOWN_ROLE, |&i| self.categories[i].name.as_str());

        if best < WEAK_WIN_SCORE || margin < WEAK_WIN_MARGIN {
            if let Some((_, cat)) = FALLBACKS
                .iter()
                .find(|(re, cat)| re.is_match(&title) && self.has_category(cat))
            {
                role = *cat;
            }
        }

        if conf < UNKNOWN_MIN_CONFIDENCE || best < UNKNOWN_MIN_SCORE {
            if NON_TECH_TITLE.is_match(&title) {
                logd!("non-tech title {title:?} (best {best:.2}, confidence {conf:.2})");
            }
            role = UNKNOWN_ROLE;
        }

        if role == "SoftwareQA" && QA_DOMAIN_VETO.is_match(&title) {
            role = UNKNOWN_ROLE;
        }

        let debug_scores: Map<String, Value> = self
            .categories
            .iter()
            .zip(&scores)
            .map(|(c, s)| (c.name.clone(), Value::from(round2(*s))))
            .collect();

        Classification {
            role_type: s!(role),
            confidence: round2(conf.clamp(0.0, 1.0)),
            debug_scores,
        }
    }
}
