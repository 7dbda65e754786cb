// src/config/taxonomy.rs
//
// Role categories, title nudges, tech keywords and experience buckets.
// The built-in set below is what a run uses unless `--taxonomy <file>`
// points at a JSON document of the same shape (camelCase keys). Sections
// missing from the file keep their built-in value.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfig {
    pub name: String,
    /// Single words, matched on word boundaries
    #[serde(default)]
    pub terms: Vec<String>,
    /// Literals containing whitespace or any of `./+-`
    #[serde(default)]
    pub phrases: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
    #[serde(default)]
    pub title_boost: f64,
    #[serde(default = "unit_weight")]
    pub weight: f64,
}

fn unit_weight() -> f64 {
    1.0
}

/// Additive tie-breaker: `boost` goes to `cat` when `regex` hits the normalized title.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TitleNudge {
    pub cat: String,
    pub regex: String,
    pub boost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TechKeyword {
    pub label: String,
    pub patterns: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceBucket {
    pub label: String,
    pub min: f64,
    /// `None` = unbounded
    #[serde(default)]
    pub max: Option<f64>,
}

impl ExperienceBucket {
    pub fn contains(&self, years: f64) -> bool {
        years >= self.min && self.max.is_none_or(|max| years <= max)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Taxonomy {
    pub categories: Vec<CategoryConfig>,
    pub nudges: Vec<TitleNudge>,
    pub tech: Vec<TechKeyword>,
    pub buckets: Vec<ExperienceBucket>,
}

impl Taxonomy {
    /// Load an override file and check it.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| PipelineError::Taxonomy(format!("cannot read {}: {e}", path.display())))?;
        let tax: Taxonomy = serde_json::from_str(&text)
            .map_err(|e| PipelineError::Taxonomy(format!("invalid JSON in {}: {e}", path.display())))?;
        tax.validate()?;
        Ok(tax)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn bucket_labels(&self) -> Vec<String> {
        self.buckets.iter().map(|b| b.label.clone()).collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(PipelineError::Taxonomy(s!("no categories configured")));
        }
        let mut seen = HashSet::new();
        for c in &self.categories {
            if c.name.trim().is_empty() {
                return Err(PipelineError::Taxonomy(s!("category with empty name")));
            }
            if !seen.insert(c.name.as_str()) {
                return Err(PipelineError::Taxonomy(format!("duplicate category {:?}", c.name)));
            }
            if !c.weight.is_finite() || !c.title_boost.is_finite() {
                return Err(PipelineError::Taxonomy(format!("non-finite weight in {:?}", c.name)));
            }
        }
        for n in &self.nudges {
            if !seen.contains(n.cat.as_str()) {
                return Err(PipelineError::Taxonomy(format!("nudge targets unknown category {:?}", n.cat)));
            }
        }
        if self.buckets.is_empty() {
            return Err(PipelineError::Taxonomy(s!("no experience buckets configured")));
        }
        // shared edges are fine: the first matching bucket wins
        for pair in self.buckets.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            match a.max {
                Some(max) if a.min <= b.min && max <= b.min => {}
                _ => {
                    return Err(PipelineError::Taxonomy(format!(
                        "experience buckets {:?} and {:?} overlap or are out of order",
                        a.label, b.label
                    )));
                }
            }
        }
        Ok(())
    }
}

/* ---------------- Built-in set ---------------- */

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s!(*s)).collect()
}

fn category(
    name: &str,
    terms: &[&str],
    phrases: &[&str],
    negative: &[&str],
    title_boost: f64,
    weight: f64,
) -> CategoryConfig {
    CategoryConfig {
        name: s!(name),
        terms: strings(terms),
        phrases: strings(phrases),
        negative: strings(negative),
        title_boost,
        weight,
    }
}

fn nudge(cat: &str, regex: &str, boost: f64) -> TitleNudge {
    TitleNudge { cat: s!(cat), regex: s!(regex), boost }
}

fn tech(label: &str, patterns: &[&str]) -> TechKeyword {
    TechKeyword { label: s!(label), patterns: strings(patterns) }
}

fn bucket(label: &str, min: f64, max: Option<f64>) -> ExperienceBucket {
    ExperienceBucket { label: s!(label), min, max }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            nudges: default_nudges(),
            tech: default_tech(),
            buckets: default_buckets(),
        }
    }
}

fn default_categories() -> Vec<CategoryConfig> {
    vec![
        category(
            "SoftwareDEV",
            &[
                "developer", "programmer", "backend", "frontend", "fullstack", "javascript",
                "typescript", "java", "python", "golang", "react", "angular", "django",
                "spring", "kotlin", "swift", "android", "ios", "microservices", "sde",
            ],
            &[
                "software engineer", "software developer", "full stack", "full-stack",
                "back end", "front end", "web developer", "node.js", "c++", ".net",
                "mobile developer", "application developer", "rest api",
            ],
            &["qa", "tester", "sdet", "test automation", "recruiter", "sales"],
            1.0,
            1.0,
        ),
        category(
            "SoftwareQA",
            &[
                "qa", "tester", "testing", "sdet", "selenium", "cypress", "playwright",
                "appium", "jmeter", "postman", "testng", "junit", "pytest", "cucumber",
                "regression", "quality",
            ],
            &[
                "quality assurance", "test automation", "automation testing", "manual testing",
                "test engineer", "test cases", "test plan", "qa engineer", "software tester",
                "quality engineer",
            ],
            &["civil", "construction", "mep", "hvac", "plumbing", "site engineer", "recruiter"],
            0.5,
            1.0,
        ),
        category(
            "DevOps/SRE",
            &[
                "devops", "sre", "kubernetes", "k8s", "terraform", "ansible", "docker",
                "jenkins", "helm", "prometheus", "grafana", "aws", "azure", "gcp",
                "observability", "puppet",
            ],
            &[
                "site reliability", "ci/cd", "infrastructure as code", "platform engineer",
                "cloud engineer", "release engineer", "build and release", "github actions",
                "gitlab ci",
            ],
            &["sales", "recruiter", "presales"],
            1.0,
            1.0,
        ),
        category(
            "Data/ML",
            &[
                "ml", "ai", "analytics", "spark", "hadoop", "pandas", "tensorflow", "pytorch",
                "nlp", "llm", "etl", "tableau", "statistics",
            ],
            &[
                "machine learning", "data scientist", "data engineer", "data analyst",
                "deep learning", "computer vision", "power bi", "big data", "gen ai",
            ],
            &["data entry", "recruiter"],
            1.0,
            0.9,
        ),
        category(
            "Cybersecurity",
            &[
                "security", "cybersecurity", "soc", "siem", "pentest", "vapt", "iam",
                "firewall", "vulnerability", "malware",
            ],
            &[
                "penetration testing", "security analyst", "incident response",
                "threat intelligence", "application security", "network security",
                "ethical hacking",
            ],
            &["guard", "security guard", "loss prevention", "bouncer"],
            1.0,
            1.0,
        ),
        category(
            "HardwareQA",
            &[
                "hardware", "firmware", "embedded", "pcb", "fpga", "asic", "vlsi", "rtl",
                "verilog", "systemverilog", "mechanical", "oscilloscope", "microcontroller",
            ],
            &[
                "hardware testing", "hardware validation", "post-silicon", "pre-silicon",
                "board bring-up", "embedded testing", "test equipment",
            ],
            &["civil", "construction", "mep", "hvac", "site engineer"],
            1.0,
            1.0,
        ),
    ]
}

fn default_nudges() -> Vec<TitleNudge> {
    vec![
        nudge("SoftwareQA", r"\b(automation|manual)\s+test", 2.0),
        nudge("SoftwareDEV", r"\b(developer|programmer)\b", 1.5),
        nudge("DevOps/SRE", r"\b(platform|infrastructure|cloud)\s+engineer\b", 2.0),
        nudge("HardwareQA", r"\b(validation|verification)\s+engineer\b", 1.5),
        nudge("Data/ML", r"\bdata\s+(scientist|engineer|analyst)\b", 2.0),
        nudge("Cybersecurity", r"\bsecurity\s+(engineer|analyst|architect)\b", 2.0),
    ]
}

fn default_tech() -> Vec<TechKeyword> {
    vec![
        tech("Python", &[r"\bpython\b"]),
        tech("Java", &[r"\bjava\b"]),
        tech("JavaScript", &[r"\bjavascript\b", r"\bjs\b"]),
        tech("TypeScript", &[r"\btypescript\b"]),
        tech("Go", &[r"\bgolang\b"]),
        tech("C++", &[r"c\+\+"]),
        tech("C#/.NET", &[r"\bc#", r"\.net\b"]),
        tech("React", &[r"\breact(\.js|js)?\b"]),
        tech("Node.js", &[r"\bnode(\.js|js)\b"]),
        tech("SQL", &[r"\bsql\b", r"\bmysql\b", r"\bpostgres(ql)?\b"]),
        tech("Selenium", &[r"\bselenium\b"]),
        tech("Cypress", &[r"\bcypress\b"]),
        tech("Playwright", &[r"\bplaywright\b"]),
        tech("Appium", &[r"\bappium\b"]),
        tech("JMeter", &[r"\bjmeter\b"]),
        tech("Docker", &[r"\bdocker\b"]),
        tech("Kubernetes", &[r"\bkubernetes\b", r"\bk8s\b"]),
        tech("Terraform", &[r"\bterraform\b"]),
        tech("Ansible", &[r"\bansible\b"]),
        tech("Jenkins", &[r"\bjenkins\b"]),
        tech("AWS", &[r"\baws\b", r"amazon web services"]),
        tech("Azure", &[r"\bazure\b"]),
        tech("GCP", &[r"\bgcp\b", r"google cloud"]),
        tech("Linux", &[r"\blinux\b"]),
        tech("Spark", &[r"\bspark\b"]),
        tech("TensorFlow", &[r"\btensorflow\b"]),
        tech("PyTorch", &[r"\bpytorch\b"]),
    ]
}

fn default_buckets() -> Vec<ExperienceBucket> {
    vec![
        bucket("0-1 Years", 0.0, Some(1.0)),
        bucket("2-3 Years", 2.0, Some(3.0)),
        bucket("4-6 Years", 4.0, Some(6.0)),
        bucket("7-9 Years", 7.0, Some(9.0)),
        bucket("10-14 Years", 10.0, Some(14.0)),
        bucket("15+ Years", 15.0, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_taxonomy_is_valid() {
        let tax = Taxonomy::default();
        tax.validate().unwrap();
        assert!(tax.category_names().any(|n| n == "DevOps/SRE"));
        assert_eq!(tax.bucket_labels().first().map(String::as_str), Some("0-1 Years"));
    }

    #[test]
    fn partial_override_keeps_builtin_sections() {
        let json = r#"{ "categories": [ { "name": "Only", "terms": ["x"] } ], "nudges": [] }"#;
        let tax: Taxonomy = serde_json::from_str(json).unwrap();
        assert_eq!(tax.categories.len(), 1);
        assert_eq!(tax.categories[0].weight, 1.0);
        assert_eq!(tax.categories[0].title_boost, 0.0);
        assert_eq!(tax.buckets, default_buckets());
        tax.validate().unwrap();
    }

    #[test]
    fn nudge_for_unknown_category_is_rejected() {
        let mut tax = Taxonomy::default();
        tax.nudges.push(nudge("Nope", r"\bx\b", 1.0));
        assert!(matches!(tax.validate(), Err(PipelineError::Taxonomy(_))));
    }

    #[test]
    fn overlapping_buckets_are_rejected() {
        let mut tax = Taxonomy::default();
        tax.buckets = vec![bucket("a", 0.0, Some(5.0)), bucket("b", 3.0, None)];
        assert!(tax.validate().is_err());
    }

    #[test]
    fn buckets_may_share_an_edge() {
        let mut tax = Taxonomy::default();
        tax.buckets = vec![
            bucket("0-2", 0.0, Some(2.0)),
            bucket("2-5", 2.0, Some(5.0)),
            bucket("5+", 5.0, None),
        ];
        tax.validate().unwrap();

        tax.buckets.swap(0, 1);
        assert!(tax.validate().is_err());
        tax.buckets = vec![bucket("5+", 5.0, None), bucket("6+", 6.0, None)];
        assert!(tax.validate().is_err());
    }

    #[test]
    fn bucket_bounds_are_inclusive() {
        let b = bucket("4-6 Years", 4.0, Some(6.0));
        assert!(b.contains(4.0) && b.contains(6.0));
        assert!(!b.contains(6.5));
        assert!(bucket("15+", 15.0, None).contains(80.0));
    }
}
