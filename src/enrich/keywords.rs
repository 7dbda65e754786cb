// src/enrich/keywords.rs
//
// Precompiled keyword groups.
//
// A keyword list splits into *phrases* (anything with whitespace or one of
// `./+-`) and *tokens* (single words). Tokens share one word-bounded
// alternation; each phrase gets its own escaped literal. Everything is
// case-insensitive.

use std::collections::HashSet;

use regex::Regex;

use crate::error::{PipelineError, Result};

pub fn is_phrase(keyword: &str) -> bool {
    keyword
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '.' | '/' | '+' | '-'))
}

pub(crate) fn compile_pattern(context: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| PipelineError::Pattern {
        context: s!(context),
        pattern: s!(pattern),
        source,
    })
}

#[derive(Clone, Debug, Default)]
pub struct KeywordGroup {
    tokens: Option<Regex>,
    phrases: Vec<Regex>,
}

impl KeywordGroup {
    /// `context` only feeds error messages (e.g. "SoftwareQA.terms").
    pub fn compile<'a, I>(context: &str, keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let mut tokens = Vec::new();
        let mut phrases = Vec::new();

        for kw in keywords {
            let kw = kw.trim().to_lowercase();
            if kw.is_empty() || !seen.insert(kw.clone()) {
                continue;
            }
            if is_phrase(&kw) {
                phrases.push(compile_pattern(context, &format!("(?i){}", regex::escape(&kw)))?);
            } else {
                tokens.push(regex::escape(&kw));
            }
        }

        let tokens = if tokens.is_empty() {
            None
        } else {
            Some(compile_pattern(context, &format!(r"(?i)\b(?:{})\b", tokens.join("|")))?)
        };

        Ok(Self { tokens, phrases })
    }

    fn regexes(&self) -> impl Iterator<Item = &Regex> {
        self.tokens.iter().chain(self.phrases.iter())
    }

    /// Number of distinct `(offset, matched text)` hits over every regex of
    /// the group. The same word at two positions counts twice; two regexes
    /// landing on the same span count once.
    pub fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let mut hits: HashSet<(usize, &str)> = HashSet::new();
        for re in self.regexes() {
            for m in re.find_iter(text) {
                hits.insert((m.start(), m.as_str()));
            }
        }
        hits.len()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regexes().any(|re| re.is_match(text))
    }
}
