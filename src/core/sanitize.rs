// src/core/sanitize.rs
use unicode_normalization::UnicodeNormalization;

/// Collapse runs of whitespace to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Characters that survive matching normalization besides alphanumerics,
/// `_` and whitespace.
fn is_kept_symbol(ch: char) -> bool {
    matches!(ch, '+' | '#' | '.' | '/' | '-')
}

/// Text form the classifier matches against:
/// NFKC, lowercase, curly apostrophes → `'`, and every other character
/// outside `[alnum _ whitespace + # . / -]` replaced by one space.
pub fn normalize_for_match(s: &str) -> String {
    let folded: String = s.nfkc().collect::<String>().to_lowercase();
    folded
        .chars()
        .map(|ch| match ch {
            '\u{2018}' | '\u{2019}' => '\'',
            c => c,
        })
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '_' || ch.is_whitespace() || is_kept_symbol(ch) {
                ch
            } else {
                ' '
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  5 -\n 7\tyears "), "5 - 7 years");
    }

    #[test]
    fn match_form_keeps_tech_symbols() {
        assert_eq!(normalize_for_match("Sr. C++/CI-CD Dev (Node.js) #1!"), "sr. c++/ci-cd dev  node.js  #1 ");
    }

    #[test]
    fn match_form_folds_compatibility_chars() {
        // fullwidth letters and ligatures fold under NFKC
        assert_eq!(normalize_for_match("ＱＡ ﬁrmware"), "qa firmware");
        // apostrophes (straight or curly) end up as spaces
        assert_eq!(normalize_for_match("Won’t"), "won t");
    }
}
