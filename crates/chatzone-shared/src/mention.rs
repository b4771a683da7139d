//! `@username` tokenizer used when a channel is created.
//!
//! Extraction and validation are split: this module only finds tokens, the
//! channel registry decides which of them are real members.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII word characters only.
static MENTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@([A-Za-z0-9_]+)").expect("mention pattern is valid")
});

/// Mention tokens in order of appearance, without the `@`, duplicates kept.
pub fn extract_mentions(text: &str) -> Vec<String> {
    MENTION_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// `text` with every mention token removed. Whitespace is left untouched.
pub fn strip_mentions(text: &str) -> String {
    MENTION_RE.replace_all(text, "").into_owned()
}
