use crate::parsing::normalize::lines;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Two or more capitalised words, optionally joined by a lowercase connector.
static TITLE_CASE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z'-]+(?:(?:\s+(?:and|or|the|of|in))?\s+[A-Z][a-z'-]+)+\b").unwrap()
});

/// Phrases of this many words or more are sentence fragments, not titles.
const MAX_PHRASE_WORDS: usize = 6;

/// Find short title-case spans: candidate job titles, employers, institutions.
///
/// Scans line by line so a span never crosses a line break. Results are
/// deduplicated by exact text, first occurrence first.
pub fn extract_key_phrases(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut phrases = Vec::new();

    for line in lines(text) {
        for m in TITLE_CASE_RUN.find_iter(line) {
            let phrase = m.as_str();
            if phrase.split_whitespace().count() >= MAX_PHRASE_WORDS {
                continue;
            }
            if seen.insert(phrase.to_string()) {
                phrases.push(phrase.to_string());
            }
        }
    }

    tracing::debug!(count = phrases.len(), "found key phrases");
    phrases
}

/// Lines mentioning a degree keyword (substring match on the lowercased line).
pub fn extract_degree_lines(text: &str, degree_keywords: &[String]) -> Vec<String> {
    let keywords: Vec<String> = degree_keywords.iter().map(|k| k.to_lowercase()).collect();
    let mut seen = HashSet::new();
    let mut degrees = Vec::new();

    for line in lines(text) {
        let lower = line.to_lowercase();
        if keywords.iter().any(|k| lower.contains(k.as_str())) && seen.insert(line) {
            degrees.push(line.to_string());
        }
    }

    tracing::debug!(count = degrees.len(), "found potential degree lines");
    degrees
}
