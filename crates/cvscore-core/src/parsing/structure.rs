//! Line, sentence and character heuristics used by the readability score.

use crate::parsing::normalize::lines;
use crate::parsing::sections::heading_section;
use regex::Regex;
use std::sync::LazyLock;

/// Opening line of a career profile or summary, with optional inline body.
static PROFILE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:career\s+(?:profile|summary|objective)|professional\s+(?:profile|summary)|executive\s+summary|profile|summary|objective)\s*(?::\s*(?P<rest>.*))?$",
    )
    .unwrap()
});

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

static BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[•·▪▫◦‣⁃]\s+|[-*+]\s+|[0-9]+\.\s+|[a-zA-Z]\.\s+)").unwrap()
});

/// Glyphs that commonly come out of PDF/DOCX conversion mangled or unreadable.
const PROBLEMATIC_CHARS: &str = "©®™§¶†‡•‰‱′″‴‵‶‷‸‹›«»¡¿¦¨ª¯°±²³¹¼½¾×÷";

/// Profile body lines examined after the heading.
const MAX_PROFILE_LINES: usize = 7;
const PROFILE_MAX_WORDS: usize = 80;
const PROFILE_MAX_LINES: usize = 4;

const LONG_SENTENCE_WORDS: usize = 25;
const MIN_SENTENCE_CHARS: usize = 10;
const LONG_LINE_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileSection {
    pub found: bool,
    pub word_count: usize,
    pub line_count: usize,
    pub too_long: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentenceStats {
    pub total_sentences: usize,
    pub overly_long_sentences: usize,
    pub average_length: f64,
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Locate the career profile and measure its body.
///
/// The body is any text after a colon on the heading line plus the lines
/// that follow, up to the next section heading or `MAX_PROFILE_LINES`.
pub fn analyse_career_profile(text: &str) -> ProfileSection {
    let all: Vec<&str> = lines(text).collect();

    let Some((idx, caps)) = all
        .iter()
        .enumerate()
        .find_map(|(i, line)| PROFILE_HEADER.captures(line).map(|c| (i, c)))
    else {
        return ProfileSection::default();
    };

    let mut body: Vec<&str> = Vec::new();
    if let Some(rest) = caps.name("rest").map(|m| m.as_str().trim()) {
        if !rest.is_empty() {
            body.push(rest);
        }
    }
    for line in &all[idx + 1..] {
        if body.len() >= MAX_PROFILE_LINES || heading_section(line).is_some() {
            break;
        }
        body.push(line);
    }

    let word_count = body.iter().map(|l| word_count(l)).sum();
    let line_count = body.len();
    ProfileSection {
        found: true,
        word_count,
        line_count,
        too_long: word_count > PROFILE_MAX_WORDS || line_count > PROFILE_MAX_LINES,
    }
}

/// Split on sentence punctuation and count fragments over 25 words.
/// Fragments of 10 characters or fewer are ignored.
pub fn analyse_sentences(text: &str) -> SentenceStats {
    let lengths: Vec<usize> = SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(word_count)
        .collect();

    let total = lengths.len();
    SentenceStats {
        total_sentences: total,
        overly_long_sentences: lengths.iter().filter(|&&n| n > LONG_SENTENCE_WORDS).count(),
        average_length: if total > 0 {
            lengths.iter().sum::<usize>() as f64 / total as f64
        } else {
            0.0
        },
    }
}

/// Lines that start with a bullet glyph, dash, number or letter marker.
pub fn count_bullets(text: &str) -> usize {
    text.split('\n').filter(|l| BULLET.is_match(l)).count()
}

/// Share of characters drawn from the problematic glyph set.
pub fn special_char_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let problematic = text.chars().filter(|c| PROBLEMATIC_CHARS.contains(*c)).count();
    problematic as f64 / total as f64
}

/// Lines longer than 100 characters after trimming.
pub fn count_long_lines(text: &str) -> usize {
    text.split('\n')
        .filter(|l| l.trim().chars().count() > LONG_LINE_CHARS)
        .count()
}
