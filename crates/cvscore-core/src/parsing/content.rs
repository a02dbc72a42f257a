use crate::model::ContentAnalysis;
use crate::parsing::normalize::lines;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Bare counts with an optional magnitude/percent suffix, or dollar amounts.
static QUANTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]+[%kmgtb]?\b|\$[0-9,.]+").unwrap());

/// Classify each line as strong (strong verb plus a measurable result) or
/// weak (weak verb, not strong).
///
/// Verb detection is substring containment on the lowercased line. Strong
/// takes priority, so a line lands in at most one list. A line with a weak
/// verb and a number but no strong verb is still only weak.
pub fn analyse_content(text: &str, strong_verbs: &[String], weak_verbs: &[String]) -> ContentAnalysis {
    let strong_verbs: Vec<String> = strong_verbs.iter().map(|v| v.to_lowercase()).collect();
    let weak_verbs: Vec<String> = weak_verbs.iter().map(|v| v.to_lowercase()).collect();

    let mut strong = BTreeSet::new();
    let mut weak = BTreeSet::new();

    for line in lines(text) {
        let line = line.to_lowercase();
        let has_strong = strong_verbs.iter().any(|v| line.contains(v.as_str()));

        if has_strong && is_quantified(&line) {
            strong.insert(line);
        } else if weak_verbs.iter().any(|v| line.contains(v.as_str())) {
            weak.insert(line);
        }
    }

    ContentAnalysis {
        strong_lines: longest_first(strong),
        weak_lines: longest_first(weak),
    }
}

/// True if the line holds at least one number that is not a calendar year.
pub fn is_quantified(line: &str) -> bool {
    QUANTIFIER.find_iter(line).any(|m| {
        let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
        !digits.is_empty() && !is_year(&digits)
    })
}

/// A four-digit token between 1900 and 2099.
fn is_year(digits: &str) -> bool {
    digits.len() == 4
        && digits
            .parse::<u16>()
            .map(|n| (1900..=2099).contains(&n))
            .unwrap_or(false)
}

/// Sort by length descending; equal lengths keep alphabetical order.
fn longest_first(set: BTreeSet<String>) -> Vec<String> {
    let mut lines: Vec<String> = set.into_iter().collect();
    lines.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn analyse(text: &str) -> ContentAnalysis {
        analyse_content(
            text,
            &words(&["increased", "designed", "led"]),
            &words(&["assisted", "helped"]),
        )
    }

    #[test]
    fn test_year_alone_is_not_a_quantifier() {
        let result = analyse("Increased revenue in 2020");
        assert!(result.strong_lines.is_empty());
        assert!(result.weak_lines.is_empty());
    }

    #[test]
    fn test_year_with_other_quantifier_is_strong() {
        let result = analyse("Increased revenue by 20% in 2020");
        assert_eq!(result.strong_lines, vec!["increased revenue by 20% in 2020"]);
    }

    #[test]
    fn test_dollar_amount_qualifies() {
        let result = analyse("Designed a bridge structure saving $50,000 annually");
        assert_eq!(result.strong_lines.len(), 1);
    }

    #[test]
    fn test_suffixed_magnitude_qualifies() {
        assert!(is_quantified("managed a 5m budget"));
        assert!(is_quantified("served 10k users"));
    }

    #[test]
    fn test_out_of_range_four_digits_qualify() {
        assert!(is_quantified("poured 1850 cubic metres"));
        assert!(is_quantified("logged 2100 hours"));
        assert!(!is_quantified("graduated 1999"));
    }

    #[test]
    fn test_strong_verb_without_number_is_not_strong() {
        let result = analyse("Designed drainage layouts");
        assert!(result.strong_lines.is_empty());
    }

    #[test]
    fn test_weak_line_detected() {
        let result = analyse("Assisted senior engineers with site visits");
        assert_eq!(
            result.weak_lines,
            vec!["assisted senior engineers with site visits"]
        );
    }

    #[test]
    fn test_strong_takes_priority_over_weak() {
        let result = analyse("Led and assisted 3 site teams");
        assert_eq!(result.strong_lines.len(), 1);
        assert!(result.weak_lines.is_empty());
    }

    #[test]
    fn test_quantified_weak_line_stays_weak() {
        let result = analyse("Assisted 12 clients");
        assert!(result.strong_lines.is_empty());
        assert_eq!(result.weak_lines.len(), 1);
    }

    #[test]
    fn test_sorted_longest_first_and_deduplicated() {
        let text = "Led 2 teams\nIncreased output by 40% across 3 sites\nLED 2 TEAMS";
        let result = analyse(text);
        assert_eq!(
            result.strong_lines,
            vec!["increased output by 40% across 3 sites", "led 2 teams"]
        );
    }
}
