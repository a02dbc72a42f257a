use crate::model::ContactInfo;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// Runs of digits, spaces, parentheses and hyphens long enough to hold a
/// phone number. Bounded to one line.
static PHONE_WINDOW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9 ()-]{9,}").unwrap());

const MIN_PHONE_DIGITS: usize = 9;

/// Extract email addresses and phone numbers from normalized text.
pub fn extract_contact(text: &str) -> ContactInfo {
    let emails = dedup(EMAIL_PATTERN.find_iter(text).map(|m| m.as_str().to_string()));

    let phones = dedup(PHONE_WINDOW.find_iter(text).filter_map(|m| {
        let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
        (digits.len() >= MIN_PHONE_DIGITS).then_some(digits)
    }));

    tracing::debug!(
        emails = emails.len(),
        phones = phones.len(),
        "extracted contact info"
    );

    ContactInfo { emails, phones }
}

/// Exact-string dedup keeping first-seen order.
fn dedup(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.filter(|s| seen.insert(s.clone())).collect()
}
