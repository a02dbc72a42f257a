use crate::model::SectionPresence;
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Profile,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Contact,
}

const HEADINGS: &[(Section, &[&str])] = &[
    (
        Section::Profile,
        &[
            "career profile",
            "professional profile",
            "career summary",
            "professional summary",
            "executive summary",
            "career objective",
            "professional objective",
            "career overview",
            "profile",
            "summary",
            "objective",
            "about me",
        ],
    ),
    (
        Section::Experience,
        &[
            "work experience",
            "professional experience",
            "employment history",
            "work history",
            "career history",
            "experience",
            "employment",
        ],
    ),
    (
        Section::Education,
        &[
            "education",
            "academic background",
            "tertiary education",
            "qualifications",
        ],
    ),
    (
        Section::Skills,
        &[
            "technical skills",
            "key skills",
            "core competencies",
            "competencies",
            "skills",
            "expertise",
        ],
    ),
    (
        Section::Projects,
        &["key projects", "project experience", "notable projects", "projects"],
    ),
    (
        Section::Certifications,
        &[
            "certifications",
            "certificates",
            "licenses",
            "licences",
            "accreditations",
            "professional memberships",
            "training",
        ],
    ),
    (
        Section::Contact,
        &[
            "contact information",
            "contact details",
            "personal information",
            "personal details",
        ],
    ),
];

static SECTION_PATTERNS: LazyLock<Vec<(Section, Regex)>> = LazyLock::new(|| {
    HEADINGS
        .iter()
        .map(|(section, phrases)| {
            let alternatives: Vec<String> = phrases
                .iter()
                .map(|p| regex::escape(p).replace(' ', r"\s+"))
                .collect();
            let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
            (*section, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Detect which sections are mentioned anywhere in the text.
pub fn detect_sections(text: &str) -> SectionPresence {
    let lower = text.to_lowercase();
    let mut presence = SectionPresence::default();

    for (section, pattern) in SECTION_PATTERNS.iter() {
        if pattern.is_match(&lower) {
            tracing::debug!(?section, "found section");
            match section {
                Section::Profile => presence.profile = true,
                Section::Experience => presence.experience = true,
                Section::Education => presence.education = true,
                Section::Skills => presence.skills = true,
                Section::Projects => presence.projects = true,
                Section::Certifications => presence.certifications = true,
                Section::Contact => presence.contact = true,
            }
        }
    }

    presence
}

/// If the whole line is a section heading (optionally with a trailing
/// colon), return which section it opens.
pub fn heading_section(line: &str) -> Option<Section> {
    let lower = line.trim().trim_end_matches(':').trim().to_lowercase();
    let collapsed = lower.split_whitespace().collect::<Vec<_>>().join(" ");
    HEADINGS
        .iter()
        .find(|(_, phrases)| phrases.contains(&collapsed.as_str()))
        .map(|(section, _)| *section)
}
