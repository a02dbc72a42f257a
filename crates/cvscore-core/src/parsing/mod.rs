pub mod contact;
pub mod content;
pub mod normalize;
pub mod phrases;
pub mod sections;
pub mod skills;
pub mod structure;

use crate::error::CvscoreError;
use crate::model::ExtractedRecord;
use crate::profile::schema::{JobProfile, Lexicon};
use contact::extract_contact;
use content::analyse_content;
use phrases::{extract_degree_lines, extract_key_phrases};
use sections::detect_sections;
use skills::SkillMatcher;
use std::collections::HashSet;

/// Pulls a structured record out of normalized text.
///
/// Vocabularies and keyword lists are compiled once at construction and
/// reused for every document.
#[derive(Debug, Clone)]
pub struct Extractor {
    technical: SkillMatcher,
    soft: SkillMatcher,
    strong_verbs: Vec<String>,
    weak_verbs: Vec<String>,
    degree_keywords: Vec<String>,
}

impl Extractor {
    pub fn new(profile: &JobProfile, lexicon: &Lexicon) -> Result<Self, CvscoreError> {
        let technical = SkillMatcher::new(&profile.technical_skills)?;
        let soft = SkillMatcher::new(&profile.soft_skills)?;
        if technical.is_empty() {
            tracing::warn!(
                profile = %profile.name,
                "no technical skill vocabulary, hard skills cannot match"
            );
        }
        if soft.is_empty() {
            tracing::warn!(
                profile = %profile.name,
                "no soft skill vocabulary, soft skills cannot match"
            );
        }
        tracing::debug!(
            technical = technical.len(),
            soft = soft.len(),
            "skill vocabularies compiled"
        );

        Ok(Extractor {
            technical,
            soft,
            strong_verbs: lexicon.strong_action_verbs.clone(),
            weak_verbs: lexicon.weak_action_verbs.clone(),
            degree_keywords: lexicon.degree_keywords.clone(),
        })
    }

    /// Extract everything from already-normalized text.
    pub fn extract(&self, text: &str) -> ExtractedRecord {
        let contact = extract_contact(text);
        let technical_skills = self.technical.find(text);
        let soft_skills = self.soft.find(text);
        let degrees = extract_degree_lines(text, &self.degree_keywords);

        // A phrase that is already a recognised skill is not reported twice
        let skill_names: HashSet<String> = technical_skills
            .iter()
            .chain(&soft_skills)
            .map(|s| s.to_lowercase())
            .collect();
        let key_phrases: Vec<String> = extract_key_phrases(text)
            .into_iter()
            .filter(|p| !skill_names.contains(&p.to_lowercase()))
            .collect();

        let content = analyse_content(text, &self.strong_verbs, &self.weak_verbs);
        let sections = detect_sections(text);

        let record = ExtractedRecord::new(
            contact,
            technical_skills,
            soft_skills,
            degrees,
            key_phrases,
            content,
            sections,
        );

        tracing::info!(
            technical_skills = record.summary.total_technical_skills,
            soft_skills = record.summary.total_soft_skills,
            key_phrases = record.summary.total_key_phrases,
            degrees = record.summary.total_degrees,
            strong_lines = record.summary.total_strong_lines,
            weak_lines = record.summary.total_weak_lines,
            "extracted resume information"
        );

        record
    }
}
