pub mod builtin;
pub mod schema;

use crate::error::CvscoreError;
use schema::{JobProfile, Lexicon, Vocabulary};
use std::path::Path;

/// Load a job profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<JobProfile, CvscoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| CvscoreError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a job profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<JobProfile, CvscoreError> {
    let profile: JobProfile = serde_json::from_str(json).map_err(|e| CvscoreError::ProfileLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a job profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<JobProfile, CvscoreError> {
    let profile: JobProfile = serde_json::from_str(json).map_err(CvscoreError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is well-formed.
///
/// Empty requirement lists are allowed (they score as a vacuous match),
/// but empty strings inside them are not.
pub fn validate_profile(profile: &JobProfile) -> Result<(), CvscoreError> {
    if profile.name.trim().is_empty() {
        return Err(CvscoreError::ProfileInvalid(
            "name must not be empty".into(),
        ));
    }

    if profile.version.trim().is_empty() {
        return Err(CvscoreError::ProfileInvalid(
            "version must not be empty".into(),
        ));
    }

    let req = &profile.requirements;
    let term_lists = [
        ("essential.degrees", &req.essential.degrees),
        ("essential.fields_of_study", &req.essential.fields_of_study),
        ("hard_skills.software", &req.hard_skills.software),
        (
            "hard_skills.engineering_disciplines",
            &req.hard_skills.engineering_disciplines,
        ),
        ("hard_skills.technical_tasks", &req.hard_skills.technical_tasks),
        ("hard_matches", &req.hard_matches),
    ];
    for (field, terms) in term_lists {
        if terms.iter().any(|t| t.trim().is_empty()) {
            return Err(CvscoreError::ProfileInvalid(format!(
                "'{}' contains an empty term",
                field
            )));
        }
    }

    for (term, synonyms) in &req.soft_matches {
        if !req.hard_matches.contains(term) {
            return Err(CvscoreError::ProfileInvalid(format!(
                "soft_matches key '{}' is not listed in hard_matches",
                term
            )));
        }
        if synonyms.iter().any(|s| s.trim().is_empty()) {
            return Err(CvscoreError::ProfileInvalid(format!(
                "soft_matches entry '{}' contains an empty synonym",
                term
            )));
        }
    }

    validate_vocabulary("technical_skills", &profile.technical_skills)?;
    validate_vocabulary("soft_skills", &profile.soft_skills)?;

    Ok(())
}

fn validate_vocabulary(field: &str, vocabulary: &Vocabulary) -> Result<(), CvscoreError> {
    for (canonical, variants) in vocabulary {
        if canonical.trim().is_empty() {
            return Err(CvscoreError::ProfileInvalid(format!(
                "'{}' has an empty skill name",
                field
            )));
        }
        if variants.is_empty() {
            return Err(CvscoreError::ProfileInvalid(format!(
                "skill '{}' in '{}' has no variants",
                canonical, field
            )));
        }
        if variants.iter().any(|v| v.trim().is_empty()) {
            return Err(CvscoreError::ProfileInvalid(format!(
                "skill '{}' in '{}' has an empty variant",
                canonical, field
            )));
        }
    }
    Ok(())
}

/// Parse and validate a lexicon from a JSON string.
pub fn parse_lexicon_str(json: &str) -> Result<Lexicon, CvscoreError> {
    let lexicon: Lexicon = serde_json::from_str(json)?;
    let lists = [
        ("strong_action_verbs", &lexicon.strong_action_verbs),
        ("weak_action_verbs", &lexicon.weak_action_verbs),
        ("degree_keywords", &lexicon.degree_keywords),
    ];
    for (field, words) in lists {
        if words.iter().any(|w| w.trim().is_empty()) {
            return Err(CvscoreError::ProfileInvalid(format!(
                "lexicon '{}' contains an empty entry",
                field
            )));
        }
    }
    Ok(lexicon)
}
