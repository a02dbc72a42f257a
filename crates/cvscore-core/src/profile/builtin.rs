use crate::error::CvscoreError;
use crate::profile::schema::{JobProfile, Lexicon};
use crate::profile::{parse_lexicon_str, validate_profile};

const CIVIL_ENGINEER_JSON: &str = include_str!("../../../../profiles/civil-engineer.json");
const LEXICON_JSON: &str = include_str!("../../../../profiles/lexicon.json");

/// Available predefined job profiles.
pub const PRESETS: &[&str] = &["civil-engineer"];

/// Preset used when none is named.
pub const DEFAULT_PRESET: &str = "civil-engineer";

/// Load a predefined job profile by name.
pub fn load_preset(name: &str) -> Result<JobProfile, CvscoreError> {
    match name {
        "civil-engineer" => {
            let profile: JobProfile = serde_json::from_str(CIVIL_ENGINEER_JSON)?;
            validate_profile(&profile)?;
            Ok(profile)
        }
        _ => Err(CvscoreError::ProfileInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// The built-in action-verb and degree-keyword lexicon.
pub fn lexicon() -> Result<Lexicon, CvscoreError> {
    parse_lexicon_str(LEXICON_JSON)
}
