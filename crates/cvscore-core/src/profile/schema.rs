use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical name -> surface-form variants. Matching is case-insensitive.
pub type Vocabulary = BTreeMap<String, Vec<String>>;

/// A target role: what the job asks for plus the skill vocabularies used
/// to recognise skills in a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub requirements: JobRequirements,
    pub technical_skills: Vocabulary,
    pub soft_skills: Vocabulary,
}

/// The requirement table scored by the job-match scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub essential: Essential,
    #[serde(default)]
    pub hard_skills: HardSkills,
    /// Canonical soft-skill terms the role asks for.
    #[serde(default)]
    pub hard_matches: Vec<String>,
    /// Soft-skill term -> alternate phrasings that also satisfy it.
    #[serde(default)]
    pub soft_matches: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Essential {
    #[serde(default)]
    pub degrees: Vec<String>,
    #[serde(default)]
    pub fields_of_study: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HardSkills {
    #[serde(default)]
    pub software: Vec<String>,
    #[serde(default)]
    pub engineering_disciplines: Vec<String>,
    #[serde(default)]
    pub technical_tasks: Vec<String>,
}

impl HardSkills {
    /// All categories flattened: software, then disciplines, then tasks.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.software
            .iter()
            .chain(&self.engineering_disciplines)
            .chain(&self.technical_tasks)
    }

    pub fn len(&self) -> usize {
        self.software.len() + self.engineering_disciplines.len() + self.technical_tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keyword lists for content analysis and degree detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    pub strong_action_verbs: Vec<String>,
    pub weak_action_verbs: Vec<String>,
    pub degree_keywords: Vec<String>,
}
