use crate::error::CvscoreError;
use crate::profile::schema::Vocabulary;
use regex::Regex;

/// A skill vocabulary compiled into whole-word matchers.
///
/// Each canonical skill keeps its variants in declaration order; the first
/// variant that matches decides the skill and the rest are skipped.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    skills: Vec<(String, Vec<Regex>)>,
}

impl SkillMatcher {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, CvscoreError> {
        let mut skills = Vec::with_capacity(vocabulary.len());
        for (canonical, variants) in vocabulary {
            let patterns = variants
                .iter()
                .map(|v| variant_pattern(v))
                .collect::<Result<Vec<_>, _>>()?;
            skills.push((canonical.clone(), patterns));
        }
        Ok(SkillMatcher { skills })
    }

    /// Canonical names of every skill with at least one variant present.
    pub fn find(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.skills
            .iter()
            .filter(|(_, patterns)| patterns.iter().any(|p| p.is_match(&lower)))
            .map(|(canonical, _)| canonical.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

fn variant_pattern(variant: &str) -> Result<Regex, CvscoreError> {
    let pattern = format!(r"\b{}\b", regex::escape(&variant.to_lowercase()));
    Regex::new(&pattern).map_err(|e| {
        CvscoreError::ProfileInvalid(format!("skill variant '{}' is unusable: {}", variant, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(entries: &[(&str, &[&str])]) -> Vocabulary {
        entries
            .iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let m = SkillMatcher::new(&vocab(&[("AutoCAD", &["autocad", "acad"])])).unwrap();
        assert_eq!(m.find("Proficient in AutoCAD and Revit"), vec!["AutoCAD"]);
    }

    #[test]
    fn test_whole_word_only() {
        let m = SkillMatcher::new(&vocab(&[("AutoCAD", &["autocad"])])).unwrap();
        assert!(m.find("notautocadrelated").is_empty());
    }

    #[test]
    fn test_multi_word_variant() {
        let m = SkillMatcher::new(&vocab(&[("AutoCAD", &["auto cad"])])).unwrap();
        assert_eq!(m.find("Used Auto CAD daily"), vec!["AutoCAD"]);
    }

    #[test]
    fn test_variant_with_regex_metachars() {
        let m = SkillMatcher::new(&vocab(&[("HEC-RAS", &["hec-ras"])])).unwrap();
        assert_eq!(m.find("Flood studies in HEC-RAS."), vec!["HEC-RAS"]);
    }

    #[test]
    fn test_skill_reported_once() {
        let m = SkillMatcher::new(&vocab(&[("Revit", &["revit", "revit mep"])])).unwrap();
        assert_eq!(m.find("Revit, Revit MEP, revit"), vec!["Revit"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let m = SkillMatcher::new(&vocab(&[("Revit", &["revit"])])).unwrap();
        assert!(m.find("").is_empty());
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_empty_vocabulary() {
        let m = SkillMatcher::new(&Vocabulary::new()).unwrap();
        assert!(m.is_empty());
        assert!(m.find("AutoCAD and Revit").is_empty());
    }
}
