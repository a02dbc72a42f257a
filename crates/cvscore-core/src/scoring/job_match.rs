use crate::model::ExtractedRecord;
use crate::profile::schema::JobRequirements;
use crate::scoring::outcome::JobMatchScore;
use std::collections::BTreeSet;

const EDUCATION_WEIGHT: f64 = 0.25;
const HARD_SKILLS_WEIGHT: f64 = 0.50;
const SOFT_SKILLS_WEIGHT: f64 = 0.25;

/// Weighted overlap between the record and the requirement table, 0-100.
///
/// An empty hard or soft requirement list counts as fully matched.
pub fn score_job_match(record: &ExtractedRecord, req: &JobRequirements) -> JobMatchScore {
    // Education: keywords searched in all degree lines joined together
    let degree_text = record.degrees.join(" ").to_lowercase();
    let mentions = |terms: &[String]| {
        terms
            .iter()
            .any(|t| degree_text.contains(t.to_lowercase().as_str()))
    };
    let degree_found = mentions(&req.essential.degrees);
    let field_found = mentions(&req.essential.fields_of_study);
    let half = |found: bool| if found { 0.5 } else { 0.0 };
    let education = half(degree_found) + half(field_found);

    // Hard skills: exact, then either-contains-the-other
    let resume_tech: BTreeSet<String> = record
        .technical_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let (matched_hard, missing_hard): (Vec<String>, Vec<String>) =
        req.hard_skills.all().cloned().partition(|term| {
            let term = term.to_lowercase();
            resume_tech.contains(&term)
                || resume_tech
                    .iter()
                    .any(|s| s.contains(term.as_str()) || term.contains(s.as_str()))
        });
    let hard_skills = fraction(matched_hard.len(), req.hard_skills.len());

    // Soft skills: the term itself or any of its synonyms
    let resume_soft: BTreeSet<String> = record.soft_skills.iter().map(|s| s.to_lowercase()).collect();
    let (matched_soft, missing_soft): (Vec<String>, Vec<String>) =
        req.hard_matches.iter().cloned().partition(|term| {
            resume_soft.contains(&term.to_lowercase())
                || req
                    .soft_matches
                    .get(term)
                    .is_some_and(|syns| syns.iter().any(|s| resume_soft.contains(&s.to_lowercase())))
        });
    let soft_skills = fraction(matched_soft.len(), req.hard_matches.len());

    let percentage = (100.0
        * (EDUCATION_WEIGHT * education
            + HARD_SKILLS_WEIGHT * hard_skills
            + SOFT_SKILLS_WEIGHT * soft_skills))
        .min(100.0);

    let feedback = [
        "JOB MATCH BREAKDOWN:".to_string(),
        format!(
            "- Education Match: {:.0}% (Degree: {}, Field: {})",
            education * 100.0,
            tick(degree_found),
            tick(field_found)
        ),
        format!(
            "- Hard Skills Match: {:.0}% ({}/{} found)",
            hard_skills * 100.0,
            matched_hard.len(),
            req.hard_skills.len()
        ),
        format!(
            "- Soft Skills Match: {:.0}% ({}/{} found)",
            soft_skills * 100.0,
            matched_soft.len(),
            req.hard_matches.len()
        ),
    ]
    .join("\n");

    tracing::debug!(
        education,
        hard_skills,
        soft_skills,
        percentage,
        "job match scored"
    );

    JobMatchScore {
        percentage,
        feedback,
        education,
        hard_skills,
        soft_skills,
        degree_found,
        field_found,
        matched_hard_skills: matched_hard,
        missing_hard_skills: missing_hard,
        matched_soft_skills: matched_soft,
        missing_soft_skills: missing_soft,
    }
}

fn fraction(matched: usize, required: usize) -> f64 {
    if required == 0 {
        1.0
    } else {
        matched as f64 / required as f64
    }
}

fn tick(found: bool) -> &'static str {
    if found {
        "✓"
    } else {
        "✗"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactInfo, ContentAnalysis, SectionPresence};
    use crate::profile::schema::{Essential, HardSkills};
    use std::collections::BTreeMap;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn record(tech: &[&str], soft: &[&str], degrees: &[&str]) -> ExtractedRecord {
        ExtractedRecord::new(
            ContactInfo::default(),
            strings(tech),
            strings(soft),
            strings(degrees),
            vec![],
            ContentAnalysis::default(),
            SectionPresence::default(),
        )
    }

    fn requirements() -> JobRequirements {
        let mut soft_matches = BTreeMap::new();
        soft_matches.insert("Teamwork".to_string(), strings(&["Collaboration"]));
        JobRequirements {
            essential: Essential {
                degrees: strings(&["Bachelor"]),
                fields_of_study: strings(&["Civil Engineering"]),
            },
            hard_skills: HardSkills {
                software: strings(&["AutoCAD", "Civil 3D"]),
                engineering_disciplines: strings(&["Structural Design"]),
                technical_tasks: strings(&["Site Inspection"]),
            },
            hard_matches: strings(&["Teamwork", "Leadership"]),
            soft_matches,
        }
    }

    #[test]
    fn test_empty_requirements_are_vacuously_met() {
        let result = score_job_match(&record(&[], &[], &[]), &JobRequirements::default());
        assert_eq!(result.hard_skills, 1.0);
        assert_eq!(result.soft_skills, 1.0);
        assert_eq!(result.education, 0.0);
        assert_eq!(result.percentage, 75.0);
    }

    #[test]
    fn test_education_degree_and_field() {
        let rec = record(&[], &[], &["Bachelor of Engineering (Civil Engineering) 2022"]);
        let result = score_job_match(&rec, &requirements());
        assert!(result.degree_found);
        assert!(result.field_found);
        assert_eq!(result.education, 1.0);

        let rec = record(&[], &[], &["Diploma in Civil Engineering"]);
        let result = score_job_match(&rec, &requirements());
        assert!(!result.degree_found);
        assert_eq!(result.education, 0.5);
    }

    #[test]
    fn test_hard_skills_exact_and_fuzzy() {
        // "Structural Design" is contained in the extracted skill
        let rec = record(&["autocad", "Structural Design Review"], &[], &[]);
        let result = score_job_match(&rec, &requirements());
        assert_eq!(result.matched_hard_skills, strings(&["AutoCAD", "Structural Design"]));
        assert_eq!(result.missing_hard_skills, strings(&["Civil 3D", "Site Inspection"]));
        assert_eq!(result.hard_skills, 0.5);
    }

    #[test]
    fn test_soft_skill_synonym_matches() {
        let rec = record(&[], &["Collaboration"], &[]);
        let result = score_job_match(&rec, &requirements());
        assert_eq!(result.matched_soft_skills, strings(&["Teamwork"]));
        assert_eq!(result.missing_soft_skills, strings(&["Leadership"]));
        assert_eq!(result.soft_skills, 0.5);
    }

    #[test]
    fn test_full_match_is_one_hundred() {
        let rec = record(
            &["AutoCAD", "Civil 3D", "Structural Design", "Site Inspection"],
            &["Teamwork", "Leadership"],
            &["Bachelor of Civil Engineering"],
        );
        let result = score_job_match(&rec, &requirements());
        assert!((result.percentage - 100.0).abs() < 1e-9);
        assert!(result.feedback.contains("4/4 found"));
    }
}
