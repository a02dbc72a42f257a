use cvscore_core::error::CvscoreError;
use cvscore_core::profile::builtin;
use cvscore_core::profile::schema::JobProfile;
use std::path::Path;

pub fn list() -> Result<(), CvscoreError> {
    println!("Available predefined job profiles:\n");
    for name in builtin::PRESETS {
        let profile = builtin::load_preset(name)?;
        println!("  {:<16} {} (v{})", name, profile.name, profile.version);
        if let Some(ref desc) = profile.description {
            println!("                   {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), CvscoreError> {
    let profile = builtin::load_preset(preset)?;
    let req = &profile.requirements;

    println!("{} (version {})\n", profile.name, profile.version);
    if let Some(ref desc) = profile.description {
        println!("{}\n", desc);
    }

    println!("Job match is scored as 25% education, 50% hard skills and 25% soft skills.\n");

    println!("Education (half credit each for a degree and a field of study):");
    println!("  Degrees: {}", or_none(&req.essential.degrees));
    println!("  Fields:  {}", or_none(&req.essential.fields_of_study));
    println!();

    println!("Hard skills ({} terms):", req.hard_skills.len());
    println!("  Software:    {}", or_none(&req.hard_skills.software));
    println!(
        "  Disciplines: {}",
        or_none(&req.hard_skills.engineering_disciplines)
    );
    println!("  Tasks:       {}", or_none(&req.hard_skills.technical_tasks));
    println!();

    println!("Soft skills ({} terms):", req.hard_matches.len());
    let width = req.hard_matches.iter().map(|t| t.len()).max().unwrap_or(10);
    for term in &req.hard_matches {
        match req.soft_matches.get(term) {
            Some(synonyms) if !synonyms.is_empty() => {
                println!("  {:<width$}  also: {}", term, synonyms.join(", "), width = width)
            }
            _ => println!("  {}", term),
        }
    }
    println!();

    print_vocabulary_summary(&profile);
    Ok(())
}

fn print_vocabulary_summary(profile: &JobProfile) {
    let variants = |v: &cvscore_core::profile::schema::Vocabulary| -> usize {
        v.values().map(|list| list.len()).sum()
    };
    println!(
        "Recognises {} technical skills ({} variants) and {} soft skills ({} variants).",
        profile.technical_skills.len(),
        variants(&profile.technical_skills),
        profile.soft_skills.len(),
        variants(&profile.soft_skills)
    );
    println!();
}

fn or_none(terms: &[String]) -> String {
    if terms.is_empty() {
        "(none, counts as fully matched)".to_string()
    } else {
        terms.join(", ")
    }
}

pub fn schema() -> Result<(), CvscoreError> {
    print!(
        r#"JSON Job Profile Schema
=======================

A profile describes one target role: what it requires, and how to recognise
skills in a resume. `cvscore analyze --profile FILE` scores a resume against
it.

Top-level fields:
  name              (string, required)  Human-readable role name
  description       (string, optional)  What the role is
  version           (string, required)  Version identifier (e.g., "2025.1")
  requirements      (object, required)  Requirement table (see below)
  technical_skills  (object, required)  Map of canonical skill name to a list
                                        of surface forms. Matched as whole
                                        words, case-insensitively.
  soft_skills       (object, required)  Same shape, for interpersonal traits.

The "requirements" object (every field optional, default empty):
  essential.degrees           Degree keywords, e.g. "Bachelor"
  essential.fields_of_study   Fields, e.g. "Civil Engineering"
  hard_skills.software        \
  hard_skills.engineering_disciplines  > Flattened into one hard-skill list
  hard_skills.technical_tasks /
  hard_matches                Canonical soft-skill terms the role asks for
  soft_matches                Map of a hard_matches term to synonyms that
                              also satisfy it

An empty hard_skills or hard_matches list counts as a full match.

Example:
{{
  "name": "Graduate Hydraulic Engineer",
  "version": "1.0",
  "requirements": {{
    "essential": {{
      "degrees": ["Bachelor"],
      "fields_of_study": ["Civil Engineering"]
    }},
    "hard_skills": {{
      "software": ["HEC-RAS", "12d Model"],
      "technical_tasks": ["flood modelling"]
    }},
    "hard_matches": ["teamwork"],
    "soft_matches": {{ "teamwork": ["collaboration"] }}
  }},
  "technical_skills": {{
    "HEC-RAS": ["hec-ras", "hec ras"],
    "12d Model": ["12d model", "12d"],
    "flood modelling": ["flood modelling", "flood modeling"]
  }},
  "soft_skills": {{
    "Teamwork": ["teamwork", "team player"],
    "Collaboration": ["collaboration", "collaborative"]
  }}
}}

Note: soft-skill matching compares canonical soft_skills names with the
hard_matches terms and their synonyms, ignoring case.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), CvscoreError> {
    let profile = cvscore_core::profile::load_profile(file)?;
    let req = &profile.requirements;

    println!("Profile '{}' (v{}) is valid.", profile.name, profile.version);
    println!(
        "  Requirements: {} degrees, {} fields, {} hard skills, {} soft skills",
        req.essential.degrees.len(),
        req.essential.fields_of_study.len(),
        req.hard_skills.len(),
        req.hard_matches.len()
    );
    println!(
        "  Vocabulary: {} technical, {} soft",
        profile.technical_skills.len(),
        profile.soft_skills.len()
    );

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    if req.essential.degrees.is_empty() || req.essential.fields_of_study.is_empty() {
        warnings.push("education requirements are incomplete; education can never score full marks".to_string());
    }
    let soft_names: Vec<String> = profile.soft_skills.keys().map(|k| k.to_lowercase()).collect();
    for term in &req.hard_matches {
        let mut candidates = vec![term.to_lowercase()];
        if let Some(synonyms) = req.soft_matches.get(term) {
            candidates.extend(synonyms.iter().map(|s| s.to_lowercase()));
        }
        if !candidates.iter().any(|c| soft_names.contains(c)) {
            warnings.push(format!(
                "soft skill '{}' can never match: neither it nor its synonyms is a soft_skills name",
                term
            ));
        }
    }
    if profile.technical_skills.is_empty() && !req.hard_skills.is_empty() {
        warnings.push("no technical_skills vocabulary; hard skills can never match".to_string());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
