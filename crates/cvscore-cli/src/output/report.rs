use cvscore_core::model::ExtractedDocument;
use cvscore_core::profile::schema::{JobProfile, JobRequirements};
use cvscore_core::scoring::{Analysis, AnalysisStatus};
use std::io::Write;

const KEYWORD_PREVIEW: usize = 12;

/// Write the full plain-text report for one analysis.
pub fn render(w: &mut dyn Write, analysis: &Analysis, profile: &JobProfile) -> std::io::Result<()> {
    let scores = &analysis.scores;
    let record = &analysis.record;

    // Header
    writeln!(w, "RESUME ANALYSIS REPORT")?;
    writeln!(w, "{}", "=".repeat(50))?;
    writeln!(w, "Job Target: {}", analysis.profile_name)?;
    writeln!(w)?;

    if let AnalysisStatus::InsufficientText { chars } = analysis.status {
        writeln!(
            w,
            "Note: only {} characters of text were extracted; scores reflect an empty document.",
            chars
        )?;
        writeln!(w)?;
    }

    // Executive summary
    writeln!(w, "EXECUTIVE SUMMARY")?;
    writeln!(w, "{}", "-".repeat(20))?;
    writeln!(
        w,
        "Overall Assessment: {} ({:.1}%)",
        analysis.assessment.band, analysis.assessment.overall
    )?;
    writeln!(w)?;

    // Detailed analysis
    writeln!(w, "DETAILED ANALYSIS")?;
    writeln!(w, "{}", "-".repeat(20))?;
    section(
        w,
        &format!(
            "1. READABILITY & ATS COMPATIBILITY: {}/10",
            scores.readability.score
        ),
        &scores.readability.feedback,
    )?;
    section(
        w,
        &format!("2. FORMATTING & STRUCTURE: {:.1}/10", scores.formatting.score),
        &scores.formatting.feedback,
    )?;
    section(
        w,
        &format!(
            "3. CONTENT & ACHIEVEMENT-ORIENTATION: {:.1}/10",
            scores.content.score
        ),
        &scores.content.feedback,
    )?;
    section(
        w,
        &format!("4. JOB MATCH SCORE: {:.1}%", scores.job_match.percentage),
        &scores.job_match.feedback,
    )?;

    job_keywords(w, &profile.requirements)?;

    // Extracted information
    writeln!(w, "--- KEY INFORMATION EXTRACTED FROM RESUME ---")?;
    writeln!(w, "Emails: {}", join_or(&record.contact.emails, "Not found"))?;
    writeln!(w, "Phones: {}", join_or(&record.contact.phones, "Not found"))?;
    counted(w, "Technical Skills Found", &record.technical_skills)?;
    counted(w, "Soft Skills Found", &record.soft_skills)?;
    counted(w, "Key Phrases Found", &record.key_phrases)?;
    writeln!(w, "Potential Education Found ({}):", record.degrees.len())?;
    if record.degrees.is_empty() {
        writeln!(w, "  None")?;
    }
    for line in &record.degrees {
        writeln!(w, "  - {}", line)?;
    }
    writeln!(w, "Sections Detected: {}", sections(analysis))?;
    writeln!(w, "{}", "-".repeat(35))?;
    writeln!(w)?;

    // Recommendations
    writeln!(w, "KEY RECOMMENDATIONS")?;
    writeln!(w, "{}", "-".repeat(25))?;
    if analysis.assessment.recommendations.is_empty() {
        writeln!(w, "- No major issues found.")?;
    }
    for rec in &analysis.assessment.recommendations {
        writeln!(w, "- {}", rec)?;
    }
    writeln!(w)?;
    writeln!(w, "{}", "=".repeat(50))?;
    writeln!(w, "Analysis complete. Good luck with your application!")?;
    Ok(())
}

/// Write a decoded document: metadata summary followed by the text.
pub fn render_extraction(w: &mut dyn Write, document: &ExtractedDocument) -> std::io::Result<()> {
    let meta = &document.metadata;

    if let Some(pages) = meta.page_count {
        writeln!(w, "Pages:   {}", pages)?;
    }
    writeln!(w, "Images:  {}", meta.image_count)?;
    writeln!(w, "Columns: {}", if meta.has_columns { "yes" } else { "no" })?;
    writeln!(w, "Tables:  {}", meta.table_count)?;
    for issue in &meta.parsing_issues {
        writeln!(w, "Issue:   {}", issue)?;
    }
    writeln!(w, "{}", "-".repeat(35))?;
    writeln!(w, "{}", document.text)?;
    Ok(())
}

fn section(w: &mut dyn Write, title: &str, feedback: &str) -> std::io::Result<()> {
    writeln!(w, "{}", title)?;
    for line in feedback.lines() {
        if line.is_empty() {
            writeln!(w)?;
        } else {
            writeln!(w, "   {}", line)?;
        }
    }
    writeln!(w)?;
    Ok(())
}

fn job_keywords(w: &mut dyn Write, req: &JobRequirements) -> std::io::Result<()> {
    writeln!(w, "KEYWORDS FROM JOB DESCRIPTION")?;
    writeln!(w, "{}", "-".repeat(35))?;

    let education: Vec<&String> = req
        .essential
        .degrees
        .iter()
        .chain(&req.essential.fields_of_study)
        .collect();
    if !education.is_empty() {
        writeln!(w, "Education: {}", join_refs(&education))?;
    }

    let hard: Vec<&String> = req.hard_skills.all().collect();
    if !hard.is_empty() {
        let shown = &hard[..hard.len().min(KEYWORD_PREVIEW)];
        let more = if hard.len() > KEYWORD_PREVIEW { "..." } else { "" };
        writeln!(w, "Technical Keywords: {}{}", join_refs(shown), more)?;
    }

    if !req.hard_matches.is_empty() {
        writeln!(w, "Soft Skill Keywords: {}", req.hard_matches.join(", "))?;
    }

    writeln!(w)?;
    Ok(())
}

fn sections(analysis: &Analysis) -> String {
    let s = &analysis.record.sections;
    let found: Vec<&str> = [
        (s.profile, "Profile"),
        (s.experience, "Experience"),
        (s.education, "Education"),
        (s.skills, "Skills"),
        (s.projects, "Projects"),
        (s.certifications, "Certifications"),
        (s.contact, "Contact"),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, name)| *name)
    .collect();
    if found.is_empty() {
        "None".to_string()
    } else {
        found.join(", ")
    }
}

fn counted(w: &mut dyn Write, label: &str, items: &[String]) -> std::io::Result<()> {
    writeln!(w, "{} ({}): {}", label, items.len(), join_or(items, "None"))
}

fn join_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

fn join_refs(items: &[&String]) -> String {
    items
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
