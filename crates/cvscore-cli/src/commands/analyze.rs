use cvscore_core::error::CvscoreError;
use cvscore_core::extraction::extractor_for_path;
use cvscore_core::model::ExtractedDocument;
use cvscore_core::profile::{self, builtin};
use std::io::Write;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    preset: Option<String>,
    profile_file: Option<PathBuf>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), CvscoreError> {
    let profile = match (&profile_file, &preset) {
        (Some(path), _) => profile::load_profile(path)?,
        (None, Some(name)) => builtin::load_preset(name)?,
        (None, None) => builtin::load_preset(builtin::DEFAULT_PRESET)?,
    };
    let lexicon = builtin::lexicon()?;

    // Determine input type by extension
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let document = if is_json {
        // Load a saved extraction
        let json_bytes = std::fs::read(&input_file)?;
        serde_json::from_slice::<ExtractedDocument>(&json_bytes)?
    } else {
        let extractor = extractor_for_path(&input_file)?;
        let bytes = std::fs::read(&input_file)?;
        cvscore_core::extract_document(&bytes, extractor.as_ref())?
    };

    let analysis =
        cvscore_core::analyze_text(&document.text, &document.metadata, &profile, &lexicon)?;

    let mut rendered = Vec::new();
    match output_format {
        "json" => writeln!(rendered, "{}", output::json::to_string(&analysis)?)?,
        _ => output::report::render(&mut rendered, &analysis, &profile)?,
    }
    std::io::stdout().write_all(&rendered)?;

    if let Some(path) = output_file {
        std::fs::write(&path, &rendered)?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}
