use cvscore_core::error::CvscoreError;
use cvscore_core::extraction::extractor_for_path;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), CvscoreError> {
    let extractor = extractor_for_path(&input_file)?;
    let bytes = std::fs::read(&input_file)?;
    let document = cvscore_core::extract_document(&bytes, extractor.as_ref())?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            std::fs::write(&path, output::json::to_string(&document)?)?;
            eprintln!(
                "Extracted {} characters with {}, written to {}",
                document.text.chars().count(),
                extractor.backend_name(),
                path.display()
            );
            for issue in &document.metadata.parsing_issues {
                eprintln!("  warning: {}", issue);
            }
        }
        None => match output_format {
            "json" => output::json::print(&document)?,
            _ => output::report::render_extraction(&mut std::io::stdout().lock(), &document)?,
        },
    }

    Ok(())
}
