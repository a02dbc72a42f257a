use crate::error::CvscoreError;
use crate::extraction::{DocumentExtractor, MIN_EXTRACTED_CHARS};
use crate::model::{ExtractedDocument, ParsingMetadata};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::Command;

const VERY_LITTLE_TEXT_ISSUE: &str = "Very little text extracted - possible parsing problems";
const SPECIAL_CHARS_ISSUE: &str = "High ratio of special characters detected";
const MAX_SPECIAL_CHAR_RATIO: f64 = 0.3;

/// Blocks overlapping vertically by more than this many points...
const COLUMN_Y_OVERLAP: f32 = 50.0;
/// ...while their left edges are further apart than this, read as columns.
const COLUMN_X_SEPARATION: f32 = 100.0;

/// PDF backend using pdftotext and pdfimages (from poppler-utils).
///
/// Text comes from plain `pdftotext` in reading order. Page and column
/// facts come from `pdftotext -bbox-layout`; image count from
/// `pdfimages -list`, which is optional.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for PdftotextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument, CvscoreError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| CvscoreError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(bytes)
            .map_err(|e| CvscoreError::Extraction(e.to_string()))?;
        let tmp_path = tmpfile.path().to_path_buf();

        // Form feeds separate pages
        let raw = run_tool("pdftotext", [tmp_path.as_os_str(), OsStr::new("-")])?;
        let text = String::from_utf8_lossy(&raw).replace('\x0c', "\n");

        let layout = run_tool(
            "pdftotext",
            [
                OsStr::new("-bbox-layout"),
                tmp_path.as_os_str(),
                OsStr::new("-"),
            ],
        )?;
        let pages = parse_bbox_blocks(&String::from_utf8_lossy(&layout));

        let image_count = count_images(&tmp_path);

        let mut metadata = ParsingMetadata {
            has_images: image_count > 0,
            image_count,
            has_columns: pages.iter().any(|blocks| has_columns(blocks)),
            page_count: Some(pages.len() as u32),
            ..Default::default()
        };

        if text.trim().chars().count() < MIN_EXTRACTED_CHARS {
            metadata
                .parsing_issues
                .push(VERY_LITTLE_TEXT_ISSUE.to_string());
        }
        if non_alphanumeric_ratio(&text) > MAX_SPECIAL_CHAR_RATIO {
            metadata.parsing_issues.push(SPECIAL_CHARS_ISSUE.to_string());
        }

        tracing::debug!(
            chars = text.len(),
            pages = pages.len(),
            images = metadata.image_count,
            columns = metadata.has_columns,
            "decoded PDF"
        );

        Ok(ExtractedDocument { text, metadata })
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Run a poppler tool and return its stdout.
fn run_tool<I, S>(tool: &str, args: I) -> Result<Vec<u8>, CvscoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(tool).args(args).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CvscoreError::ToolNotFound {
                tool: tool.to_string(),
            }
        } else {
            CvscoreError::Extraction(format!("{} failed: {}", tool, e))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(CvscoreError::ToolFailed {
            tool: tool.to_string(),
            code,
            stderr,
        });
    }

    Ok(output.stdout)
}

/// Images listed by `pdfimages -list`. Zero, with a warning, when the
/// tool is missing or fails.
fn count_images(pdf_path: &Path) -> u32 {
    match run_tool("pdfimages", [OsStr::new("-list"), pdf_path.as_os_str()]) {
        Ok(stdout) => parse_image_list(&String::from_utf8_lossy(&stdout)),
        Err(e) => {
            tracing::warn!("image detection skipped: {}", e);
            0
        }
    }
}

/// Rows after the two header lines (column titles and a dashed rule).
fn parse_image_list(listing: &str) -> u32 {
    listing
        .lines()
        .skip(2)
        .filter(|l| !l.trim().is_empty())
        .count() as u32
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct BlockBox {
    x_min: f32,
    y_min: f32,
    y_max: f32,
}

/// Text block boxes grouped per page. pdftotext writes one tag per line.
fn parse_bbox_blocks(xml: &str) -> Vec<Vec<BlockBox>> {
    let mut pages: Vec<Vec<BlockBox>> = Vec::new();

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page ") || line == "<page>" {
            pages.push(Vec::new());
            continue;
        }

        if line.starts_with("<block ") {
            let block = parse_block(line);
            if let (Some(page), Some(block)) = (pages.last_mut(), block) {
                page.push(block);
            }
        }
    }

    pages
}

fn parse_block(tag: &str) -> Option<BlockBox> {
    Some(BlockBox {
        x_min: parse_attr_f32(tag, "xMin")?,
        y_min: parse_attr_f32(tag, "yMin")?,
        y_max: parse_attr_f32(tag, "yMax")?,
    })
}

/// Any pair of blocks side by side: overlapping vertically, far apart
/// horizontally.
fn has_columns(blocks: &[BlockBox]) -> bool {
    blocks.iter().enumerate().any(|(i, a)| {
        blocks[i + 1..].iter().any(|b| {
            let y_overlap = a.y_max.min(b.y_max) - a.y_min.max(b.y_min);
            let x_separation = (a.x_min - b.x_min).abs();
            y_overlap > COLUMN_Y_OVERLAP && x_separation > COLUMN_X_SEPARATION
        })
    })
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

/// Share of characters that are neither alphanumeric nor whitespace.
fn non_alphanumeric_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let special = text
        .chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .count();
    special as f64 / total as f64
}
