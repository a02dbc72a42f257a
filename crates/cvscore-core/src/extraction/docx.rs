use crate::error::CvscoreError;
use crate::extraction::{DocumentExtractor, MIN_EXTRACTED_CHARS};
use crate::model::{ExtractedDocument, ParsingMetadata};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Cursor, Read};

const DOCUMENT_PART: &str = "word/document.xml";
const RELATIONSHIPS_PART: &str = "word/_rels/document.xml.rels";
const VERY_LITTLE_TEXT_ISSUE: &str = "Very little text extracted";

/// Word `.docx` backend: unzips the package and walks the main document
/// part with quick-xml.
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        DocxExtractor
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument, CvscoreError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| CvscoreError::Extraction(format!("not a DOCX package: {}", e)))?;

        let document = read_part(&mut archive, DOCUMENT_PART)?.ok_or_else(|| {
            CvscoreError::Extraction(format!("DOCX package has no {}", DOCUMENT_PART))
        })?;
        let body = parse_document_xml(&document)?;

        let image_count = match read_part(&mut archive, RELATIONSHIPS_PART)? {
            Some(rels) => count_image_relationships(&rels)?,
            None => 0,
        };

        // Body paragraphs first, then table cells
        let text = body
            .paragraphs
            .iter()
            .chain(&body.cells)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");

        let mut metadata = ParsingMetadata {
            has_images: image_count > 0,
            image_count,
            has_columns: body.has_columns,
            has_tables: body.table_count > 0,
            table_count: body.table_count,
            ..Default::default()
        };
        if text.trim().chars().count() < MIN_EXTRACTED_CHARS {
            metadata
                .parsing_issues
                .push(VERY_LITTLE_TEXT_ISSUE.to_string());
        }

        tracing::debug!(
            chars = text.len(),
            tables = metadata.table_count,
            images = metadata.image_count,
            columns = metadata.has_columns,
            "decoded DOCX"
        );

        Ok(ExtractedDocument { text, metadata })
    }

    fn backend_name(&self) -> &str {
        "docx"
    }
}

fn read_part(
    archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> Result<Option<String>, CvscoreError> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(CvscoreError::Extraction(format!("{}: {}", name, e))),
    };
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(Some(content))
}

#[derive(Debug, Default)]
struct DocumentBody {
    /// Non-blank paragraphs outside any table, in document order.
    paragraphs: Vec<String>,
    /// Non-blank top-level table cells, paragraphs joined by newlines.
    cells: Vec<String>,
    table_count: u32,
    has_columns: bool,
}

fn parse_document_xml(xml: &str) -> Result<DocumentBody, CvscoreError> {
    let mut reader = Reader::from_str(xml);
    let mut body = DocumentBody::default();

    let mut table_depth: u32 = 0;
    let mut in_text = false;
    let mut paragraph = String::new();
    let mut cell: Option<Vec<String>> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| CvscoreError::Extraction(format!("malformed {}: {}", DOCUMENT_PART, e)))?;

        match event {
            Event::Start(ref e) => match e.name().as_ref() {
                b"w:p" => paragraph.clear(),
                b"w:t" => in_text = true,
                b"w:tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        body.table_count += 1;
                    }
                }
                b"w:tc" if table_depth == 1 => cell = Some(Vec::new()),
                b"w:cols" => body.has_columns |= column_count(e) > 1,
                _ => {}
            },
            Event::Empty(ref e) => match e.name().as_ref() {
                b"w:tab" => paragraph.push('\t'),
                b"w:br" | b"w:cr" => paragraph.push('\n'),
                b"w:cols" => body.has_columns |= column_count(e) > 1,
                _ => {}
            },
            Event::Text(ref e) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|e| CvscoreError::Extraction(e.to_string()))?;
                paragraph.push_str(&text);
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    let text = std::mem::take(&mut paragraph);
                    if table_depth == 0 {
                        if !text.trim().is_empty() {
                            body.paragraphs.push(text);
                        }
                    } else if let Some(cell) = cell.as_mut() {
                        cell.push(text);
                    }
                }
                b"w:tc" if table_depth == 1 => {
                    if let Some(paragraphs) = cell.take() {
                        let text = paragraphs.join("\n");
                        if !text.trim().is_empty() {
                            body.cells.push(text);
                        }
                    }
                }
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(body)
}

fn column_count(cols: &BytesStart) -> u32 {
    cols.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == b"w:num")
        .and_then(|a| String::from_utf8_lossy(&a.value).parse().ok())
        .unwrap_or(1)
}

/// Relationships whose target points at an image part.
fn count_image_relationships(xml: &str) -> Result<u32, CvscoreError> {
    let mut reader = Reader::from_str(xml);
    let mut count = 0;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                if e.name().as_ref() == b"Relationship" =>
            {
                let is_image = e
                    .attributes()
                    .flatten()
                    .any(|a| a.key.as_ref() == b"Target" && String::from_utf8_lossy(&a.value).contains("image"));
                if is_image {
                    count += 1;
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(CvscoreError::Extraction(format!(
                    "malformed {}: {}",
                    RELATIONSHIPS_PART, e
                )))
            }
        }
    }

    Ok(count)
}
