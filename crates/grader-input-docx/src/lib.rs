//! DOCX input plugin: reads the raw text of Word documents.
//!
//! DOCX is a ZIP archive containing Office Open XML. Only
//! `word/document.xml` is read; styling, images and tables are flattened
//! to their text.

mod document;

use grader_core::document::{DocumentFormat, FileInput, NormalizedDocument};
use grader_core::error::{GraderError, Result};
use grader_core::plugin::Extractor;
use grader_utils::archive::MemoryArchive;

pub struct DocxExtractor;

impl Extractor for DocxExtractor {
    fn name(&self) -> &str {
        "DOCX Input"
    }

    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Docx]
    }

    fn extract(&self, input: &FileInput) -> Result<NormalizedDocument> {
        log::info!("Reading DOCX: {} ({} bytes)", input.name, input.bytes.len());
        parse_docx(&input.bytes)
    }
}

fn parse_docx(bytes: &[u8]) -> Result<NormalizedDocument> {
    let mut archive = MemoryArchive::open(bytes)
        .map_err(|e| GraderError::extraction(format!("Invalid DOCX ZIP: {}", e)))?;

    let doc_xml = archive
        .read_entry_string("word/document.xml")
        .map_err(|e| GraderError::extraction(format!("Missing word/document.xml: {}", e)))?;

    let raw = document::extract_raw_text(&doc_xml)
        .map_err(|e| GraderError::extraction(format!("Malformed word/document.xml: {}", e)))?;

    let text = raw.trim().to_string();
    log::info!("Parsed DOCX: {} words", text.split_whitespace().count());

    Ok(NormalizedDocument::word_processor(text))
}
