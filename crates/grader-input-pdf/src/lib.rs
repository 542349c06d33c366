//! PDF input plugin: extracts text and positioned fragments from PDF uploads.

mod content;
mod extract;

use grader_core::document::{DocumentFormat, FileInput, NormalizedDocument};
use grader_core::error::Result;
use grader_core::plugin::Extractor;

pub struct PdfExtractor;

impl Extractor for PdfExtractor {
    fn name(&self) -> &str {
        "PDF Input"
    }

    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Pdf]
    }

    fn extract(&self, input: &FileInput) -> Result<NormalizedDocument> {
        log::info!("Reading PDF: {} ({} bytes)", input.name, input.bytes.len());
        extract::extract_pdf(&input.bytes)
    }
}
