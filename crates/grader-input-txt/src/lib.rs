//! TXT/Markdown input plugin: reads plain text uploads verbatim.
//!
//! Markdown is not rendered: the analyzer scores the source text as typed.

use grader_core::document::{DocumentFormat, FileInput, NormalizedDocument};
use grader_core::error::Result;
use grader_core::plugin::Extractor;
use grader_utils::encoding::decode_utf8;

pub struct TxtExtractor;

impl Extractor for TxtExtractor {
    fn name(&self) -> &str {
        "TXT Input"
    }

    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Txt, DocumentFormat::Markdown]
    }

    fn extract(&self, input: &FileInput) -> Result<NormalizedDocument> {
        log::info!("Reading text: {} ({} bytes)", input.name, input.bytes.len());
        let text = decode_utf8(&input.bytes);
        Ok(NormalizedDocument::plain_text(text.trim()))
    }
}
