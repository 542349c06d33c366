//! PDF extraction: loads the document with lopdf, decodes each page's
//! content stream and assembles fragments and flat text.

use std::collections::BTreeMap;

use lopdf::content::Content;
use lopdf::{Dictionary, Document, ObjectId};
use rayon::prelude::*;

use grader_core::document::{Fragment, NormalizedDocument};
use grader_core::error::{GraderError, Result};
use grader_utils::encoding::decode_pdf_string;

use crate::content::{self, FontResolver};

/// Extract a normalized document from PDF bytes.
pub fn extract_pdf(bytes: &[u8]) -> Result<NormalizedDocument> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| GraderError::extraction(format!("Failed to load PDF: {}", e)))?;

    let pages = doc.get_pages();
    log::info!("PDF has {} pages", pages.len());

    // Step 1: Read raw content streams in page order
    let raw_pages: Vec<(u32, ObjectId, Vec<u8>)> = pages
        .iter()
        .map(|(&page_num, &page_id)| {
            doc.get_page_content(page_id)
                .map(|data| (page_num, page_id, data))
                .map_err(|e| {
                    GraderError::extraction(format!("Page {}: cannot read content: {}", page_num, e))
                })
        })
        .collect::<Result<_>>()?;

    // Step 2: Decode content streams (parallel; pure byte parsing)
    let decoded: Vec<(u32, ObjectId, Content)> = raw_pages
        .into_par_iter()
        .map(|(page_num, page_id, data)| {
            Content::decode(&data)
                .map(|content| (page_num, page_id, content))
                .map_err(|e| {
                    GraderError::extraction(format!("Page {}: invalid content stream: {}", page_num, e))
                })
        })
        .collect::<Result<_>>()?;

    // Step 3: Walk operators with each page's font resources
    let mut fragments: Vec<Fragment> = Vec::new();
    let mut text = String::new();

    for (page_num, page_id, content) in &decoded {
        let fonts = PageFonts::load(&doc, *page_id);
        let page_fragments = content::collect_fragments(*page_num, &content.operations, &fonts);
        log::debug!("Page {}: {} text fragments", page_num, page_fragments.len());

        for fragment in &page_fragments {
            text.push_str(&fragment.content);
            text.push(' ');
        }
        text.push('\n');

        fragments.extend(page_fragments);
    }

    let text = collapse_trailing_whitespace(&text);
    log::info!(
        "Extracted {} fragments, {} characters of text",
        fragments.len(),
        text.chars().count()
    );

    Ok(NormalizedDocument::portable_document(text, fragments))
}

/// Remove spaces and tabs that directly precede a newline.
fn collapse_trailing_whitespace(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        *line = line.trim_end_matches([' ', '\t']);
    }
    lines.join("\n")
}

/// Strip a font subset tag such as `ABCDEF+` from a base font name.
fn strip_subset_prefix(name: &str) -> &str {
    match name.split_once('+') {
        Some((tag, rest)) if tag.len() == 6 && tag.bytes().all(|b| b.is_ascii_uppercase()) => rest,
        _ => name,
    }
}

/// Font resources of a single page, backed by lopdf's encoding support.
struct PageFonts<'a> {
    doc: &'a Document,
    fonts: BTreeMap<Vec<u8>, &'a Dictionary>,
}

impl<'a> PageFonts<'a> {
    fn load(doc: &'a Document, page_id: ObjectId) -> Self {
        let fonts = doc.get_page_fonts(page_id).unwrap_or_else(|e| {
            log::warn!("Cannot read fonts for page object {:?}: {}", page_id, e);
            BTreeMap::new()
        });
        Self { doc, fonts }
    }
}

impl FontResolver for PageFonts<'_> {
    fn decode(&self, font_key: &[u8], bytes: &[u8]) -> String {
        self.fonts
            .get(font_key)
            .and_then(|font| font.get_font_encoding(self.doc).ok())
            .and_then(|encoding| Document::decode_text(&encoding, bytes).ok())
            .unwrap_or_else(|| decode_pdf_string(bytes))
    }

    fn font_name(&self, font_key: &[u8]) -> Option<String> {
        let base_font = self
            .fonts
            .get(font_key)
            .and_then(|font| font.get(b"BaseFont").ok())
            .and_then(|obj| obj.as_name().ok())
            .map(|n| String::from_utf8_lossy(n).to_string());

        match base_font {
            Some(name) => Some(strip_subset_prefix(&name).to_string()),
            None if !font_key.is_empty() => Some(String::from_utf8_lossy(font_key).to_string()),
            None => None,
        }
    }
}
