//! Normalized document representation.
//!
//! Every grading request passes through this IR:
//! File → Extractor → NormalizedDocument → Analyzer → AnalysisResult.

use serde::{Deserialize, Serialize};

/// The uploaded file as handed over by the calling layer.
#[derive(Debug, Clone)]
pub struct FileInput {
    /// Original file name. Only its extension is used.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl FileInput {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Lowercase extension after the final dot, or an empty string.
    pub fn extension(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => String::new(),
        }
    }

    /// The document format implied by the file name, if supported.
    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_extension(&self.extension())
    }
}

// ---------------------------------------------------------------------------
// Format enumeration
// ---------------------------------------------------------------------------

/// Accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
    Markdown,
}

impl DocumentFormat {
    /// Parse from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            "md" => Some(Self::Markdown),
            _ => None,
        }
    }

    /// Get the canonical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
            Self::Markdown => "md",
        }
    }

    /// The kind of normalized document this format produces.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Pdf => DocumentKind::PortableDocument,
            Self::Docx => DocumentKind::WordProcessor,
            Self::Txt | Self::Markdown => DocumentKind::PlainText,
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension().to_uppercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    PortableDocument,
    WordProcessor,
    PlainText,
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

/// One positioned run of text from a PDF page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub content: String,
    /// 1-based page number the run was found on.
    pub page: u32,
    /// Vertical coordinate in page user space (larger is higher on the page).
    pub vertical_position: f64,
    pub font_size_pt: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
}

impl Fragment {
    pub fn new(content: impl Into<String>, page: u32, vertical_position: f64, font_size_pt: f64) -> Self {
        Self {
            content: content.into(),
            page,
            vertical_position,
            font_size_pt,
            font_name: None,
        }
    }

    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }
}

// ---------------------------------------------------------------------------
// NormalizedDocument
// ---------------------------------------------------------------------------

/// Extractor output: flat text plus, for PDFs, the positioned fragments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    pub kind: DocumentKind,
    pub text: String,
    /// Present only for portable-document input, in extraction order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragments: Option<Vec<Fragment>>,
}

impl NormalizedDocument {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            kind: DocumentKind::PlainText,
            text: text.into(),
            fragments: None,
        }
    }

    pub fn word_processor(text: impl Into<String>) -> Self {
        Self {
            kind: DocumentKind::WordProcessor,
            text: text.into(),
            fragments: None,
        }
    }

    pub fn portable_document(text: impl Into<String>, fragments: Vec<Fragment>) -> Self {
        Self {
            kind: DocumentKind::PortableDocument,
            text: text.into(),
            fragments: Some(fragments),
        }
    }

    /// True when the text holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
