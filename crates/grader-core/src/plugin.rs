//! Plugin traits for extractors and analyzers.

use crate::analysis::AnalysisResult;
use crate::document::{DocumentFormat, FileInput, NormalizedDocument};
use crate::error::Result;

/// Input format plugin: converts an uploaded file into a NormalizedDocument.
pub trait Extractor: Send + Sync {
    /// Human-readable name of this extractor.
    fn name(&self) -> &str;

    /// File formats this extractor handles.
    fn supported_formats(&self) -> &[DocumentFormat];

    /// Read the file's bytes into a normalized document.
    fn extract(&self, input: &FileInput) -> Result<NormalizedDocument>;
}

/// Scores a normalized document against a set of target keywords.
///
/// Analysis never fails: degenerate input yields a low-scoring result.
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &str;

    fn analyze(&self, document: &NormalizedDocument, keywords: &[String]) -> AnalysisResult;
}
