//! Analysis result model produced by the analyzer.

use serde::{Deserialize, Serialize};

/// Composite resume assessment. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sum of the category sub-scores, 0–100.
    pub score: u32,
    pub breakdown: Vec<CategoryScore>,
    pub suggestions: Vec<String>,
    pub detected: Detected,
    pub typography: Typography,
}

impl AnalysisResult {
    /// Look up a category entry by its label.
    pub fn category(&self, label: &str) -> Option<&CategoryScore> {
        self.breakdown.iter().find(|c| c.label == label)
    }
}

/// One scoring category's contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub label: String,
    pub score: u32,
    pub note: String,
}

impl CategoryScore {
    pub fn new(label: impl Into<String>, score: u32, note: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            score,
            note: note.into(),
        }
    }
}

/// Contact and structure signals found in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detected {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub links: Vec<String>,
    pub linkedin: Option<String>,
    pub location: Option<String>,
    pub bullets: usize,
    pub words: usize,
    pub sections: SectionPresence,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub experience: bool,
    pub education: bool,
    pub projects: bool,
    pub skills: bool,
    pub summary: bool,
    pub certifications: bool,
}

impl SectionPresence {
    pub fn any(&self) -> bool {
        self.experience
            || self.education
            || self.projects
            || self.skills
            || self.summary
            || self.certifications
    }
}

/// Font-size and spacing assessment derived from PDF fragments.
///
/// When `available` is false every other field is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_size_pt: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub heading_sizes_pt: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub font_candidates: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub verdicts: Vec<String>,
}

impl Typography {
    pub fn unavailable() -> Self {
        Self::default()
    }
}
