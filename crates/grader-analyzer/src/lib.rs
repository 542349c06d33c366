//! Heuristic résumé analyzer.
//!
//! Scores a normalized document across seven fixed categories, lists
//! improvement suggestions, reports the detected contact and structure
//! signals, and assesses typography when positioned fragments exist.

pub mod patterns;
pub mod rules;
pub mod signals;
pub mod stats;
pub mod suggestions;
pub mod typography;

use grader_core::analysis::{AnalysisResult, CategoryScore};
use grader_core::document::NormalizedDocument;
use grader_core::plugin::Analyzer;

use crate::rules::{standard_rules, ScoringRule};
use crate::signals::Signals;

/// The standard résumé analyzer. Stateless and deterministic.
pub struct ResumeAnalyzer {
    rules: Vec<Box<dyn ScoringRule>>,
}

impl ResumeAnalyzer {
    pub fn new() -> Self {
        Self {
            rules: standard_rules(),
        }
    }
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for ResumeAnalyzer {
    fn name(&self) -> &str {
        "Resume Analyzer"
    }

    fn analyze(&self, document: &NormalizedDocument, keywords: &[String]) -> AnalysisResult {
        let signals = Signals::collect(&document.text, keywords);

        let breakdown: Vec<CategoryScore> =
            self.rules.iter().map(|rule| rule.score(&signals)).collect();
        let score = breakdown.iter().map(|c| c.score).sum();

        AnalysisResult {
            score,
            breakdown,
            suggestions: suggestions::suggest(&signals),
            detected: signals.detected(),
            typography: typography::assess(document.fragments.as_deref()),
        }
    }
}

/// Analyze a document with the standard analyzer.
pub fn analyze_resume(document: &NormalizedDocument, keywords: &[String]) -> AnalysisResult {
    ResumeAnalyzer::new().analyze(document, keywords)
}
