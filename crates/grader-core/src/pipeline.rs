//! Pipeline orchestrator: runs one grading request end to end.
//!
//! Two phases:
//!   Phase 1: FileInput → Extractor → NormalizedDocument (or pasted text)
//!   Phase 2: NormalizedDocument + keywords → Analyzer → AnalysisResult

use log::{debug, info, warn};

use crate::analysis::AnalysisResult;
use crate::document::{FileInput, NormalizedDocument};
use crate::error::{GraderError, Result};
use crate::options::{parse_keywords, GradeOptions};
use crate::plugin::{Analyzer, Extractor};

/// Progress reporter callback type.
pub type ProgressReporter = Box<dyn Fn(f64, &str) + Send + Sync>;

/// What the calling layer collected from the user.
#[derive(Debug, Clone, Default)]
pub struct GradeRequest {
    pub file: Option<FileInput>,
    pub pasted_text: Option<String>,
    /// Comma-separated target keywords.
    pub keywords: String,
}

impl GradeRequest {
    pub fn from_file(file: FileInput) -> Self {
        Self {
            file: Some(file),
            ..Self::default()
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            pasted_text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }
}

/// The grading pipeline.
pub struct Pipeline {
    extractors: Vec<Box<dyn Extractor>>,
    analyzer: Box<dyn Analyzer>,
    progress_reporter: Option<ProgressReporter>,
}

impl Pipeline {
    pub fn new(analyzer: Box<dyn Analyzer>) -> Self {
        Self {
            extractors: Vec::new(),
            analyzer,
            progress_reporter: None,
        }
    }

    /// Register an extractor. The first one claiming a format wins.
    pub fn add_extractor(&mut self, extractor: Box<dyn Extractor>) {
        self.extractors.push(extractor);
    }

    /// Set a progress reporter callback.
    pub fn set_progress_reporter(&mut self, reporter: ProgressReporter) {
        self.progress_reporter = Some(reporter);
    }

    /// Convert an uploaded file into a normalized document.
    pub fn extract(&self, file: &FileInput) -> Result<NormalizedDocument> {
        let ext = file.extension();
        let format = file
            .format()
            .ok_or_else(|| GraderError::UnsupportedFileType(ext.clone()))?;

        let extractor = self
            .extractors
            .iter()
            .find(|e| e.supported_formats().contains(&format))
            .ok_or_else(|| GraderError::UnsupportedFileType(ext.clone()))?;

        info!("Running {} on {}", extractor.name(), file.name);
        extractor.extract(file).map_err(|e| {
            if let GraderError::ExtractionFailed { ref detail } = e {
                warn!("{} failed on {}: {}", extractor.name(), file.name, detail);
            }
            e
        })
    }

    /// Run a full grading request.
    pub fn grade(&self, request: &GradeRequest, options: &GradeOptions) -> Result<AnalysisResult> {
        self.report_progress(0.0, "Starting analysis...");

        // Phase 1: obtain a document. An uploaded file takes precedence.
        let document = match (&request.file, &request.pasted_text) {
            (Some(file), _) => self.extract(file)?,
            (None, Some(text)) => NormalizedDocument::plain_text(text.as_str()),
            (None, None) => return Err(GraderError::NoContentProvided),
        };
        self.report_progress(0.5, "Extraction complete");

        if document.is_blank() {
            return Err(GraderError::NoContentProvided);
        }

        let mut keywords = parse_keywords(&request.keywords);
        if keywords.is_empty() {
            keywords = options.target_keywords();
        }
        debug!("Target keywords: {:?}", keywords);

        // Phase 2: analysis
        info!("Running {}...", self.analyzer.name());
        let result = self.analyzer.analyze(&document, &keywords);
        self.report_progress(1.0, "Analysis complete");
        info!("Score: {}/100", result.score);

        Ok(result)
    }

    fn report_progress(&self, fraction: f64, message: &str) {
        if let Some(ref reporter) = self.progress_reporter {
            reporter(fraction, message);
        }
    }
}

/// Builder for constructing a pipeline.
pub struct PipelineBuilder {
    extractors: Vec<Box<dyn Extractor>>,
    analyzer: Option<Box<dyn Analyzer>>,
    progress_reporter: Option<ProgressReporter>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
            analyzer: None,
            progress_reporter: None,
        }
    }

    pub fn extractor(mut self, extractor: Box<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    pub fn analyzer(mut self, analyzer: Box<dyn Analyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    pub fn progress_reporter(mut self, reporter: ProgressReporter) -> Self {
        self.progress_reporter = Some(reporter);
        self
    }

    pub fn build(self) -> Result<Pipeline> {
        let analyzer = self
            .analyzer
            .ok_or_else(|| GraderError::Config("No analyzer specified".to_string()))?;

        let mut pipeline = Pipeline::new(analyzer);
        for e in self.extractors {
            pipeline.add_extractor(e);
        }
        if let Some(reporter) = self.progress_reporter {
            pipeline.set_progress_reporter(reporter);
        }
        Ok(pipeline)
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
