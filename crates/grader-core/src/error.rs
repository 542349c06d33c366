use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraderError {
    #[error("Unsupported file type '.{0}'. Upload PDF, DOCX, TXT, or MD.")]
    UnsupportedFileType(String),

    /// The underlying format reader failed. `detail` carries the reader's
    /// message for logs; users only see the generic text.
    #[error("Failed to read file")]
    ExtractionFailed { detail: String },

    #[error("Provide a resume file or paste text.")]
    NoContentProvided,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GraderError {
    pub fn extraction(detail: impl Into<String>) -> Self {
        GraderError::ExtractionFailed {
            detail: detail.into(),
        }
    }

    /// Full diagnostic text, including the reader message for extraction failures.
    pub fn diagnostic(&self) -> String {
        match self {
            GraderError::ExtractionFailed { detail } => format!("{}: {}", self, detail),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraderError>;
