//! Core model for the resume grader.
//!
//! Holds the normalized document IR, the analysis result model, error types,
//! grading options, the extractor/analyzer plugin traits and the pipeline
//! that wires them together.

pub mod analysis;
pub mod document;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod plugin;
