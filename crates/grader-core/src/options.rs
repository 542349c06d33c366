//! Grading options shared by the pipeline and the CLI.

use serde::{Deserialize, Serialize};

/// Options controlling a grading run. Loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeOptions {
    pub verbose: u8,
    /// Target keywords used when a request carries none of its own.
    pub keywords: Vec<String>,
    pub output: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for GradeOptions {
    fn default() -> Self {
        Self {
            verbose: 0,
            keywords: Vec::new(),
            output: OutputFormat::Text,
            pretty: false,
        }
    }
}

impl GradeOptions {
    /// Configured keywords, trimmed with empty entries dropped.
    pub fn target_keywords(&self) -> Vec<String> {
        self.keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Split a comma-separated keyword string, trimming entries and dropping empties.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(
            parse_keywords(" React, AWS ,, Node ,CI/CD,"),
            vec!["React", "AWS", "Node", "CI/CD"]
        );
    }

    #[test]
    fn test_target_keywords_normalized() {
        let options = GradeOptions {
            keywords: vec![String::new(), " React ".to_string(), "  ".to_string()],
            ..GradeOptions::default()
        };
        assert_eq!(options.target_keywords(), vec!["React"]);
    }

    #[test]
    fn test_parse_keywords_empty() {
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords(" , ,").is_empty());
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let opts: GradeOptions = toml::from_str("keywords = [\"Rust\"]\noutput = \"json\"").unwrap();
        assert_eq!(opts.keywords, vec!["Rust"]);
        assert_eq!(opts.output, OutputFormat::Json);
        assert!(!opts.pretty);
        assert_eq!(opts.verbose, 0);
    }
}
