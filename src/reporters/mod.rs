//! Output writers for mined documents and classification results
//!
//! Persisted documents:
//! - provider profiles, semantic keywords, framework keywords and the regex
//!   map as pretty-printed JSON
//! - the per-provider feature summary as CSV
//!
//! Classification results render as:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON

mod csv;
mod json;
mod text;

pub use csv::{render_summary_csv, write_summary_csv, CSV_HEADER};
pub use json::{read_json, write_json};

use crate::models::ClassificationResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported classification output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a classification result in the given format
pub fn report(result: &ClassificationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(result)),
        OutputFormat::Json => json::render(result),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A result with one detected framework and a few categories
    pub(crate) fn test_result() -> ClassificationResult {
        let mut result = ClassificationResult {
            is_agentic: true,
            confidence: 0.5,
            ..Default::default()
        };
        result.frameworks.insert("LangChain".into());
        result.sdks.insert("langchain".into());
        result.tools.insert("openai".into());
        result.languages.insert("py".into());
        result
            .keywords_matched
            .insert("agentic_keywords".into(), vec!["agent".into()]);
        result
            .keywords_matched
            .insert("LangChain".into(), vec!["llm".into(), "chain".into(), "memory".into()]);
        result
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("sarif").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_report_dispatch() {
        let result = test_result();
        let json = report(&result, OutputFormat::Json).unwrap();
        assert!(json.starts_with('{'));
        let text = report(&result, OutputFormat::Text).unwrap();
        assert!(text.contains("LangChain"));
    }
}
