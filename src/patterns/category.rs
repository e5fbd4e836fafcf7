//! Fixed category patterns that work before any vocabulary is learned

use super::Matcher;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

pub const INTEGRATION_POINTS: &str = "integration_points";
pub const SDK_REFS: &str = "sdk_refs";
pub const CONFIG_METADATA: &str = "config_metadata";
pub const LANGUAGES: &str = "languages";

const CATEGORY_SOURCES: [(&str, &str); 4] = [
    (
        INTEGRATION_POINTS,
        r"\b(openai|vertexai|huggingface|anthropic|cohere|azure|slack|jira|notion|airtable|zapier)\b",
    ),
    (
        SDK_REFS,
        r"\b(langchain|langgraph|autogen|smolagents|crewai|semantic[_-]?kernel|llamaindex|llama_index|haystack|uagents)\b",
    ),
    (
        CONFIG_METADATA,
        r"(model|api[_-]?key|endpoint|tool|env|config|yaml|json)",
    ),
    (LANGUAGES, r"\.(py|ts|js|java|cs|go|rs)\b"),
];

/// A fixed vendor, SDK, metadata or language matcher.
#[derive(Debug, Clone)]
pub struct CategoryPattern {
    label: &'static str,
    source: &'static str,
    regex: Regex,
}

impl Matcher for CategoryPattern {
    fn label(&self) -> &str {
        self.label
    }

    fn pattern(&self) -> &str {
        self.source
    }

    fn find_all(&self, text: &str) -> Vec<String> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

static CATEGORIES: OnceLock<Vec<CategoryPattern>> = OnceLock::new();

/// The four fixed category matchers, compiled once.
pub fn category_patterns() -> &'static [CategoryPattern] {
    CATEGORIES.get_or_init(|| {
        CATEGORY_SOURCES
            .iter()
            .map(|&(label, source)| CategoryPattern {
                label,
                source,
                regex: RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .expect("valid regex"),
            })
            .collect()
    })
}

/// Look up one fixed category by label.
pub fn category(label: &str) -> Option<&'static CategoryPattern> {
    category_patterns().iter().find(|c| c.label == label)
}
