//! Document surface: title, description, model and tool mentions in README prose

use crate::models::ReadmeMetadata;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

const DESCRIPTION_FALLBACK_LINES: usize = 3;
const DESCRIPTION_MAX_CHARS: usize = 300;

static TITLE: OnceLock<Regex> = OnceLock::new();
static DESCRIPTION: OnceLock<Regex> = OnceLock::new();
static MODELS: OnceLock<Regex> = OnceLock::new();
static TOOLS: OnceLock<Regex> = OnceLock::new();

fn title_pattern() -> &'static Regex {
    TITLE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*#+[ \t]*([A-Z][\w \t-]+(?:Agent|Bot|System)?)").expect("valid regex")
    })
}

fn description_pattern() -> &'static Regex {
    DESCRIPTION.get_or_init(|| {
        Regex::new(r"(?i)(?:description|about|purpose)[:\-–]\s*([^\n]+)").expect("valid regex")
    })
}

fn models_pattern() -> &'static Regex {
    MODELS.get_or_init(|| {
        Regex::new(
            r"(?i)\b(gpt[-\w]+|claude[-\w]+|mistral|llama[-\w]+|palm[-\w]+|vertexai|openai)\b",
        )
        .expect("valid regex")
    })
}

fn tools_pattern() -> &'static Regex {
    TOOLS.get_or_init(|| {
        Regex::new(
            r"(?i)\b(search|browser|retriever|database|calculator|codeinterpreter|slack|discord|jira)\b",
        )
        .expect("valid regex")
    })
}

fn distinct_matches(pattern: &Regex, content: &str) -> Vec<String> {
    pattern
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn description_of(content: &str) -> Option<String> {
    if let Some(caps) = description_pattern().captures(content) {
        return Some(caps[1].trim().to_string());
    }

    let joined = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(DESCRIPTION_FALLBACK_LINES)
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        return None;
    }
    Some(joined.chars().take(DESCRIPTION_MAX_CHARS).collect())
}

/// Extract README metadata. Model and tool mentions are de-duplicated as
/// written and returned sorted.
pub fn extract_readme_info(content: &str) -> ReadmeMetadata {
    let name = title_pattern()
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|n| !n.is_empty());

    ReadmeMetadata {
        name,
        description: description_of(content),
        tools: distinct_matches(tools_pattern(), content),
        models: distinct_matches(models_pattern(), content),
    }
}
