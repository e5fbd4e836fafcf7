//! Framework name normalization

use crate::mining::{normalize_token, title_case};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Normalized spelling to canonical display name.
const FRAMEWORK_ALIASES: &[(&str, &str)] = &[
    ("langchain", "LangChain"),
    ("langgraph", "LangGraph"),
    ("autogen", "AutoGen"),
    ("smolagents", "SmolAgents"),
    ("crewai", "CrewAI"),
    ("superagi", "SuperAGI"),
    ("metagpt", "MetaGPT"),
    ("agno", "Agno"),
    ("haystack", "Haystack"),
    ("llamaindex", "LlamaIndex"),
    ("llama_index", "LlamaIndex"),
    ("openai", "OpenAI"),
    ("vertexai", "VertexAI"),
    ("semantic_kernel", "SemanticKernel"),
    ("semantickernel", "SemanticKernel"),
    ("agentverse", "AgentVerse"),
    ("uagents", "uAgents"),
    ("anyagent", "AnyAgent"),
    ("letta", "Letta"),
    ("agentscope", "AgentScope"),
    ("lagent", "Lagent"),
    ("taskweaver", "TaskWeaver"),
];

/// Canonical display name for a raw framework tag. Known spellings map
/// through the alias table, anything else is title-cased. Blank tags yield
/// `None`.
pub fn canonical_framework_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let key = normalize_token(trimmed);
    if let Some((_, display)) = FRAMEWORK_ALIASES.iter().find(|(alias, _)| *alias == key) {
        return Some(display.to_string());
    }
    Some(title_case(trimmed))
}

/// Normalize a provider's raw tags into a set of display names.
///
/// Different raw spellings that land on the same display name are merged
/// into one framework; the merge is logged so collisions stay visible.
pub fn normalize_frameworks<I, S>(raw: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for tag in raw {
        let tag = tag.as_ref();
        let Some(name) = canonical_framework_name(tag) else {
            continue;
        };
        match seen.get(&name) {
            Some(first) if first != tag => {
                debug!("Framework tags '{}' and '{}' both map to {}", first, tag, name);
            }
            Some(_) => {}
            None => {
                seen.insert(name, tag.to_string());
            }
        }
    }
    seen.into_keys().collect()
}
