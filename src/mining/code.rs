//! Code surface: imports, declared types, declared functions, member access

use crate::models::CodeFeatures;
use regex::Regex;
use std::sync::OnceLock;

static IMPORT: OnceLock<Regex> = OnceLock::new();
static CLASS: OnceLock<Regex> = OnceLock::new();
static FUNCTION: OnceLock<Regex> = OnceLock::new();
static MEMBER: OnceLock<Regex> = OnceLock::new();

fn import_pattern() -> &'static Regex {
    IMPORT.get_or_init(|| Regex::new(r"\b(?:import|from)\s+([\w.]+)").expect("valid regex"))
}

fn class_pattern() -> &'static Regex {
    CLASS.get_or_init(|| Regex::new(r"\bclass\s+(\w+)").expect("valid regex"))
}

fn function_pattern() -> &'static Regex {
    FUNCTION.get_or_init(|| Regex::new(r"\b(?:def|function)\s+(\w+)").expect("valid regex"))
}

fn member_pattern() -> &'static Regex {
    MEMBER.get_or_init(|| Regex::new(r"(\w+)\.").expect("valid regex"))
}

fn captures(pattern: &Regex, code: &str) -> Vec<String> {
    pattern
        .captures_iter(code)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Raw token lists for one source blob, before counting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeTokens {
    pub imports: Vec<String>,
    pub classes: Vec<String>,
    pub functions: Vec<String>,
    pub apis: Vec<String>,
}

/// Extract the four independent code categories from a source blob.
pub fn extract_code_tokens(code: &str) -> CodeTokens {
    CodeTokens {
        imports: captures(import_pattern(), code),
        classes: captures(class_pattern(), code),
        functions: captures(function_pattern(), code),
        apis: captures(member_pattern(), code),
    }
}

/// Count one source blob into `features`.
pub fn accumulate_code(features: &mut CodeFeatures, code: &str) {
    let tokens = extract_code_tokens(code);
    features.imports.extend(tokens.imports);
    features.classes.extend(tokens.classes);
    features.functions.extend(tokens.functions);
    features.apis.extend(tokens.apis);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PY: &str = r#"
from langchain.agents import AgentExecutor
import openai

class PlannerAgent(BaseAgent):
    def plan(self, goal):
        return self.llm.invoke(goal)
"#;

    #[test]
    fn test_python_extraction() {
        let tokens = extract_code_tokens(PY);
        assert_eq!(tokens.imports, vec!["langchain.agents", "AgentExecutor", "openai"]);
        assert_eq!(tokens.classes, vec!["PlannerAgent"]);
        assert_eq!(tokens.functions, vec!["plan"]);
        assert_eq!(tokens.apis, vec!["langchain", "self", "llm"]);
    }

    #[test]
    fn test_javascript_function_keyword() {
        let tokens = extract_code_tokens("export function runAgent(ctx) { return ctx.tools.call(); }");
        assert_eq!(tokens.functions, vec!["runAgent"]);
        assert_eq!(tokens.apis, vec!["ctx", "tools"]);
    }

    #[test]
    fn test_keyword_inside_word_is_not_an_import() {
        let tokens = extract_code_tokens("wherefrom data\nreimport thing\nsubclass Foo");
        assert!(tokens.imports.is_empty());
        assert!(tokens.classes.is_empty());
    }

    #[test]
    fn test_accumulate_counts_across_blobs() {
        let mut features = CodeFeatures::default();
        accumulate_code(&mut features, "import os\nos.path");
        accumulate_code(&mut features, "import os");
        assert_eq!(features.imports.get("os"), 2);
        assert_eq!(features.apis.get("os"), 1);
    }
}
