//! CLI contract tests
//!
//! Runs the built binary against local-path providers: no network, every
//! output lands in a temp directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn agentmine_bin() -> String {
    env!("CARGO_BIN_EXE_agentmine").to_string()
}

fn agentmine(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(agentmine_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("AGENTMINE_OUT")
        .env_remove("AGENTMINE_WORKERS")
        .env_remove("AGENTMINE_CONFIG")
        .output()
        .expect("Failed to run agentmine");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

/// A workspace with one local LangChain-style provider and one missing path.
fn setup_workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let repo = dir.path().join("provider");
    std::fs::create_dir_all(repo.join("configs")).unwrap();
    std::fs::write(
        repo.join("agent.py"),
        r#"from langchain.agents import AgentExecutor
from langchain.memory import ConversationMemory

class RetrievalChain:
    def run_chain(self, prompt):
        return self.llm.invoke(prompt)
"#,
    )
    .unwrap();
    std::fs::write(
        repo.join("README.md"),
        "# Retrieval Agent\nDescription: an llm chain with memory and a search tool\n",
    )
    .unwrap();
    std::fs::write(
        repo.join("configs").join("agent.yaml"),
        "llm:\n  model: gpt-4o\ntools:\n  - search\nenv:\n  OPENAI_API_KEY: x\n",
    )
    .unwrap();

    let config = format!(
        r#"[mining]
workers = 2

[providers.Retrieval]
path = "{}"
frameworks = ["langchain"]

[providers.Gone]
path = "{}"
"#,
        repo.display().to_string().replace('\\', "/"),
        dir.path().join("missing").display().to_string().replace('\\', "/")
    );
    std::fs::write(dir.path().join("agentmine.toml"), config).unwrap();
    dir
}

#[test]
fn test_run_writes_every_output() {
    let dir = setup_workspace();
    let (code, stdout, stderr) = agentmine(dir.path(), &["run", "--out", "results"]);
    assert_eq!(code, 0, "stdout: {stdout}\nstderr: {stderr}");

    let out = dir.path().join("results");
    for name in [
        "agentic_agent_profiles.json",
        "agentic_features_summary.csv",
        "agentic_semantic_keywords.json",
        "framework_semantic_keywords.json",
        "agentic_regex_patterns.json",
        "clone_failures.log",
    ] {
        assert!(out.join(name).exists(), "missing {name}");
    }

    let profiles: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("agentic_agent_profiles.json")).unwrap()).unwrap();
    let retrieval = &profiles["Retrieval"];
    assert_eq!(retrieval["agent_profile"]["is_agentic"], true);
    assert_eq!(retrieval["framework_signals"]["frameworks"][0], "LangChain");
    assert_eq!(retrieval["agent_profile"]["code_features"]["classes"]["RetrievalChain"], 1);
    assert_eq!(
        retrieval["agent_profile"]["metadata"]["readme"]["name"],
        "Retrieval Agent"
    );
    assert_eq!(
        retrieval["agent_profile"]["metadata"]["config"]["models"][0],
        "gpt-4o"
    );
    assert!(profiles.get("Gone").is_none());

    let log = std::fs::read_to_string(out.join("clone_failures.log")).unwrap();
    assert!(log.contains("[Gone] "));

    let csv = std::fs::read_to_string(out.join("agentic_features_summary.csv")).unwrap();
    assert!(csv.starts_with("Provider,Feature_Type,Feature_Name,Frequency"));
    assert!(csv.contains("Retrieval,classes,RetrievalChain,1"));

    let frameworks: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.join("framework_semantic_keywords.json")).unwrap(),
    )
    .unwrap();
    let langchain = frameworks["LangChain"].as_array().unwrap();
    assert!(langchain.iter().any(|k| k == "retrievalchain"));

    let patterns: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.join("agentic_regex_patterns.json")).unwrap(),
    )
    .unwrap();
    assert!(patterns["framework_langchain"].as_str().unwrap().starts_with(r"\b("));
    assert!(patterns.get("sdk_refs").is_some());
}

#[test]
fn test_mine_is_byte_identical_across_runs() {
    let dir = setup_workspace();
    let (code, _, _) = agentmine(dir.path(), &["mine", "--out", "a"]);
    assert_eq!(code, 0);
    let (code, _, _) = agentmine(dir.path(), &["mine", "--out", "b", "--workers", "1"]);
    assert_eq!(code, 0);

    let a = std::fs::read(dir.path().join("a/agentic_agent_profiles.json")).unwrap();
    let b = std::fs::read(dir.path().join("b/agentic_agent_profiles.json")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_keywords_without_profiles_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = agentmine(dir.path(), &["keywords"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("agentmine mine"), "stderr: {stderr}");
}

#[test]
fn test_classify_json_uses_default_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("notes.md");
    std::fs::write(&file, "This agent uses a planner, memory and an llm chain. See main.py").unwrap();

    let (code, stdout, _) = agentmine(dir.path(), &["classify", "notes.md", "--format", "json"]);
    assert_eq!(code, 0);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["is_agentic"], true);
    assert!(result["frameworks"].as_array().unwrap().iter().any(|f| f == "LangChain"));
    assert_eq!(result["languages"][0], "py");
    assert!(result["keywords_matched"]["agentic_keywords"].is_array());
}

#[test]
fn test_classify_reads_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(agentmine_bin())
        .args(["classify", "-f", "json"])
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to run agentmine");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"The quick brown fox jumps over the lazy dog.")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["is_agentic"], false);
    assert_eq!(result["confidence"], 0.0);
}

#[test]
fn test_init_then_invalid_workers() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = agentmine(dir.path(), &["init"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("agentmine.toml"));
    assert!(dir.path().join("agentmine.toml").exists());

    let (code, _, stderr) = agentmine(dir.path(), &["mine", "--workers", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("workers must be at least 1"));
}
