//! End-to-end pipeline tests through the library API
//!
//! Remote providers go through an in-test cloner that writes fixture repos,
//! so acquisition, scanning, aggregation and classification all run without
//! network access.

use agentmine::acquire::{AcquireError, Cloner};
use agentmine::classify::Classifier;
use agentmine::config::{ProjectConfig, ProviderSource};
use agentmine::pipeline::Pipeline;
use std::path::Path;
use std::time::Duration;

struct FixtureCloner;

impl Cloner for FixtureCloner {
    fn clone_into(&self, url: &str, dest: &Path, _timeout: Duration) -> Result<(), AcquireError> {
        std::fs::create_dir_all(dest)?;
        let (file, code) = match url.rsplit('/').next() {
            Some("crewai") => (
                "crew.py",
                "from crewai import Agent, Crew, Task\n\nclass ResearchCrew:\n    def kickoff_research(self):\n        self.crew.kickoff()\n",
            ),
            Some("autogen") => (
                "chat.ts",
                "import autogen\nclass GroupChatManager {}\nfunction userProxyReply() { return agent.reply(); }\n",
            ),
            _ => {
                return Err(AcquireError::CloneFailed {
                    status: "exit status: 128".into(),
                    stderr: "not found".into(),
                })
            }
        };
        std::fs::write(dest.join(file), code)?;
        Ok(())
    }
}

fn remote(url: &str) -> ProviderSource {
    ProviderSource {
        url: Some(url.to_string()),
        ..ProviderSource::default()
    }
}

#[test]
fn test_learned_vocabulary_drives_classification() {
    let mut config = ProjectConfig::default();
    config.providers.insert("CrewAI".into(), remote("https://example.test/crewai"));
    config.providers.insert("AutoGen".into(), remote("https://example.test/autogen"));
    config.providers.insert("Missing".into(), remote("https://example.test/missing"));

    let out = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(config, out.path());

    let stats = pipeline.mine(&FixtureCloner, |_, _| {}).unwrap();
    assert_eq!(stats.mined, 2);
    assert_eq!(stats.failed, 1);

    let doc = pipeline.load_profiles().unwrap();
    // signals come from imports alone here
    assert_eq!(doc["CrewAI"].framework_signals.frameworks, vec!["CrewAI"]);
    assert_eq!(doc["AutoGen"].framework_signals.frameworks, vec!["AutoGen"]);

    let keywords = pipeline.build_keywords().unwrap();
    assert!(keywords.tokens().any(|t| t == "research"));
    assert!(keywords.tokens().all(|t| t.len() > 2));

    let frameworks = pipeline.build_frameworks().unwrap();
    assert!(frameworks["CrewAI"].contains(&"researchcrew".to_string()));
    assert!(frameworks["AutoGen"].contains(&"groupchatmanager".to_string()));
    for list in frameworks.values() {
        assert!(list.iter().all(|k| k.len() > 2 && k != "task" && k != "tool"));
    }

    let classifier: Classifier = pipeline.classifier();
    let result = classifier.classify("We subclass GroupChatManager and call userproxyreply.");
    assert!(result.is_agentic);
    assert!(result.frameworks.contains("AutoGen"));
    assert!(!result.frameworks.contains("CrewAI"));

    let map = pipeline.export_patterns().unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys[0], "core_agentic");
    assert!(keys.contains(&"framework_crewai"));
    assert_eq!(keys[keys.len() - 1], "languages");

    let log = std::fs::read_to_string(&pipeline.paths().failure_log).unwrap();
    assert!(log.contains("[Missing] https://example.test/missing"));
    assert!(log.contains("not found"));
}

#[test]
fn test_scratch_checkouts_are_removed() {
    struct RecordingCloner(std::sync::Mutex<Vec<std::path::PathBuf>>);

    impl Cloner for RecordingCloner {
        fn clone_into(&self, _url: &str, dest: &Path, _timeout: Duration) -> Result<(), AcquireError> {
            self.0.lock().unwrap().push(dest.to_path_buf());
            std::fs::create_dir_all(dest)?;
            std::fs::write(dest.join("a.py"), "import os\n")?;
            Err(AcquireError::Timeout { secs: 1 })
        }
    }

    let mut config = ProjectConfig::default();
    config.providers.insert("Slow".into(), remote("https://example.test/slow"));
    let out = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(config, out.path());

    let cloner = RecordingCloner(std::sync::Mutex::new(Vec::new()));
    let stats = pipeline.mine(&cloner, |_, _| {}).unwrap();
    assert_eq!(stats.failed, 1);

    let dests = cloner.0.lock().unwrap();
    assert_eq!(dests.len(), 1);
    assert!(!dests[0].exists());
}
