//! CLI command definitions and handlers

mod classify;
mod init;
mod stages;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{load_config_file, load_project_config, ProjectConfig};
use crate::pipeline::Pipeline;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// agentmine - keyword mining and regex classifiers for agent frameworks
#[derive(Parser, Debug)]
#[command(name = "agentmine")]
#[command(
    version,
    about = "Mine agent-framework repositories for keywords and compile them into regex classifiers",
    after_help = "\
Examples:
  agentmine init                       Write an example agentmine.toml
  agentmine run                        Mine, build vocabularies and export patterns
  agentmine mine --workers 4           Clone and analyze configured providers
  agentmine classify notes.md          Classify a file
  cat app.py | agentmine classify -f json"
)]
pub struct Cli {
    /// Config file (default: agentmine.toml or .agentminerc.json in the current directory)
    #[arg(long, global = true, env = "AGENTMINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for every output file
    #[arg(long, global = true, env = "AGENTMINE_OUT", default_value = ".")]
    pub out: PathBuf,

    /// Concurrent clone+scan workers (1-64), overrides the config file
    #[arg(long, global = true, env = "AGENTMINE_WORKERS", value_parser = parse_workers)]
    pub workers: Option<usize>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example agentmine.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Clone and analyze every configured provider
    Mine,

    /// Build the global semantic keyword table from mined profiles
    Keywords,

    /// Build per-framework keyword tables from mined profiles
    Frameworks,

    /// Export the compiled regex patterns as JSON
    Export,

    /// Classify a file, or stdin when no file is given
    Classify {
        /// File to classify
        file: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Mine, then build keywords, frameworks and patterns
    Run,
}

/// Explicit config file if given, otherwise discovery in the current directory.
fn resolve_config(cli: &Cli) -> Result<ProjectConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => load_project_config(Path::new(".")),
    };
    if let Some(workers) = cli.workers {
        config.mining.workers = workers;
    }
    Ok(config)
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    if let Commands::Init { path, force } = &cli.command {
        return init::run(path, *force);
    }

    let config = resolve_config(&cli)?;
    let pipeline = Pipeline::new(config, &cli.out);

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Mine => stages::mine(&pipeline),
        Commands::Keywords => stages::keywords(&pipeline),
        Commands::Frameworks => stages::frameworks(&pipeline),
        Commands::Export => stages::export(&pipeline),
        Commands::Classify { file, format } => classify::run(&pipeline, file.as_deref(), &format),
        Commands::Run => stages::run_all(&pipeline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workers_bounds() {
        assert_eq!(parse_workers("6"), Ok(6));
        assert!(parse_workers("0").is_err());
        assert!(parse_workers("65").is_err());
        assert!(parse_workers("many").is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["agentmine", "mine", "--workers", "3", "--out", "results"]).unwrap();
        assert_eq!(cli.workers, Some(3));
        assert_eq!(cli.out, PathBuf::from("results"));
        assert!(matches!(cli.command, Commands::Mine));
    }

    #[test]
    fn test_classify_args() {
        let cli = Cli::try_parse_from(["agentmine", "classify", "notes.md", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Classify { file, format } => {
                assert_eq!(file, Some(PathBuf::from("notes.md")));
                assert_eq!(format, "json");
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Cli::try_parse_from(["agentmine", "classify", "-f", "sarif"]).is_err());
    }

    #[test]
    fn test_workers_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.toml");
        std::fs::write(&config_path, "[mining]\nworkers = 2\n").unwrap();
        let path_str = config_path.to_str().unwrap();

        let cli = Cli::try_parse_from(["agentmine", "--config", path_str, "mine"]).unwrap();
        assert_eq!(resolve_config(&cli).unwrap().mining.workers, 2);

        let cli = Cli::try_parse_from(["agentmine", "--config", path_str, "--workers", "9", "mine"]).unwrap();
        assert_eq!(resolve_config(&cli).unwrap().mining.workers, 9);
    }
}
