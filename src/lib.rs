//! agentmine - keyword mining for agentic-AI frameworks
//!
//! Mines agent-framework repositories for lexical signals (imports, class
//! and function names, README prose, config keys), aggregates them into
//! frequency-ranked vocabularies, and compiles those vocabularies into
//! regex classifiers that flag agentic code and name the framework in use.
//!
//! - [`mining`] - identifier tokenizer and per-surface extractors
//! - [`keywords`] - global and per-framework keyword tables
//! - [`patterns`] - learned and fixed regex matchers
//! - [`classify`] - the scorer and its vocabulary
//! - [`acquire`] - cloning and the bounded worker pool
//! - [`pipeline`] - stage orchestration over the output directory

pub mod acquire;
pub mod classify;
pub mod cli;
pub mod config;
pub mod keywords;
pub mod mining;
pub mod models;
pub mod patterns;
pub mod pipeline;
pub mod reporters;
