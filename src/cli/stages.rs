//! Pipeline stage commands: mine, keywords, frameworks, export, run

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::acquire::GitCliCloner;
use crate::pipeline::Pipeline;

fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .expect("valid template")
        .progress_chars("█▓▒░  ")
}

pub fn mine(pipeline: &Pipeline) -> Result<()> {
    let providers = pipeline.config().providers.len();
    if providers == 0 {
        println!(
            "{} No providers configured. Run {} to write an example config.",
            style("!").yellow().bold(),
            style("agentmine init").cyan()
        );
    }

    let bar = ProgressBar::new(providers as u64);
    bar.set_style(create_bar_style());
    let stats = pipeline.mine(&GitCliCloner, |name, _| {
        bar.set_message(name.to_string());
        bar.inc(1);
    })?;
    bar.finish_and_clear();

    let paths = pipeline.paths();
    println!(
        "{} Mined {} providers ({} failed)",
        style("✓").green(),
        style(stats.mined).cyan(),
        style(stats.failed).cyan()
    );
    println!("  {}", paths.profiles.display());
    println!("  {}", paths.summary_csv.display());
    if stats.failed > 0 {
        println!(
            "  {} {}",
            paths.failure_log.display(),
            style("(see for clone errors)").dim()
        );
    }
    Ok(())
}

pub fn keywords(pipeline: &Pipeline) -> Result<()> {
    let keywords = pipeline.build_keywords()?;
    println!(
        "{} {} semantic keywords -> {}",
        style("✓").green(),
        style(keywords.semantic_keywords.len()).cyan(),
        pipeline.paths().semantic_keywords.display()
    );
    Ok(())
}

pub fn frameworks(pipeline: &Pipeline) -> Result<()> {
    let frameworks = pipeline.build_frameworks()?;
    println!(
        "{} Keywords for {} frameworks -> {}",
        style("✓").green(),
        style(frameworks.len()).cyan(),
        pipeline.paths().framework_keywords.display()
    );
    for (name, keywords) in &frameworks {
        println!("  {:<16} {}", name, style(keywords.len()).dim());
    }
    Ok(())
}

pub fn export(pipeline: &Pipeline) -> Result<()> {
    let map = pipeline.export_patterns()?;
    println!(
        "{} {} patterns -> {}",
        style("✓").green(),
        style(map.len()).cyan(),
        pipeline.paths().regex_patterns.display()
    );
    Ok(())
}

pub fn run_all(pipeline: &Pipeline) -> Result<()> {
    mine(pipeline)?;
    keywords(pipeline)?;
    frameworks(pipeline)?;
    export(pipeline)
}
