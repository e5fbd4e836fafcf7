//! Classify command - score one text against the learned vocabulary

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::pipeline::Pipeline;
use crate::reporters::{self, OutputFormat};

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            let bytes =
                std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Run the classify command
pub fn run(pipeline: &Pipeline, file: Option<&Path>, format: &str) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let text = read_input(file)?;
    let result = pipeline.classifier().classify(&text);
    println!("{}", reporters::report(&result, format)?);
    Ok(())
}
