use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::graph::track_to_graph;
use crate::track::Track;

struct Validation {
    file: PathBuf,
    outcome: Result<Option<Vec<String>>>,
}

fn validate_file(file: &Path) -> Result<Option<Vec<String>>> {
    let track = Track::load(file)?;
    Ok(track_to_graph(&track).valid_path)
}

/// Validate each file, in parallel, and report in input order.
pub fn run(files: &[PathBuf], quiet: bool) -> Result<()> {
    let validations: Vec<Validation> = files
        .par_iter()
        .map(|file| Validation {
            file: file.clone(),
            outcome: validate_file(file),
        })
        .collect();

    let mut failures = 0;
    for validation in &validations {
        match &validation.outcome {
            Ok(Some(path)) => {
                if !quiet {
                    println!(
                        "{} {} — Valid path found: {}",
                        "valid".green().bold(),
                        validation.file.display(),
                        path.join(" -> ")
                    );
                }
            }
            Ok(None) => {
                failures += 1;
                println!(
                    "{} {} — No valid path from start to end",
                    "no path".red().bold(),
                    validation.file.display()
                );
            }
            Err(err) => {
                failures += 1;
                println!(
                    "{} {} — {err:#}",
                    "error".red().bold(),
                    validation.file.display()
                );
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} track(s) failed validation", validations.len());
    }
    Ok(())
}
