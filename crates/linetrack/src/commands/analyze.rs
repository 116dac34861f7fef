use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::graph::analyze_track;
use crate::track::Track;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let track = Track::load(file)?;
    let analysis = analyze_track(&track);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{} {}", "Track:".bold(), track.name);
    println!("{} {}", "Elements:".bold(), analysis.element_count);
    for (kind, count) in &analysis.element_types {
        println!("  {:<16} {count}", kind.as_str());
    }

    if analysis.has_valid_path {
        println!(
            "{} {} ({} nodes)",
            "Path:".bold(),
            "found".green(),
            analysis.path_length
        );
    } else {
        println!("{} {}", "Path:".bold(), "not found".red());
    }

    Ok(())
}
