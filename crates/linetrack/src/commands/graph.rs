use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::graph::track_to_graph;
use crate::track::Track;

pub fn run(
    file: &Path,
    pretty: bool,
    output: Option<&Path>,
    quiet: bool,
    config: &Config,
) -> Result<()> {
    let track = Track::load(file)?;
    let graph = track_to_graph(&track);

    let pretty = pretty || config.pretty_default();
    let json = if pretty {
        serde_json::to_string_pretty(&graph)?
    } else {
        serde_json::to_string(&graph)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !quiet {
                eprintln!("Wrote graph for '{}' to {}", track.name, path.display());
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}
