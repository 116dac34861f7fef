use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linetrack")]
#[command(author, version, about)]
#[command(long_about = "Track layout tools for line-follower robots.\n\n\
    Converts a drawn track into a directed graph and solves for a valid\n\
    path from the start element to the end element, avoiding forbidden\n\
    segments.\n\n\
    Examples:\n  \
    linetrack graph track.json --pretty   Print the track graph as JSON\n  \
    linetrack analyze track.json          Print element statistics\n  \
    linetrack validate a.json b.yaml      Check tracks for a valid path")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a track to its graph representation
    Graph {
        /// Track file (JSON, or YAML by extension)
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Write the graph to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyze a track and print element statistics
    Analyze {
        /// Track file (JSON, or YAML by extension)
        file: PathBuf,

        /// Emit the analysis as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Check that tracks have a valid path from start to end
    Validate {
        /// Track files to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.format, defaults.color)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = crate::config::Config::load_or_default();
        if self.no_color || config.color_disabled() {
            colored::control::set_override(false);
        }

        match self.command {
            Commands::Graph {
                file,
                pretty,
                output,
            } => crate::commands::graph::run(&file, pretty, output.as_deref(), self.quiet, &config),
            Commands::Analyze { file, json } => crate::commands::analyze::run(&file, json),
            Commands::Validate { files } => crate::commands::validate::run(&files, self.quiet),
            Commands::Config { command } => crate::commands::config::run(command),
            Commands::Completion { shell } => {
                crate::commands::completion::run(shell);
                Ok(())
            }
        }
    }
}
