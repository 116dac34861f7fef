use clap::Parser;
use colored::Colorize;

mod cli;
mod commands;
mod config;
mod graph;
mod track;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli.run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
