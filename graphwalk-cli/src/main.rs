mod app;
mod commands;
mod output;

use anyhow::Context;
use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .context("failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    // Show graphwalk info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("graphwalk", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::List { path } => commands::list::run(path, &cli.global),
        Command::Neighbors { path, node } => commands::neighbors::run(path, node, &cli.global),
        Command::Edges { path } => commands::edges::run(path, &cli.global),
        Command::Path { path, from, to } => commands::path::run(path, from, to, &cli.global),
        Command::Reach { path, node } => commands::reach::run(path, node, &cli.global),
        Command::Dot { path, title } => commands::dot::run(path, title.as_deref(), &cli.global),
        Command::Demo { path } => commands::demo::run(path, &cli.global),
    }
}
