#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod args;
pub mod handlers;

use crate::args::{AppCommands, Cli};
use crate::handlers::generate::Target;
use crate::handlers::{apis, extensions, generate};

use anyhow::{Context, Result};
use clap::Parser;
use glzig::domain::config::{GeneratorConfig, LogConfig};
use glzig::kernel::config::load_config;
use glzig::registry::{ApiIndex, Registry};
use glzig_logger::{LevelFilter, Logger};
use std::io::{self, IsTerminal};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: GeneratorConfig =
        load_config(cli.config.as_ref()).context("Configuration is malformed")?;
    let _log = init_logger(&config.log, cli.verbose)?;

    let registry_path = cli.registry.as_ref().unwrap_or(&config.registry.path);
    let registry = Registry::from_path(registry_path)
        .with_context(|| format!("Failed to load registry {}", registry_path.display()))?;
    let index = ApiIndex::build(&registry);

    match cli.command {
        AppCommands::Apis { json } => apis::list_apis(&index, json)?,
        AppCommands::Extensions { api } => extensions::list_extensions(&index, &api)?,
        AppCommands::Generate(args) => {
            let target = if args.stdout {
                Target::Stdout
            } else {
                Target::File(args.output.clone().unwrap_or_else(|| config.output.path.clone()))
            };
            generate::generate(&registry, &index, args.selection(&config.selection), &target)?;
        },
    }

    Ok(())
}

fn init_logger(log: &LogConfig, verbose: u8) -> Result<Logger> {
    let level = log
        .level
        .parse::<LevelFilter>()
        .with_context(|| format!("Invalid log level '{}'", log.level))?;

    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(level)
        .verbosity(verbose)
        .ansi(io::stderr().is_terminal());

    let logger = match &log.path {
        Some(path) => {
            let builder = builder.path(path);
            if log.json { builder.json().init()? } else { builder.init()? }
        },
        None => builder.init()?,
    };

    Ok(logger)
}
