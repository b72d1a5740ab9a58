#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{check, lookup};
use crate::models::args::{Cli, Command};

use anyhow::Result;
use clap::Parser;
use ordum::domain::config::OrdumConfig;
use ordum::kernel::config::load_config;
use ordum::logger::{LevelFilter, init_from_config};
use ordum::Registry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config: OrdumConfig = load_config(cli.config.as_deref())?;
    let _logger = init_from_config(env!("CARGO_BIN_NAME"), &config.logging, verbosity(cli.verbose))?;

    config.registry.catalogs.extend(cli.catalogs);
    // `check` builds every enumeration itself and reports each one.
    if matches!(cli.command, Command::Check) {
        config.registry.preload = false;
    }

    let registry = Registry::new();
    ordum::init(&config, &registry)?;

    match cli.command {
        Command::Types => lookup::types(&registry),
        Command::List { type_id } => lookup::list(&registry, &type_id)?,
        Command::Name { type_id, name } => lookup::by_name(&registry, &type_id, &name)?,
        Command::Value { type_id, value } => lookup::by_value(&registry, &type_id, &value)?,
        Command::Ordinal { type_id, ordinal } => {
            lookup::by_ordinal(&registry, &type_id, ordinal)?;
        },
        Command::Check => check::check(&registry)?,
    }

    Ok(())
}

const fn verbosity(count: u8) -> Option<LevelFilter> {
    match count {
        0 => None,
        1 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    }
}
