//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod cli;
pub mod resolve_command;
pub mod fetch_command;
pub mod extract_command;

pub use command_traits::{Command, CommandFactory};
pub use cli::build_cli;
pub use resolve_command::ResolveCommand;
pub use fetch_command::FetchCommand;
pub use extract_command::ExtractCommand;

use clap::ArgMatches;
use log::info;
use std::path::PathBuf;

use crate::config::Config;
use crate::coordinate::SkyPosition;
use crate::errors::{SkycellError, SkycellResult};
use crate::utils::logger::Logger;

/// Position used when none is given on the command line
pub const DEFAULT_COORDINATE: &str = "12:30:49.42338230 +12:23:28.0438581";

/// Factory for creating command instances based on CLI arguments
pub struct SkycellCommandFactory;

impl SkycellCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SkycellCommandFactory
    }
}

impl Default for SkycellCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for SkycellCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SkycellResult<Box<dyn Command + 'a>> {
        let config = config_from_args(args)?;

        if args.get_one::<String>("archive").is_some() {
            Ok(Box::new(ExtractCommand::new(args, &config, logger)?))
        } else if args.get_flag("resolve-only") {
            Ok(Box::new(ResolveCommand::new(args, &config, logger)?))
        } else {
            // Default to the full lookup and extraction run
            Ok(Box::new(FetchCommand::new(args, &config, logger)?))
        }
    }
}

/// Load the configuration and apply command-line overrides
pub fn config_from_args(args: &ArgMatches) -> SkycellResult<Config> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(output) = args.get_one::<String>("output") {
        config.extract.output_dir = PathBuf::from(output);
    }
    if let Some(root) = args.get_one::<String>("storage-root") {
        config.storage.root = PathBuf::from(root);
    }

    Ok(config)
}

/// Read the sky position from `--ra`/`--dec` or `--coordinate`
pub fn sky_position_from_args(args: &ArgMatches) -> SkycellResult<SkyPosition> {
    match (args.get_one::<String>("ra"), args.get_one::<String>("dec")) {
        (Some(ra), Some(dec)) => {
            info!("Using decimal position ra={} dec={}", ra, dec);
            SkyPosition::parse(&format!("{},{}", ra, dec))
        }
        (None, None) => {
            let coordinate = args.get_one::<String>("coordinate")
                .map(String::as_str)
                .unwrap_or(DEFAULT_COORDINATE);
            SkyPosition::parse(coordinate)
        }
        _ => Err(SkycellError::InvalidCoordinate("--ra and --dec must be given together".to_string())),
    }
}
