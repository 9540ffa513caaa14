//! Single-archive extraction command

use clap::ArgMatches;
use log::info;
use std::path::PathBuf;

use crate::api::SkycellKit;
use crate::commands::command_traits::Command;
use crate::config::Config;
use crate::errors::{SkycellError, SkycellResult};
use crate::utils::logger::Logger;

/// Command for extracting the image, weight and mask members of one archive
pub struct ExtractCommand<'a> {
    /// Archive to extract
    archive: PathBuf,
    /// Library facade doing the work
    kit: SkycellKit<'a>,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// Members go to the configured output directory, which `--output`
    /// overrides.
    pub fn new(args: &ArgMatches, config: &Config, logger: &'a Logger) -> SkycellResult<Self> {
        let archive = args.get_one::<String>("archive")
            .map(PathBuf::from)
            .ok_or_else(|| SkycellError::GenericError("Missing archive path".to_string()))?;
        info!("Archive: {}", archive.display());
        info!("Output directory: {}", config.extract.output_dir.display());

        Ok(ExtractCommand {
            archive,
            kit: SkycellKit::with_logger(config.clone(), logger),
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> SkycellResult<()> {
        let output_dir = &self.kit.config().extract.output_dir;
        let extracted = self.kit.extract(&self.archive, output_dir)?;

        for member in &extracted {
            println!("{}", output_dir.join(member).display());
        }
        Ok(())
    }
}
