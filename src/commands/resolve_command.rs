//! Skycell lookup command

use clap::ArgMatches;
use log::info;

use crate::api::SkycellKit;
use crate::commands::command_traits::Command;
use crate::commands::sky_position_from_args;
use crate::config::Config;
use crate::coordinate::SkyPosition;
use crate::errors::SkycellResult;
use crate::utils::logger::Logger;

/// Command that only resolves and prints the best skycell
pub struct ResolveCommand<'a> {
    position: SkyPosition,
    kit: SkycellKit<'a>,
}

impl<'a> ResolveCommand<'a> {
    pub fn new(args: &ArgMatches, config: &Config, logger: &'a Logger) -> SkycellResult<Self> {
        let position = sky_position_from_args(args)?;
        info!("Position: {}", position);

        Ok(ResolveCommand {
            position,
            kit: SkycellKit::with_logger(config.clone(), logger),
        })
    }
}

impl<'a> Command for ResolveCommand<'a> {
    fn execute(&self) -> SkycellResult<()> {
        let resolution = self.kit.resolve(&self.position)?;

        println!(
            "skycell: {} x={} y={} ({} candidate(s))",
            resolution.skycell(),
            resolution.best.x,
            resolution.best.y,
            resolution.candidate_count
        );
        Ok(())
    }
}
