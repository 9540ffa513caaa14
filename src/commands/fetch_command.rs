//! Full retrieval command
//!
//! Resolves the skycell, extracts the first archives inline and optionally
//! sends the rest to the cluster.

use clap::ArgMatches;
use log::info;

use crate::api::SkycellKit;
use crate::commands::command_traits::Command;
use crate::commands::sky_position_from_args;
use crate::config::Config;
use crate::coordinate::SkyPosition;
use crate::errors::{SkycellError, SkycellResult};
use crate::utils::logger::Logger;

/// Command running lookup, inline extraction and batch dispatch
pub struct FetchCommand<'a> {
    /// Position to retrieve images for
    position: SkyPosition,
    /// Number of archives extracted inline
    count: usize,
    /// Whether the remaining archives are submitted as batch jobs
    dispatch: bool,
    /// Library facade doing the work
    kit: SkycellKit<'a>,
}

impl<'a> FetchCommand<'a> {
    /// Create a new fetch command
    pub fn new(args: &ArgMatches, config: &Config, logger: &'a Logger) -> SkycellResult<Self> {
        let position = sky_position_from_args(args)?;
        info!("Position: {}", position);

        let count = match args.get_one::<String>("count") {
            Some(count_str) => count_str.parse::<usize>()
                .map_err(|_| SkycellError::GenericError(format!("Invalid archive count: {}", count_str)))?,
            None => 10,
        };
        info!("Inline archive count: {}", count);

        let dispatch = args.get_flag("dispatch");
        info!("Batch dispatch: {}", dispatch);

        Ok(FetchCommand {
            position,
            count,
            dispatch,
            kit: SkycellKit::with_logger(config.clone(), logger).show_progress(true),
        })
    }
}

impl<'a> Command for FetchCommand<'a> {
    fn execute(&self) -> SkycellResult<()> {
        let summary = self.kit.fetch(&self.position, self.count, self.dispatch)?;
        println!("skycell: {}", summary.resolution.skycell());
        Ok(())
    }
}
