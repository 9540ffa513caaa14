//! Extract the image, weight and mask members of one tarball.
//!
//! This is the command batch jobs run; logs go to stderr so they end up in
//! the job's log file.

use clap::{Arg, Command as ClapCommand};
use log::{error, info};
use std::process;

use skycellkit::archive::SelectiveExtractor;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = ClapCommand::new("get_tarball")
        .version("0.1")
        .about("Extract image, weight and mask files from a survey tarball")
        .arg(
            Arg::new("archive")
                .help("Tarball to extract")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("outdir")
                .help("Directory to extract into")
                .required(true)
                .index(2),
        )
        .get_matches();

    // Both are required positionals
    let (Some(archive), Some(outdir)) = (
        matches.get_one::<String>("archive"),
        matches.get_one::<String>("outdir"),
    ) else {
        process::exit(2);
    };

    match SelectiveExtractor::new().extract(archive, outdir) {
        Ok(extracted) => info!("Extracted {} file(s) from {}", extracted.len(), archive),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
