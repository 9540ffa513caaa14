//! Command-line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

use super::DEFAULT_COORDINATE;

/// Build the argument parser of the main binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("skycellkit")
        .version("0.1")
        .author("Maurice Schilpp")
        .about("Find the survey skycell for a sky position and extract its images")
        .arg(
            Arg::new("coordinate")
                .long("coordinate")
                .help("Sky position as 'HH:MM:SS.s ±DD:MM:SS.s' or 'ra,dec' in degrees")
                .value_name("COORDINATE")
                .default_value(DEFAULT_COORDINATE),
        )
        .arg(
            Arg::new("ra")
                .long("ra")
                .help("Right ascension in decimal degrees (requires --dec)")
                .value_name("DEG")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("dec")
                .long("dec")
                .help("Declination in decimal degrees (requires --ra)")
                .value_name("DEG")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file overriding the built-in defaults")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Directory extracted files are written to")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("storage-root")
                .long("storage-root")
                .help("Root directory of the tarball store")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .help("Number of archives extracted inline")
                .value_name("N")
                .default_value("10"),
        )
        .arg(
            Arg::new("dispatch")
                .long("dispatch")
                .help("Submit the remaining archives as cluster batch jobs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("resolve-only")
                .long("resolve-only")
                .help("Only resolve and print the skycell")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("archive")
                .short('a')
                .long("archive")
                .help("Extract a single archive instead of resolving a position")
                .value_name("FILE")
                .required(false),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{config_from_args, sky_position_from_args};
    use crate::errors::SkycellError;
    use std::path::PathBuf;

    #[test]
    fn test_default_position() {
        let args = build_cli().get_matches_from(["skycellkit"]);
        let position = sky_position_from_args(&args).unwrap();
        assert!((position.ra() - 187.70593076).abs() < 1e-7);
    }

    #[test]
    fn test_decimal_position() {
        let args = build_cli().get_matches_from(["skycellkit", "--ra", "10.5", "--dec", "-20.25"]);
        let position = sky_position_from_args(&args).unwrap();
        assert_eq!(position.ra(), 10.5);
        assert_eq!(position.dec(), -20.25);
    }

    #[test]
    fn test_ra_without_dec() {
        let args = build_cli().get_matches_from(["skycellkit", "--ra", "10.5"]);
        assert!(matches!(sky_position_from_args(&args), Err(SkycellError::InvalidCoordinate(_))));
    }

    #[test]
    fn test_path_overrides() {
        let args = build_cli().get_matches_from(["skycellkit", "-o", "elsewhere", "--storage-root", "/scratch/yse"]);
        let config = config_from_args(&args).unwrap();
        assert_eq!(config.extract.output_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.storage.root, PathBuf::from("/scratch/yse"));
        assert_eq!(config.lookup.marker, "RINGS.V3");
    }
}
