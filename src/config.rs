//! Runtime configuration
//!
//! Lookup credentials, tile dimensions, storage layout and batch settings are
//! read from TOML. The `skycellkit.toml` shipped with the crate is embedded as
//! the default; a user file only needs the keys it wants to change.

use std::fs;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use log::debug;

use crate::errors::{SkycellError, SkycellResult};
use crate::skycell::TileDimensions;

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_CONFIG: Config = {
        let content = include_str!("../skycellkit.toml");
        Config::empty().merged_with_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse default configuration: {}", e);
            Config::empty()
        })
    };
}

/// Settings for the remote skycell lookup form
#[derive(Debug, Clone, PartialEq)]
pub struct LookupConfig {
    /// URL of the lookup form
    pub url: String,
    /// Basic-auth user name
    pub username: String,
    /// Basic-auth password
    pub password: String,
    /// Text of the table cell that precedes each candidate row
    pub marker: String,
    /// Prefix removed from candidate names
    pub name_prefix: String,
}

/// Where the survey tarballs live
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    /// Root directory of the tarball store
    pub root: PathBuf,
    /// Glob templates with `{root}` and `{skycell}` placeholders
    pub patterns: Vec<String>,
}

/// Inline extraction settings
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    pub output_dir: PathBuf,
}

/// Cluster batch-job settings
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Directory the job scripts are written to
    pub script_dir: PathBuf,
    /// File name prefix of the job scripts
    pub script_prefix: String,
    /// Queue submission command (e.g. `sbatch`)
    pub submit_command: String,
    /// Command the job runs to extract one archive
    pub extractor_command: String,
    /// Script header lines (shebang and queue directives)
    pub header: Vec<String>,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub lookup: LookupConfig,
    pub tile: TileDimensions,
    pub storage: StorageConfig,
    pub extract: ExtractConfig,
    pub batch: BatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl Config {
    fn empty() -> Self {
        Config {
            lookup: LookupConfig {
                url: String::new(),
                username: String::new(),
                password: String::new(),
                marker: String::new(),
                name_prefix: String::new(),
            },
            tile: TileDimensions::new(0.0, 0.0),
            storage: StorageConfig {
                root: PathBuf::new(),
                patterns: Vec::new(),
            },
            extract: ExtractConfig {
                output_dir: PathBuf::new(),
            },
            batch: BatchConfig {
                script_dir: PathBuf::new(),
                script_prefix: String::new(),
                submit_command: String::new(),
                extractor_command: String::new(),
                header: Vec::new(),
            },
        }
    }

    /// Parse a configuration from a TOML string, starting from the defaults
    pub fn from_str(content: &str) -> SkycellResult<Self> {
        Config::default().merged_with_str(content)
    }

    /// Load a configuration file, starting from the defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> SkycellResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| {
            SkycellError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
        })?;

        Self::from_str(&contents)
    }

    /// Override the keys present in `content`
    fn merged_with_str(mut self, content: &str) -> SkycellResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(SkycellError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        if let Some(lookup) = section(&toml_value, "lookup")? {
            set_string(lookup, "lookup", "url", &mut self.lookup.url)?;
            set_string(lookup, "lookup", "username", &mut self.lookup.username)?;
            set_string(lookup, "lookup", "password", &mut self.lookup.password)?;
            set_string(lookup, "lookup", "marker", &mut self.lookup.marker)?;
            set_string(lookup, "lookup", "name_prefix", &mut self.lookup.name_prefix)?;
        }

        if let Some(tile) = section(&toml_value, "tile")? {
            set_number(tile, "tile", "width", &mut self.tile.width)?;
            set_number(tile, "tile", "height", &mut self.tile.height)?;
        }

        if let Some(storage) = section(&toml_value, "storage")? {
            set_path(storage, "storage", "root", &mut self.storage.root)?;
            set_string_list(storage, "storage", "patterns", &mut self.storage.patterns)?;
        }

        if let Some(extract) = section(&toml_value, "extract")? {
            set_path(extract, "extract", "output_dir", &mut self.extract.output_dir)?;
        }

        if let Some(batch) = section(&toml_value, "batch")? {
            set_path(batch, "batch", "script_dir", &mut self.batch.script_dir)?;
            set_string(batch, "batch", "script_prefix", &mut self.batch.script_prefix)?;
            set_string(batch, "batch", "submit_command", &mut self.batch.submit_command)?;
            set_string(batch, "batch", "extractor_command", &mut self.batch.extractor_command)?;
            set_string_list(batch, "batch", "header", &mut self.batch.header)?;
        }

        Ok(self)
    }
}

fn section<'a>(value: &'a toml::Value, name: &str) -> SkycellResult<Option<&'a toml::value::Table>> {
    match value.get(name) {
        None => Ok(None),
        Some(v) => v
            .as_table()
            .map(Some)
            .ok_or_else(|| SkycellError::ConfigError(format!("[{}] must be a table", name))),
    }
}

fn type_error(section: &str, key: &str, expected: &str) -> SkycellError {
    SkycellError::ConfigError(format!("{}.{} must be {}", section, key, expected))
}

fn set_string(table: &toml::value::Table, sec: &str, key: &str, target: &mut String) -> SkycellResult<()> {
    if let Some(v) = table.get(key) {
        *target = v.as_str().ok_or_else(|| type_error(sec, key, "a string"))?.to_string();
    }
    Ok(())
}

fn set_path(table: &toml::value::Table, sec: &str, key: &str, target: &mut PathBuf) -> SkycellResult<()> {
    if let Some(v) = table.get(key) {
        *target = PathBuf::from(v.as_str().ok_or_else(|| type_error(sec, key, "a path string"))?);
    }
    Ok(())
}

fn set_number(table: &toml::value::Table, sec: &str, key: &str, target: &mut f64) -> SkycellResult<()> {
    if let Some(v) = table.get(key) {
        *target = match v {
            toml::Value::Integer(i) => *i as f64,
            toml::Value::Float(f) => *f,
            _ => return Err(type_error(sec, key, "a number")),
        };
    }
    Ok(())
}

fn set_string_list(table: &toml::value::Table, sec: &str, key: &str, target: &mut Vec<String>) -> SkycellResult<()> {
    if let Some(v) = table.get(key) {
        let items = v.as_array().ok_or_else(|| type_error(sec, key, "an array of strings"))?;
        *target = items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| type_error(sec, key, "an array of strings"))
            })
            .collect::<SkycellResult<Vec<_>>>()?;
    }
    Ok(())
}
