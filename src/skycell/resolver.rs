//! Client for the remote skycell lookup form

use std::time::Duration;
use log::{debug, info};
use reqwest::blocking::{multipart, Client};
use reqwest::StatusCode;

use crate::config::{Config, LookupConfig};
use crate::coordinate::SkyPosition;
use crate::errors::{SkycellError, SkycellResult};
use super::candidate::{SkycellResolution, TileDimensions};
use super::selection::select_best;
use super::table_parser::parse_candidates;

/// Resolves sky positions to skycells through the lookup service
pub struct SkycellResolver {
    lookup: LookupConfig,
    tile: TileDimensions,
    timeout: Option<Duration>,
    client: Client,
}

impl SkycellResolver {
    /// Create a resolver for the given lookup endpoint and tile geometry
    pub fn new(lookup: LookupConfig, tile: TileDimensions) -> SkycellResult<Self> {
        // Requests block until the service answers
        let timeout: Option<Duration> = None;
        // The service hands out its session cookie on the first request
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(SkycellResolver { lookup, tile, timeout, client })
    }

    /// Create a resolver from the application configuration
    pub fn from_config(config: &Config) -> SkycellResult<Self> {
        Self::new(config.lookup.clone(), config.tile)
    }

    /// Request timeout of the lookup client, `None` when requests never time out
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Find the best skycell for a position
    ///
    /// Logs in, submits the position, parses the candidate table and picks
    /// the candidate farthest from the tile borders. Nothing is retried.
    pub fn resolve(&self, position: &SkyPosition) -> SkycellResult<SkycellResolution> {
        info!("Resolving skycell for {}", position);

        self.login()?;
        let body = self.submit(position)?;

        let candidates = parse_candidates(&body, &self.lookup.marker, &self.lookup.name_prefix)?;
        info!("Lookup returned {} candidate skycell(s)", candidates.len());

        let resolution = select_best(candidates, &self.tile, position.ra(), position.dec())?;
        info!("Best skycell: {} of {}", resolution.best, resolution.candidate_count);

        Ok(resolution)
    }

    fn login(&self) -> SkycellResult<()> {
        // Answers 401 while setting the session cookie, which is fine
        let response = self
            .client
            .post(&self.lookup.url)
            .basic_auth(&self.lookup.username, Some(&self.lookup.password))
            .send()?;
        debug!("Login to {} returned {}", self.lookup.url, response.status());
        Ok(())
    }

    fn submit(&self, position: &SkyPosition) -> SkycellResult<String> {
        let form = multipart::Form::new()
            .text("ra", position.ra().to_string())
            .text("dec", position.dec().to_string());

        let response = self
            .client
            .post(&self.lookup.url)
            .basic_auth(&self.lookup.username, Some(&self.lookup.password))
            .multipart(form)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!("Lookup returned {} with {} bytes", status, body.len());

        if status != StatusCode::OK {
            return Err(SkycellError::LookupError {
                url: self.lookup.url.clone(),
                ra: position.ra(),
                dec: position.dec(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
