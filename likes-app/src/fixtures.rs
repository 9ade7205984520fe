//! Liked content fixture data
//!
//! Catalog fetching is out of scope, so liked songs and playlists come from a
//! JSON document: the one compiled into the binary, or a file named by
//! the configuration.

use crate::config::Config;
use likes_common::LikedCollections;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, warn};

/// Embedded fixture data (compiled into the binary)
const EMBEDDED_FIXTURE: &str = include_str!("../fixtures/liked.json");

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn parse(json: &str) -> Result<LikedCollections, FixtureError> {
    Ok(serde_json::from_str(json)?)
}

pub fn embedded() -> Result<LikedCollections, FixtureError> {
    parse(EMBEDDED_FIXTURE)
}

pub fn load_from_path(path: &Path) -> Result<LikedCollections, FixtureError> {
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&json)
}

/// Load the configured fixture, falling back to the embedded data.
pub fn load(config: &Config) -> LikedCollections {
    if let Some(path) = &config.fixture_path {
        match load_from_path(path) {
            Ok(liked) => {
                info!("Loaded liked content from {}", path.display());
                return liked;
            }
            Err(e) => warn!("{}, falling back to embedded data", e),
        }
    }

    embedded().unwrap_or_else(|e| {
        error!("Embedded fixture is unusable: {}", e);
        LikedCollections::default()
    })
}
