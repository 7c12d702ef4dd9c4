//! Reel command-line front end
//!
//! Parses text commands, runs them against a `reel_playback::LibrarySession`,
//! and renders the results as text or JSON.

pub mod config;
pub mod error;
pub mod parser;
pub mod render;
pub mod shell;

use config::ReelConfig;
use error::Result;
use reel_core::InMemoryCatalog;
use reel_playback::LibrarySession;

/// Catalog used when no catalog file is configured
pub const BUNDLED_CATALOG: &str = include_str!("../videos.txt");

/// Load the configured catalog, falling back to the bundled one
pub fn load_catalog(config: &ReelConfig) -> Result<InMemoryCatalog> {
    let catalog = match &config.catalog.path {
        Some(path) => InMemoryCatalog::load(path)?,
        None => {
            tracing::debug!("Using bundled catalog");
            InMemoryCatalog::parse(BUNDLED_CATALOG)?
        }
    };
    Ok(catalog)
}

/// Build a session from configuration
pub fn build_session(config: &ReelConfig) -> Result<LibrarySession> {
    let catalog = load_catalog(config)?;
    let session = match config.session.random_seed {
        Some(seed) => LibrarySession::with_seed(catalog, seed),
        None => LibrarySession::new(catalog),
    };
    Ok(session)
}
