//! Rate sources.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SourceError;
use crate::snapshot::RateSnapshot;

/// Supplies the current zones and methods.
///
/// Implementations decide refresh cadence and caching; the resolver only
/// ever sees the returned snapshot.
pub trait RateSource {
    /// Load a snapshot.
    fn load(&self) -> Result<RateSnapshot, SourceError>;

    /// Human-readable name for logs.
    fn name(&self) -> &str;
}

/// Serialization format of a rate document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateFormat {
    Json,
    Toml,
}

impl RateFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(RateFormat::Json),
            Some("toml") => Ok(RateFormat::Toml),
            _ => Err(SourceError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a document into a snapshot.
    pub fn parse(&self, content: &str) -> Result<RateSnapshot, SourceError> {
        let snapshot = match self {
            RateFormat::Json => serde_json::from_str(content)?,
            RateFormat::Toml => toml::from_str(content)?,
        };
        Ok(snapshot)
    }
}

/// Parse, validate and log a rate document.
pub fn parse_snapshot(content: &str, format: RateFormat) -> Result<RateSnapshot, SourceError> {
    let snapshot = format.parse(content)?;
    snapshot.validate()?;

    for overlap in snapshot.overlapping_postal_codes() {
        if let Some(winner) = overlap.winner() {
            warn!(
                postal_code = %overlap.postal_code,
                winner = %winner,
                zones = overlap.zones.len(),
                "postal code listed by several zones"
            );
        }
    }

    debug!(
        zones = snapshot.zones.len(),
        methods = snapshot.methods.len(),
        "loaded rate snapshot"
    );
    Ok(snapshot)
}

/// A fixed, in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticRateSource {
    snapshot: RateSnapshot,
}

impl StaticRateSource {
    pub fn new(snapshot: RateSnapshot) -> Self {
        Self { snapshot }
    }
}

impl RateSource for StaticRateSource {
    fn load(&self) -> Result<RateSnapshot, SourceError> {
        Ok(self.snapshot.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Reads a JSON or TOML rate document from disk on every load.
#[derive(Debug, Clone)]
pub struct FileRateSource {
    path: PathBuf,
    name: String,
}

impl FileRateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RateSource for FileRateSource {
    fn load(&self) -> Result<RateSnapshot, SourceError> {
        let format = RateFormat::from_path(&self.path)?;
        let content = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.name.clone(),
            source,
        })?;
        parse_snapshot(&content, format)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
