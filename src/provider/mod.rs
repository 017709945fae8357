//! Roster sources.
//!
//! The view layer never loads data itself; it asks a [`RosterProvider`] for
//! a full [`Roster`] payload and swaps the record set wholesale. Providers
//! are object-safe so the application can hold `Box<dyn RosterProvider>`.

mod file;
mod sample;

pub use file::FileProvider;
pub use sample::SampleProvider;

use std::fmt;

use crate::model::Roster;

/// Errors a provider can surface while loading a roster.
#[derive(Debug)]
pub enum ProviderError {
    /// The underlying source could not be read.
    Io(std::io::Error),
    /// The source was read but is not a valid roster payload.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Io(e) => write!(f, "failed to read roster: {e}"),
            ProviderError::Parse(msg) => write!(f, "invalid roster payload: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Io(e) => Some(e),
            ProviderError::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(e: std::io::Error) -> Self {
        ProviderError::Io(e)
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::Parse(e.to_string())
    }
}

/// A source of roster payloads.
///
/// `load` may be called repeatedly (manual reload); each call returns a
/// complete snapshot, never a delta.
pub trait RosterProvider {
    fn load(&mut self) -> Result<Roster, ProviderError>;

    /// Human-readable source description for the status line and logs.
    fn describe(&self) -> String;
}
