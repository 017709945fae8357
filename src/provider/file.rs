//! JSON file roster source.

use std::path::PathBuf;

use tracing::debug;

use crate::model::Roster;

use super::{ProviderError, RosterProvider};

/// Loads a roster from a JSON file on every `load` call, so a manual reload
/// picks up external edits.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterProvider for FileProvider {
    fn load(&mut self) -> Result<Roster, ProviderError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let roster: Roster = serde_json::from_str(&raw)?;
        debug!(
            path = %self.path.display(),
            members = roster.members.len(),
            "loaded roster file"
        );
        Ok(roster)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
