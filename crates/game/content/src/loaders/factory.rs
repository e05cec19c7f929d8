//! Content factory for building session inputs from data files.

use std::path::{Path, PathBuf};

use tactics_core::{GameConfig, Roster};

use crate::loaders::{ConfigLoader, LoadResult, PartyLoader};

/// Content factory that loads session data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── party.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the starting party from `party.ron`.
    pub fn load_party(&self) -> LoadResult<Roster> {
        let path = self.data_dir.join("party.ron");
        PartyLoader::load(&path)
    }

    /// Config and party together; fails on the first invalid file.
    pub fn load_session(&self) -> LoadResult<(GameConfig, Roster)> {
        Ok((self.load_config()?, self.load_party()?))
    }
}
