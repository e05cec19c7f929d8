//! Game configuration loader.

use std::path::Path;

use tactics_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

const DEFAULT_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for game configuration from TOML files.
///
/// Missing keys fall back to [`GameConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.move_duration_ms == 0 {
            anyhow::bail!("move_duration_ms must be greater than zero");
        }
        if config.tile_size == 0 {
            anyhow::bail!("tile_size must be greater than zero");
        }

        tracing::debug!(
            move_duration_ms = config.move_duration_ms,
            tile_size = config.tile_size,
            "config loaded"
        );
        Ok(config)
    }

    /// Configuration shipped with the crate.
    pub fn load_default() -> LoadResult<GameConfig> {
        Self::parse(DEFAULT_CONFIG)
    }
}
