//! CLI subcommands.

pub mod config;
pub mod process;
pub mod skills;

use std::path::Path;

use skilllens_core::SkillLensConfig;

/// Load the config file given with `--config`, or the defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<SkillLensConfig> {
    match config_path {
        Some(path) => SkillLensConfig::from_file(Path::new(path))
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path, e)),
        None => Ok(SkillLensConfig::default()),
    }
}
