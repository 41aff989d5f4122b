//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto [`ClientConfig`]. Pure data loading:
//! no validation and no defaults beyond "missing = empty". What an empty
//! value means is decided in [`super::wiring`].

use std::path::PathBuf;

use anyhow::Context;
use sg_core::ports::AppDirsPort;
use sg_core::ClientConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<ClientConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ClientConfig::from_toml(&toml_value)
}

/// Locate the config file in the app data directory and load it.
///
/// A missing file yields [`ClientConfig::with_system_defaults`]. A loaded
/// file without `[storage] data_dir` is rooted at the app data directory.
pub fn resolve_config(app_dirs: &dyn AppDirsPort) -> anyhow::Result<ClientConfig> {
    let dirs = app_dirs
        .get_app_dirs()
        .context("Failed to resolve app directories")?;
    let config_path = dirs.config_path();

    if !config_path.exists() {
        ::tracing::debug!(path = %config_path.display(), "No config file, using system defaults");
        return Ok(ClientConfig::with_system_defaults(dirs.app_data_root));
    }

    let mut config = load_config(config_path)?;
    if config.data_dir.as_os_str().is_empty() {
        config.data_dir = dirs.app_data_root;
    }
    Ok(config)
}
