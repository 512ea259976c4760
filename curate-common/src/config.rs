//! Configuration loading and repository database resolution
//!
//! Priority order for the database path:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)

use crate::{Error, Result};
use std::path::PathBuf;

/// Resolve the repository database path following the priority order above.
pub fn resolve_database_path(cli_arg: Option<&str>, env_var_name: &str) -> Result<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Ok(PathBuf::from(path));
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(database) = config.get("database").and_then(|v| v.as_str()) {
                    tracing::debug!("Database path loaded from {}", config_path.display());
                    return Ok(PathBuf::from(database));
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    Ok(default_database_path())
}

/// Get the configuration file path for the platform
///
/// Linux: `~/.config/curate/config.toml`, then `/etc/curate/config.toml`.
/// macOS/Windows: the platform config directory under `curate/`.
fn locate_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        if let Some(path) = dirs::config_dir().map(|d| d.join("curate").join("config.toml")) {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/curate/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let path = dirs::config_dir()
        .map(|d| d.join("curate").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}

/// OS-dependent default database location
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("curate").join("repository.db"))
        .unwrap_or_else(|| PathBuf::from("repository.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins() {
        let path = resolve_database_path(Some("/tmp/explicit.db"), "CURATE_TEST_UNSET").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/explicit.db"));
    }

    #[test]
    fn environment_variable_used_when_no_cli_arg() {
        std::env::set_var("CURATE_TEST_DB_PATH", "/tmp/from-env.db");
        let path = resolve_database_path(None, "CURATE_TEST_DB_PATH").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/from-env.db"));
        std::env::remove_var("CURATE_TEST_DB_PATH");
    }

    #[test]
    fn fallback_is_not_empty() {
        let path = default_database_path();
        assert!(path.to_string_lossy().ends_with("repository.db"));
    }
}
