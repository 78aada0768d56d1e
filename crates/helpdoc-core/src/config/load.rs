//! Configuration loading from files and environment (immutable layering)

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::debug;

use super::types::{Config, ConfigLayer, RelatedLinksMode};
use crate::{Error, Result};

const PROJECT_CONFIG_FILE: &str = ".helpdoc.toml";

/// Load configuration from all sources with hierarchy.
///
/// `explicit` replaces the project config file and must exist. `overrides`
/// carries the CLI flags and is applied last.
///
/// # Errors
///
/// Returns error if:
/// - A config file cannot be read or is malformed TOML
/// - An environment variable holds an invalid value
pub fn load_config(explicit: Option<&Path>, overrides: ConfigLayer) -> Result<Config> {
    let config = Config::default();

    let config = match global_config_path() {
        Some(path) if path.is_file() => config.merge(load_toml_file(&path)?),
        _ => config,
    };

    let config = match explicit {
        Some(path) => config.merge(load_toml_file(path)?),
        None => {
            let path = project_config_path()?;
            if path.is_file() {
                config.merge(load_toml_file(&path)?)
            } else {
                config
            }
        }
    };

    let config = config.apply_env_vars()?.merge(overrides);
    debug!(?config, "configuration resolved");
    Ok(config)
}

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Get path to global config file
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "helpdoc")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

/// Get path to project config file
///
/// # Errors
///
/// Returns error if current directory cannot be determined
pub fn project_config_path() -> Result<PathBuf> {
    std::env::current_dir()
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .map_err(|e| Error::Io(format!("Failed to get current directory: {e}")))
}

/// Load a TOML file into a config layer
///
/// # Errors
///
/// Returns error if:
/// - Path is a directory instead of a file
/// - File cannot be read
/// - TOML is malformed
pub fn load_toml_file(path: &Path) -> Result<ConfigLayer> {
    if path.is_dir() {
        return Err(Error::Io(format!(
            "Config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("Failed to read config file {}: {e}", path.display())))?;

    toml::from_str(&content).map_err(|e| {
        Error::InvalidConfig(format!(
            "Failed to parse config file {}: {e}",
            path.display()
        ))
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// ENVIRONMENT VARIABLE OVERRIDES
// ═══════════════════════════════════════════════════════════════════════════

impl Config {
    /// Apply `HELPDOC_*` environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns error if environment variable values are invalid
    pub fn apply_env_vars(self) -> Result<Self> {
        self.apply_env_with(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Apply overrides read through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns error if a value is invalid
    pub fn apply_env_with<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let asset_dir = match lookup("HELPDOC_ASSET_DIR") {
            Some(value) if value.is_empty() => {
                return Err(Error::InvalidConfig(
                    "HELPDOC_ASSET_DIR cannot be empty - unset the variable or provide a directory"
                        .into(),
                ))
            }
            value => value.map(PathBuf::from),
        };

        let module_paths = lookup("HELPDOC_MODULE_PATH").map(|value| {
            std::env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        });

        let related_links = lookup("HELPDOC_RELATED_LINKS")
            .map(|value| {
                RelatedLinksMode::from_str(&value).map_err(|_| {
                    Error::InvalidConfig(format!(
                        "Invalid HELPDOC_RELATED_LINKS value '{value}' (expected 'concatenated' or 'separate')"
                    ))
                })
            })
            .transpose()?;

        Ok(self.merge(ConfigLayer {
            asset_dir,
            module_paths,
            related_links,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let joined = std::env::join_paths(["one", "two"])
            .map_err(|e| Error::Io(e.to_string()))?
            .to_string_lossy()
            .into_owned();
        let config = Config::default().apply_env_with(env(&[
            ("HELPDOC_ASSET_DIR", "static"),
            ("HELPDOC_MODULE_PATH", joined.as_str()),
            ("HELPDOC_RELATED_LINKS", "separate"),
        ]))?;
        assert_eq!(config.asset_dir, PathBuf::from("static"));
        assert_eq!(
            config.module_paths,
            vec![PathBuf::from("one"), PathBuf::from("two")]
        );
        assert_eq!(config.related_links, RelatedLinksMode::Separate);
        Ok(())
    }

    #[test]
    fn test_env_absent_keeps_config() -> Result<()> {
        let config = Config::default().apply_env_with(env(&[]))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_env_empty_asset_dir_rejected() {
        let result = Config::default().apply_env_with(env(&[("HELPDOC_ASSET_DIR", "")]));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_env_bad_related_links_rejected() {
        let result = Config::default().apply_env_with(env(&[("HELPDOC_RELATED_LINKS", "joined")]));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_load_toml_file_directory_rejected() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let result = load_toml_file(dir.path());
        assert!(matches!(result, Err(Error::Io(_))));
        Ok(())
    }

    #[test]
    fn test_load_toml_file_malformed() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "asset_dir = [")?;
        assert!(matches!(load_toml_file(&path), Err(Error::InvalidConfig(_))));
        Ok(())
    }

    #[test]
    fn test_explicit_config_file_applies() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("helpdoc.toml");
        std::fs::write(&path, "related_links = \"separate\"\n")?;
        let config = load_config(Some(&path), ConfigLayer::default());
        assert_eq!(
            config.map(|c| c.related_links).ok(),
            Some(RelatedLinksMode::Separate)
        );
        Ok(())
    }

    #[test]
    fn test_cli_overrides_win() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("helpdoc.toml");
        std::fs::write(&path, "asset_dir = \"from-file\"\n")?;
        let config = load_config(
            Some(&path),
            ConfigLayer {
                asset_dir: Some(PathBuf::from("from-cli")),
                ..ConfigLayer::default()
            },
        );
        assert_eq!(
            config.map(|c| c.asset_dir).ok(),
            Some(PathBuf::from("from-cli"))
        );
        Ok(())
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let result = load_config(
            Some(Path::new("/definitely/not/here/helpdoc.toml")),
            ConfigLayer::default(),
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
