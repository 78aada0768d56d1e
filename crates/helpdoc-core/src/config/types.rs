//! Configuration structure definitions

use std::path::PathBuf;

use serde::Deserialize;
use strum::{Display, EnumString};

/// How multiple related-link URIs of one command are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RelatedLinksMode {
    /// All URIs joined without a separator into a single link.
    #[default]
    Concatenated,
    /// One link per URI.
    Separate,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory that must contain the presentation assets.
    pub asset_dir: PathBuf,
    /// Directories searched for module metadata, in order.
    pub module_paths: Vec<PathBuf>,
    pub related_links: RelatedLinksMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("."),
            module_paths: Vec::new(),
            related_links: RelatedLinksMode::default(),
        }
    }
}

/// One partial layer of configuration: a TOML file, the environment or CLI flags.
///
/// Unset fields leave the lower layer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub asset_dir: Option<PathBuf>,
    pub module_paths: Option<Vec<PathBuf>>,
    pub related_links: Option<RelatedLinksMode>,
}

impl Config {
    /// Apply a layer on top of this config (layer takes precedence).
    ///
    /// Module paths are replaced, not appended.
    pub fn merge(self, layer: ConfigLayer) -> Self {
        Self {
            asset_dir: layer.asset_dir.unwrap_or(self.asset_dir),
            module_paths: layer.module_paths.unwrap_or(self.module_paths),
            related_links: layer.related_links.unwrap_or(self.related_links),
        }
    }

    /// Directories to search for module metadata; the current directory when none are set.
    pub fn search_roots(&self) -> Vec<PathBuf> {
        if self.module_paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.module_paths.clone()
        }
    }
}
