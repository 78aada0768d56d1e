//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: ~/.config/helpdoc/config.toml
//! 3. Project config: ./.helpdoc.toml (or the file passed with `--config`)
//! 4. Environment variables: `HELPDOC_*`
//! 5. CLI flags
//!
//! # Example Config
//!
//! ```toml
//! asset_dir = "assets"
//! module_paths = ["modules", "/usr/share/helpdoc/modules"]
//! related_links = "separate"
//! ```

mod load;
mod types;

pub use load::{global_config_path, load_config, load_toml_file, project_config_path};
pub use types::{Config, ConfigLayer, RelatedLinksMode};
