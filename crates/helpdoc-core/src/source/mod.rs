//! Metadata sources.
//!
//! A [`MetadataSource`] resolves a module name to a normalized
//! [`ModuleHelp`]. The rest of the crate only ever sees the typed model.
//!
//! - `raw`: loosely-typed JSON shapes as found on disk
//! - `directory`: module lookup across search roots

mod directory;
mod raw;

pub use directory::JsonDirectorySource;

use crate::{model::ModuleHelp, Result};

/// Resolves a module and its exported commands.
pub trait MetadataSource {
    /// Load the help metadata of `module_name`.
    ///
    /// # Errors
    ///
    /// - `Error::ModuleNotFound` when the name cannot be resolved
    /// - `Error::UnexpectedMetadataShape` when the metadata is not a module descriptor
    fn load_module(&self, module_name: &str) -> Result<ModuleHelp>;
}
