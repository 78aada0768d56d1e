//! Module lookup across a list of search roots.
//!
//! A module named `Sample` is found as either of
//!
//! ```text
//! <root>/Sample.json
//! <root>/Sample/Sample.json
//! ```
//!
//! File names match case-insensitively. Roots are searched in order and
//! entries within a root in file-name order, so resolution is deterministic.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::{raw::RawModule, MetadataSource};
use crate::{model::ModuleHelp, Error, Result};

const METADATA_EXTENSION: &str = "json";

/// Reads module metadata from JSON files below a set of directories.
#[derive(Debug, Clone)]
pub struct JsonDirectorySource {
    roots: Vec<PathBuf>,
}

impl JsonDirectorySource {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Locate the metadata file for `module_name`, if any root holds one.
    pub fn locate(&self, module_name: &str) -> Option<PathBuf> {
        let wanted = format!("{module_name}.{METADATA_EXTENSION}");
        self.roots
            .iter()
            .filter(|root| root.is_dir())
            .find_map(|root| find_in_root(root, &wanted))
    }
}

fn find_in_root(root: &Path, wanted: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(2)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().eq_ignore_ascii_case(wanted))
        .find(|entry| {
            entry.depth() == 1
                || entry
                    .path()
                    .parent()
                    .and_then(Path::file_name)
                    .zip(Path::new(wanted).file_stem())
                    .is_some_and(|(dir, stem)| {
                        dir.to_string_lossy().eq_ignore_ascii_case(&stem.to_string_lossy())
                    })
        })
        .map(walkdir::DirEntry::into_path)
}

fn is_valid_module_name(name: &str) -> bool {
    !name.trim().is_empty()
        && !name.contains(['/', '\\'])
        && name != "."
        && name != ".."
}

impl MetadataSource for JsonDirectorySource {
    fn load_module(&self, module_name: &str) -> Result<ModuleHelp> {
        if !is_valid_module_name(module_name) {
            return Err(Error::ModuleNotFound(module_name.to_string()));
        }

        let path = self
            .locate(module_name)
            .ok_or_else(|| Error::ModuleNotFound(module_name.to_string()))?;
        debug!(module = module_name, path = %path.display(), "module metadata located");

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::Io(format!("Failed to read module metadata {}: {e}", path.display()))
        })?;

        let module = RawModule::parse(&content)
            .and_then(|raw| raw.into_model(module_name))
            .map_err(|reason| Error::unexpected_shape(module_name, reason))?;

        debug!(
            module = module_name,
            commands = module.commands.len(),
            "module metadata normalized"
        );
        Ok(module)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(path: &Path, content: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    }

    #[test]
    fn test_finds_module_file_case_insensitively() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        write(&dir.path().join("sample.json"), r#"{"name": "Sample"}"#)?;
        let source = JsonDirectorySource::new(vec![dir.path().to_path_buf()]);

        let module = source.load_module("Sample");
        assert_eq!(
            module.ok().and_then(|m| m.descriptor.name),
            Some("Sample".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_finds_module_in_own_folder() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        write(&dir.path().join("Sample").join("Sample.json"), "{}")?;
        let source = JsonDirectorySource::new(vec![dir.path().to_path_buf()]);
        assert!(source.locate("Sample").is_some());
        Ok(())
    }

    #[test]
    fn test_ignores_module_file_in_foreign_folder() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        write(&dir.path().join("Other").join("Sample.json"), "{}")?;
        let source = JsonDirectorySource::new(vec![dir.path().to_path_buf()]);
        assert_eq!(source.locate("Sample"), None);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_finds_symlinked_module_file() -> std::io::Result<()> {
        let store = tempfile::tempdir()?;
        let root = tempfile::tempdir()?;
        let target = store.path().join("exported.json");
        write(&target, r#"{"version": "3.1"}"#)?;
        std::os::unix::fs::symlink(&target, root.path().join("Sample.json"))?;
        let source = JsonDirectorySource::new(vec![root.path().to_path_buf()]);

        let version = source.load_module("Sample").ok().and_then(|m| m.descriptor.version);
        assert_eq!(version.as_deref(), Some("3.1"));
        Ok(())
    }

    #[test]
    fn test_first_root_wins() -> std::io::Result<()> {
        let first = tempfile::tempdir()?;
        let second = tempfile::tempdir()?;
        write(&first.path().join("Sample.json"), r#"{"version": "1.0"}"#)?;
        write(&second.path().join("Sample.json"), r#"{"version": "2.0"}"#)?;
        let source = JsonDirectorySource::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        let version = source.load_module("Sample").ok().and_then(|m| m.descriptor.version);
        assert_eq!(version.as_deref(), Some("1.0"));
        Ok(())
    }

    #[test]
    fn test_missing_module() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let source = JsonDirectorySource::new(vec![dir.path().to_path_buf()]);
        assert_eq!(
            source.load_module("Sample"),
            Err(Error::ModuleNotFound("Sample".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_path_like_names_are_not_resolved() {
        let source = JsonDirectorySource::new(vec![PathBuf::from(".")]);
        for name in ["", "  ", "../Sample", "a/b", "..", "."] {
            assert!(matches!(
                source.load_module(name),
                Err(Error::ModuleNotFound(_))
            ));
        }
    }

    #[test]
    fn test_malformed_metadata_is_shape_error() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        write(&dir.path().join("Sample.json"), "\"just a string\"")?;
        let source = JsonDirectorySource::new(vec![dir.path().to_path_buf()]);
        assert!(matches!(
            source.load_module("Sample"),
            Err(Error::UnexpectedMetadataShape { .. })
        ));
        Ok(())
    }
}
