//! Presentation assets referenced by the generated page.
//!
//! The page links these files by fixed name; they are not generated, only
//! checked for presence before any work is done.

use std::path::Path;

use tracing::warn;

use crate::{Error, Result};

/// Stylesheets linked from the document head.
pub const STYLESHEETS: &[&str] = &["bootstrap.min.css", "helpdoc.css"];

/// Scripts loaded at the end of the document body.
pub const SCRIPTS: &[&str] = &["jquery.min.js", "bootstrap.min.js", "helpdoc.js"];

/// Every asset the page depends on.
pub fn required_assets() -> impl Iterator<Item = &'static str> {
    STYLESHEETS.iter().chain(SCRIPTS).copied()
}

/// Check that every named asset exists as a file inside `dir`.
///
/// All assets are checked before failing; each missing one is logged by name.
///
/// # Errors
///
/// Returns `Error::MissingDependency` listing every absent asset.
pub fn verify_assets<'a, I>(dir: &Path, assets: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let missing: Vec<String> = assets
        .into_iter()
        .filter(|name| !dir.join(name).is_file())
        .inspect(|name| warn!(asset = %name, dir = %dir.display(), "required asset not found"))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingDependency(missing))
    }
}
