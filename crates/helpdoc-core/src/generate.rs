//! End-to-end generation: asset check, module resolution, assembly, write.
//!
//! Each step returns early on failure. Nothing is written unless every
//! earlier step succeeded, and nothing is retried.

use std::path::PathBuf;

use tracing::info;

use crate::{
    assets,
    config::Config,
    document::{render_document, RenderOptions},
    source::MetadataSource,
    writer, Result,
};

/// What to generate and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub module_name: String,
    pub output_path: PathBuf,
}

/// Summary of a completed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub module_name: String,
    pub command_count: usize,
    pub bytes_written: u64,
    pub output_path: PathBuf,
}

/// Generate the help page for one module.
///
/// # Errors
///
/// - `Error::MissingDependency` if any presentation asset is absent
/// - `Error::ModuleNotFound` / `Error::UnexpectedMetadataShape` from the source
/// - `Error::Render` if the template fails
/// - `Error::WriteFailure` if the output cannot be written
pub fn generate(
    request: &GenerateRequest,
    source: &dyn MetadataSource,
    config: &Config,
) -> Result<GenerationReport> {
    assets::verify_assets(&config.asset_dir, assets::required_assets())?;

    let module = source.load_module(&request.module_name)?;
    let html = render_document(&module, &RenderOptions::from(config))?;
    let bytes_written = writer::write_document(&request.output_path, &html)?;

    let report = GenerationReport {
        module_name: module.name().to_string(),
        command_count: module.commands.len(),
        bytes_written,
        output_path: request.output_path.clone(),
    };
    info!(
        module = %report.module_name,
        commands = report.command_count,
        bytes = report.bytes_written,
        path = %report.output_path.display(),
        "help document generated"
    );
    Ok(report)
}
