//! Command handler: flags -> config -> generation -> summary line

use std::{io::Write, path::PathBuf, str::FromStr};

use anyhow::Result;
use clap::ArgMatches;
use helpdoc_core::{
    config::{load_config, ConfigLayer},
    generate, GenerateRequest, GenerationReport, JsonDirectorySource, RelatedLinksMode,
};
use tracing::debug;

/// Build the highest-precedence config layer from command-line flags.
pub fn overrides_from(matches: &ArgMatches) -> Result<ConfigLayer> {
    let related_links = matches
        .get_one::<String>("related-links")
        .map(|mode| RelatedLinksMode::from_str(mode))
        .transpose()
        .map_err(|e| helpdoc_core::Error::InvalidConfig(format!("--related-links: {e}")))?;

    Ok(ConfigLayer {
        asset_dir: matches.get_one::<PathBuf>("asset-dir").cloned(),
        module_paths: matches
            .get_many::<PathBuf>("module-path")
            .map(|paths| paths.cloned().collect()),
        related_links,
    })
}

/// Run a generation from parsed arguments and print the summary on success.
///
/// # Errors
///
/// Propagates any `helpdoc_core::Error`; nothing is printed to stdout on failure.
pub fn run(matches: &ArgMatches) -> Result<GenerationReport> {
    run_to(matches, &mut std::io::stdout())
}

/// Like [`run`], writing the summary line to `out`.
///
/// # Errors
///
/// Also fails if the summary line cannot be written.
pub fn run_to<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<GenerationReport> {
    let module_name = matches
        .get_one::<String>("module")
        .ok_or_else(|| anyhow::anyhow!("MODULE is required"))?;
    let output_path = matches
        .get_one::<PathBuf>("output")
        .ok_or_else(|| anyhow::anyhow!("OUTPUT is required"))?;

    let config = load_config(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
        overrides_from(matches)?,
    )?;
    let source = JsonDirectorySource::new(config.search_roots());
    debug!(module = %module_name, output = %output_path.display(), "generating");

    let request = GenerateRequest {
        module_name: module_name.clone(),
        output_path: output_path.clone(),
    };
    let report = generate(&request, &source, &config)?;

    writeln!(out, "{}", summary_line(&report))?;
    Ok(report)
}

/// One-line success summary.
pub fn summary_line(report: &GenerationReport) -> String {
    let noun = if report.command_count == 1 {
        "command"
    } else {
        "commands"
    };
    format!(
        "Generated help for module '{}' ({} {noun}, {} bytes) -> {}",
        report.module_name,
        report.command_count,
        report.bytes_written,
        report.output_path.display()
    )
}

/// Message shown after the `WARNING: ` prefix.
pub fn format_error(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

/// Process exit code for a failed run.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<helpdoc_core::Error>()
        .map_or(1, helpdoc_core::Error::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;

    fn report(count: usize) -> GenerationReport {
        GenerationReport {
            module_name: "Sample".into(),
            command_count: count,
            bytes_written: 10,
            output_path: PathBuf::from("Sample.html"),
        }
    }

    #[test]
    fn test_summary_line_singular_and_plural() {
        assert_eq!(
            summary_line(&report(1)),
            "Generated help for module 'Sample' (1 command, 10 bytes) -> Sample.html"
        );
        assert!(summary_line(&report(3)).contains("(3 commands, 10 bytes)"));
    }

    #[test]
    fn test_exit_code_follows_core_error() {
        let err = anyhow::Error::new(helpdoc_core::Error::MissingDependency(vec![
            "helpdoc.css".into(),
        ]));
        assert_eq!(exit_code(&err), 3);
        assert_eq!(format_error(&err), "missing required asset(s): helpdoc.css");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn generation_args(dir: &std::path::Path) -> Result<ArgMatches> {
        for asset in helpdoc_core::assets::required_assets() {
            std::fs::write(dir.join(asset), "")?;
        }
        std::fs::write(dir.join("Sample.json"), r#"{"name": "Sample"}"#)?;
        let root = dir.to_string_lossy().into_owned();
        let output = dir.join("Sample.html").to_string_lossy().into_owned();
        Ok(build_cli().try_get_matches_from([
            "helpdoc",
            "Sample",
            output.as_str(),
            "--asset-dir",
            root.as_str(),
            "--module-path",
            root.as_str(),
        ])?)
    }

    #[test]
    fn test_summary_written_to_output() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let matches = generation_args(dir.path())?;
        let mut out = Vec::new();

        let report = run_to(&matches, &mut out)?;

        assert_eq!(String::from_utf8(out)?, format!("{}\n", summary_line(&report)));
        Ok(())
    }

    #[test]
    fn test_failed_summary_write_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let matches = generation_args(dir.path())?;

        let err = run_to(&matches, &mut ClosedPipe).err();

        assert!(err.is_some_and(|e| e.downcast_ref::<std::io::Error>().is_some()));
        Ok(())
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }

    #[test]
    fn test_overrides_from_flags() -> Result<()> {
        let matches = build_cli().try_get_matches_from([
            "helpdoc",
            "Sample",
            "out.html",
            "--asset-dir",
            "static",
            "--module-path",
            "mods",
            "--related-links",
            "separate",
        ])?;
        let layer = overrides_from(&matches)?;
        assert_eq!(layer.asset_dir, Some(PathBuf::from("static")));
        assert_eq!(layer.module_paths, Some(vec![PathBuf::from("mods")]));
        assert_eq!(layer.related_links, Some(RelatedLinksMode::Separate));
        Ok(())
    }

    #[test]
    fn test_overrides_empty_without_flags() -> Result<()> {
        let matches = build_cli().try_get_matches_from(["helpdoc", "Sample", "out.html"])?;
        assert_eq!(overrides_from(&matches)?, ConfigLayer::default());
        Ok(())
    }
}
