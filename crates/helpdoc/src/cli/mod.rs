//! CLI argument definitions
//!
//! ```text
//! helpdoc <MODULE> <OUTPUT> [--verbose] [--config FILE]
//!         [--asset-dir DIR] [--module-path DIR]... [--related-links MODE]
//! ```

pub mod handlers;
pub mod setup;

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("helpdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render a module's command help as a single static HTML page")
        .long_about(
            "Render Module Help as HTML\n\
             \n\
             WHAT IT DOES:\n\
             Loads the help metadata of MODULE (synopsis, syntax, parameters,\n\
             examples, notes, related links) and writes one HTML page with a\n\
             side menu to OUTPUT, overwriting any existing file.\n\
             \n\
             PREREQUISITES:\n\
             The presentation assets must exist in the asset directory\n\
             (default: current directory):\n  \
             bootstrap.min.css, helpdoc.css, jquery.min.js, bootstrap.min.js, helpdoc.js\n\
             \n\
             MODULE LOOKUP:\n\
             <root>/<MODULE>.json or <root>/<MODULE>/<MODULE>.json for every\n\
             root on the module path (default: current directory).",
        )
        .arg(
            Arg::new("module")
                .required(true)
                .value_name("MODULE")
                .help("Name of the module to document"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .value_name("OUTPUT")
                .value_parser(value_parser!(PathBuf))
                .help("Path of the HTML file to write"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Print diagnostic logging to stderr"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Config file to use instead of ./.helpdoc.toml"),
        )
        .arg(
            Arg::new("asset-dir")
                .long("asset-dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory containing the presentation assets"),
        )
        .arg(
            Arg::new("module-path")
                .long("module-path")
                .value_name("DIR")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("Directory to search for module metadata (repeatable)"),
        )
        .arg(
            Arg::new("related-links")
                .long("related-links")
                .value_name("MODE")
                .value_parser(["concatenated", "separate"])
                .help("Render multiple related links as one concatenated link or separately"),
        )
        .after_help(
            "EXAMPLES:\n  \
             # Document the Sample module found in ./modules\n  \
             helpdoc Sample Sample.html --module-path modules\n\
             \n  \
             # Assets live elsewhere, show diagnostics\n  \
             helpdoc Sample out/Sample.html --asset-dir static -v",
        )
}
