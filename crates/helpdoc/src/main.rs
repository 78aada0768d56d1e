//! helpdoc CLI
//!
//! Binary name: `helpdoc`

use std::process;

use helpdoc::cli::{build_cli, handlers, setup};

fn main() {
    let matches = build_cli().get_matches();

    if let Err(e) = setup::init_tracing(matches.get_flag("verbose")) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("WARNING: {e}");
        }
    }

    if let Err(err) = handlers::run(&matches) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("WARNING: {}", handlers::format_error(&err));
        }

        #[allow(clippy::exit)]
        process::exit(handlers::exit_code(&err));
    }
}
