#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use lox::cli::args::CliArgs;
use lox::cli::driver;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;

fn main() -> Result<()> {
    // Initialize tracing if LOX_LOG or RUST_LOG is set (zero cost otherwise).
    lox::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let result = match driver::run(&args) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(EXIT_INVALID_INPUT);
        }
    };

    if args.emit_distances && !result.has_errors() {
        let json = serde_json::to_string_pretty(&result.distances)
            .context("failed to serialize distances")?;
        println!("{json}");
    }

    if result.has_errors() {
        let pretty = args
            .pretty
            .unwrap_or_else(|| std::io::stderr().is_terminal());
        let reporter = match driver::reporter_for(&args, pretty) {
            Ok(reporter) => reporter,
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(EXIT_INVALID_INPUT);
            }
        };
        // render() already ends every diagnostic with a newline
        eprint!("{}", reporter.render(&result.diagnostics));
        std::process::exit(EXIT_DIAGNOSTICS);
    }

    std::process::exit(EXIT_SUCCESS);
}
