use clap::Parser;
use std::path::PathBuf;

use lox_resolver::ResolverOptions;

/// CLI arguments for the lox-resolve binary.
#[derive(Parser, Debug)]
#[command(
    name = "lox-resolve",
    version,
    about = "Resolve variable scopes in a parsed Lox program"
)]
pub struct CliArgs {
    /// Path to the program's syntax tree, serialized as JSON.
    pub ast: PathBuf,

    /// Lox source the syntax tree was parsed from. Used to show the offending
    /// lines under each diagnostic.
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Do not report bindings that are never read or written.
    #[arg(long = "allow-unused")]
    pub allow_unused: bool,

    /// Print the resolved distances as JSON on stdout.
    #[arg(long = "emit-distances")]
    pub emit_distances: bool,

    /// Colour diagnostics. Defaults to whether stderr is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,
}

impl CliArgs {
    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            report_unused_bindings: !self.allow_unused,
        }
    }
}
