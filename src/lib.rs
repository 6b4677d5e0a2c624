//! Lox static resolver.
//!
//! Re-exports the workspace crates and hosts the pieces only the binary
//! needs: log initialisation and the command-line front end.
//!
//! ```ignore
//! let program: lox::ast::Program = serde_json::from_str(&json)?;
//! match lox::resolver::resolve(&program) {
//!     Ok(distances) => evaluate(&program, &distances),
//!     Err(errors) => eprintln!("{errors}"),
//! }
//! ```

pub use lox_ast as ast;
pub use lox_common as common;
pub use lox_resolver as resolver;

pub use lox_resolver::{ResolutionMap, ResolverOptions, resolve, resolve_with_options};

// Tracing configuration (LOX_LOG / LOX_LOG_FORMAT)
pub mod tracing_config;

// Command-line front end
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
