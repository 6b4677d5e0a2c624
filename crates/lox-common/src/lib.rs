//! Common types and utilities for the Lox resolver.
//!
//! This crate provides foundational types shared by the AST, the resolver and
//! the command-line front end:
//! - Position/Range types for line/column source locations
//! - Diagnostic records, codes and message templates
//! - The `Diagnostics` sink that collects diagnostics during a pass

// Position/Range types for line/column source locations
pub mod position;
pub use position::{Position, Range};

// Diagnostic types, codes and the collecting sink
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, Diagnostics, DiagnosticsError, diagnostic_codes,
    diagnostic_messages, format_message,
};

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod position_tests;
#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
