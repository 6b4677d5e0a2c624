//! Diagnostic types, message lookup and the collecting sink.
//!
//! Passes never fail fast on a user error. They push into a [`Diagnostics`]
//! sink and keep walking; the sink is turned into a single aggregate
//! [`DiagnosticsError`] once the pass is over.

use crate::position::Range;
use serde::Serialize;
use std::fmt;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
}

impl DiagnosticCategory {
    pub const fn label(self) -> &'static str {
        match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
        }
    }
}

/// A positioned, user-facing report of a problem in the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    pub range: Range,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub const fn error(range: Range, message: String, code: u32) -> Self {
        Self {
            range,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {}",
            self.range.start,
            self.category.label(),
            self.message_text
        )
    }
}

// =============================================================================
// Codes and Messages
// =============================================================================

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const IDENTIFIER_ALREADY_DECLARED: u32 = 1001;
    pub const IDENTIFIER_NOT_DEFINED: u32 = 1002;
    pub const IDENTIFIER_NEVER_USED: u32 = 1003;
    pub const BLANK_IDENTIFIER_READ: u32 = 1004;
}

pub mod diagnostic_messages {
    pub const IDENTIFIER_ALREADY_DECLARED: &str = "{0} has already been declared";
    pub const IDENTIFIER_NOT_DEFINED: &str = "{0} has not been defined";
    pub const IDENTIFIER_NEVER_USED: &str = "{0} has been declared but is never used";
    pub const BLANK_IDENTIFIER_READ: &str =
        "blank identifier {0} cannot be used in a non-assignment expression";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::IDENTIFIER_ALREADY_DECLARED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::IDENTIFIER_ALREADY_DECLARED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::IDENTIFIER_NOT_DEFINED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::IDENTIFIER_NOT_DEFINED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::IDENTIFIER_NEVER_USED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::IDENTIFIER_NEVER_USED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::BLANK_IDENTIFIER_READ,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::BLANK_IDENTIFIER_READ,
    },
];

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

// =============================================================================
// Sink
// =============================================================================

/// Unordered collection of diagnostics accumulated during one pass.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Report the message registered for `code` at `range`, filling its
    /// placeholders from `args`. Codes without a registered message are ignored.
    pub fn report(&mut self, range: Range, code: u32, args: &[&str]) {
        let Some(def) = get_diagnostic_message(code) else {
            return;
        };
        self.push(Diagnostic {
            range,
            message_text: format_message(def.message, args),
            category: def.category,
            code,
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Order the diagnostics by where they start in the source and return
    /// them as a single error. An empty sink is success.
    ///
    /// The sort is stable, so diagnostics starting at the same position keep
    /// the order they were reported in.
    pub fn into_result(self) -> Result<(), DiagnosticsError> {
        if self.items.is_empty() {
            return Ok(());
        }
        let mut diagnostics = self.items;
        diagnostics.sort_by(|a, b| a.range.start.cmp(&b.range.start));
        Err(DiagnosticsError { diagnostics })
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Non-empty, position-ordered set of diagnostics reported as one failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_lines(.diagnostics))]
pub struct DiagnosticsError {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsError {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

fn join_lines(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
