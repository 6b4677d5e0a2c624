use colored::Colorize;

use lox_common::{Diagnostic, DiagnosticCategory, Range};

/// Renders diagnostics for a terminal, with the offending source lines
/// underlined when the source text is known.
pub struct Reporter {
    color: bool,
    file_name: String,
    source: Option<String>,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            file_name: String::new(),
            source: None,
        }
    }

    /// Name diagnostics after `file_name`, and underline ranges in `source`.
    #[must_use]
    pub fn with_source(mut self, file_name: impl Into<String>, source: Option<String>) -> Self {
        self.file_name = file_name.into();
        self.source = source;
        self
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for diagnostic in diagnostics {
            out.push_str(&self.format_diagnostic(diagnostic));
            out.push('\n');
        }
        out
    }

    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();
        if self.file_name.is_empty() {
            output.push_str("<unknown>");
        } else {
            output.push_str(&self.file_name);
        }
        output.push(':');
        output.push_str(&diagnostic.range.start.to_string());
        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        output.push(' ');
        output.push_str(&self.format_code(diagnostic.code));
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        if let Some(snippet) = self.format_snippet(diagnostic.range) {
            output.push_str(&snippet);
        }
        output
    }

    /// Source lines covered by `range`, each followed by a `~` underline of
    /// the covered part.
    ///
    /// ```text
    ///     3   print _;
    ///               ~
    /// ```
    fn format_snippet(&self, range: Range) -> Option<String> {
        let source = self.source.as_deref()?;
        let lines: Vec<&str> = source.lines().collect();
        let first = range.start.line as usize;
        let last = range.end.line as usize;
        if first >= lines.len() || last < first {
            return None;
        }

        let mut snippet = String::new();
        for (line_idx, line_text) in lines
            .iter()
            .enumerate()
            .take(last.min(lines.len() - 1) + 1)
            .skip(first)
        {
            snippet.push('\n');
            snippet.push_str(&format!("  {:>3}   {}", line_idx + 1, line_text));
            if range.is_empty() {
                continue;
            }

            let from = if line_idx == first {
                range.start.column as usize
            } else {
                0
            };
            let to = if line_idx == last {
                range.end.column as usize
            } else {
                line_text.len()
            };
            let underline = underline(line_text, from, to);
            if underline.trim().is_empty() {
                continue;
            }
            snippet.push('\n');
            let underline = if self.color {
                underline.red().to_string()
            } else {
                underline
            };
            snippet.push_str(&format!("        {underline}"));
        }
        Some(snippet)
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.label();
        if !self.color {
            return label.to_string();
        }
        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        let label = format!("LOX{code}");
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }
}

/// Spaces up to byte column `from`, then one `~` per character up to byte
/// column `to`. Tabs are kept so the underline lines up with the source.
fn underline(line: &str, from: usize, to: usize) -> String {
    let mut out = String::new();
    let mut marked = false;
    for (offset, ch) in line.char_indices() {
        if offset >= to {
            break;
        }
        if offset < from {
            out.push(if ch == '\t' { '\t' } else { ' ' });
        } else {
            out.push('~');
            marked = true;
        }
    }
    if !marked && to > from {
        out.push('~');
    }
    out
}
