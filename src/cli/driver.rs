use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::cli::args::CliArgs;
use crate::cli::reporter::Reporter;
use lox_ast::Program;
use lox_common::{Diagnostic, Range};
use lox_resolver::{ResolutionMap, ResolverOptions, resolve_with_options};

/// One resolved identifier occurrence, as printed by `--emit-distances`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDistance {
    pub name: String,
    pub range: Range,
    pub distance: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ResolveResult {
    /// Resolved occurrences in source order. Empty when there are diagnostics.
    pub distances: Vec<ResolvedDistance>,
    /// Diagnostics in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolveResult {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Read a JSON-serialized syntax tree.
pub fn load_program(path: &Path) -> Result<Program> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read syntax tree {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse syntax tree {}", path.display()))
}

pub fn resolve_program(program: &Program, options: ResolverOptions) -> ResolveResult {
    match resolve_with_options(program, options) {
        Ok(map) => ResolveResult {
            distances: sorted_distances(&map),
            diagnostics: Vec::new(),
        },
        Err(err) => ResolveResult {
            distances: Vec::new(),
            diagnostics: err.into_diagnostics(),
        },
    }
}

pub fn run(args: &CliArgs) -> Result<ResolveResult> {
    let program = load_program(&args.ast)?;
    let result = resolve_program(&program, args.resolver_options());
    info!(
        ast = %args.ast.display(),
        resolved = result.distances.len(),
        diagnostics = result.diagnostics.len(),
        "resolved program"
    );
    Ok(result)
}

/// Reporter naming diagnostics after the source file when one was given,
/// otherwise after the syntax tree file.
pub fn reporter_for(args: &CliArgs, color: bool) -> Result<Reporter> {
    let Some(source_path) = &args.source else {
        return Ok(Reporter::new(color).with_source(args.ast.display().to_string(), None));
    };
    let source = std::fs::read_to_string(source_path)
        .with_context(|| format!("failed to read source {}", source_path.display()))?;
    Ok(Reporter::new(color).with_source(source_path.display().to_string(), Some(source)))
}

/// The resolution map ordered by where each occurrence starts.
pub fn sorted_distances(map: &ResolutionMap) -> Vec<ResolvedDistance> {
    let mut distances: Vec<_> = map
        .iter()
        .map(|(token, &distance)| ResolvedDistance {
            name: token.lexeme.clone(),
            range: token.range(),
            distance,
        })
        .collect();
    distances.sort_by(|a, b| a.range.start.cmp(&b.range.start));
    distances
}
