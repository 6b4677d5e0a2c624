//! Resolver state: the scope stack, the distances recorded so far and the
//! diagnostics collected so far, plus the primitives every statement and
//! expression case is built from.

use crate::scope::ScopeStack;
use lox_ast::{Program, Token};
use lox_common::{Diagnostics, DiagnosticsError, diagnostic_codes};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Identifier occurrence to the number of scopes between it and its
/// declaration.
///
/// Occurrences missing from the map refer to a global, or to nothing at all,
/// and are looked up by name at evaluation time.
pub type ResolutionMap = FxHashMap<Token, usize>;

/// Configuration options for the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Report bindings that leave scope without being read or written.
    pub report_unused_bindings: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions {
            report_unused_bindings: true,
        }
    }
}

/// How an identifier occurrence touches its binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentOp {
    Read,
    Write,
}

/// State for one resolution run.
pub struct ResolverState {
    options: ResolverOptions,
    scopes: ScopeStack,
    distances: ResolutionMap,
    diagnostics: Diagnostics,
}

impl ResolverState {
    pub fn new() -> Self {
        Self::with_options(ResolverOptions::default())
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        ResolverState {
            options,
            scopes: ScopeStack::new(),
            distances: ResolutionMap::default(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Drop everything recorded by earlier runs, keeping the options.
    pub fn reset(&mut self) {
        self.scopes.clear();
        self.distances.clear();
        self.diagnostics.clear();
    }

    pub const fn options(&self) -> ResolverOptions {
        self.options
    }

    pub const fn distances(&self) -> &ResolutionMap {
        &self.distances
    }

    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Number of scopes currently tracked. Zero at global level.
    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(stmts = program.stmts.len()))]
    pub fn resolve_program(&mut self, program: &Program) {
        self.resolve_stmts(&program.stmts);
        debug!(
            resolved = self.distances.len(),
            diagnostics = self.diagnostics.len(),
            "resolution finished"
        );
    }

    /// The distances, or every diagnostic ordered by source position if there
    /// were any.
    pub fn into_result(self) -> Result<ResolutionMap, DiagnosticsError> {
        self.diagnostics.into_result()?;
        Ok(self.distances)
    }

    // =========================================================================
    // Scope primitives
    // =========================================================================

    /// Run `body` inside a fresh scope.
    ///
    /// The scope is popped and checked for unused bindings when `body`
    /// returns, whatever `body` reported.
    pub(crate) fn with_scope<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self),
    {
        self.scopes.push();
        debug!(depth = self.scopes.len(), "enter scope");
        body(self);
        self.end_scope();
    }

    fn end_scope(&mut self) {
        let Some(scope) = self.scopes.pop() else {
            return;
        };
        debug!(
            depth = self.scopes.len() + 1,
            bindings = scope.len(),
            "exit scope"
        );
        if !self.options.report_unused_bindings {
            return;
        }
        for token in scope.unused() {
            trace!(name = %token.lexeme, "unused binding");
            self.diagnostics.report(
                token.range(),
                diagnostic_codes::IDENTIFIER_NEVER_USED,
                &[&token.lexeme],
            );
        }
    }

    /// Declare `token` in the innermost scope.
    ///
    /// Does nothing for the blank identifier or at global level. A second
    /// declaration in the same scope is reported and the first one kept.
    pub(crate) fn declare(&mut self, token: &Token) {
        if token.is_blank() {
            return;
        }
        let Some(scope) = self.scopes.innermost_mut() else {
            return;
        };
        if !scope.declare(token) {
            trace!(name = %token.lexeme, "redeclared");
            self.diagnostics.report(
                token.range(),
                diagnostic_codes::IDENTIFIER_ALREADY_DECLARED,
                &[&token.lexeme],
            );
        }
    }

    /// Mark the nearest binding for `token` as defined.
    ///
    /// Callers declare before they define, so a miss means the name is
    /// global (or undeclared) and is the evaluator's business.
    pub(crate) fn define(&mut self, token: &Token) {
        if let Some((_, binding)) = self.scopes.find_mut(&token.lexeme) {
            binding.defined = true;
        }
    }

    /// Look `token` up from the innermost scope outwards, mark the binding
    /// used and record the distance to it.
    ///
    /// A read of a binding that has no value yet is reported instead of
    /// recorded. Writes count as uses so write-only bindings are not reported
    /// as unused. Names found in no scope are left for dynamic lookup.
    pub(crate) fn resolve_identifier(&mut self, token: &Token, op: IdentOp) {
        let Some((distance, binding)) = self.scopes.find_mut(&token.lexeme) else {
            trace!(name = %token.lexeme, "deferred to global lookup");
            return;
        };
        binding.used = true;
        if op == IdentOp::Read && !binding.defined {
            self.diagnostics.report(
                token.range(),
                diagnostic_codes::IDENTIFIER_NOT_DEFINED,
                &[&token.lexeme],
            );
            return;
        }
        trace!(name = %token.lexeme, distance, "resolved");
        self.distances.insert(token.clone(), distance);
    }

    /// Report a read of the blank identifier.
    pub(crate) fn report_blank_read(&mut self, token: &Token) {
        self.diagnostics.report(
            token.range(),
            diagnostic_codes::BLANK_IDENTIFIER_READ,
            &[&token.lexeme],
        );
    }
}
