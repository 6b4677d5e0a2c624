//! Static name resolution for Lox programs.
//!
//! The resolver walks a parsed [`Program`] once, before evaluation, and works
//! out for every identifier occurrence how many lexical scopes separate it
//! from the declaration it refers to. The evaluator uses that distance to walk
//! a fixed number of parent environments instead of searching by name.
//!
//! Along the way it reports binding-discipline errors:
//! - a name declared twice in the same scope
//! - a read of a binding that exists but has no value yet
//! - a binding that goes out of scope without ever being read or written
//! - a read of the blank identifier `_`
//!
//! # Global scope
//!
//! The program's top level is never tracked. Top-level names are never found
//! by lookup, so every reference to them is absent from the [`ResolutionMap`]
//! and left to dynamic lookup by name at evaluation time. This is what lets
//! top-level functions call each other in any order, and it also means
//! duplicate and unused checks do not apply to globals.

pub mod scope;
pub use scope::{Binding, Scope, ScopeStack};

pub mod state;
pub use state::{IdentOp, ResolutionMap, ResolverOptions, ResolverState};

mod state_expressions;
mod state_statements;

use lox_ast::Program;
use lox_common::DiagnosticsError;

/// Resolve `program` with default options.
///
/// Returns the distance of every identifier occurrence found in a tracked
/// scope, or every diagnostic the pass produced, ordered by source position.
pub fn resolve(program: &Program) -> Result<ResolutionMap, DiagnosticsError> {
    resolve_with_options(program, ResolverOptions::default())
}

pub fn resolve_with_options(
    program: &Program,
    options: ResolverOptions,
) -> Result<ResolutionMap, DiagnosticsError> {
    let mut resolver = ResolverState::with_options(options);
    resolver.resolve_program(program);
    resolver.into_result()
}

#[cfg(test)]
#[path = "../tests/fixtures.rs"]
mod fixtures;
#[cfg(test)]
#[path = "../tests/scope_tests.rs"]
mod scope_tests;
#[cfg(test)]
#[path = "../tests/resolver_state_tests.rs"]
mod resolver_state_tests;
#[cfg(test)]
#[path = "../tests/statement_tests.rs"]
mod statement_tests;
#[cfg(test)]
#[path = "../tests/expression_tests.rs"]
mod expression_tests;
#[cfg(test)]
#[path = "../tests/property_tests.rs"]
mod property_tests;
