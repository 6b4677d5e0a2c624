//! Tokens and syntax tree for Lox programs.
//!
//! The lexer and parser that produce these values live outside this
//! workspace. The types here are the contract between them, the resolver and
//! the evaluator: a closed set of statement and expression variants, so every
//! pass over the tree is an exhaustive `match`.

pub mod token;
pub use token::{BLANK_IDENT, Token, TokenKind};

pub mod ast;
pub use ast::{Expr, Function, LiteralValue, Program, Stmt};

#[cfg(test)]
#[path = "../tests/token_tests.rs"]
mod token_tests;
#[cfg(test)]
#[path = "../tests/ast_tests.rs"]
mod ast_tests;
