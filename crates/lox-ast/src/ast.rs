//! Syntax tree node types.
//!
//! Statements and expressions are closed enums. Adding a variant here is a
//! compile error in every pass until that pass handles it.

use crate::token::Token;
use serde::{Deserialize, Serialize};

/// A whole Lox program: its top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Program { stmts }
    }
}

/// Parameters and body shared by function declarations and function
/// expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Stmt {
    /// `var name;` or `var name = initializer;`
    VarDecl {
        name: Token,
        initializer: Option<Expr>,
    },
    /// `fun name(params) { body }`
    FunDecl { name: Token, function: Function },
    /// An expression evaluated for its side effects.
    Expression { expr: Expr },
    Print { expr: Expr },
    Block { stmts: Vec<Stmt> },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While { condition: Expr, body: Box<Stmt> },
    /// `for (initializer; condition; update) body`; every clause is optional.
    For {
        initializer: Option<Box<Stmt>>,
        condition: Option<Expr>,
        update: Option<Expr>,
        body: Box<Stmt>,
    },
    Break { keyword: Token },
    Continue { keyword: Token },
    Return { keyword: Token, value: Option<Expr> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expr {
    /// Anonymous function literal.
    Function { keyword: Token, function: Function },
    Group { expr: Box<Expr> },
    Literal { token: Token, value: LiteralValue },
    Variable { name: Token },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        right_paren: Token,
    },
    Unary { op: Token, right: Box<Expr> },
    Binary {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },
    /// `condition ? then_expr : else_expr`
    Ternary {
        condition: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    /// `left = right`; only identifiers are assignable.
    Assignment { left: Token, right: Box<Expr> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Bool(bool),
    Nil,
}
