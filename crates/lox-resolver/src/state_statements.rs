//! Statement resolution.

use crate::state::ResolverState;
use lox_ast::{Expr, Function, Stmt, Token};

impl ResolverState {
    pub(crate) fn resolve_stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.resolve_stmt(stmt);
        }
    }

    pub(crate) fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl { name, initializer } => {
                self.resolve_var_decl(name, initializer.as_ref());
            }
            Stmt::FunDecl { name, function } => self.resolve_fun_decl(name, function),
            Stmt::Expression { expr } | Stmt::Print { expr } => self.resolve_expr(expr),
            Stmt::Block { stmts } => self.with_scope(|resolver| resolver.resolve_stmts(stmts)),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            Stmt::While { condition, body } => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }
            Stmt::For {
                initializer,
                condition,
                update,
                body,
            } => self.resolve_for(
                initializer.as_deref(),
                condition.as_ref(),
                update.as_ref(),
                body,
            ),
            Stmt::Break { .. } | Stmt::Continue { .. } => {}
            Stmt::Return { value, .. } => {
                if let Some(value) = value {
                    self.resolve_expr(value);
                }
            }
        }
    }

    fn resolve_var_decl(&mut self, name: &Token, initializer: Option<&Expr>) {
        // The initializer sees the enclosing binding of the name, never the
        // one being declared.
        if let Some(initializer) = initializer {
            self.resolve_expr(initializer);
            self.declare(name);
            self.define(name);
        } else {
            self.declare(name);
        }
    }

    fn resolve_fun_decl(&mut self, name: &Token, function: &Function) {
        // Defined before the body is walked so the body can call itself.
        self.declare(name);
        self.define(name);
        self.resolve_function(function);
    }

    /// Parameters and body share one scope.
    pub(crate) fn resolve_function(&mut self, function: &Function) {
        self.with_scope(|resolver| {
            for param in &function.params {
                resolver.declare(param);
                resolver.define(param);
            }
            resolver.resolve_stmts(&function.body);
        });
    }

    /// One scope covers all four clauses, so the loop variable is a single
    /// binding across iterations.
    fn resolve_for(
        &mut self,
        initializer: Option<&Stmt>,
        condition: Option<&Expr>,
        update: Option<&Expr>,
        body: &Stmt,
    ) {
        self.with_scope(|resolver| {
            if let Some(initializer) = initializer {
                resolver.resolve_stmt(initializer);
            }
            if let Some(condition) = condition {
                resolver.resolve_expr(condition);
            }
            if let Some(update) = update {
                resolver.resolve_expr(update);
            }
            resolver.resolve_stmt(body);
        });
    }
}
