//! Expression resolution.

use crate::state::{IdentOp, ResolverState};
use lox_ast::Expr;

impl ResolverState {
    pub(crate) fn resolve_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Function { function, .. } => self.resolve_function(function),
            Expr::Group { expr } => self.resolve_expr(expr),
            Expr::Literal { .. } => {}
            Expr::Variable { name } => {
                if name.is_blank() {
                    self.report_blank_read(name);
                } else {
                    self.resolve_identifier(name, IdentOp::Read);
                }
            }
            Expr::Call { callee, args, .. } => {
                self.resolve_expr(callee);
                for arg in args {
                    self.resolve_expr(arg);
                }
            }
            Expr::Unary { right, .. } => self.resolve_expr(right),
            Expr::Binary { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            Expr::Ternary {
                condition,
                then_expr,
                else_expr,
            } => {
                self.resolve_expr(condition);
                self.resolve_expr(then_expr);
                self.resolve_expr(else_expr);
            }
            Expr::Assignment { left, right } => {
                // Assigning gives a declared-but-undefined binding its value.
                self.resolve_expr(right);
                self.resolve_identifier(left, IdentOp::Write);
                self.define(left);
            }
        }
    }
}
