use crate::fixtures::{Fx, block, ident, print, program, var, var_init, num};
use crate::state::{IdentOp, ResolverOptions, ResolverState};
use lox_common::diagnostic_codes;

#[test]
fn test_declare_at_global_level_is_ignored() {
    let fx = Fx::new();
    let x = fx.ident("x");
    let mut resolver = ResolverState::new();
    resolver.declare(&x);
    resolver.declare(&x);
    resolver.resolve_identifier(&x, IdentOp::Read);

    assert_eq!(resolver.scope_depth(), 0);
    assert!(resolver.diagnostics().is_empty());
    assert!(resolver.distances().is_empty());
}

#[test]
fn test_with_scope_pops_and_reports_unused() {
    let fx = Fx::new();
    let x = fx.ident("x");
    let mut resolver = ResolverState::new();
    resolver.with_scope(|r| {
        assert_eq!(r.scope_depth(), 1);
        r.declare(&x);
    });
    assert_eq!(resolver.scope_depth(), 0);

    let diags: Vec<_> = resolver.diagnostics().iter().collect();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, diagnostic_codes::IDENTIFIER_NEVER_USED);
    assert_eq!(diags[0].range, x.range());
}

#[test]
fn test_read_of_undefined_binding_records_no_distance() {
    let fx = Fx::new();
    let x = fx.ident("x");
    let read = fx.ident("x");
    let mut resolver = ResolverState::new();
    resolver.with_scope(|r| {
        r.declare(&x);
        r.resolve_identifier(&read, IdentOp::Read);
    });

    assert!(resolver.distances().is_empty());
    let codes: Vec<_> = resolver.diagnostics().iter().map(|d| d.code).collect();
    // Marked used by the failed read, so only the read is reported.
    assert_eq!(codes, vec![diagnostic_codes::IDENTIFIER_NOT_DEFINED]);
}

#[test]
fn test_write_to_undefined_binding_records_distance() {
    let fx = Fx::new();
    let x = fx.ident("x");
    let write = fx.ident("x");
    let mut resolver = ResolverState::new();
    resolver.with_scope(|r| {
        r.declare(&x);
        r.with_scope(|r| r.resolve_identifier(&write, IdentOp::Write));
    });

    assert!(resolver.diagnostics().is_empty());
    assert_eq!(resolver.distances().get(&write), Some(&1));
}

#[test]
fn test_define_searches_outward() {
    let fx = Fx::new();
    let x = fx.ident("x");
    let read = fx.ident("x");
    let mut resolver = ResolverState::new();
    resolver.with_scope(|r| {
        r.declare(&x);
        r.with_scope(|r| {
            r.define(&x);
            r.resolve_identifier(&read, IdentOp::Read);
        });
    });

    assert!(resolver.diagnostics().is_empty());
    assert_eq!(resolver.distances().get(&read), Some(&1));
}

#[test]
fn test_define_of_undeclared_name_is_a_no_op() {
    let fx = Fx::new();
    let mut resolver = ResolverState::new();
    resolver.with_scope(|r| r.define(&fx.ident("ghost")));
    assert!(resolver.diagnostics().is_empty());
}

#[test]
fn test_unused_reporting_can_be_disabled() {
    let fx = Fx::new();
    let mut resolver = ResolverState::with_options(ResolverOptions {
        report_unused_bindings: false,
    });
    resolver.resolve_program(&program(vec![block(vec![var(&fx.ident("x"))])]));
    assert!(resolver.diagnostics().is_empty());
    assert!(!resolver.options().report_unused_bindings);
}

#[test]
fn test_reset_clears_previous_run() {
    let fx = Fx::new();
    let x = fx.ident("x");
    let read = fx.ident("x");
    let unused = fx.ident("y");
    let prog = program(vec![block(vec![
        var_init(&x, num(1.0)),
        var(&unused),
        print(ident(&read)),
    ])]);

    let mut resolver = ResolverState::new();
    resolver.resolve_program(&prog);
    assert_eq!(resolver.distances().len(), 1);
    assert_eq!(resolver.diagnostics().len(), 1);

    resolver.reset();
    assert!(resolver.distances().is_empty());
    assert!(resolver.diagnostics().is_empty());

    resolver.resolve_program(&prog);
    assert_eq!(resolver.distances().get(&read), Some(&0));
    assert_eq!(resolver.diagnostics().len(), 1);
}

#[test]
fn test_into_result_returns_distances_when_clean() {
    let fx = Fx::new();
    let x = fx.ident("x");
    let read = fx.ident("x");
    let mut resolver = ResolverState::new();
    resolver.resolve_program(&program(vec![block(vec![
        var_init(&x, num(1.0)),
        print(ident(&read)),
    ])]));
    let map = resolver.into_result().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map[&read], 0);
}
