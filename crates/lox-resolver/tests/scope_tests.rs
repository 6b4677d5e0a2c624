use crate::fixtures::Fx;
use crate::scope::{Scope, ScopeStack};

#[test]
fn test_scope_declare_keeps_first_binding() {
    let fx = Fx::new();
    let first = fx.ident("x");
    let second = fx.ident("x");

    let mut scope = Scope::new();
    assert!(scope.declare(&first));
    assert!(!scope.declare(&second));
    assert_eq!(scope.len(), 1);
    assert_eq!(scope.get("x").unwrap().token, first);
}

#[test]
fn test_new_binding_is_undefined_and_unused() {
    let fx = Fx::new();
    let mut scope = Scope::new();
    scope.declare(&fx.ident("a"));
    let binding = scope.get("a").unwrap();
    assert!(!binding.defined);
    assert!(!binding.used);
    assert!(scope.is_declared("a"));
    assert!(!scope.is_declared("b"));
}

#[test]
fn test_scope_unused_lists_only_untouched_bindings() {
    let fx = Fx::new();
    let a = fx.ident("a");
    let b = fx.ident("b");
    let mut scope = Scope::new();
    scope.declare(&a);
    scope.declare(&b);
    scope.get_mut("a").unwrap().used = true;

    let unused: Vec<_> = scope.unused().cloned().collect();
    assert_eq!(unused, vec![b]);
}

#[test]
fn test_stack_find_reports_distance_from_innermost() {
    let fx = Fx::new();
    let mut stack = ScopeStack::new();
    assert!(stack.innermost_mut().is_none());

    stack.push();
    stack.innermost_mut().unwrap().declare(&fx.ident("outer"));
    stack.push();
    stack.push();
    stack.innermost_mut().unwrap().declare(&fx.ident("inner"));
    assert_eq!(stack.len(), 3);

    let (distance, binding) = stack.find_mut("outer").unwrap();
    assert_eq!(distance, 2);
    assert_eq!(binding.token.lexeme, "outer");
    assert_eq!(stack.find_mut("inner").unwrap().0, 0);
    assert!(stack.find_mut("missing").is_none());
}

#[test]
fn test_stack_find_prefers_innermost_shadowing_binding() {
    let fx = Fx::new();
    let outer = fx.ident("x");
    let inner = fx.ident("x");
    let mut stack = ScopeStack::new();
    stack.push();
    stack.innermost_mut().unwrap().declare(&outer);
    stack.push();
    stack.innermost_mut().unwrap().declare(&inner);

    let (distance, binding) = stack.find_mut("x").unwrap();
    assert_eq!(distance, 0);
    assert_eq!(binding.token, inner);

    let popped = stack.pop().unwrap();
    assert!(popped.is_declared("x"));
    let (distance, binding) = stack.find_mut("x").unwrap();
    assert_eq!(distance, 0);
    assert_eq!(binding.token, outer);
}
