use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{
        ast::{Expr, NodeId, Stmt},
        statements::BlockStmt,
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

use super::Resolver;

fn parse_source(source: &str) -> BlockStmt {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string())).unwrap();
    parse(tokens, Rc::new("test.lang".to_string())).1.unwrap()
}

fn resolve(source: &str) -> Result<HashMap<NodeId, usize>, Error> {
    let mut resolver = Resolver::new();
    resolver.define_global("print");
    resolver.resolve(&parse_source(source))
}

#[test]
fn test_resolves_global_read() {
    let block = parse_source("int x = 1; print(x);");
    let mut resolver = Resolver::new();
    resolver.define_global("print");
    let distances = resolver.resolve(&block).unwrap();

    let Stmt::Expression(stmt) = &block.body[1] else {
        panic!("expected an expression statement");
    };
    let Expr::Call(call) = &stmt.expression else {
        panic!("expected a call");
    };
    assert_eq!(distances.get(&call.callee.get_id()), Some(&0));
    assert_eq!(distances.get(&call.arguments[0].get_id()), Some(&0));
}

#[test]
fn test_distance_counts_enclosing_scopes() {
    let block = parse_source("int x = 1; { { x; } }");
    let distances = Resolver::new().resolve(&block).unwrap();

    assert_eq!(distances.values().copied().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn test_function_parameters_share_body_scope() {
    let distances = resolve("fn add(int a, int b) :: int { int c = a; return c + b; }").unwrap();

    assert_eq!(distances.len(), 3);
    assert!(distances.values().all(|distance| *distance == 0));
}

#[test]
fn test_recursive_function() {
    assert!(resolve("fn f(int n) :: int { return f(n - 1); }").is_ok());
}

#[test]
fn test_duplicate_declaration() {
    let error = resolve("int y = 1; int y = 2;").unwrap_err();

    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
    assert!(error.to_string().contains("`y`"));
    assert_eq!(error.get_position().0, 11);
}

#[test]
fn test_shadowing_in_inner_scope_is_allowed() {
    assert!(resolve("int y = 1; { int y = 2; }").is_ok());
}

#[test]
fn test_duplicate_parameter() {
    let error = resolve("fn f(int a, int a) {}").unwrap_err();
    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
}

#[test]
fn test_read_in_own_initializer() {
    let error = resolve("{ int x = x + 1; }").unwrap_err();
    assert_eq!(error.get_error_name(), "ReadInOwnInitializer");
}

#[test]
fn test_undeclared_variable() {
    let error = resolve("print(missing);").unwrap_err();

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_return_outside_function() {
    let error = resolve("return 1;").unwrap_err();
    assert_eq!(error.get_error_name(), "ReturnOutsideFunction");
}

#[test]
fn test_loop_control() {
    assert!(resolve("while true { break; }").is_ok());
    assert!(resolve("for i in 0..3 { continue; }").is_ok());

    let error = resolve("if true { break; }").unwrap_err();
    assert_eq!(error.get_error_name(), "LoopControlOutsideLoop");

    // A function body is not inside the loop that declares it
    let error = resolve("while true { fn f() { continue; } }").unwrap_err();
    assert_eq!(error.get_error_name(), "LoopControlOutsideLoop");
}

#[test]
fn test_for_variable_is_scoped_to_loop() {
    assert!(resolve("for i in 0..3 { print(i); }").is_ok());

    let error = resolve("for i in 0..3 { } print(i);").unwrap_err();
    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_this_inside_class() {
    let source = "class Counter { int count = 0; fn increment() { this.count += 1; } }";
    let distances = resolve(source).unwrap();

    // `this` sits in the class scope, one out from the method scope
    assert_eq!(distances.values().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_this_outside_class() {
    let error = resolve("print(this);").unwrap_err();
    assert_eq!(error.get_error_name(), "ThisOutsideClass");
}

#[test]
fn test_new_resolves_class_name() {
    assert!(resolve("class Point { } Point p = new Point();").is_ok());

    let error = resolve("let p = new Missing();").unwrap_err();
    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_failed_unit_leaves_globals_usable() {
    let mut resolver = Resolver::new();
    let globals = resolver.globals();

    assert!(resolver.resolve(&parse_source("int a = 1; a = b;")).is_err());
    resolver.restore_globals(globals);

    assert!(resolver.resolve(&parse_source("int a = 2;")).is_ok());
}
