use std::rc::Rc;

use crate::{
    binder::Binder,
    errors::errors::{Error, ErrorKind},
    lexer::lexer::tokenize,
    parser::parser::parse,
    resolver::Resolver,
    types::Type,
};

use super::type_check;

fn check(source: &str) -> Result<(), Error> {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string()))?;
    let block = parse(tokens, Rc::new("test.lang".to_string())).1?;

    let mut resolver = Resolver::new();
    resolver.define_global("print");
    let distances = resolver.resolve(&block)?;

    let mut binder = Binder::new();
    binder.define_symbol(
        "print",
        Type::function(vec![("value".to_string(), Type::any())], Type::void()),
    );
    let statements = binder.bind(&block, distances)?;

    type_check(&statements)
}

fn check_error(source: &str) -> Error {
    match check(source) {
        Ok(()) => panic!("expected `{}` to fail type checking", source),
        Err(error) => error,
    }
}

#[test]
fn test_initializer_mismatch() {
    let error = check_error("string a = 2;");

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(error.get_kind(), ErrorKind::Type);
    let message = error.to_string();
    assert!(message.contains("`string`"), "{}", message);
    assert!(message.contains("`int`"), "{}", message);
    assert_eq!(error.get_position().0, 11);
}

#[test]
fn test_assignment_mismatch() {
    let error = check_error("int x = 1; x = 'abc';");

    assert_eq!(error.get_error_name(), "TypeMatchError");
    let message = error.to_string();
    assert!(message.contains("expected `int`"), "{}", message);
    assert!(message.contains("received `string`"), "{}", message);
}

#[test]
fn test_any_declaration_narrows_to_initializer() {
    let error = check_error("any a = 5; string s = a;");

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert!(error.to_string().contains("received `int`"));
    assert!(check("any a = 5; int b = a + 1;").is_ok());
}

#[test]
fn test_empty_array_fits_any_array() {
    assert!(check("int[] nums = [];").is_ok());
    assert!(check("int[] nums = [1, 2]; string[] words = ['a'];").is_ok());
}

#[test]
fn test_array_element_mismatch() {
    let error = check_error("int[] nums = [1, 'a'];");

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert!(error.to_string().contains("Array<int | string>"));
}

#[test]
fn test_union_declarations() {
    assert!(check("int | string v = 1; v = 'a';").is_ok());
    assert!(check("int | undefined maybe = undefined; maybe = 3;").is_ok());
}

#[test]
fn test_literal_union_alias() {
    assert!(check("type Dir = 'up' | 'down'; Dir d = 'up'; d = 'down';").is_ok());

    let error = check_error("type Dir = 'up' | 'down'; Dir d = 'up'; d = 'left';");
    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert!(error.to_string().contains("received `string`"));
}

#[test]
fn test_interface_width_subtyping() {
    let source = "interface Point { x: int, y: int } \
                  Point p = { x: 1, y: 2, label: 'origin' };";
    assert!(check(source).is_ok());

    let error = check_error("interface Point { x: int, y: int } Point q = { x: 1 };");
    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert!(error.to_string().contains("expected `Point`"));
}

#[test]
fn test_call_arguments() {
    let add = "fn add(int a, int b) :: int { return a + b; } ";
    assert!(check(&format!("{}add(1, 2);", add)).is_ok());

    let error = check_error(&format!("{}add(1, 'b');", add));
    assert_eq!(error.get_error_name(), "ArgumentTypeMatchError");

    let error = check_error(&format!("{}add(1);", add));
    assert_eq!(error.get_error_name(), "MissingArguments");

    let error = check_error(&format!("{}add(1, 2, 3);", add));
    assert_eq!(error.get_error_name(), "UnexpectedArguments");
}

#[test]
fn test_function_values() {
    let source = "type Op = (int a, int b) :: int; \
                  fn add(int a, int b) :: int { return a + b; } \
                  Op op = add; \
                  op(1, 2);";
    assert!(check(source).is_ok());
}

#[test]
fn test_return_types() {
    assert!(check("fn f() :: int { return 1; }").is_ok());

    let error = check_error("fn f() :: int { return 'a'; }");
    assert_eq!(error.get_error_name(), "ReturnTypeMatchError");

    let error = check_error("fn f() :: int { return; }");
    assert_eq!(error.get_error_name(), "ReturnTypeMatchError");
    assert!(error.to_string().contains("received `void`"));
}

#[test]
fn test_field_initializers() {
    assert!(check("class C { int x = 1; }").is_ok());

    let error = check_error("class C { int x = 'a'; }");
    assert_eq!(error.get_error_name(), "FieldTypeMatchError");
}

#[test]
fn test_constructor_arguments() {
    let class = "class P { int x = 0; fn constructor(int x) { this.x = x; } } ";
    assert!(check(&format!("{}P p = new P(1);", class)).is_ok());

    let error = check_error(&format!("{}new P('a');", class));
    assert_eq!(error.get_error_name(), "ArgumentTypeMatchError");

    let error = check_error("class Q { } new Q(1);");
    assert_eq!(error.get_error_name(), "UnexpectedArguments");
}

#[test]
fn test_compound_assignment_result() {
    assert!(check("string s = 'a'; s += 1;").is_ok());

    let error = check_error("int x = 1; x += 2.5;");
    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert!(error.to_string().contains("received `float`"));
}

#[test]
fn test_incomparable_operands() {
    assert!(check("1 == 2; 'a' != 'b'; 1 == null;").is_ok());

    let error = check_error("1 == 'a';");
    assert_eq!(error.get_error_name(), "IncomparableOperands");
}

#[test]
fn test_array_index_type() {
    assert!(check("int[] a = [1]; a[0];").is_ok());

    let error = check_error("int[] a = [1]; a['x'];");
    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert!(error.to_string().contains("expected `int`"));
}

#[test]
fn test_checks_nested_bodies() {
    let error = check_error("while true { if true { int x = 'a'; } }");
    assert_eq!(error.get_error_name(), "TypeMatchError");

    let error = check_error("for i in 0..3 { string s = i; }");
    assert_eq!(error.get_error_name(), "TypeMatchError");
}

#[test]
fn test_well_typed_program() {
    let source = "
        class Counter {
            private int count = 0;
            fn increment() :: int {
                this.count += 1;
                return this.count;
            }
        }

        Counter counter = new Counter();
        int[] totals = [];
        for i in 0..10 {
            if i % 2 == 0 {
                totals.push(counter.increment());
            }
        }
        print(totals.length);
    ";
    assert!(check(source).is_ok());
}
