//! Unit tests for the parser module.
//!
//! - Variable declarations in their three forms
//! - Function and class declarations
//! - Expression precedence and associativity
//! - Literals, object and array literals
//! - Type references
//! - Control flow statements

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{AccessKey, ObjectKey},
        statements::{BlockStmt, MemberModifiers},
        types::TypeRef,
    },
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    types::LiteralValue,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<BlockStmt, Error> {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string())).unwrap();
    let (_, result) = parse(tokens, Rc::new("test.lang".to_string()));
    result
}

fn single_expr(source: &str) -> Expr {
    let block = parse_source(source).unwrap();
    match block.body.into_iter().next() {
        Some(Stmt::Expression(stmt)) => stmt.expression,
        other => panic!("expected an expression statement, found {:?}", other),
    }
}

#[test]
fn test_parse_typed_declaration() {
    let block = parse_source("int x = 42;").unwrap();

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected a declaration");
    };
    assert_eq!(decl.identifier, "x");
    assert!(!decl.is_constant);
    assert!(matches!(
        &decl.explicit_type,
        Some(TypeRef::Named { name, .. }) if name == "int"
    ));
    assert!(matches!(
        &decl.assigned_value,
        Some(Expr::Literal(literal)) if literal.value == LiteralValue::Int(42)
    ));
}

#[test]
fn test_parse_let_declaration() {
    let block = parse_source("let x = 'abc';").unwrap();

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected a declaration");
    };
    assert!(decl.explicit_type.is_none());
}

#[test]
fn test_parse_const_declaration() {
    let block = parse_source("const float PI = 3.14;").unwrap();

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected a declaration");
    };
    assert!(decl.is_constant);
    assert_eq!(decl.identifier, "PI");
}

#[test]
fn test_parse_const_requires_initializer() {
    let error = parse_source("const int x;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_array_declaration() {
    let block = parse_source("int[] nums = [];").unwrap();

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected a declaration");
    };
    assert!(matches!(&decl.explicit_type, Some(TypeRef::Array { .. })));
    assert!(matches!(
        &decl.assigned_value,
        Some(Expr::Array(array)) if array.elements.is_empty()
    ));
}

#[test]
fn test_parse_union_declaration() {
    let block = parse_source("int | string value = 1;").unwrap();

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected a declaration");
    };
    assert!(matches!(
        &decl.explicit_type,
        Some(TypeRef::Union(members, _)) if members.len() == 2
    ));
}

#[test]
fn test_parse_generic_declaration() {
    let block = parse_source("Array<string> names = [];").unwrap();

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected a declaration");
    };
    assert!(matches!(
        &decl.explicit_type,
        Some(TypeRef::Named { name, type_arguments, .. })
            if name == "Array" && type_arguments.len() == 1
    ));
}

#[test]
fn test_parse_function_declaration() {
    let block = parse_source("fn add(int a, int b) :: int { return a + b; }").unwrap();

    let Stmt::FnDecl(function) = &block.body[0] else {
        panic!("expected a function");
    };
    assert_eq!(function.identifier, "add");
    assert_eq!(function.parameters.len(), 2);
    assert_eq!(function.parameters[1].name, "b");
    assert!(function.return_type.is_some());
    assert!(matches!(function.body.body[0], Stmt::Return(_)));
}

#[test]
fn test_parse_function_without_return_annotation() {
    let block = parse_source("fn greet() { print('hi'); }").unwrap();

    let Stmt::FnDecl(function) = &block.body[0] else {
        panic!("expected a function");
    };
    assert!(function.return_type.is_none());
}

#[test]
fn test_parse_class_declaration() {
    let source = "class Point extends Base mixin A, B {
        private int x = 0;
        static const string label = 'p';
        fn constructor(int x) { this.x = x; }
    }";
    let block = parse_source(source).unwrap();

    let Stmt::ClassDecl(class) = &block.body[0] else {
        panic!("expected a class");
    };
    assert_eq!(class.name, "Point");
    assert_eq!(class.superclass.as_ref().map(|s| s.0.as_str()), Some("Base"));
    assert_eq!(class.mixins.len(), 2);
    assert_eq!(class.fields.len(), 2);
    assert_eq!(class.fields[0].modifiers, MemberModifiers::PRIVATE);
    assert_eq!(
        class.fields[1].modifiers,
        MemberModifiers::STATIC | MemberModifiers::CONST
    );
    assert_eq!(class.methods[0].function.identifier, "constructor");
}

#[test]
fn test_class_name_becomes_a_type_name() {
    let block = parse_source("class Point { int x; } Point p = new Point();").unwrap();
    assert!(matches!(&block.body[1], Stmt::VarDecl(decl) if decl.identifier == "p"));
}

#[test]
fn test_parse_interface_declaration() {
    let block = parse_source("interface User { const id: int, name: string, [string]: any }").unwrap();

    let Stmt::TypeDecl(decl) = &block.body[0] else {
        panic!("expected a type declaration");
    };
    let TypeRef::Interface {
        properties,
        index_signatures,
        ..
    } = &decl.type_ref
    else {
        panic!("expected an interface");
    };
    assert_eq!(properties.len(), 2);
    assert!(!properties[0].mutable);
    assert!(properties[1].mutable);
    assert_eq!(index_signatures[0].key, "string");
}

#[test]
fn test_parse_type_alias_with_function_type() {
    let block = parse_source("type Handler = (int code, string message) :: bool;").unwrap();

    let Stmt::TypeDecl(decl) = &block.body[0] else {
        panic!("expected a type declaration");
    };
    assert!(matches!(
        &decl.type_ref,
        TypeRef::Function { parameters, .. } if parameters.len() == 2
    ));
}

#[test]
fn test_parse_literal_types() {
    let block = parse_source("type Mode = 'on' | 'off' | 1 | true;").unwrap();

    let Stmt::TypeDecl(decl) = &block.body[0] else {
        panic!("expected a type declaration");
    };
    let TypeRef::Union(members, _) = &decl.type_ref else {
        panic!("expected a union");
    };
    assert_eq!(members.len(), 4);
    assert!(matches!(&members[0], TypeRef::Literal(LiteralValue::Str(s), _) if s == "on"));
}

#[test]
fn test_parse_precedence() {
    let expr = single_expr("1 + 2 * 3;");

    let Expr::Binary(binary) = expr else {
        panic!("expected a binary expression");
    };
    assert_eq!(binary.operator.kind, TokenKind::Plus);
    assert!(matches!(*binary.right, Expr::Binary(ref right) if right.operator.kind == TokenKind::Star));
}

#[test]
fn test_parse_left_associative_subtraction() {
    let expr = single_expr("10 - 4 - 3;");

    let Expr::Binary(binary) = expr else {
        panic!("expected a binary expression");
    };
    assert!(matches!(*binary.left, Expr::Binary(_)));
    assert!(matches!(*binary.right, Expr::Literal(_)));
}

#[test]
fn test_parse_right_associative_assignment() {
    let expr = single_expr("a = b = 1;");

    let Expr::Assignment(assignment) = expr else {
        panic!("expected an assignment");
    };
    assert!(matches!(*assignment.assignee, Expr::Symbol(ref s) if s.value == "a"));
    assert!(matches!(*assignment.value, Expr::Assignment(_)));
}

#[test]
fn test_parse_prefix_binds_tighter_than_binary() {
    let expr = single_expr("-a + b;");

    let Expr::Binary(binary) = expr else {
        panic!("expected a binary expression");
    };
    assert!(matches!(*binary.left, Expr::Prefix(_)));
}

#[test]
fn test_parse_range() {
    let expr = single_expr("0..n + 1;");

    let Expr::Binary(binary) = expr else {
        panic!("expected a binary expression");
    };
    assert_eq!(binary.operator.kind, TokenKind::DotDot);
    assert!(matches!(*binary.right, Expr::Binary(_)));
}

#[test]
fn test_parse_member_index_and_call() {
    let expr = single_expr("user.tags[0].upper();");

    let Expr::Call(call) = expr else {
        panic!("expected a call");
    };
    let Expr::Access(upper) = *call.callee else {
        panic!("expected member access");
    };
    assert!(matches!(&upper.key, AccessKey::Name(name, _) if name == "upper"));
    let Expr::Access(index) = *upper.object else {
        panic!("expected index access");
    };
    assert!(matches!(&index.key, AccessKey::Computed(_)));
}

#[test]
fn test_parse_object_literal() {
    let block = parse_source("let o = { name: 'a', \"quoted\": 1, [key]: true };").unwrap();

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected a declaration");
    };
    let Some(Expr::Object(object)) = &decl.assigned_value else {
        panic!("expected an object literal");
    };
    assert_eq!(object.properties.len(), 3);
    assert!(matches!(&object.properties[1].key, ObjectKey::Named(name, _) if name == "quoted"));
    assert!(matches!(&object.properties[2].key, ObjectKey::Computed(_)));
}

#[test]
fn test_parse_new_expression() {
    let expr = single_expr("new Point(1, 2);");

    let Expr::New(new) = expr else {
        panic!("expected a new expression");
    };
    assert_eq!(new.class.value, "Point");
    assert_eq!(new.arguments.len(), 2);
}

#[test]
fn test_parse_control_flow() {
    let source = "
        while x < 10 { x += 1; if x == 5 { break; } else { continue; } }
        for item in items { print(item); }
    ";
    let block = parse_source(source).unwrap();

    assert!(matches!(block.body[0], Stmt::While(_)));
    let Stmt::For(for_stmt) = &block.body[1] else {
        panic!("expected a for loop");
    };
    assert_eq!(for_stmt.variable, "item");
}

#[test]
fn test_node_ids_are_unique() {
    let expr = single_expr("a + b;");

    let Expr::Binary(binary) = expr else {
        panic!("expected a binary expression");
    };
    let ids = [binary.id, binary.left.get_id(), binary.right.get_id()];
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}

#[test]
fn test_parse_missing_semicolon() {
    let error = parse_source("print(1)").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_unexpected_token_position() {
    let error = parse_source("int x = ;").unwrap_err();
    assert_eq!(error.get_position().0, 8);
}
