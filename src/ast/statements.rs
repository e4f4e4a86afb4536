use std::slice::Iter;

use bitflags::bitflags;

use crate::Span;

use super::{ast::Expr, ast::Stmt, types::TypeRef};

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

/// `int x = 1;`, `const string s = "a";`, `let v = 2;`
///
/// `explicit_type` is `None` for `let`, which declares `any`.
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub is_constant: bool,
    pub assigned_value: Option<Expr>,
    pub explicit_type: Option<TypeRef>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

/// `for item in items { ... }`
#[derive(Debug, Clone)]
pub struct ForStmt {
    pub variable: String,
    pub iterable: Expr,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub type_ref: TypeRef,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeRef>,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// `break;` or `continue;`
#[derive(Debug, Clone)]
pub struct BreakStmt {
    pub is_continue: bool,
    pub span: Span,
}

bitflags! {
    /// Modifiers written in front of a class member.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemberModifiers: u8 {
        const PUBLIC = 0b0001;
        const PRIVATE = 0b0010;
        const STATIC = 0b0100;
        const CONST = 0b1000;
    }
}

#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub name: String,
    pub modifiers: MemberModifiers,
    pub type_ref: TypeRef,
    pub initializer: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub modifiers: MemberModifiers,
    pub function: FnDeclStmt,
}

#[derive(Debug, Clone)]
pub struct ClassDeclStmt {
    pub name: String,
    pub superclass: Option<(String, Span)>,
    pub mixins: Vec<(String, Span)>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
    pub span: Span,
}

/// `type Name = T;` and `interface Name { ... }`
#[derive(Debug, Clone)]
pub struct TypeDeclStmt {
    pub name: String,
    pub type_ref: TypeRef,
    pub span: Span,
}
