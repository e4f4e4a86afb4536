use crate::{lexer::tokens::Token, types::LiteralValue, Span};

use super::ast::{Expr, NodeId};

// LITERALS

/// Literal Expression
/// A number, string or boolean literal.
#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Null,
    Undefined,
}

/// `null` or `undefined`.
#[derive(Debug, Clone)]
pub struct KeywordExpr {
    pub keyword: Keyword,
    pub id: NodeId,
    pub span: Span,
}

/// Symbol Expression
/// Represents an identifier in the AST. This includes functions, classes and `this`.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub id: NodeId,
    pub span: Span,
}

/// `[a, b, c]`
#[derive(Debug, Clone)]
pub struct ArrayLiteralExpr {
    pub elements: Vec<Expr>,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum ObjectKey {
    /// `name: value` or `"name": value`
    Named(String, Span),
    /// `[expr]: value`
    Computed(Expr),
}

#[derive(Debug, Clone)]
pub struct ObjectProperty {
    pub key: ObjectKey,
    pub value: Expr,
}

/// `{ name: value, [key]: value }`
#[derive(Debug, Clone)]
pub struct ObjectLiteralExpr {
    pub properties: Vec<ObjectProperty>,
    pub id: NodeId,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// Arithmetic, comparison, logical and range operations (`a + b`, `0..10`).
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub id: NodeId,
    pub span: Span,
}

/// Prefix Expression
/// `-a`, `!a`, `++a`, `--a`
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: Box<Expr>,
    pub id: NodeId,
    pub span: Span,
}

/// Assignment Expression
/// `a = b`, and the compound forms `a += b`, `a -= b`, `a *= b`, `a /= b`.
#[derive(Debug, Clone)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub operator: Token,
    pub value: Box<Expr>,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum AccessKey {
    /// `object.name`
    Name(String, Span),
    /// `object[expr]`
    Computed(Box<Expr>),
}

/// Member and index access.
#[derive(Debug, Clone)]
pub struct AccessExpr {
    pub object: Box<Expr>,
    pub key: AccessKey,
    pub id: NodeId,
    pub span: Span,
}

/// Call Expression
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub id: NodeId,
    pub span: Span,
}

/// `new Point(1, 2)`
#[derive(Debug, Clone)]
pub struct NewExpr {
    pub class: SymbolExpr,
    pub arguments: Vec<Expr>,
    pub id: NodeId,
    pub span: Span,
}
