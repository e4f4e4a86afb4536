use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{
        AccessExpr, ArrayLiteralExpr, AssignmentExpr, BinaryExpr, CallExpr, KeywordExpr,
        LiteralExpr, NewExpr, ObjectLiteralExpr, PrefixExpr, SymbolExpr,
    },
    statements::{
        BlockStmt, BreakStmt, ClassDeclStmt, ExpressionStmt, FnDeclStmt, ForStmt, IfStmt,
        ReturnStmt, TypeDeclStmt, VarDeclStmt, WhileStmt,
    },
};

/// Identity of an expression node.
///
/// Handed out by the parser; the resolver keys scope distances by it and the
/// binder keys its node-type cache by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Statements
#[derive(Debug, Clone)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Block(BlockStmt),
    VarDecl(VarDeclStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    FnDecl(FnDeclStmt),
    Return(ReturnStmt),
    Break(BreakStmt),
    ClassDecl(ClassDeclStmt),
    TypeDecl(TypeDeclStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::For(stmt) => &stmt.span,
            Stmt::FnDecl(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Break(stmt) => &stmt.span,
            Stmt::ClassDecl(stmt) => &stmt.span,
            Stmt::TypeDecl(stmt) => &stmt.span,
        }
    }
}

/// Expressions
#[derive(Debug, Clone)]
pub enum Expr {
    Literal(LiteralExpr),
    Keyword(KeywordExpr),
    Symbol(SymbolExpr),
    Array(ArrayLiteralExpr),
    Object(ObjectLiteralExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Assignment(AssignmentExpr),
    Access(AccessExpr),
    Call(CallExpr),
    New(NewExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(expr) => &expr.span,
            Expr::Keyword(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Array(expr) => &expr.span,
            Expr::Object(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::Access(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::New(expr) => &expr.span,
        }
    }

    pub fn get_id(&self) -> NodeId {
        match self {
            Expr::Literal(expr) => expr.id,
            Expr::Keyword(expr) => expr.id,
            Expr::Symbol(expr) => expr.id,
            Expr::Array(expr) => expr.id,
            Expr::Object(expr) => expr.id,
            Expr::Binary(expr) => expr.id,
            Expr::Prefix(expr) => expr.id,
            Expr::Assignment(expr) => expr.id,
            Expr::Access(expr) => expr.id,
            Expr::Call(expr) => expr.id,
            Expr::New(expr) => expr.id,
        }
    }
}
