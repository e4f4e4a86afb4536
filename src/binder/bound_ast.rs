//! The bound tree.
//!
//! One bound node per syntax node. Expressions carry their resolved [`Type`];
//! statements carry the union of the `return` types they contain, if any.

use crate::{
    ast::{ast::NodeId, expressions::Keyword},
    types::{ClassType, FunctionType, InterfaceType, LiteralValue, Type},
    Span,
};

use super::operators::{BoundBinaryOperator, BoundUnaryOperator};

#[derive(Debug, Clone, PartialEq)]
pub struct BoundExpr {
    pub kind: BoundExprKind,
    pub ty: Type,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundObjectKey {
    Named(String),
    Computed(BoundExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundAccessKey {
    Name(String),
    Computed(Box<BoundExpr>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundExprKind {
    Literal(LiteralValue),
    Keyword(Keyword),
    /// `distance` is how many scopes out the binding lives
    Symbol {
        name: String,
        distance: Option<usize>,
    },
    Array(Vec<BoundExpr>),
    Object(Vec<(BoundObjectKey, BoundExpr)>),
    Binary {
        left: Box<BoundExpr>,
        operator: &'static BoundBinaryOperator,
        right: Box<BoundExpr>,
    },
    Unary {
        operator: &'static BoundUnaryOperator,
        operand: Box<BoundExpr>,
    },
    /// `operator` is set for compound assignments
    Assignment {
        target: Box<BoundExpr>,
        operator: Option<&'static BoundBinaryOperator>,
        value: Box<BoundExpr>,
    },
    Access {
        object: Box<BoundExpr>,
        key: BoundAccessKey,
        is_extension: bool,
    },
    Call {
        callee: Box<BoundExpr>,
        arguments: Vec<BoundExpr>,
    },
    New {
        class: ClassType,
        arguments: Vec<BoundExpr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundStmt {
    pub kind: BoundStmtKind,
    pub ty: Option<Type>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundFunction {
    pub name: String,
    pub function_type: FunctionType,
    pub body: Vec<BoundStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundField {
    pub name: String,
    pub ty: Type,
    pub initializer: Option<BoundExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundStmtKind {
    Expression(BoundExpr),
    Block(Vec<BoundStmt>),
    VarDecl {
        name: String,
        declared_type: Type,
        initializer: Option<BoundExpr>,
        is_constant: bool,
    },
    If {
        condition: BoundExpr,
        then_body: Box<BoundStmt>,
        else_body: Option<Box<BoundStmt>>,
    },
    While {
        condition: BoundExpr,
        body: Box<BoundStmt>,
    },
    For {
        variable: String,
        element_type: Type,
        iterable: BoundExpr,
        body: Vec<BoundStmt>,
    },
    FnDecl(BoundFunction),
    Return(Option<BoundExpr>),
    Break {
        is_continue: bool,
    },
    ClassDecl {
        class: ClassType,
        fields: Vec<BoundField>,
        methods: Vec<BoundFunction>,
    },
    TypeDecl {
        name: String,
        ty: Type,
    },
}

impl BoundStmt {
    /// One line naming what the statement declares or evaluates, and its type.
    pub fn summary(&self) -> String {
        match &self.kind {
            BoundStmtKind::Expression(expr) => format!("expression: {}", expr.ty),
            BoundStmtKind::VarDecl {
                name,
                declared_type,
                is_constant,
                ..
            } => {
                let keyword = if *is_constant { "const" } else { "var" };
                format!("{} {}: {}", keyword, name, declared_type)
            }
            BoundStmtKind::FnDecl(function) => format!(
                "fn {}: {}",
                function.name,
                Type::Function(function.function_type.clone())
            ),
            BoundStmtKind::ClassDecl { class, .. } => {
                let members = class
                    .members
                    .iter()
                    .map(|(name, member)| format!("{}: {}", name, member.value_type))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("class {} {{ {} }}", class.name, members)
            }
            BoundStmtKind::TypeDecl { name, ty } => match ty {
                Type::Interface(interface) => {
                    let shape = InterfaceType {
                        name: None,
                        ..interface.clone()
                    };
                    format!("type {} = {}", name, shape)
                }
                other => format!("type {} = {}", name, other),
            },
            BoundStmtKind::Block(_)
            | BoundStmtKind::If { .. }
            | BoundStmtKind::While { .. }
            | BoundStmtKind::For { .. }
            | BoundStmtKind::Return(_)
            | BoundStmtKind::Break { .. } => match &self.ty {
                Some(ty) => format!("statement returning {}", ty),
                None => String::from("statement"),
            },
        }
    }
}

/// Union of the `Some` types in `types`, `None` if there are none.
pub fn union_of_returns<'a>(types: impl IntoIterator<Item = &'a Option<Type>>) -> Option<Type> {
    let returns: Vec<Type> = types.into_iter().flatten().cloned().collect();
    if returns.is_empty() {
        None
    } else {
        Some(Type::union(returns))
    }
}
