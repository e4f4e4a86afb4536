//! Type references as they appear in source.
//!
//! A `TypeRef` is purely syntactic: names are not checked here. The binder
//! converts every reference into a semantic [`crate::types::Type`] through
//! [`crate::types::conversion::convert_type_ref`] before using it.

use crate::{types::LiteralValue, Span};

#[derive(Debug, Clone)]
pub struct PropertyRef {
    pub name: String,
    pub type_ref: TypeRef,
    pub mutable: bool,
}

/// `[string]: T` inside an interface body. The key is kept as written so the
/// conversion can reject anything other than `string` and `int`.
#[derive(Debug, Clone)]
pub struct IndexSignatureRef {
    pub key: String,
    pub key_span: Span,
    pub value: TypeRef,
}

#[derive(Debug, Clone)]
pub struct ParameterRef {
    pub name: String,
    pub type_ref: TypeRef,
}

#[derive(Debug, Clone)]
pub enum TypeRef {
    /// `int`, `Point`, `Array<string>`
    Named {
        name: String,
        type_arguments: Vec<TypeRef>,
        span: Span,
    },
    /// `T[]`
    Array { element: Box<TypeRef>, span: Span },
    /// `A | B`
    Union(Vec<TypeRef>, Span),
    /// `A & B`
    Intersection(Vec<TypeRef>, Span),
    /// `{ name: string, const id: int, [string]: any }`
    Interface {
        properties: Vec<PropertyRef>,
        index_signatures: Vec<IndexSignatureRef>,
        span: Span,
    },
    /// `(int a, string b) :: bool`
    Function {
        parameters: Vec<ParameterRef>,
        return_type: Box<TypeRef>,
        span: Span,
    },
    /// `5`, `"abc"`, `true`
    Literal(LiteralValue, Span),
}

impl TypeRef {
    pub fn get_span(&self) -> &Span {
        match self {
            TypeRef::Named { span, .. } => span,
            TypeRef::Array { span, .. } => span,
            TypeRef::Union(_, span) => span,
            TypeRef::Intersection(_, span) => span,
            TypeRef::Interface { span, .. } => span,
            TypeRef::Function { span, .. } => span,
            TypeRef::Literal(_, span) => span,
        }
    }

    pub fn named(name: &str, span: Span) -> Self {
        TypeRef::Named {
            name: name.to_string(),
            type_arguments: vec![],
            span,
        }
    }
}
