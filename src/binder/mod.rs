//! Binding: builds the bound tree from the syntax tree.
//!
//! - binder: scopes of variable symbols, inference and per-construct rules
//! - bound_ast: the bound tree, one node per syntax node carrying its type
//! - operators: the ordered operator overload tables
//! - extensions: built-in members of primitive, `Range` and array types

pub mod binder;
pub mod bound_ast;
pub mod extensions;
pub mod operators;

pub use binder::{Binder, BinderGlobals, VariableSymbol};
