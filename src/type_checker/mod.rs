//! Type checking of the bound tree.
//!
//! Binding has already given every expression a type. This pass walks the
//! bound tree and checks that each value flows into a slot that accepts it:
//!
//! - initializers against declared types
//! - assigned values against assignment targets
//! - operands against the operator picked during binding
//! - call and constructor arguments against parameters
//! - returned values against the enclosing function's return type
//! - array indexes against `int`
//! - class field initializers against field types

pub mod type_checker;

pub use type_checker::{type_check, TypeChecker};

#[cfg(test)]
mod tests;
