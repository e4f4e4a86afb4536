//! Type system.
//!
//! - types: the `Type` enum and its constructors and predicates
//! - assignability: the assignability relation
//! - display: canonical rendering of types
//! - conversion: `TypeRef` to `Type`, and the registry of type names

pub mod assignability;
pub mod conversion;
pub mod display;
pub mod types;

pub use types::{
    ClassType, FoundMember, FunctionType, IndexKey, InterfaceType, LiteralValue, Member, Property,
    Type, INTRINSIC_TYPE_NAMES,
};

#[cfg(test)]
mod tests;
