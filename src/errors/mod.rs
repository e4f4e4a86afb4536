//! Error types and error handling for the checker.
//!
//! This module defines the error types used throughout the pipeline. It
//! includes:
//!
//! - Error structures with source position information
//! - One variant per failure, grouped into syntax, binding, resolution and
//!   type errors
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
