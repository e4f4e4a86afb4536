//! Name resolution.
//!
//! Walks the syntax tree once, checks that every variable is declared before
//! it is read, and records how many scopes out each read finds its variable.

pub mod resolver;

pub use resolver::Resolver;

#[cfg(test)]
mod tests;
