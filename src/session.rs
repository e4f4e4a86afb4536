//! Driving the passes over compilation units.
//!
//! A [`Session`] keeps the global scope, the declared type names and the
//! node id counter from one unit to the next, REPL style. A unit that fails
//! leaves the session exactly as it was before the unit started.

use std::{
    collections::{HashMap, HashSet},
    rc::Rc,
    time::Instant,
};

use crate::{
    ast::ast::NodeId,
    binder::{bound_ast::BoundStmt, Binder},
    display_error,
    errors::errors::Error,
    intrinsics::define_intrinsics,
    lexer::lexer::tokenize,
    parser::parser::{run_parser, Parser},
    resolver::Resolver,
    type_checker::type_check,
    types::{Type, INTRINSIC_TYPE_NAMES},
};

/// A unit that made it through every pass.
#[derive(Debug, Clone)]
pub struct CheckedUnit {
    pub statements: Vec<BoundStmt>,
    /// Scope distance of every variable read
    pub distances: HashMap<NodeId, usize>,
    /// Type of every bound expression
    pub bound_types: HashMap<NodeId, Type>,
}

/// What a session does with the error of a failing unit, besides returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Print it with a source excerpt
    #[default]
    Report,
    /// Keep it, see [`Session::errors`]
    Record,
}

#[derive(Debug)]
pub struct Session {
    resolver: Resolver,
    binder: Binder,
    type_names: HashSet<String>,
    next_id: u32,
    mode: ErrorMode,
    errors: Vec<Error>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ErrorMode::default())
    }
}

impl Session {
    pub fn new(mode: ErrorMode) -> Self {
        let mut resolver = Resolver::new();
        let mut binder = Binder::new();
        define_intrinsics(&mut resolver, &mut binder);

        Session {
            resolver,
            binder,
            type_names: INTRINSIC_TYPE_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            next_id: 0,
            mode,
            errors: vec![],
        }
    }

    pub fn mode(&self) -> ErrorMode {
        self.mode
    }

    /// Errors kept in [`ErrorMode::Record`].
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    /// Runs every pass over `source`. Declarations of a unit that checks
    /// stay visible to later units.
    #[tracing::instrument(level = "debug", skip(self, source))]
    pub fn check(&mut self, source: &str, file: &str) -> Result<CheckedUnit, Error> {
        let resolver_globals = self.resolver.globals();
        let binder_globals = self.binder.globals();

        match self.run(source, file) {
            Ok(unit) => Ok(unit),
            Err(error) => {
                self.resolver.restore_globals(resolver_globals);
                self.binder.restore_globals(binder_globals);
                tracing::debug!(error = %error, "unit failed, globals restored");

                match self.mode {
                    ErrorMode::Report => display_error(&error, source),
                    ErrorMode::Record => self.errors.push(error.clone()),
                }
                Err(error)
            }
        }
    }

    fn run(&mut self, source: &str, file: &str) -> Result<CheckedUnit, Error> {
        let start = Instant::now();
        let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
        tracing::info!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

        let start = Instant::now();
        let parser = Parser::new(tokens, Rc::new(file.to_string()))
            .with_type_names(self.type_names.clone())
            .with_first_id(self.next_id);
        let (parser, block) = run_parser(parser);
        self.next_id = parser.next_id();
        let block = block?;
        tracing::info!(statements = block.body.len(), elapsed = ?start.elapsed(), "parsed");

        let start = Instant::now();
        let distances = self.resolver.resolve(&block)?;
        tracing::info!(elapsed = ?start.elapsed(), "resolved");

        let start = Instant::now();
        let statements = self.binder.bind(&block, distances.clone())?;
        tracing::info!(elapsed = ?start.elapsed(), "bound");

        let start = Instant::now();
        type_check(&statements)?;
        tracing::info!(elapsed = ?start.elapsed(), "type checked");

        self.type_names = parser.get_type_names().clone();
        Ok(CheckedUnit {
            statements,
            distances,
            bound_types: self.binder.take_bound_types(),
        })
    }
}

/// Checks one unit with fresh passes and the intrinsics defined.
pub fn check_source(source: &str, file: &str) -> Result<CheckedUnit, Error> {
    Session::new(ErrorMode::Record).check(source, file)
}
