use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Expr, NodeId, Stmt},
        expressions::{AccessKey, ObjectKey},
        statements::{BlockStmt, ClassDeclStmt, FnDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    scope::ScopeStack,
    Position,
};

/// Assigns every variable read a scope distance.
///
/// Each scope maps a name to whether its declaration has finished, so a
/// variable read inside its own initializer can be told apart from one that
/// was never declared.
#[derive(Debug, Default)]
pub struct Resolver {
    scopes: ScopeStack<bool>,
    distances: HashMap<NodeId, usize>,
    function_depth: usize,
    loop_depth: usize,
    class_depth: usize,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `name` visible to every unit, e.g. an intrinsic.
    pub fn define_global(&mut self, name: &str) {
        self.scopes.insert_global(name, true);
    }

    pub fn globals(&self) -> HashMap<String, bool> {
        self.scopes.snapshot()
    }

    pub fn restore_globals(&mut self, globals: HashMap<String, bool>) {
        self.scopes.restore(globals);
    }

    /// Resolves a unit in the global scope and returns the distance of every
    /// variable read, keyed by the reading expression.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn resolve(&mut self, block: &BlockStmt) -> Result<HashMap<NodeId, usize>, Error> {
        self.function_depth = 0;
        self.loop_depth = 0;
        self.class_depth = 0;

        let result = block.iter().try_for_each(|stmt| self.resolve_stmt(stmt));
        self.scopes.truncate();
        if let Err(error) = result {
            self.distances.clear();
            return Err(error);
        }

        tracing::debug!(reads = self.distances.len(), "resolved");
        Ok(std::mem::take(&mut self.distances))
    }

    fn declare(&mut self, name: &str, position: &Position) -> Result<(), Error> {
        if self.scopes.contains_in_current(name) {
            return Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: name.to_string(),
                },
                position.clone(),
            ));
        }

        self.scopes.insert(name, false);
        Ok(())
    }

    fn define(&mut self, name: &str) {
        self.scopes.insert(name, true);
    }

    fn resolve_block(&mut self, block: &BlockStmt) -> Result<(), Error> {
        self.scopes.begin_scope();
        let result = block.iter().try_for_each(|stmt| self.resolve_stmt(stmt));
        self.scopes.end_scope();
        result
    }

    /// Parameters and body statements share one scope.
    fn resolve_function(&mut self, function: &FnDeclStmt) -> Result<(), Error> {
        let enclosing_loops = std::mem::replace(&mut self.loop_depth, 0);
        self.function_depth += 1;
        self.scopes.begin_scope();

        let result = self.resolve_function_scope(function);

        self.scopes.end_scope();
        self.function_depth -= 1;
        self.loop_depth = enclosing_loops;
        result
    }

    fn resolve_function_scope(&mut self, function: &FnDeclStmt) -> Result<(), Error> {
        for parameter in &function.parameters {
            self.declare(&parameter.name, &parameter.span.start)?;
            self.define(&parameter.name);
        }

        function
            .body
            .iter()
            .try_for_each(|stmt| self.resolve_stmt(stmt))
    }

    fn resolve_class_scope(&mut self, class: &ClassDeclStmt) -> Result<(), Error> {
        for field in &class.fields {
            if let Some(initializer) = &field.initializer {
                self.resolve_expr(initializer)?;
            }
        }

        class
            .methods
            .iter()
            .try_for_each(|method| self.resolve_function(&method.function))
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) -> Result<(), Error> {
        match stmt {
            Stmt::Expression(stmt) => self.resolve_expr(&stmt.expression),
            Stmt::Block(block) => self.resolve_block(block),
            Stmt::VarDecl(decl) => {
                self.declare(&decl.identifier, &decl.span.start)?;
                if let Some(value) = &decl.assigned_value {
                    self.resolve_expr(value)?;
                }
                self.define(&decl.identifier);
                Ok(())
            }
            Stmt::If(stmt) => {
                self.resolve_expr(&stmt.condition)?;
                self.resolve_stmt(&stmt.then_body)?;
                if let Some(else_body) = &stmt.else_body {
                    self.resolve_stmt(else_body)?;
                }
                Ok(())
            }
            Stmt::While(stmt) => {
                self.resolve_expr(&stmt.condition)?;
                self.loop_depth += 1;
                let result = self.resolve_stmt(&stmt.body);
                self.loop_depth -= 1;
                result
            }
            Stmt::For(stmt) => {
                self.resolve_expr(&stmt.iterable)?;

                self.scopes.begin_scope();
                self.loop_depth += 1;
                self.define(&stmt.variable);
                let result = stmt.body.iter().try_for_each(|body| self.resolve_stmt(body));
                self.loop_depth -= 1;
                self.scopes.end_scope();
                result
            }
            Stmt::FnDecl(function) => {
                self.declare(&function.identifier, &function.span.start)?;
                self.define(&function.identifier);
                self.resolve_function(function)
            }
            Stmt::Return(stmt) => {
                if self.function_depth == 0 {
                    return Err(Error::new(
                        ErrorImpl::ReturnOutsideFunction,
                        stmt.span.start.clone(),
                    ));
                }
                match &stmt.value {
                    Some(value) => self.resolve_expr(value),
                    None => Ok(()),
                }
            }
            Stmt::Break(stmt) => {
                if self.loop_depth == 0 {
                    let keyword = if stmt.is_continue { "continue" } else { "break" };
                    return Err(Error::new(
                        ErrorImpl::LoopControlOutsideLoop {
                            keyword: keyword.to_string(),
                        },
                        stmt.span.start.clone(),
                    ));
                }
                Ok(())
            }
            Stmt::ClassDecl(class) => {
                self.declare(&class.name, &class.span.start)?;
                self.define(&class.name);

                self.class_depth += 1;
                self.scopes.begin_scope();
                self.define("this");

                let result = self.resolve_class_scope(class);

                self.scopes.end_scope();
                self.class_depth -= 1;
                result
            }
            Stmt::TypeDecl(_) => Ok(()),
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) -> Result<(), Error> {
        match expr {
            Expr::Literal(_) | Expr::Keyword(_) => Ok(()),
            Expr::Symbol(symbol) => {
                self.resolve_symbol(&symbol.value, symbol.id, &symbol.span.start)
            }
            Expr::Array(array) => array
                .elements
                .iter()
                .try_for_each(|element| self.resolve_expr(element)),
            Expr::Object(object) => object.properties.iter().try_for_each(|property| {
                if let ObjectKey::Computed(key) = &property.key {
                    self.resolve_expr(key)?;
                }
                self.resolve_expr(&property.value)
            }),
            Expr::Binary(binary) => {
                self.resolve_expr(&binary.left)?;
                self.resolve_expr(&binary.right)
            }
            Expr::Prefix(prefix) => self.resolve_expr(&prefix.right_expr),
            Expr::Assignment(assignment) => {
                self.resolve_expr(&assignment.value)?;
                self.resolve_expr(&assignment.assignee)
            }
            Expr::Access(access) => {
                self.resolve_expr(&access.object)?;
                match &access.key {
                    AccessKey::Computed(key) => self.resolve_expr(key),
                    AccessKey::Name(..) => Ok(()),
                }
            }
            Expr::Call(call) => {
                self.resolve_expr(&call.callee)?;
                call.arguments
                    .iter()
                    .try_for_each(|argument| self.resolve_expr(argument))
            }
            Expr::New(new) => {
                self.resolve_symbol(&new.class.value, new.class.id, &new.class.span.start)?;
                new.arguments
                    .iter()
                    .try_for_each(|argument| self.resolve_expr(argument))
            }
        }
    }

    fn resolve_symbol(&mut self, name: &str, id: NodeId, position: &Position) -> Result<(), Error> {
        if name == "this" && self.class_depth == 0 {
            return Err(Error::new(ErrorImpl::ThisOutsideClass, position.clone()));
        }

        match self.scopes.lookup(name) {
            Some((distance, true)) => {
                self.distances.insert(id, distance);
                Ok(())
            }
            Some((_, false)) => Err(Error::new(
                ErrorImpl::ReadInOwnInitializer {
                    variable: name.to_string(),
                },
                position.clone(),
            )),
            None => Err(Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: name.to_string(),
                },
                position.clone(),
            )),
        }
    }
}
