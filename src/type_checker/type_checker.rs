use crate::{
    binder::bound_ast::{
        BoundAccessKey, BoundExpr, BoundExprKind, BoundFunction, BoundObjectKey, BoundStmt,
        BoundStmtKind,
    },
    errors::errors::{Error, ErrorImpl},
    types::{FunctionType, Type},
    Position,
};

/// Verifies the assignability contracts of a bound tree.
///
/// Fails on the first violation. Received types are reported widened, so a
/// literal `2` shows up as `int`.
#[derive(Debug, Default)]
pub struct TypeChecker {
    /// Declared return types of the enclosing functions, innermost last
    return_types: Vec<Type>,
}

/// Checks a bound unit with a fresh checker.
pub fn type_check(statements: &[BoundStmt]) -> Result<(), Error> {
    TypeChecker::new().check(statements)
}

fn expect_assignable(
    received: &Type,
    expected: &Type,
    position: &Position,
    error: impl FnOnce(String, String) -> ErrorImpl,
) -> Result<(), Error> {
    if received.is_assignable_to(expected) {
        return Ok(());
    }

    Err(Error::new(
        error(expected.to_string(), received.widened().to_string()),
        position.clone(),
    ))
}

fn type_mismatch(expected: String, received: String) -> ErrorImpl {
    ErrorImpl::TypeMatchError { expected, received }
}

impl TypeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn check(&mut self, statements: &[BoundStmt]) -> Result<(), Error> {
        statements.iter().try_for_each(|stmt| self.check_stmt(stmt))?;
        tracing::debug!(statements = statements.len(), "type checked");
        Ok(())
    }

    fn check_stmt(&mut self, stmt: &BoundStmt) -> Result<(), Error> {
        match &stmt.kind {
            BoundStmtKind::Expression(expr) => self.check_expr(expr),
            BoundStmtKind::Block(body) => body.iter().try_for_each(|stmt| self.check_stmt(stmt)),
            BoundStmtKind::VarDecl {
                declared_type,
                initializer,
                ..
            } => match initializer {
                Some(initializer) => {
                    self.check_expr(initializer)?;
                    expect_assignable(
                        &initializer.ty,
                        declared_type,
                        &initializer.span.start,
                        type_mismatch,
                    )
                }
                None => Ok(()),
            },
            BoundStmtKind::If {
                condition,
                then_body,
                else_body,
            } => {
                self.check_expr(condition)?;
                self.check_stmt(then_body)?;
                match else_body {
                    Some(else_body) => self.check_stmt(else_body),
                    None => Ok(()),
                }
            }
            BoundStmtKind::While { condition, body } => {
                self.check_expr(condition)?;
                self.check_stmt(body)
            }
            BoundStmtKind::For { iterable, body, .. } => {
                self.check_expr(iterable)?;
                body.iter().try_for_each(|stmt| self.check_stmt(stmt))
            }
            BoundStmtKind::FnDecl(function) => self.check_function(function),
            BoundStmtKind::Return(value) => self.check_return(value.as_ref(), &stmt.span.start),
            BoundStmtKind::Break { .. } | BoundStmtKind::TypeDecl { .. } => Ok(()),
            BoundStmtKind::ClassDecl { fields, methods, .. } => {
                for field in fields {
                    if let Some(initializer) = &field.initializer {
                        self.check_expr(initializer)?;
                        expect_assignable(
                            &initializer.ty,
                            &field.ty,
                            &initializer.span.start,
                            |expected, received| ErrorImpl::FieldTypeMatchError {
                                expected,
                                received,
                            },
                        )?;
                    }
                }

                methods
                    .iter()
                    .try_for_each(|method| self.check_function(method))
            }
        }
    }

    fn check_function(&mut self, function: &BoundFunction) -> Result<(), Error> {
        self.return_types
            .push(function.function_type.return_type.as_ref().clone());
        let result = function
            .body
            .iter()
            .try_for_each(|stmt| self.check_stmt(stmt));
        self.return_types.pop();
        result
    }

    fn check_return(&mut self, value: Option<&BoundExpr>, position: &Position) -> Result<(), Error> {
        let received = match value {
            Some(value) => {
                self.check_expr(value)?;
                value.ty.clone()
            }
            None => Type::void(),
        };

        let Some(expected) = self.return_types.last() else {
            return Ok(());
        };
        let position = value.map_or(position, |value| &value.span.start);
        expect_assignable(&received, expected, position, |expected, received| {
            ErrorImpl::ReturnTypeMatchError { expected, received }
        })
    }

    fn check_expr(&mut self, expr: &BoundExpr) -> Result<(), Error> {
        match &expr.kind {
            BoundExprKind::Literal(_)
            | BoundExprKind::Keyword(_)
            | BoundExprKind::Symbol { .. } => Ok(()),
            BoundExprKind::Array(elements) => elements
                .iter()
                .try_for_each(|element| self.check_expr(element)),
            BoundExprKind::Object(properties) => {
                properties.iter().try_for_each(|(key, value)| {
                    if let BoundObjectKey::Computed(key) = key {
                        self.check_expr(key)?;
                    }
                    self.check_expr(value)
                })
            }
            BoundExprKind::Binary {
                left,
                operator,
                right,
            } => {
                self.check_expr(left)?;
                self.check_expr(right)?;
                self.check_operands(
                    operator.kind.symbol(),
                    left,
                    &operator.left_type,
                    right,
                    &operator.right_type,
                )?;

                if operator.kind.compares_operands() && !left.ty.is_comparable_with(&right.ty) {
                    return Err(Error::new(
                        ErrorImpl::IncomparableOperands {
                            left: left.ty.widened().to_string(),
                            right: right.ty.widened().to_string(),
                        },
                        expr.span.start.clone(),
                    ));
                }
                Ok(())
            }
            BoundExprKind::Unary { operator, operand } => {
                self.check_expr(operand)?;
                if operand.ty.is_assignable_to(&operator.operand_type) {
                    return Ok(());
                }
                Err(Error::new(
                    ErrorImpl::OperatorTypeMatchError {
                        operator: operator.kind.symbol().to_string(),
                        operands: operand.ty.widened().to_string(),
                    },
                    expr.span.start.clone(),
                ))
            }
            BoundExprKind::Assignment {
                target,
                operator,
                value,
            } => {
                self.check_expr(target)?;
                self.check_expr(value)?;

                match operator {
                    None => expect_assignable(&value.ty, &target.ty, &value.span.start, type_mismatch),
                    Some(operator) => {
                        self.check_operands(
                            operator.kind.symbol(),
                            target,
                            &operator.left_type,
                            value,
                            &operator.right_type,
                        )?;
                        expect_assignable(
                            &operator.result_type,
                            &target.ty,
                            &expr.span.start,
                            type_mismatch,
                        )
                    }
                }
            }
            BoundExprKind::Access { object, key, .. } => {
                self.check_expr(object)?;
                let BoundAccessKey::Computed(key) = key else {
                    return Ok(());
                };
                self.check_expr(key)?;

                let object_type = object.ty.widened();
                if object_type.is_array() || object_type.is_named("string") {
                    expect_assignable(&key.ty, &Type::int(), &key.span.start, type_mismatch)?;
                }
                Ok(())
            }
            BoundExprKind::Call { callee, arguments } => {
                self.check_expr(callee)?;
                arguments
                    .iter()
                    .try_for_each(|argument| self.check_expr(argument))?;

                match &callee.ty {
                    Type::Function(function) => {
                        check_arguments(function, arguments, &expr.span.start)
                    }
                    _ => Ok(()),
                }
            }
            BoundExprKind::New { class, arguments } => {
                arguments
                    .iter()
                    .try_for_each(|argument| self.check_expr(argument))?;

                match class.find_member("constructor").map(|found| found.member.value_type) {
                    Some(Type::Function(constructor)) => {
                        check_arguments(&constructor, arguments, &expr.span.start)
                    }
                    _ if !arguments.is_empty() => Err(Error::new(
                        ErrorImpl::UnexpectedArguments {
                            expected: 0,
                            received: arguments.len(),
                        },
                        expr.span.start.clone(),
                    )),
                    _ => Ok(()),
                }
            }
        }
    }

    /// Re-validates operands against the operator the binder picked.
    fn check_operands(
        &self,
        operator: &str,
        left: &BoundExpr,
        left_type: &Type,
        right: &BoundExpr,
        right_type: &Type,
    ) -> Result<(), Error> {
        if left.ty.is_assignable_to(left_type) && right.ty.is_assignable_to(right_type) {
            return Ok(());
        }

        Err(Error::new(
            ErrorImpl::OperatorTypeMatchError {
                operator: operator.to_string(),
                operands: format!("{}, {}", left.ty.widened(), right.ty.widened()),
            },
            left.span.start.clone(),
        ))
    }
}

fn check_arguments(
    function: &FunctionType,
    arguments: &[BoundExpr],
    position: &Position,
) -> Result<(), Error> {
    let expected = function.parameters.len();
    let received = arguments.len();
    if received > expected {
        return Err(Error::new(
            ErrorImpl::UnexpectedArguments { expected, received },
            position.clone(),
        ));
    }
    if received < expected {
        return Err(Error::new(
            ErrorImpl::MissingArguments { expected, received },
            position.clone(),
        ));
    }

    function
        .parameters
        .iter()
        .zip(arguments)
        .try_for_each(|((_, parameter), argument)| {
            expect_assignable(
                &argument.ty,
                parameter,
                &argument.span.start,
                |expected, received| ErrorImpl::ArgumentTypeMatchError { expected, received },
            )
        })
}
