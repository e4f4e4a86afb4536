use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Syntax,

            ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::ReadInOwnInitializer { .. }
            | ErrorImpl::ReturnOutsideFunction
            | ErrorImpl::LoopControlOutsideLoop { .. }
            | ErrorImpl::ThisOutsideClass => ErrorKind::Resolution,

            ErrorImpl::SymbolNotFound { .. }
            | ErrorImpl::UnknownType { .. }
            | ErrorImpl::InvalidIndexSignature { .. }
            | ErrorImpl::InvalidComputedKey { .. }
            | ErrorImpl::InvalidSuperclass { .. }
            | ErrorImpl::InvalidMixin { .. } => ErrorKind::Binding,

            ErrorImpl::TypeMatchError { .. }
            | ErrorImpl::ArgumentTypeMatchError { .. }
            | ErrorImpl::FieldTypeMatchError { .. }
            | ErrorImpl::ReturnTypeMatchError { .. }
            | ErrorImpl::OperatorTypeMatchError { .. }
            | ErrorImpl::IncomparableOperands { .. }
            | ErrorImpl::UnexpectedArguments { .. }
            | ErrorImpl::MissingArguments { .. }
            | ErrorImpl::NotCallable { .. }
            | ErrorImpl::NotConstructable { .. }
            | ErrorImpl::InvalidAssignmentTarget
            | ErrorImpl::ReadonlyProperty { .. }
            | ErrorImpl::ConstantAssignment { .. }
            | ErrorImpl::PrivateMemberAccess { .. } => ErrorKind::Type,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::ReadInOwnInitializer { .. } => "ReadInOwnInitializer",
            ErrorImpl::ReturnOutsideFunction => "ReturnOutsideFunction",
            ErrorImpl::LoopControlOutsideLoop { .. } => "LoopControlOutsideLoop",
            ErrorImpl::ThisOutsideClass => "ThisOutsideClass",
            ErrorImpl::SymbolNotFound { .. } => "SymbolNotFound",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::InvalidIndexSignature { .. } => "InvalidIndexSignature",
            ErrorImpl::InvalidComputedKey { .. } => "InvalidComputedKey",
            ErrorImpl::InvalidSuperclass { .. } => "InvalidSuperclass",
            ErrorImpl::InvalidMixin { .. } => "InvalidMixin",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::ArgumentTypeMatchError { .. } => "ArgumentTypeMatchError",
            ErrorImpl::FieldTypeMatchError { .. } => "FieldTypeMatchError",
            ErrorImpl::ReturnTypeMatchError { .. } => "ReturnTypeMatchError",
            ErrorImpl::OperatorTypeMatchError { .. } => "OperatorTypeMatchError",
            ErrorImpl::IncomparableOperands { .. } => "IncomparableOperands",
            ErrorImpl::UnexpectedArguments { .. } => "UnexpectedArguments",
            ErrorImpl::MissingArguments { .. } => "MissingArguments",
            ErrorImpl::NotCallable { .. } => "NotCallable",
            ErrorImpl::NotConstructable { .. } => "NotConstructable",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::ReadonlyProperty { .. } => "ReadonlyProperty",
            ErrorImpl::ConstantAssignment { .. } => "ConstantAssignment",
            ErrorImpl::PrivateMemberAccess { .. } => "PrivateMemberAccess",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` already declared in this scope",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::ReadInOwnInitializer { variable } => ErrorTip::Suggestion(format!(
                "Cannot read variable `{}` in its own initializer",
                variable
            )),
            ErrorImpl::ReturnOutsideFunction => {
                ErrorTip::Suggestion(String::from("`return` can only be used inside a function"))
            }
            ErrorImpl::LoopControlOutsideLoop { keyword } => {
                ErrorTip::Suggestion(format!("`{}` can only be used inside a loop", keyword))
            }
            ErrorImpl::ThisOutsideClass => {
                ErrorTip::Suggestion(String::from("`this` can only be used inside a class"))
            }
            ErrorImpl::SymbolNotFound { name } => ErrorTip::Suggestion(format!(
                "Symbol `{}` has no binding, the resolver and binder scopes disagree",
                name
            )),
            ErrorImpl::UnknownType { type_ } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_))
            }
            ErrorImpl::InvalidIndexSignature { key } => ErrorTip::Suggestion(format!(
                "Index signature keys must be `string` or `int`, found `{}`",
                key
            )),
            ErrorImpl::InvalidComputedKey { received } => ErrorTip::Suggestion(format!(
                "Computed keys must be `string | int`, received `{}`",
                received
            )),
            ErrorImpl::InvalidSuperclass { name } => {
                ErrorTip::Suggestion(format!("`{}` is not a class and cannot be extended", name))
            }
            ErrorImpl::InvalidMixin { name } => ErrorTip::Suggestion(format!(
                "`{}` is neither a class nor an interface and cannot be mixed in",
                name
            )),
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::ArgumentTypeMatchError { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Expected argument type `{}`, received `{}`",
                    expected, received
                ))
            }
            ErrorImpl::FieldTypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected field type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::ReturnTypeMatchError { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Expected return type `{}`, received `{}`",
                    expected, received
                ))
            }
            ErrorImpl::OperatorTypeMatchError { operator, operands } => ErrorTip::Suggestion(
                format!("Operator `{}` cannot be applied to `{}`", operator, operands),
            ),
            ErrorImpl::IncomparableOperands { left, right } => ErrorTip::Suggestion(format!(
                "Values of type `{}` and `{}` can never be compared",
                left, right
            )),
            ErrorImpl::UnexpectedArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::MissingArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::NotCallable { received } => {
                ErrorTip::Suggestion(format!("Type `{}` is not callable", received))
            }
            ErrorImpl::NotConstructable { received } => {
                ErrorTip::Suggestion(format!("Type `{}` cannot be constructed with `new`", received))
            }
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "Only variables and properties can be assigned to",
            )),
            ErrorImpl::ReadonlyProperty { property } => {
                ErrorTip::Suggestion(format!("Property `{}` is read-only", property))
            }
            ErrorImpl::ConstantAssignment { variable } => {
                ErrorTip::Suggestion(format!("Cannot assign to constant `{}`", variable))
            }
            ErrorImpl::PrivateMemberAccess { member, class } => ErrorTip::Suggestion(format!(
                "Member `{}` is private to class `{}`",
                member, class
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.get_kind(), self.internal_error)
    }
}

impl std::error::Error for Error {}

/// The failure class of an [`Error`].
///
/// Every class is fatal to the compilation unit being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Binding,
    Resolution,
    Type,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "SyntaxError"),
            ErrorKind::Binding => write!(f, "BindingError"),
            ErrorKind::Resolution => write!(f, "ResolutionError"),
            ErrorKind::Type => write!(f, "TypeError"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Front end
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    // Resolution
    #[error("variable `{variable}` already declared in this scope")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable `{variable}` not declared")]
    VariableNotDeclared { variable: String },
    #[error("cannot read variable `{variable}` in its own initializer")]
    ReadInOwnInitializer { variable: String },
    #[error("return outside of a function")]
    ReturnOutsideFunction,
    #[error("`{keyword}` outside of a loop")]
    LoopControlOutsideLoop { keyword: String },
    #[error("`this` outside of a class")]
    ThisOutsideClass,

    // Binding
    #[error("symbol `{name}` not found")]
    SymbolNotFound { name: String },
    #[error("unknown type `{type_}` found")]
    UnknownType { type_: String },
    #[error("index signature key must be `string` or `int`, found `{key}`")]
    InvalidIndexSignature { key: String },
    #[error("computed key must be `string | int`, received `{received}`")]
    InvalidComputedKey { received: String },
    #[error("`{name}` is not a class")]
    InvalidSuperclass { name: String },
    #[error("`{name}` cannot be used as a mixin")]
    InvalidMixin { name: String },

    // Types
    #[error("types do not match: expected `{expected}`, received `{received}`")]
    TypeMatchError { expected: String, received: String },
    #[error("argument types do not match: expected `{expected}`, received `{received}`")]
    ArgumentTypeMatchError { expected: String, received: String },
    #[error("field types do not match: expected `{expected}`, received `{received}`")]
    FieldTypeMatchError { expected: String, received: String },
    #[error("return types do not match: expected `{expected}`, received `{received}`")]
    ReturnTypeMatchError { expected: String, received: String },
    #[error("operator `{operator}` cannot be applied to `{operands}`")]
    OperatorTypeMatchError { operator: String, operands: String },
    #[error("`{left}` and `{right}` cannot be compared")]
    IncomparableOperands { left: String, right: String },
    #[error("unexpected arguments: expected {expected}, received {received}")]
    UnexpectedArguments { expected: usize, received: usize },
    #[error("missing arguments: expected {expected}, received {received}")]
    MissingArguments { expected: usize, received: usize },
    #[error("type `{received}` is not callable")]
    NotCallable { received: String },
    #[error("type `{received}` is not constructable")]
    NotConstructable { received: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("property `{property}` is read-only")]
    ReadonlyProperty { property: String },
    #[error("cannot assign to constant `{variable}`")]
    ConstantAssignment { variable: String },
    #[error("member `{member}` is private to `{class}`")]
    PrivateMemberAccess { member: String, class: String },
}
