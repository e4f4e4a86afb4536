//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.lang".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_kind(), ErrorKind::Syntax);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            expected: "string".to_string(),
            received: "int".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(error.get_kind(), ErrorKind::Type);

    let message = error.to_string();
    assert!(message.starts_with("TypeError:"));
    assert!(message.contains("string"));
    assert!(message.contains("int"));
}

#[test]
fn test_resolution_errors() {
    let duplicate = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "y".to_string(),
        },
        at(0),
    );
    assert_eq!(duplicate.get_kind(), ErrorKind::Resolution);
    assert!(duplicate.to_string().contains("`y`"));

    let own_initializer = Error::new(
        ErrorImpl::ReadInOwnInitializer {
            variable: "a".to_string(),
        },
        at(0),
    );
    assert_eq!(own_initializer.get_kind(), ErrorKind::Resolution);
    assert!(own_initializer
        .to_string()
        .contains("cannot read variable `a` in its own initializer"));
}

#[test]
fn test_binding_errors() {
    let error = Error::new(
        ErrorImpl::UnknownType {
            type_: "CustomType".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnknownType");
    assert_eq!(error.get_kind(), ErrorKind::Binding);
    assert_eq!(error.to_string(), "BindingError: unknown type `CustomType` found");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ReadonlyProperty {
            property: "id".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Property `id` is read-only"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_argument_count_errors() {
    let unexpected = Error::new(
        ErrorImpl::UnexpectedArguments {
            expected: 2,
            received: 3,
        },
        at(0),
    );
    let missing = Error::new(
        ErrorImpl::MissingArguments {
            expected: 3,
            received: 1,
        },
        at(0),
    );

    assert_eq!(unexpected.get_error_name(), "UnexpectedArguments");
    assert_eq!(missing.get_error_name(), "MissingArguments");
    assert_eq!(missing.get_kind(), ErrorKind::Type);
}
