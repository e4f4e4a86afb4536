//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Named types, optionally with type arguments (`Array<int>`)
//! - Array types (`int[]`)
//! - Union and intersection types (`int | string`, `A & B`)
//! - Interface shapes (`{ name: string, [string]: any }`)
//! - Function types (`(int a) :: string`)
//! - Literal types (`5`, `"abc"`, `true`)
//!
//! Similar to expression parsing, it uses NUD/LED handlers with
//! binding powers for parsing complex type expressions.

use std::collections::HashMap;

use crate::{
    ast::types::{IndexSignatureRef, ParameterRef, PropertyRef, TypeRef},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    types::LiteralValue,
};

use super::{expr::parse_number, lookups::BindingPower, parser::Parser};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeRef, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, TypeRef, BindingPower) -> Result<TypeRef, Error>;

pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;
pub type TypeBPLookup = HashMap<TokenKind, BindingPower>;

/// Initializes the type parsing lookup tables.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_symbol_type);
    parser.type_nud(TokenKind::Null, parse_symbol_type);
    parser.type_nud(TokenKind::Undefined, parse_symbol_type);
    parser.type_nud(TokenKind::OpenCurly, parse_interface_type);
    parser.type_nud(TokenKind::OpenParen, parse_function_type);
    parser.type_nud(TokenKind::Number, parse_literal_type);
    parser.type_nud(TokenKind::String, parse_literal_type);
    parser.type_nud(TokenKind::True, parse_literal_type);
    parser.type_nud(TokenKind::False, parse_literal_type);

    parser.type_led(TokenKind::Pipe, BindingPower::Logical, parse_union_type);
    parser.type_led(TokenKind::Ampersand, BindingPower::Relational, parse_intersection_type);
    parser.type_led(TokenKind::OpenBracket, BindingPower::Call, parse_array_type);
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    let token = parser.advance().clone();

    let mut type_arguments = vec![];
    if parser.current_token_kind() == TokenKind::Less {
        parser.advance();
        while parser.current_token_kind() != TokenKind::Greater {
            type_arguments.push(parse_type(parser, BindingPower::Default)?);

            if parser.current_token_kind() != TokenKind::Greater {
                parser.expect(TokenKind::Comma)?;
            }
        }
        parser.expect(TokenKind::Greater)?;
    }

    Ok(TypeRef::Named {
        name: token.value,
        type_arguments,
        span: parser.span_from(token.span.start),
    })
}

pub fn parse_literal_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    let span = parser.current_token().span.clone();

    let value = match parser.current_token_kind() {
        TokenKind::Number => parse_number(parser)?,
        TokenKind::True | TokenKind::False => {
            LiteralValue::Bool(parser.advance().kind == TokenKind::True)
        }
        _ => LiteralValue::Str(parser.advance().value.clone()),
    };

    Ok(TypeRef::Literal(value, span))
}

pub fn parse_array_type(
    parser: &mut Parser,
    left: TypeRef,
    _bp: BindingPower,
) -> Result<TypeRef, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(TypeRef::Array {
        span: parser.span_from(left.get_span().start.clone()),
        element: Box::new(left),
    })
}

pub fn parse_union_type(
    parser: &mut Parser,
    left: TypeRef,
    bp: BindingPower,
) -> Result<TypeRef, Error> {
    parser.advance();
    let right = parse_type(parser, bp)?;
    let span = left.get_span().to(right.get_span());

    let mut members = match left {
        TypeRef::Union(members, _) => members,
        other => vec![other],
    };
    members.push(right);

    Ok(TypeRef::Union(members, span))
}

pub fn parse_intersection_type(
    parser: &mut Parser,
    left: TypeRef,
    bp: BindingPower,
) -> Result<TypeRef, Error> {
    parser.advance();
    let right = parse_type(parser, bp)?;
    let span = left.get_span().to(right.get_span());

    let mut members = match left {
        TypeRef::Intersection(members, _) => members,
        other => vec![other],
    };
    members.push(right);

    Ok(TypeRef::Intersection(members, span))
}

/// `{ name: string, const id: int, [string]: any }`
///
/// Entries may be separated by `,` or `;`; both are optional.
pub fn parse_interface_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut properties = vec![];
    let mut index_signatures = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::OpenBracket {
            parser.advance();
            let key = parser.advance().clone();
            parser.expect(TokenKind::CloseBracket)?;
            parser.expect(TokenKind::Colon)?;
            let value = parse_type(parser, BindingPower::Default)?;

            index_signatures.push(IndexSignatureRef {
                key: key.value,
                key_span: key.span,
                value,
            });
        } else {
            let mutable = if parser.current_token_kind() == TokenKind::Const {
                parser.advance();
                false
            } else {
                true
            };

            let name = parser
                .expect_error(
                    TokenKind::Identifier,
                    Some(parser.unexpected("expected property name in interface")),
                )?
                .value;
            parser.expect(TokenKind::Colon)?;
            let type_ref = parse_type(parser, BindingPower::Default)?;

            properties.push(PropertyRef {
                name,
                type_ref,
                mutable,
            });
        }

        if parser.current_token_kind() == TokenKind::Comma
            || parser.current_token_kind() == TokenKind::Semicolon
        {
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(TypeRef::Interface {
        properties,
        index_signatures,
        span: parser.span_from(start),
    })
}

/// `(int a, string b) :: bool`. Parameter names are optional here.
pub fn parse_function_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.span.start;

    let mut parameters = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        let type_ref = parse_type(parser, BindingPower::Default)?;
        let name = if parser.current_token_kind() == TokenKind::Identifier {
            parser.advance().value.clone()
        } else {
            format!("arg{}", parameters.len())
        };
        parameters.push(ParameterRef { name, type_ref });

        if parser.current_token_kind() != TokenKind::CloseParen {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    parser.expect_error(
        TokenKind::ColonColon,
        Some(parser.unexpected("expected `::` and a return type")),
    )?;
    let return_type = parse_type(parser, BindingPower::Default)?;

    Ok(TypeRef::Function {
        parameters,
        return_type: Box::new(return_type),
        span: parser.span_from(start),
    })
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<TypeRef, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_type_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a type"),
            },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let Some(next_bp) = parser.get_type_bp_lookup().get(&token_kind).copied() else {
            break;
        };
        if next_bp <= bp {
            break;
        }

        // `T[` only continues a type when closed right away; `T[0]` is an index
        if token_kind == TokenKind::OpenBracket && parser.peek_kind(1) != TokenKind::CloseBracket
        {
            break;
        }

        let Some(led_fn) = parser.get_type_led_lookup().get(&token_kind).copied() else {
            break;
        };
        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}
