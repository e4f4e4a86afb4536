use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AccessExpr, AccessKey, ArrayLiteralExpr, AssignmentExpr, BinaryExpr, CallExpr,
            Keyword, KeywordExpr, LiteralExpr, NewExpr, ObjectKey, ObjectLiteralExpr,
            ObjectProperty, PrefixExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    types::LiteralValue,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let Some(next_bp) = parser.get_bp_lookup().get(&token_kind).copied() else {
            break;
        };
        if next_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };
        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_number(parser: &mut Parser) -> Result<LiteralValue, Error> {
    let token = parser.current_token().clone();
    let parsed = if token.value.contains('.') {
        token.value.parse::<f64>().map(LiteralValue::Float).ok()
    } else {
        token.value.parse::<i64>().map(LiteralValue::Int).ok()
    };

    match parsed {
        Some(value) => {
            parser.advance();
            Ok(value)
        }
        None => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        )),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let id = parser.advance_id();
    let span = parser.current_token().span.clone();

    match parser.current_token_kind() {
        TokenKind::Number => {
            let value = parse_number(parser)?;
            Ok(Expr::Literal(LiteralExpr { value, id, span }))
        }
        TokenKind::String => {
            let value = LiteralValue::Str(parser.advance().value.clone());
            Ok(Expr::Literal(LiteralExpr { value, id, span }))
        }
        TokenKind::True | TokenKind::False => {
            let value = LiteralValue::Bool(parser.advance().kind == TokenKind::True);
            Ok(Expr::Literal(LiteralExpr { value, id, span }))
        }
        TokenKind::Null | TokenKind::Undefined => {
            let keyword = if parser.advance().kind == TokenKind::Null {
                Keyword::Null
            } else {
                Keyword::Undefined
            };
            Ok(Expr::Keyword(KeywordExpr { keyword, id, span }))
        }
        TokenKind::Identifier | TokenKind::This => Ok(Expr::Symbol(SymbolExpr {
            value: parser.advance().value.clone(),
            id,
            span,
        })),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
        id: parser.advance_id(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: operator_token.span.to(rhs.get_span()),
        operator: operator_token,
        right_expr: Box::new(rhs),
        id: parser.advance_id(),
    }))
}

/// Assignment is right associative: `a = b = c` assigns `c` to `b` first.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Comma)?;

    Ok(Expr::Assignment(AssignmentExpr {
        span: left.get_span().to(rhs.get_span()),
        operator: operator_token,
        value: Box::new(rhs),
        assignee: Box::new(left),
        id: parser.advance_id(),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Parses `(a, b, ...)` and returns the arguments. The opening parenthesis
/// must be the current token.
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        args.push(parse_expr(parser, BindingPower::Comma)?);

        if parser.current_token_kind() != TokenKind::CloseParen {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(args)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let arguments = parse_arguments(parser)?;

    Ok(Expr::Call(CallExpr {
        span: parser.span_from(left.get_span().start.clone()),
        callee: Box::new(left),
        arguments,
        id: parser.advance_id(),
    }))
}

pub fn parse_member_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    parser.advance();
    let member = parser.expect_error(
        TokenKind::Identifier,
        Some(parser.unexpected("expected property name after `.`")),
    )?;

    Ok(Expr::Access(AccessExpr {
        span: parser.span_from(left.get_span().start.clone()),
        object: Box::new(left),
        key: AccessKey::Name(member.value, member.span),
        id: parser.advance_id(),
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let index = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::Access(AccessExpr {
        span: parser.span_from(left.get_span().start.clone()),
        object: Box::new(left),
        key: AccessKey::Computed(Box::new(index)),
        id: parser.advance_id(),
    }))
}

pub fn parse_array_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();

    let mut elements = vec![];
    while parser.current_token_kind() != TokenKind::CloseBracket {
        elements.push(parse_expr(parser, BindingPower::Comma)?);

        if parser.current_token_kind() != TokenKind::CloseBracket {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::Array(ArrayLiteralExpr {
        elements,
        span: parser.span_from(start),
        id: parser.advance_id(),
    }))
}

pub fn parse_object_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // { name: 1, "quoted": 2, [key]: 3 }
    let start = parser.advance().span.start.clone();

    let mut properties = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        let key = match parser.current_token_kind() {
            TokenKind::Identifier | TokenKind::String => {
                let token = parser.advance().clone();
                ObjectKey::Named(token.value, token.span)
            }
            TokenKind::OpenBracket => {
                parser.advance();
                let key = parse_expr(parser, BindingPower::Default)?;
                parser.expect(TokenKind::CloseBracket)?;
                ObjectKey::Computed(key)
            }
            _ => return Err(parser.unexpected("expected property name in object literal")),
        };

        parser.expect(TokenKind::Colon)?;
        let value = parse_expr(parser, BindingPower::Comma)?;
        properties.push(ObjectProperty { key, value });

        if parser.current_token_kind() != TokenKind::CloseCurly {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Expr::Object(ObjectLiteralExpr {
        properties,
        span: parser.span_from(start),
        id: parser.advance_id(),
    }))
}

pub fn parse_new_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // new Point(1, 2)
    let start = parser.advance().span.start.clone();

    let class_token = parser.expect_error(
        TokenKind::Identifier,
        Some(parser.unexpected("expected class name after `new`")),
    )?;
    let class = SymbolExpr {
        value: class_token.value,
        span: class_token.span,
        id: parser.advance_id(),
    };

    let arguments = parse_arguments(parser)?;

    Ok(Expr::New(NewExpr {
        class,
        arguments,
        span: parser.span_from(start),
        id: parser.advance_id(),
    }))
}
