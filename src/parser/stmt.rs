use crate::{
    ast::{
        ast::Stmt,
        statements::{
            BlockStmt, BreakStmt, ClassDeclStmt, ExpressionStmt, FieldDecl, FnDeclStmt, ForStmt,
            IfStmt, MemberModifiers, MethodDecl, Parameter, ReturnStmt, TypeDeclStmt, VarDeclStmt,
            WhileStmt,
        },
        types::TypeRef,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Position, Span,
};

use super::{
    parser::Parser,
    types::{parse_interface_type, parse_type},
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return stmt_fn(parser);
    }

    if starts_declaration(parser) {
        let start = parser.get_position();
        let explicit_type = parse_type(parser, BindingPower::Default)?;
        return finish_var_decl(parser, start, false, Some(explicit_type));
    }

    let expr = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: parser.span_from(expr.get_span().start.clone()),
        expression: expr,
    }))
}

/// A statement starting with a known type name followed by something that
/// can only continue a type (`int x`, `int[] xs`, `Array<int> xs`,
/// `int | string v`) is a declaration rather than an expression.
fn starts_declaration(parser: &Parser) -> bool {
    let token = parser.current_token();
    if !matches!(
        token.kind,
        TokenKind::Identifier | TokenKind::Null | TokenKind::Undefined
    ) || !parser.is_type_name(&token.value)
    {
        return false;
    }

    match parser.peek_kind(1) {
        TokenKind::Identifier | TokenKind::Less | TokenKind::Pipe | TokenKind::Ampersand => true,
        TokenKind::OpenBracket => parser.peek_kind(2) == TokenKind::CloseBracket,
        _ => false,
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();
    let is_constant = start_token.kind == TokenKind::Const;

    // `const x = 1;` infers like `let`
    if start_token.kind == TokenKind::Let
        || (parser.current_token_kind() == TokenKind::Identifier
            && parser.peek_kind(1) == TokenKind::Assignment)
    {
        return finish_var_decl(parser, start_token.span.start, is_constant, None);
    }

    let explicit_type = parse_type(parser, BindingPower::Default)?;
    finish_var_decl(parser, start_token.span.start, is_constant, Some(explicit_type))
}

fn finish_var_decl(
    parser: &mut Parser,
    start: Position,
    is_constant: bool,
    explicit_type: Option<TypeRef>,
) -> Result<Stmt, Error> {
    let error = parser.unexpected("expected identifier during variable declaration");
    let variable_name = parser
        .expect_error(TokenKind::Identifier, Some(error))?
        .value;

    let assigned_value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else if explicit_type.is_none() {
        return Err(parser.unexpected("expected rhs or explicit type"));
    } else {
        None
    };

    if is_constant && assigned_value.is_none() {
        return Err(parser.unexpected("expected rhs in constant definition"));
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        span: parser.span_from(start),
        is_constant,
        identifier: variable_name,
        assigned_value,
        explicit_type,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_stmt(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body: Box::new(body),
        else_body,
        span: parser.span_from(start),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body: Box::new(body),
        span: parser.span_from(start),
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // for item in items { ... }
    let start = parser.advance().span.start.clone();

    let variable = parser
        .expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expected loop variable after `for`")),
        )?
        .value;
    parser.expect(TokenKind::In)?;
    let iterable = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Stmt::For(ForStmt {
        variable,
        iterable,
        body,
        span: parser.span_from(start),
    }))
}

pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body: statements,
        span: parser.span_from(start),
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// `fn name(T a, U b) :: R { ... }`; the return annotation is optional.
pub fn parse_fn_decl(parser: &mut Parser) -> Result<FnDeclStmt, Error> {
    let start = parser.expect(TokenKind::Fn)?.span.start;

    let identifier = parser
        .expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expected function name")),
        )?
        .value;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseParen {
        let param_start = parser.get_position();
        let type_ref = parse_type(parser, BindingPower::Default)?;
        let name = parser
            .expect_error(
                TokenKind::Identifier,
                Some(parser.unexpected("expected parameter name after its type")),
            )?
            .value;
        parameters.push(Parameter {
            name,
            type_ref,
            span: parser.span_from(param_start),
        });

        if parser.current_token_kind() != TokenKind::CloseParen {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::ColonColon {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(FnDeclStmt {
        span: parser.span_from(start),
        identifier,
        parameters,
        return_type,
        body,
    })
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::FnDecl(parse_fn_decl(parser)?))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: parser.span_from(start),
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance().clone();
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Break(BreakStmt {
        is_continue: token.kind == TokenKind::Continue,
        span: parser.span_from(token.span.start),
    }))
}

fn parse_named_list(parser: &mut Parser) -> Result<Vec<(String, Span)>, Error> {
    let mut names = vec![];
    loop {
        let token = parser.expect(TokenKind::Identifier)?;
        names.push((token.value, token.span));

        if parser.current_token_kind() != TokenKind::Comma {
            return Ok(names);
        }
        parser.advance();
    }
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // class Name extends Base mixin A, B { [modifiers] T field (= e)?; [modifiers] fn m() {} }
    let start = parser.advance().span.start.clone();

    let name = parser
        .expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expected class name")),
        )?
        .value;
    parser.register_type_name(&name);

    let superclass = if parser.current_token_kind() == TokenKind::Extends {
        parser.advance();
        let token = parser.expect(TokenKind::Identifier)?;
        Some((token.value, token.span))
    } else {
        None
    };

    let mixins = if parser.current_token_kind() == TokenKind::Mixin {
        parser.advance();
        parse_named_list(parser)?
    } else {
        vec![]
    };

    parser.expect(TokenKind::OpenCurly)?;

    let mut fields = vec![];
    let mut methods = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        let member_start = parser.get_position();

        let mut modifiers = MemberModifiers::empty();
        loop {
            let modifier = match parser.current_token_kind() {
                TokenKind::Public => MemberModifiers::PUBLIC,
                TokenKind::Private => MemberModifiers::PRIVATE,
                TokenKind::Static => MemberModifiers::STATIC,
                TokenKind::Const => MemberModifiers::CONST,
                _ => break,
            };
            modifiers.insert(modifier);
            parser.advance();
        }

        if parser.current_token_kind() == TokenKind::Fn {
            let function = parse_fn_decl(parser)?;
            methods.push(MethodDecl {
                modifiers,
                function,
            });
            continue;
        }

        let type_ref = parse_type(parser, BindingPower::Default)?;
        let field_name = parser
            .expect_error(
                TokenKind::Identifier,
                Some(parser.unexpected("expected field name after its type")),
            )?
            .value;
        let initializer = if parser.current_token_kind() == TokenKind::Assignment {
            parser.advance();
            Some(parse_expr(parser, BindingPower::Default)?)
        } else {
            None
        };
        parser.expect(TokenKind::Semicolon)?;

        fields.push(FieldDecl {
            name: field_name,
            modifiers,
            type_ref,
            initializer,
            span: parser.span_from(member_start),
        });
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::ClassDecl(ClassDeclStmt {
        name,
        superclass,
        mixins,
        fields,
        methods,
        span: parser.span_from(start),
    }))
}

pub fn parse_interface_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // interface Name { const id: int, name: string, [string]: any }
    let start = parser.advance().span.start.clone();

    let name = parser
        .expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expected interface name")),
        )?
        .value;
    parser.register_type_name(&name);

    let type_ref = parse_interface_type(parser)?;

    Ok(Stmt::TypeDecl(TypeDeclStmt {
        name,
        type_ref,
        span: parser.span_from(start),
    }))
}

pub fn parse_type_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // type Name = T;
    let start = parser.advance().span.start.clone();

    let name = parser
        .expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expected type name")),
        )?
        .value;
    parser.register_type_name(&name);

    parser.expect(TokenKind::Assignment)?;
    let type_ref = parse_type(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::TypeDecl(TypeDeclStmt {
        name,
        type_ref,
        span: parser.span_from(start),
    }))
}
