//! Operator overload tables.
//!
//! Each table is an ordered list; binding picks the first entry that lists the
//! operator token and accepts both operand types. Specific entries come
//! before general ones (`int` before `float` before `string`, anything before
//! `any`), so the order below is significant.

use lazy_static::lazy_static;

use crate::{lexer::tokens::TokenKind, types::Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundBinaryOperatorKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    Equality,
    Inequality,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    LogicalAnd,
    LogicalOr,
    Range,
}

impl BoundBinaryOperatorKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            BoundBinaryOperatorKind::Addition => "+",
            BoundBinaryOperatorKind::Subtraction => "-",
            BoundBinaryOperatorKind::Multiplication => "*",
            BoundBinaryOperatorKind::Division => "/",
            BoundBinaryOperatorKind::Modulo => "%",
            BoundBinaryOperatorKind::Equality => "==",
            BoundBinaryOperatorKind::Inequality => "!=",
            BoundBinaryOperatorKind::Less => "<",
            BoundBinaryOperatorKind::LessOrEqual => "<=",
            BoundBinaryOperatorKind::Greater => ">",
            BoundBinaryOperatorKind::GreaterOrEqual => ">=",
            BoundBinaryOperatorKind::LogicalAnd => "&&",
            BoundBinaryOperatorKind::LogicalOr => "||",
            BoundBinaryOperatorKind::Range => "..",
        }
    }

    /// Operators whose operands must be comparable with each other.
    pub fn compares_operands(&self) -> bool {
        matches!(
            self,
            BoundBinaryOperatorKind::Equality
                | BoundBinaryOperatorKind::Inequality
                | BoundBinaryOperatorKind::Less
                | BoundBinaryOperatorKind::LessOrEqual
                | BoundBinaryOperatorKind::Greater
                | BoundBinaryOperatorKind::GreaterOrEqual
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundBinaryOperator {
    pub syntaxes: Vec<TokenKind>,
    pub kind: BoundBinaryOperatorKind,
    pub left_type: Type,
    pub right_type: Type,
    pub result_type: Type,
}

impl BoundBinaryOperator {
    fn new(
        syntaxes: &[TokenKind],
        kind: BoundBinaryOperatorKind,
        left_type: Type,
        right_type: Type,
        result_type: Type,
    ) -> Self {
        BoundBinaryOperator {
            syntaxes: syntaxes.to_vec(),
            kind,
            left_type,
            right_type,
            result_type,
        }
    }

    /// Finds the first entry for `syntax` accepting `left` and `right`.
    pub fn bind(syntax: TokenKind, left: &Type, right: &Type) -> Option<&'static BoundBinaryOperator> {
        let operator = BINARY_OPERATORS.iter().find(|operator| {
            operator.syntaxes.contains(&syntax)
                && left.is_assignable_to(&operator.left_type)
                && right.is_assignable_to(&operator.right_type)
        });

        tracing::trace!(
            operator = syntax.symbol(),
            %left,
            %right,
            kind = ?operator.map(|operator| operator.kind),
            "bind binary operator"
        );
        operator
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundUnaryOperatorKind {
    Negation,
    LogicalNegation,
    Increment,
    Decrement,
}

impl BoundUnaryOperatorKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            BoundUnaryOperatorKind::Negation => "-",
            BoundUnaryOperatorKind::LogicalNegation => "!",
            BoundUnaryOperatorKind::Increment => "++",
            BoundUnaryOperatorKind::Decrement => "--",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundUnaryOperator {
    pub syntaxes: Vec<TokenKind>,
    pub kind: BoundUnaryOperatorKind,
    pub operand_type: Type,
    pub result_type: Type,
}

impl BoundUnaryOperator {
    fn new(
        syntaxes: &[TokenKind],
        kind: BoundUnaryOperatorKind,
        operand_type: Type,
        result_type: Type,
    ) -> Self {
        BoundUnaryOperator {
            syntaxes: syntaxes.to_vec(),
            kind,
            operand_type,
            result_type,
        }
    }

    pub fn bind(syntax: TokenKind, operand: &Type) -> Option<&'static BoundUnaryOperator> {
        let operator = UNARY_OPERATORS.iter().find(|operator| {
            operator.syntaxes.contains(&syntax) && operand.is_assignable_to(&operator.operand_type)
        });

        tracing::trace!(
            operator = syntax.symbol(),
            %operand,
            kind = ?operator.map(|operator| operator.kind),
            "bind unary operator"
        );
        operator
    }
}

fn number() -> Type {
    Type::union(vec![Type::int(), Type::float()])
}

lazy_static! {
    pub static ref BINARY_OPERATORS: Vec<BoundBinaryOperator> = {
        use BoundBinaryOperatorKind::*;
        use TokenKind as T;

        let addition = [T::Plus, T::PlusEquals];
        let subtraction = [T::Dash, T::MinusEquals];
        let multiplication = [T::Star, T::StarEquals];
        let division = [T::Slash, T::SlashEquals];
        let modulo = [T::Percent];

        vec![
            BoundBinaryOperator::new(&addition, Addition, Type::int(), Type::int(), Type::int()),
            BoundBinaryOperator::new(&addition, Addition, number(), number(), Type::float()),
            BoundBinaryOperator::new(&addition, Addition, Type::string(), Type::any(), Type::string()),
            BoundBinaryOperator::new(&addition, Addition, Type::any(), Type::string(), Type::string()),

            BoundBinaryOperator::new(&subtraction, Subtraction, Type::int(), Type::int(), Type::int()),
            BoundBinaryOperator::new(&subtraction, Subtraction, number(), number(), Type::float()),
            BoundBinaryOperator::new(&multiplication, Multiplication, Type::int(), Type::int(), Type::int()),
            BoundBinaryOperator::new(&multiplication, Multiplication, number(), number(), Type::float()),
            BoundBinaryOperator::new(&division, Division, Type::int(), Type::int(), Type::int()),
            BoundBinaryOperator::new(&division, Division, number(), number(), Type::float()),
            BoundBinaryOperator::new(&modulo, Modulo, Type::int(), Type::int(), Type::int()),
            BoundBinaryOperator::new(&modulo, Modulo, number(), number(), Type::float()),

            BoundBinaryOperator::new(&[T::Less], Less, number(), number(), Type::bool()),
            BoundBinaryOperator::new(&[T::LessEquals], LessOrEqual, number(), number(), Type::bool()),
            BoundBinaryOperator::new(&[T::Greater], Greater, number(), number(), Type::bool()),
            BoundBinaryOperator::new(&[T::GreaterEquals], GreaterOrEqual, number(), number(), Type::bool()),
            BoundBinaryOperator::new(&[T::Less], Less, Type::string(), Type::string(), Type::bool()),
            BoundBinaryOperator::new(&[T::LessEquals], LessOrEqual, Type::string(), Type::string(), Type::bool()),
            BoundBinaryOperator::new(&[T::Greater], Greater, Type::string(), Type::string(), Type::bool()),
            BoundBinaryOperator::new(&[T::GreaterEquals], GreaterOrEqual, Type::string(), Type::string(), Type::bool()),

            BoundBinaryOperator::new(&[T::Equals], Equality, Type::any(), Type::any(), Type::bool()),
            BoundBinaryOperator::new(&[T::NotEquals], Inequality, Type::any(), Type::any(), Type::bool()),

            BoundBinaryOperator::new(&[T::And], LogicalAnd, Type::any(), Type::any(), Type::bool()),
            BoundBinaryOperator::new(&[T::Or], LogicalOr, Type::any(), Type::any(), Type::bool()),

            BoundBinaryOperator::new(&[T::DotDot], Range, Type::int(), Type::int(), Type::range()),
        ]
    };

    pub static ref UNARY_OPERATORS: Vec<BoundUnaryOperator> = {
        use BoundUnaryOperatorKind::*;
        use TokenKind as T;

        vec![
            BoundUnaryOperator::new(&[T::Dash], Negation, Type::int(), Type::int()),
            BoundUnaryOperator::new(&[T::Dash], Negation, Type::float(), Type::float()),
            BoundUnaryOperator::new(&[T::Dash], Negation, number(), Type::float()),
            BoundUnaryOperator::new(&[T::Not], LogicalNegation, Type::any(), Type::bool()),
            BoundUnaryOperator::new(&[T::PlusPlus], Increment, Type::int(), Type::int()),
            BoundUnaryOperator::new(&[T::MinusMinus], Decrement, Type::int(), Type::int()),
        ]
    };
}
