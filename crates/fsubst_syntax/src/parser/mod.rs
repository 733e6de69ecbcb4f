//! Parser Module
//!
//! 基于 chumsky 的表达式语法。优先级从低到高：
//! `+ -`（左结合）、`* /`（左结合）、`**`（右结合）、原子与括号。

use crate::ast::{BinaryOp, Expr, ExprKind, Span};
use crate::lexer::Token;
use chumsky::prelude::*;
use chumsky::Stream;
use logos::Logos;
use std::fmt;

pub type ParserError = Simple<Token>;

/// 解析失败的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// 无法识别的字符
    Lex { span: Span, found: String },
    /// 语法错误
    Parse { span: Span, message: String },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex { found, .. } => write!(f, "unrecognized character '{}'", found),
            Self::Parse { message, .. } => f.write_str(message),
        }
    }
}

fn binary(lhs: Expr, op: BinaryOp, rhs: Expr) -> Expr {
    let span = lhs.span.start..rhs.span.end;
    Expr {
        kind: ExprKind::Binary(Box::new(lhs), op, Box::new(rhs)),
        span,
    }
}

/// 表达式解析器（不要求消费完输入）
pub fn expr_parser() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    recursive(|expr| {
        let atom = select! {
            Token::Number(n) => ExprKind::Number(n),
            Token::Var => ExprKind::Var,
            Token::Ref(name) => ExprKind::Ref(name),
        }
        .map_with_span(|kind, span| Expr { kind, span })
        .or(expr.delimited_by(just(Token::LParen), just(Token::RParen)))
        .boxed();

        // Power: ** (Right associative)
        let power = atom
            .clone()
            .then_ignore(just(Token::StarStar))
            .repeated()
            .then(atom)
            .foldr(|lhs, rhs| binary(lhs, BinaryOp::Pow, rhs))
            .boxed();

        // Product: *, /
        let product = power
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .then(power)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| binary(lhs, op, rhs))
            .boxed();

        // Sum: +, -
        product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| binary(lhs, op, rhs))
            .boxed()
    })
}

/// 主入口：整个输入必须是一个表达式
pub fn expression_parser() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    expr_parser().then_ignore(end())
}

/// 词法分析，返回带 span 的 token 序列
pub fn lex(source: &str) -> Result<Vec<(Token, Span)>, Vec<SyntaxError>> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for (tok, span) in Token::lexer(source).spanned() {
        match tok {
            Ok(tok) => tokens.push((tok, span)),
            Err(()) => errors.push(SyntaxError::Lex {
                found: source[span.clone()].to_string(),
                span,
            }),
        }
    }
    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}

/// 解析一段表达式文本
pub fn parse(source: &str) -> Result<Expr, Vec<SyntaxError>> {
    let tokens = lex(source)?;
    let eoi = source.len()..source.len() + 1;
    expression_parser()
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errors| errors.into_iter().map(describe).collect())
}

fn describe(error: ParserError) -> SyntaxError {
    let message = match error.reason() {
        chumsky::error::SimpleReason::Unclosed { delimiter, .. } => {
            format!("unclosed delimiter {}", delimiter)
        }
        chumsky::error::SimpleReason::Custom(msg) => msg.clone(),
        chumsky::error::SimpleReason::Unexpected => {
            let found = error
                .found()
                .map(|tok| tok.to_string())
                .unwrap_or_else(|| "end of expression".to_string());
            let mut expected: Vec<String> = error
                .expected()
                .map(|tok| match tok {
                    Some(tok) => tok.to_string(),
                    None => "end of expression".to_string(),
                })
                .collect();
            expected.sort();
            expected.dedup();
            if expected.is_empty() {
                format!("unexpected {}", found)
            } else {
                format!("unexpected {}, expected {}", found, expected.join(" or "))
            }
        }
    };
    SyntaxError::Parse {
        span: error.span(),
        message,
    }
}
