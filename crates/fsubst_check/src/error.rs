//! Check Error Types
//!
//! 校验错误。带 span 的错误同时记录 span 所在的文本：
//! `origin == None` 表示用户输入的表达式，否则是对应函数的定义。

use fsubst_diagnostics::Diagnostic;
use fsubst_syntax::ast::Span;
use fsubst_syntax::SyntaxError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    // ============ 语法错误 ============
    #[error("unrecognized character '{found}'")]
    UnrecognizedCharacter {
        found: String,
        span: Span,
        origin: Option<String>,
    },

    #[error("{message}")]
    Syntax {
        message: String,
        span: Span,
        origin: Option<String>,
    },

    // ============ 函数表错误 ============
    #[error("'{name}' is undefined")]
    UndefinedFunction {
        name: String,
        span: Span,
        origin: Option<String>,
    },

    #[error("'{name}' is not a valid function name, expected 'f' followed by digits")]
    InvalidFunctionName { name: String },

    /// 循环定义，`cycle` 首尾是同一个函数
    #[error("cyclic definition: {}", .cycle.join(" -> "))]
    CyclicDefinition { cycle: Vec<String> },
}

impl CheckError {
    pub(crate) fn from_syntax(error: SyntaxError, origin: Option<&str>) -> Self {
        let origin = origin.map(str::to_string);
        match error {
            SyntaxError::Lex { span, found } => Self::UnrecognizedCharacter {
                found,
                span,
                origin,
            },
            SyntaxError::Parse { span, message } => Self::Syntax {
                message,
                span,
                origin,
            },
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::UnrecognizedCharacter { span, .. } => Some(span),
            Self::Syntax { span, .. } => Some(span),
            Self::UndefinedFunction { span, .. } => Some(span),
            Self::InvalidFunctionName { .. } => None,
            Self::CyclicDefinition { .. } => None,
        }
    }

    /// 出错文本属于哪个定义
    pub fn origin(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedCharacter { origin, .. }
            | Self::Syntax { origin, .. }
            | Self::UndefinedFunction { origin, .. } => origin.as_deref(),
            Self::InvalidFunctionName { name } => Some(name.as_str()),
            Self::CyclicDefinition { cycle } => cycle.first().map(String::as_str),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.to_string());
        if let Some(span) = self.span() {
            diag = diag.span(span.clone());
        }
        if let Some(origin) = self.origin() {
            diag = diag.in_definition(origin);
        }
        match self {
            Self::UndefinedFunction { name, .. } => diag.with_note(format!(
                "add a definition for {} to the function table",
                name
            )),
            Self::CyclicDefinition { .. } => {
                diag.with_note("expansion of a cyclic definition never terminates")
            }
            Self::UnrecognizedCharacter { .. } => {
                diag.with_note("expressions may only use numbers, x, f<digits>, + - * / ** and parentheses")
            }
            _ => diag,
        }
    }
}
