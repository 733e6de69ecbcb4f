//! fsubst Syntax
//!
//! 表达式的词法、语法与函数定义表：
//! - [`lexer::Token`] - logos 词法单元
//! - [`parser::parse`] - chumsky 语法校验，产出 [`ast::Expr`]
//! - [`FunctionTable`] - 函数名到定义的映射

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod table;

pub use lexer::{is_reference_name, Token};
pub use parser::{parse, SyntaxError};
pub use table::FunctionTable;
