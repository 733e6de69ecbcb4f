//! AST 定义
//!
//! 仅供语法校验使用：展开器始终在文本上工作，不会把树序列化回表达式。

pub mod expr;

pub use expr::*;

/// 源码位置 (字节偏移)
pub type Span = std::ops::Range<usize>;
