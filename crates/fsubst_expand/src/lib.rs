//! fsubst Expand
//!
//! 函数引用展开：把表达式中的 `fN` 逐轮替换为函数表中的定义，
//! 直到只剩常量、运算符和自由变量 `x`。
//!
//! # 示例
//!
//! ```rust
//! use fsubst_expand::{simplify, AssumeSimplifiable};
//! use fsubst_syntax::FunctionTable;
//!
//! let functions = FunctionTable::from([
//!     ("f1", "f2 + f5"),
//!     ("f2", "0.5 - f4"),
//!     ("f4", "x"),
//!     ("f5", "90 + 1"),
//! ]);
//!
//! let expanded = simplify("f1", &functions, AssumeSimplifiable).unwrap();
//! assert_eq!(expanded, "(0.5 - (x)) + (90 + 1)");
//! ```

pub mod error;
pub mod expander;
pub mod validity;

pub use error::{ExpandError, ExpandResult};
pub use expander::{simplify, Expander};
pub use validity::{AssumeSimplifiable, Validity};
