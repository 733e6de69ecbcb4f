//! fsubst Check
//!
//! 默认的 [`Validity`](fsubst_expand::Validity) 实现：在展开之前确认表达式可以完全展开。
//! 展开器本身不检测循环，循环定义必须在这里被拦下。

pub mod checker;
pub mod error;

pub use checker::Checker;
pub use error::CheckError;
