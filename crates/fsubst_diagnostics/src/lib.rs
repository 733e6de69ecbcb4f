//! fsubst Diagnostics
//!
//! 统一的诊断系统：校验器、展开器和驱动层的错误都先转换为 [`Diagnostic`]，
//! 再由 [`Emitter`] 输出到终端。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器
//! - [`Span`] - 表达式内的字节范围
//!
//! # 示例
//!
//! ```rust
//! use fsubst_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
//!
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(
//!     Diagnostic::error("'f9' is undefined")
//!         .span(6..8)
//!         .in_definition("f2")
//!         .with_note("add a definition such as `f9 = x` to the table"),
//! );
//!
//! if sink.has_errors() {
//!     let emitter = Emitter::without_colors();
//!     for diagnostic in sink.diagnostics() {
//!         emitter.emit(diagnostic);
//!     }
//! }
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

pub use diagnostic::Diagnostic;
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::{char_span, clamp_span, Span};
