//! Driver Errors
//!
//! 驱动层的错误类型，集成统一诊断系统

use fsubst_check::CheckError;
use fsubst_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
use fsubst_expand::ExpandError;
use fsubst_syntax::FunctionTable;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    /// 校验错误（可能有多个）
    #[error("Check failed:\n{}", format_check_errors(.0))]
    Check(Vec<CheckError>),

    #[error("Expansion error: {0}")]
    Expand(#[from] ExpandError),

    /// 定义文件格式错误
    #[error("Definitions error on line {line}: {message}")]
    Definitions { line: usize, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// 转换为诊断列表并收集到 DiagnosticSink
    pub fn collect_to_sink(&self, sink: &mut DiagnosticSink, file_path: Option<&str>) {
        let mut add_diag = |diag: Diagnostic| match file_path {
            Some(path) => sink.add(diag.with_file(path)),
            None => sink.add(diag),
        };

        match self {
            DriverError::Check(errors) => {
                for err in errors {
                    add_diag(err.to_diagnostic());
                }
            }
            DriverError::Expand(err) => add_diag(err.to_diagnostic()),
            DriverError::Definitions { line, message } => add_diag(
                Diagnostic::error(message.clone()).with_note(format!("on line {}", line)),
            ),
            DriverError::Json(err) => {
                add_diag(Diagnostic::error(format!("invalid JSON definitions: {}", err)))
            }
            DriverError::Io(err) => add_diag(Diagnostic::error(format!("IO error: {}", err))),
        }
    }

    /// 使用统一诊断系统输出错误
    ///
    /// 诊断的 span 指向表达式或某个定义；能找到对应文本时带源码输出。
    /// 返回输出的错误数。
    pub fn emit(
        &self,
        emitter: &Emitter,
        file_path: Option<&str>,
        expression: Option<&str>,
        table: Option<&FunctionTable>,
    ) -> usize {
        let mut sink = DiagnosticSink::new();
        self.collect_to_sink(&mut sink, file_path);

        for diag in sink.diagnostics() {
            let source = match &diag.origin {
                Some(name) => table.and_then(|t| t.get(name)),
                None => expression,
            };
            match source {
                Some(src) => emitter.emit_with_source(diag, src),
                None => emitter.emit(diag),
            }
        }
        sink.error_count()
    }
}

fn format_check_errors(errors: &[CheckError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type DriverResult<T> = Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_errors_are_numbered() {
        let err = DriverError::Check(vec![
            CheckError::InvalidFunctionName {
                name: "g1".to_string(),
            },
            CheckError::CyclicDefinition {
                cycle: vec!["f1".to_string(), "f1".to_string()],
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Check failed:\n  1. 'g1' is not a valid function name, expected 'f' followed by digits\n  2. cyclic definition: f1 -> f1"
        );
    }

    #[test]
    fn test_collect_to_sink_attaches_file() {
        let err = DriverError::Expand(ExpandError::UndefinedReference {
            name: "f9".to_string(),
        });
        let mut sink = DiagnosticSink::new();
        err.collect_to_sink(&mut sink, Some("defs.txt"));

        assert!(sink.has_errors());
        assert_eq!(sink.diagnostics()[0].file.as_deref(), Some("defs.txt"));
        assert_eq!(sink.diagnostics()[0].message, "'f9' is undefined");
    }

    #[test]
    fn test_definitions_error_display() {
        let err = DriverError::Definitions {
            line: 3,
            message: "missing '='".to_string(),
        };
        assert_eq!(err.to_string(), "Definitions error on line 3: missing '='");
    }

    #[test]
    fn test_emit_returns_error_count() {
        let err = DriverError::Check(vec![
            CheckError::InvalidFunctionName {
                name: "g1".to_string(),
            },
            CheckError::CyclicDefinition {
                cycle: vec!["f1".to_string(), "f1".to_string()],
            },
        ]);
        let table = FunctionTable::from([("g1", "x"), ("f1", "f1")]);
        assert_eq!(err.emit(&Emitter::without_colors(), None, None, Some(&table)), 2);
    }
}
