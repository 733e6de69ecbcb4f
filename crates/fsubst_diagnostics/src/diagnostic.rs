//! Diagnostic - 诊断信息
//!
//! 一条诊断指向某段源码：要么是用户输入的表达式，要么是函数表中
//! 某个定义的右侧（`origin` 记录是哪一个定义）。

use crate::level::DiagnosticLevel;
use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    /// 主要消息
    pub message: String,
    /// 出错位置（字节偏移，可选）
    pub span: Option<Span>,
    /// span 所属的函数定义；`None` 表示用户输入的表达式
    pub origin: Option<String>,
    /// 定义文件路径
    pub file: Option<String>,
    /// 补充注释
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            origin: None,
            file: None,
            notes: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    /// 设置位置信息
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// 标记 span 属于哪个函数定义
    pub fn in_definition(mut self, name: impl Into<String>) -> Self {
        self.origin = Some(name.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// 位置描述，例如 `defs.txt: f2 @ 6..8`
    pub fn location(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(file) = &self.file {
            parts.push(file.clone());
        }
        let target = self.origin.as_deref().unwrap_or("<expression>");
        match &self.span {
            Some(span) => parts.push(format!("{} @ {}..{}", target, span.start, span.end)),
            None if self.origin.is_some() => parts.push(target.to_string()),
            None => {}
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(": "))
        }
    }
}
