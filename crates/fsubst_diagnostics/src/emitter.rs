//! Emitter - 诊断输出器
//!
//! 没有源码时输出简洁的一行式诊断；知道源码时交给 ariadne 绘制带标注的报告。

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;
use crate::span::{char_span, Span};
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use colored::*;

pub struct Emitter {
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 输出单个诊断到 stderr
    pub fn emit(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.render(diagnostic));
    }

    /// 输出带源码标注的诊断；`source` 必须是 span 所指向的那段文本
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) {
        eprint!("{}", self.render_with_source(diagnostic, source));
    }

    /// 渲染为字符串（不含源码）
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        if self.use_colors {
            self.render_colored(diagnostic)
        } else {
            self.render_plain(diagnostic)
        }
    }

    /// 渲染为字符串（含源码）；没有 span 时退化为 [`Emitter::render`]
    pub fn render_with_source(&self, diagnostic: &Diagnostic, source: &str) -> String {
        let Some(span) = &diagnostic.span else {
            return self.render(diagnostic);
        };
        // ariadne 按字符定位
        let span = char_span(span, source);

        let kind = match diagnostic.level {
            DiagnosticLevel::Error => ReportKind::Error,
            DiagnosticLevel::Warning => ReportKind::Warning,
        };
        let label = match &diagnostic.origin {
            Some(name) => format!("in definition of {}", name),
            None => "here".to_string(),
        };

        let mut builder = Report::<Span>::build(kind, (), span.start)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message)
            .with_label(Label::new(span).with_message(label).with_color(Color::Red));
        for note in &diagnostic.notes {
            builder = builder.with_note(note);
        }

        let mut out = Vec::new();
        if builder
            .finish()
            .write(Source::from(source.to_string()), &mut out)
            .is_err()
        {
            return self.render(diagnostic);
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    fn render_colored(&self, diagnostic: &Diagnostic) -> String {
        let mut out = format!(
            "{}: {}\n",
            diagnostic.level.colored_name(),
            diagnostic.message.bold()
        );
        if let Some(location) = diagnostic.location() {
            out.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));
        }
        for note in &diagnostic.notes {
            out.push_str(&format!(
                "  {} {}\n",
                "=".blue().bold(),
                format!("note: {}", note).bright_black()
            ));
        }
        out
    }

    fn render_plain(&self, diagnostic: &Diagnostic) -> String {
        let mut out = format!("{}: {}\n", diagnostic.level, diagnostic.message);
        if let Some(location) = diagnostic.location() {
            out.push_str(&format!("  --> {}\n", location));
        }
        for note in &diagnostic.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        out
    }
}
