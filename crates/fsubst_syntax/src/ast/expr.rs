use super::Span;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// 数字字面量，保留原文
    Number(String),
    /// 自由变量 x
    Var,
    /// 函数引用 fN
    Ref(String),
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
}

impl Expr {
    /// 按出现顺序收集所有函数引用（名字和位置）
    pub fn references(&self) -> Vec<(&str, Span)> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references<'a>(&'a self, refs: &mut Vec<(&'a str, Span)>) {
        match &self.kind {
            ExprKind::Ref(name) => refs.push((name.as_str(), self.span.clone())),
            ExprKind::Binary(lhs, _, rhs) => {
                lhs.collect_references(refs);
                rhs.collect_references(refs);
            }
            ExprKind::Number(_) | ExprKind::Var => {}
        }
    }
}
