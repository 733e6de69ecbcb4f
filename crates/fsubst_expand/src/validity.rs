//! Validity - 展开前的可简化性判断
//!
//! 展开器只依赖这个谓词，不关心它检查了什么。

use fsubst_syntax::FunctionTable;

pub trait Validity {
    /// 表达式在给定函数表下能否完全展开
    fn is_simplifiable(&self, expression: &str, functions: &FunctionTable) -> bool;
}

impl<F> Validity for F
where
    F: Fn(&str, &FunctionTable) -> bool,
{
    fn is_simplifiable(&self, expression: &str, functions: &FunctionTable) -> bool {
        self(expression, functions)
    }
}

/// 总是返回 true 的谓词，调用方自行保证输入合法
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeSimplifiable;

impl Validity for AssumeSimplifiable {
    fn is_simplifiable(&self, _expression: &str, _functions: &FunctionTable) -> bool {
        true
    }
}
