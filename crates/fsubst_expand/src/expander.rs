//! Expander
//!
//! 按轮次把函数引用替换为定义，直到文本中不再有引用。
//!
//! 每一轮：
//! 1. 用词法分析器从左到右找出所有 `fN` 引用，同时记录是否出现运算符；
//! 2. 没有引用则结束；
//! 3. 否则把每个引用替换为它的定义。只有第一轮且整个表达式不含运算符时
//!    才直接替换，其余情况一律替换为 `(definition)`。
//!
//! 替换按 token 的 span 拼接，token 之间的原文（空白、数字、括号）原样保留，
//! 因此 `f1` 不会误匹配 `f12` 的前缀。

use crate::error::{ExpandError, ExpandResult};
use crate::validity::Validity;
use fsubst_syntax::{FunctionTable, Token};
use logos::Logos;
use std::ops::Range;
use tracing::{debug, trace};

/// 一轮扫描的结果
#[derive(Debug, Default)]
struct Scan<'s> {
    /// 引用的名字和位置，按出现顺序
    refs: Vec<(&'s str, Range<usize>)>,
    has_operator: bool,
}

impl<'s> Scan<'s> {
    fn of(text: &'s str) -> Self {
        let mut scan = Scan::default();
        for (tok, span) in Token::lexer(text).spanned() {
            match tok {
                Ok(Token::Ref(_)) => scan.refs.push((&text[span.clone()], span)),
                Ok(tok) if tok.is_operator() => scan.has_operator = true,
                // 无法识别的字符不属于展开器的职责，原样保留
                _ => {}
            }
        }
        scan
    }
}

/// 函数引用展开器
pub struct Expander<'t, V> {
    functions: &'t FunctionTable,
    validity: V,
}

impl<'t, V: Validity> Expander<'t, V> {
    pub fn new(functions: &'t FunctionTable, validity: V) -> Self {
        Self {
            functions,
            validity,
        }
    }

    /// 展开表达式中的所有函数引用
    ///
    /// # Errors
    ///
    /// - [`ExpandError::Unsimplifiable`]：校验谓词拒绝了输入，此时不做任何展开
    /// - [`ExpandError::UndefinedReference`]：遇到函数表中没有的引用
    ///
    /// 函数表中存在循环引用且谓词没有拦截时，本函数不会返回。
    pub fn simplify(&self, expression: &str) -> ExpandResult<String> {
        if !self.validity.is_simplifiable(expression, self.functions) {
            return Err(ExpandError::Unsimplifiable);
        }

        let mut current = expression.to_string();
        let mut outermost = true;
        let mut round = 0usize;

        loop {
            let scan = Scan::of(&current);
            if scan.refs.is_empty() {
                debug!(rounds = round, "expansion finished");
                return Ok(current);
            }

            round += 1;
            let parenthesize = !outermost || scan.has_operator;
            debug!(
                round,
                references = scan.refs.len(),
                parenthesize,
                "expansion round"
            );

            let next = self.substitute(&current, &scan, parenthesize)?;
            current = next;
            outermost = false;
        }
    }

    /// 替换本轮找到的全部引用
    fn substitute(&self, text: &str, scan: &Scan<'_>, parenthesize: bool) -> ExpandResult<String> {
        let mut out = String::with_capacity(text.len() * 2);
        let mut last = 0;

        for (name, span) in &scan.refs {
            let definition =
                self.functions
                    .get(name)
                    .ok_or_else(|| ExpandError::UndefinedReference {
                        name: name.to_string(),
                    })?;
            trace!(name, definition, "substitute");

            out.push_str(&text[last..span.start]);
            if parenthesize {
                out.push('(');
                out.push_str(definition);
                out.push(')');
            } else {
                out.push_str(definition);
            }
            last = span.end;
        }
        out.push_str(&text[last..]);

        Ok(out)
    }
}

/// 便捷入口：`Expander::new(functions, validity).simplify(expression)`
pub fn simplify<V: Validity>(
    expression: &str,
    functions: &FunctionTable,
    validity: V,
) -> ExpandResult<String> {
    Expander::new(functions, validity).simplify(expression)
}
