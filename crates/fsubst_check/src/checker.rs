//! Checker
//!
//! 默认的可简化性校验：
//! 1. 表达式和所有可达定义都符合语法；
//! 2. 每个可达引用都有定义；
//! 3. 可达的引用图中没有环（否则展开不会终止）。

use crate::error::CheckError;
use fsubst_expand::Validity;
use fsubst_syntax::{is_reference_name, parse, FunctionTable};
use std::collections::HashMap;
use tracing::debug;

/// 深度优先遍历时的节点状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// 一次校验的状态
struct Pass<'t> {
    table: &'t FunctionTable,
    errors: Vec<CheckError>,
    visits: HashMap<&'t str, Visit>,
    /// 当前 DFS 路径，用于还原环
    path: Vec<&'t str>,
}

impl<'t> Pass<'t> {
    fn new(table: &'t FunctionTable) -> Self {
        Self {
            table,
            errors: Vec::new(),
            visits: HashMap::new(),
            path: Vec::new(),
        }
    }

    /// 校验一段文本（表达式或某个定义），并递归进入它引用的定义
    fn check_text(&mut self, text: &str, origin: Option<&'t str>) {
        let expr = match parse(text) {
            Ok(expr) => expr,
            Err(errors) => {
                self.errors.extend(
                    errors
                        .into_iter()
                        .map(|e| CheckError::from_syntax(e, origin)),
                );
                return;
            }
        };

        for (name, span) in expr.references() {
            match self.table.get_key_value(name) {
                Some((key, _)) => self.visit(key),
                None => self.errors.push(CheckError::UndefinedFunction {
                    name: name.to_string(),
                    span,
                    origin: origin.map(str::to_string),
                }),
            }
        }
    }

    fn visit(&mut self, name: &'t str) {
        match self.visits.get(name) {
            Some(Visit::Done) => return,
            Some(Visit::InProgress) => {
                let start = self.path.iter().position(|n| *n == name).unwrap_or(0);
                let mut cycle: Vec<String> =
                    self.path[start..].iter().map(|n| n.to_string()).collect();
                cycle.push(name.to_string());
                debug!(cycle = %cycle.join(" -> "), "cyclic definition");
                self.errors.push(CheckError::CyclicDefinition { cycle });
                return;
            }
            None => {}
        }

        self.visits.insert(name, Visit::InProgress);
        self.path.push(name);
        if let Some(definition) = self.table.get(name) {
            self.check_text(definition, Some(name));
        }
        self.path.pop();
        self.visits.insert(name, Visit::Done);
    }

    fn finish(self) -> Result<(), Vec<CheckError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// 默认校验器
#[derive(Debug, Clone, Copy, Default)]
pub struct Checker;

impl Checker {
    pub fn new() -> Self {
        Self
    }

    /// 校验表达式及其可达的全部定义
    ///
    /// 不可达的定义不参与校验，即使它们本身有错误。
    pub fn check(&self, expression: &str, table: &FunctionTable) -> Result<(), Vec<CheckError>> {
        let mut pass = Pass::new(table);
        pass.check_text(expression, None);
        pass.finish()
    }

    /// 校验整张函数表：函数名、每个定义的语法、未定义引用和循环
    pub fn check_table(&self, table: &FunctionTable) -> Result<(), Vec<CheckError>> {
        let mut pass = Pass::new(table);
        for name in table.names() {
            if !is_reference_name(name) {
                pass.errors.push(CheckError::InvalidFunctionName {
                    name: name.to_string(),
                });
            }
        }
        for name in table.names() {
            pass.visit(name);
        }
        pass.finish()
    }
}

impl Validity for Checker {
    fn is_simplifiable(&self, expression: &str, functions: &FunctionTable) -> bool {
        match self.check(expression, functions) {
            Ok(()) => true,
            Err(errors) => {
                debug!(errors = errors.len(), "expression rejected");
                false
            }
        }
    }
}
