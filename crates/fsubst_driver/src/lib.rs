//! fsubst Driver
//!
//! 串联校验与展开：读取定义文件，校验，展开，统一报告错误。

pub mod definitions;
pub mod error;

pub use definitions::{load_table, parse_table};
pub use error::{DriverError, DriverResult};

use fsubst_check::Checker;
use fsubst_expand::{simplify, AssumeSimplifiable};
use fsubst_syntax::FunctionTable;
use tracing::debug;

/// 校验后展开
///
/// 校验失败时返回 [`DriverError::Check`]，包含全部校验错误，
/// 而不是只有一个笼统的 "not simplifiable"。校验只做一次，展开时不再重复。
pub fn simplify_checked(expression: &str, table: &FunctionTable) -> DriverResult<String> {
    Checker::new()
        .check(expression, table)
        .map_err(DriverError::Check)?;
    simplify_unchecked(expression, table)
}

/// 不做校验直接展开；循环定义会导致不终止
pub fn simplify_unchecked(expression: &str, table: &FunctionTable) -> DriverResult<String> {
    Ok(simplify(expression, table, AssumeSimplifiable)?)
}

/// 校验整张表后展开每一个定义，按函数名顺序返回 (name, expansion)
pub fn expand_all(table: &FunctionTable) -> DriverResult<Vec<(String, String)>> {
    Checker::new()
        .check_table(table)
        .map_err(DriverError::Check)?;

    table
        .names()
        .map(|name| -> DriverResult<(String, String)> {
            let expanded = simplify(name, table, AssumeSimplifiable)?;
            Ok((name.to_string(), expanded))
        })
        .collect()
}

/// 校验整张表，以及可选的表达式
///
/// 表达式经过某个定义时报出的错误已经包含在整表校验中，只补充表达式自身的问题。
pub fn check_definitions(table: &FunctionTable, expression: Option<&str>) -> DriverResult<()> {
    let checker = Checker::new();
    let mut errors = checker.check_table(table).err().unwrap_or_default();

    if let Some(expression) = expression {
        if let Err(expr_errors) = checker.check(expression, table) {
            errors.extend(expr_errors.into_iter().filter(|e| e.origin().is_none()));
        }
    }

    debug!(definitions = table.len(), errors = errors.len(), "checked definitions");
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DriverError::Check(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsubst_check::CheckError;
    use fsubst_expand::ExpandError;

    fn table() -> FunctionTable {
        FunctionTable::from([
            ("f1", "f2 + f5"),
            ("f2", "0.5 - f4"),
            ("f3", "f1 * f2"),
            ("f4", "x"),
            ("f5", "90 + 1"),
        ])
    }

    #[test]
    fn test_simplify_checked() {
        assert_eq!(
            simplify_checked("f3", &table()).unwrap(),
            "((0.5 - (x)) + (90 + 1)) * (0.5 - (x))"
        );
    }

    #[test]
    fn test_checked_reports_all_problems() {
        let table = FunctionTable::from([("f1", "f1 + f8")]);
        match simplify_checked("f1 * f9", &table).unwrap_err() {
            DriverError::Check(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, CheckError::CyclicDefinition { .. })));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unchecked_still_reports_undefined() {
        match simplify_unchecked("f9", &table()).unwrap_err() {
            DriverError::Expand(ExpandError::UndefinedReference { name }) => assert_eq!(name, "f9"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_expand_all() {
        let expanded = expand_all(&table()).unwrap();
        let names: Vec<&str> = expanded.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["f1", "f2", "f3", "f4", "f5"]);
        assert_eq!(expanded[1].1, "0.5 - (x)");
        assert_eq!(expanded[3].1, "x");
        assert_eq!(expanded[4].1, "90 + 1");
    }

    #[test]
    fn test_expand_all_rejects_cycles() {
        let table = FunctionTable::from([("f1", "f2"), ("f2", "f1")]);
        assert!(matches!(expand_all(&table), Err(DriverError::Check(_))));
    }

    #[test]
    fn test_simplify_checked_matches_unchecked() {
        let table = table();
        for expression in ["f1 + f3", "f4", "2 * f2"] {
            assert_eq!(
                simplify_checked(expression, &table).unwrap(),
                simplify_unchecked(expression, &table).unwrap()
            );
        }
    }

    #[test]
    fn test_check_definitions_valid_table() {
        assert!(check_definitions(&table(), None).is_ok());
        assert!(check_definitions(&table(), Some("f1 * f3 + x")).is_ok());
    }

    #[test]
    fn test_check_definitions_reports_expression_errors() {
        match check_definitions(&table(), Some("f1 + f9")).unwrap_err() {
            DriverError::Check(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(matches!(
                    &errors[0],
                    CheckError::UndefinedFunction { name, origin: None, .. } if name == "f9"
                ));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_check_definitions_does_not_repeat_table_errors() {
        // f1 中的 f8 未定义；表达式经过 f1 时不应再报一次
        let table = FunctionTable::from([("f1", "f8 + 1"), ("f2", "x")]);
        match check_definitions(&table, Some("f1 * f2")).unwrap_err() {
            DriverError::Check(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].origin(), Some("f1"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
