//! 定义文件
//!
//! 两种格式：
//! - `.json`：字符串到字符串的对象，`{"f1": "f2 + f5", "f4": "x"}`
//! - 其他扩展名：每行一个 `name = expression`，`#` 开头为注释，空行忽略

use crate::error::{DriverError, DriverResult};
use fsubst_syntax::FunctionTable;
use std::path::Path;
use tracing::debug;

/// 解析行格式的定义
pub fn parse_table(source: &str) -> DriverResult<FunctionTable> {
    let mut table = FunctionTable::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let Some((name, definition)) = text.split_once('=') else {
            return Err(DriverError::Definitions {
                line,
                message: format!("expected 'name = expression', found '{}'", text),
            });
        };
        let (name, definition) = (name.trim(), definition.trim());
        if name.is_empty() {
            return Err(DriverError::Definitions {
                line,
                message: "missing function name before '='".to_string(),
            });
        }
        if definition.is_empty() {
            return Err(DriverError::Definitions {
                line,
                message: format!("missing definition for '{}'", name),
            });
        }
        if table.insert(name, definition).is_some() {
            return Err(DriverError::Definitions {
                line,
                message: format!("'{}' is defined more than once", name),
            });
        }
    }

    Ok(table)
}

/// 从文件读取函数表，按扩展名选择格式
pub fn load_table(path: impl AsRef<Path>) -> DriverResult<FunctionTable> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let table = if is_json {
        serde_json::from_str::<FunctionTable>(&source)?
    } else {
        parse_table(&source)?
    };

    debug!(path = %path.display(), definitions = table.len(), "loaded function table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        let source = r#"
            # 示例函数表
            f1 = f2 + f5
            f2 = 0.5 - f4

            f4 = x
            f5 = 90 + 1
        "#;

        let table = parse_table(source).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("f1"), Some("f2 + f5"));
        assert_eq!(table.get("f5"), Some("90 + 1"));
    }

    #[test]
    fn test_missing_equals() {
        let err = parse_table("f1 = x\nf2 x + 1").unwrap_err();
        match err {
            DriverError::Definitions { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_definition() {
        let err = parse_table("f1 = x\nf1 = 2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Definitions error on line 2: 'f1' is defined more than once"
        );
    }

    #[test]
    fn test_empty_definition() {
        assert!(parse_table("f1 =").is_err());
        assert!(parse_table("= x").is_err());
    }

    #[test]
    fn test_empty_source() {
        assert!(parse_table("# nothing here\n\n").unwrap().is_empty());
    }
}
