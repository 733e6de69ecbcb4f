use fsubst_driver::{expand_all, load_table, simplify_checked, DriverError};
use std::io::Write;
use tempfile::NamedTempFile;

fn definitions_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_line_format_and_simplify() {
    let file = definitions_file(
        ".txt",
        "f1 = f2 + f5\nf2 = 0.5 - f4\nf3 = f1 * f2\nf4 = x\nf5 = 90 + 1\n",
    );

    let table = load_table(file.path()).unwrap();
    assert_eq!(
        simplify_checked("f1 + f3", &table).unwrap(),
        "((0.5 - (x)) + (90 + 1)) + (((0.5 - (x)) + (90 + 1)) * (0.5 - (x)))"
    );
}

#[test]
fn test_load_json_format() {
    let file = definitions_file(
        ".json",
        r#"{ "f1": "f2 + f5", "f2": "0.5 - f4", "f4": "x", "f5": "90 + 1" }"#,
    );

    let table = load_table(file.path()).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(
        simplify_checked("f1", &table).unwrap(),
        "(0.5 - (x)) + (90 + 1)"
    );
}

#[test]
fn test_json_with_non_string_value_is_rejected() {
    let file = definitions_file(".json", r#"{ "f1": 3 }"#);
    assert!(matches!(load_table(file.path()), Err(DriverError::Json(_))));
}

#[test]
fn test_json_with_duplicate_name_is_rejected() {
    let file = definitions_file(".json", r#"{ "f1": "x", "f1": "2" }"#);
    match load_table(file.path()) {
        Err(DriverError::Json(err)) => {
            assert!(err.to_string().contains("'f1' is defined more than once"))
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    assert!(matches!(load_table(&missing), Err(DriverError::Io(_))));
}

#[test]
fn test_expand_all_from_file() {
    let file = definitions_file(".defs", "# 链式定义\nf1 = f2\nf2 = f3 * 2\nf3 = x\n");

    let table = load_table(file.path()).unwrap();
    let expanded = expand_all(&table).unwrap();
    assert_eq!(
        expanded,
        vec![
            ("f1".to_string(), "((x) * 2)".to_string()),
            ("f2".to_string(), "(x) * 2".to_string()),
            ("f3".to_string(), "x".to_string()),
        ]
    );
}
