//! FunctionTable - 函数定义表
//!
//! 函数名 → 定义表达式。按名字排序存储，遍历顺序稳定。

use serde::de::{Deserialize, Deserializer, Error as _, MapAccess, Visitor};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionTable {
    definitions: BTreeMap<String, String>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加或覆盖一个定义，返回被覆盖的旧定义
    pub fn insert(&mut self, name: impl Into<String>, definition: impl Into<String>) -> Option<String> {
        self.definitions.insert(name.into(), definition.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.definitions.get(name).map(String::as_str)
    }

    /// 同时返回表中存储的函数名，便于借用与表同生命周期的名字
    pub fn get_key_value(&self, name: &str) -> Option<(&str, &str)> {
        self.definitions
            .get_key_value(name)
            .map(|(name, def)| (name.as_str(), def.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FunctionTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            definitions: iter
                .into_iter()
                .map(|(name, def)| (name.into(), def.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for FunctionTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// 从 JSON 对象等映射反序列化；同名键出现两次视为错误，而不是静默覆盖
impl<'de> Deserialize<'de> for FunctionTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = FunctionTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from function name to definition")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut definitions = BTreeMap::new();
        while let Some((name, definition)) = map.next_entry::<String, String>()? {
            match definitions.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(A::Error::custom(format!(
                        "'{}' is defined more than once",
                        entry.key()
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(definition);
                }
            }
        }
        Ok(FunctionTable { definitions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table = FunctionTable::from([("f4", "x"), ("f5", "90 + 1")]);
        assert_eq!(table.get("f4"), Some("x"));
        assert_eq!(table.get("f9"), None);
        assert_eq!(table.get_key_value("f5"), Some(("f5", "90 + 1")));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_iteration_is_sorted_by_name() {
        let table: FunctionTable = vec![("f2", "x"), ("f1", "f2")].into_iter().collect();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["f1", "f2"]);
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut table = FunctionTable::new();
        assert_eq!(table.insert("f1", "x"), None);
        assert_eq!(table.insert("f1", "2"), Some("x".to_string()));
        assert_eq!(table.get("f1"), Some("2"));
    }

    #[test]
    fn test_deserialize_json_object() {
        let table: FunctionTable = serde_json::from_str(r#"{"f2": "x", "f1": "f2 + 1"}"#).unwrap();
        assert_eq!(table, FunctionTable::from([("f1", "f2 + 1"), ("f2", "x")]));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_name() {
        let err = serde_json::from_str::<FunctionTable>(r#"{"f1": "x", "f1": "2"}"#).unwrap_err();
        assert!(err.to_string().contains("'f1' is defined more than once"));
    }
}
