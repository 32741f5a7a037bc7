use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of an export batch. Only keys named by the column schema are read.
pub type Record = Map<String, Value>;

/// Ordered key/header pair describing one exported column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub header: String,
}

impl Column {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
        }
    }

    pub fn lookup<'r>(&self, record: &'r Record) -> Option<&'r Value> {
        record.get(&self.key)
    }
}

/// Parse `key=Header` pairs; a bare `key` uses the key as its header.
pub fn parse_column_list(raw: &str) -> Vec<Column> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((key, header)) if !header.trim().is_empty() => {
                Column::new(key.trim(), header.trim())
            }
            Some((key, _)) => Column::new(key.trim(), key.trim()),
            None => Column::new(entry, entry),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_with_and_without_headers() {
        let columns = parse_column_list("name=Full Name, email ,budget=");
        assert_eq!(
            columns,
            vec![
                Column::new("name", "Full Name"),
                Column::new("email", "email"),
                Column::new("budget", "budget"),
            ]
        );
    }

    #[test]
    fn lookup_tolerates_missing_keys() {
        let record = Record::new();
        assert!(Column::new("absent", "Absent").lookup(&record).is_none());
    }
}
