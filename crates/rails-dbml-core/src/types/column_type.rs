use std::fmt;

use serde::Serialize;

/// DBML column types reachable from the migration DSL.
///
/// The mapping from source keyword is fixed:
///
/// | keyword      | DBML       |
/// |--------------|------------|
/// | `t.integer`  | `integer`  |
/// | `t.string`   | `varchar`  |
/// | `t.text`     | `text`     |
/// | `t.datetime` | `datetime` |
/// | `t.date`     | `date`     |
/// | `t.boolean`  | `boolean`  |
/// | `t.binary`   | `blob`     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Varchar,
    Text,
    Datetime,
    Date,
    Boolean,
    Blob,
}

impl ColumnType {
    /// Every dictionary entry as `(keyword, type)`.
    pub const DICTIONARY: [(&'static str, ColumnType); 7] = [
        ("t.integer", Self::Integer),
        ("t.string", Self::Varchar),
        ("t.text", Self::Text),
        ("t.datetime", Self::Datetime),
        ("t.date", Self::Date),
        ("t.boolean", Self::Boolean),
        ("t.binary", Self::Blob),
    ];

    /// Looks up the full source keyword, e.g. `t.string`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::DICTIONARY
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, ty)| *ty)
    }

    /// The DBML spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Varchar => "varchar",
            Self::Text => "text",
            Self::Datetime => "datetime",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::Blob => "blob",
        }
    }

    /// Whether default values of this type are emitted as quoted strings.
    pub fn quotes_defaults(&self) -> bool {
        matches!(self, Self::Varchar)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
