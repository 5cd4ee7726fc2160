use std::fmt;

use super::column_type::ColumnType;

/// The kind of statement a line's head token introduces.
///
/// Resolved once per line; every line maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `create_table "name", ...`
    CreateTable,
    /// `end`
    End,
    /// `t.<word> "name", ...`, carrying the full keyword (e.g. `t.string`).
    Column(&'a str),
    /// Anything else: comments, blank lines, other DSL statements.
    Unrecognized,
}

impl<'a> Statement<'a> {
    /// Classifies a head token.
    ///
    /// `Column` requires the `t.` prefix followed by one or more ASCII
    /// letters, digits or underscores and nothing else.
    pub fn classify(head: &'a str) -> Self {
        match head {
            "create_table" => Self::CreateTable,
            "end" => Self::End,
            _ if is_column_keyword(head) => Self::Column(head),
            _ => Self::Unrecognized,
        }
    }

    /// Looks up the column type for a `Column` statement.
    ///
    /// Returns `None` for other statements and for unknown keywords.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Self::Column(keyword) => ColumnType::from_keyword(keyword),
            _ => None,
        }
    }
}

fn is_column_keyword(head: &str) -> bool {
    match head.strip_prefix("t.") {
        Some(word) => {
            !word.is_empty() && word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateTable => write!(f, "create_table"),
            Self::End => write!(f, "end"),
            Self::Column(keyword) => write!(f, "column({keyword})"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}
