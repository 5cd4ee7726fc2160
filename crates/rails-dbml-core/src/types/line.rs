use serde::Serialize;

use super::param_map::ParamMap;
use super::statement::Statement;

/// One source line after tokenization.
///
/// `head` is the leading keyword (`create_table`, `end`, `t.string`, ...),
/// `name` the token or quoted string after it (empty when absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Line {
    pub head: String,
    pub name: String,
    pub params: ParamMap,
}

impl Line {
    pub fn new(head: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            name: name.into(),
            params: ParamMap::new(),
        }
    }

    /// Adds a parameter, replacing any earlier one with the same name.
    pub fn with_param(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.params.insert(name, values);
        self
    }

    /// Resolves the statement kind from the head token.
    pub fn statement(&self) -> Statement<'_> {
        Statement::classify(&self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_line_has_no_params() {
        let line = Line::new("create_table", "users");
        assert_eq!(line.head, "create_table");
        assert_eq!(line.name, "users");
        assert!(line.params.is_empty());
    }

    #[test]
    fn with_param_overwrites() {
        let line = Line::new("t.string", "name")
            .with_param("limit", vec!["40".into()])
            .with_param("limit", vec!["255".into()]);
        assert_eq!(line.params.first("limit"), Some("255"));
        assert_eq!(line.params.len(), 1);
    }

    #[test]
    fn statement_resolves_from_head() {
        assert_eq!(Line::new("end", "").statement(), Statement::End);
        assert_eq!(
            Line::new("t.text", "bio").statement(),
            Statement::Column("t.text")
        );
    }

    #[test]
    fn default_line_is_unrecognized() {
        assert_eq!(Line::default().statement(), Statement::Unrecognized);
    }
}
