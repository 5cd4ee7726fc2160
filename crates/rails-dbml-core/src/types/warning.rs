use std::fmt;

use serde::Serialize;

/// What kind of best-effort degradation the emitter applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum WarningKind {
    /// A `create_table` `id:` parameter with more than one value.
    UnsupportedIdFeature,
    /// A `t.<word>` column keyword missing from the type dictionary.
    UnsupportedType { keyword: String },
}

/// A soft diagnostic raised while converting one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionWarning {
    /// 1-based physical line number in the source.
    pub line: usize,
    #[serde(flatten)]
    pub kind: WarningKind,
    /// The source line as written.
    pub source_line: String,
}

impl ConversionWarning {
    pub fn new(line: usize, kind: WarningKind, source_line: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            source_line: source_line.into(),
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedIdFeature => write!(f, "unsupported id feature"),
            Self::UnsupportedType { keyword } => write!(f, "unsupported type <{keyword}>"),
        }
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.source_line.trim())
    }
}
