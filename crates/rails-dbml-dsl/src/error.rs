use std::fmt;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span from start (inclusive) to end (exclusive).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Moves the span `by` bytes to the right.
    pub fn shifted(&self, by: usize) -> Self {
        Self::new(self.start + by, self.end + by)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Errors that abort a conversion.
///
/// Spans are relative to the text handed to the function that returned the
/// error: the segment, the line, or the whole source for `convert`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DslError {
    /// A parameter name was followed by something other than `:`.
    MalformedParameter {
        /// 1-based source line number.
        line: usize,
        /// The parameter name read before the offending character.
        name: String,
        found: char,
        span: Span,
    },
}

impl DslError {
    /// The 1-based line the error occurred on.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedParameter { line, .. } => *line,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Self::MalformedParameter { span, .. } => span,
        }
    }

    /// Rebases the span onto an enclosing text that starts `by` bytes earlier.
    pub(crate) fn shifted(self, by: usize) -> Self {
        match self {
            Self::MalformedParameter {
                line,
                name,
                found,
                span,
            } => Self::MalformedParameter {
                line,
                name,
                found,
                span: span.shifted(by),
            },
        }
    }
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedParameter {
                line, name, found, ..
            } => {
                write!(
                    f,
                    "malformed parameter '{name}' on line {line}: expected ':', found '{found}'"
                )
            }
        }
    }
}

impl std::error::Error for DslError {}
