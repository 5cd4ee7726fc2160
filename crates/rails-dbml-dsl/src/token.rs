use logos::Logos;

/// Value tokens of the migration DSL.
///
/// Whitespace separates values and is skipped. Inside quotes a backslash is
/// dropped but never protects the next character, so `\"` still closes the
/// string.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum Token {
    /// A double-quoted string, unterminated when it runs to the end of input.
    #[regex(r#""[^"]*"?"#)]
    Quoted,

    /// A run of non-whitespace not starting with a quote. Quotes after the
    /// first character are part of the value.
    #[regex(r#"[^\s"]\S*"#)]
    Bare,
}

impl Token {
    /// Returns a human-readable description of this token kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Quoted => "quoted value",
            Self::Bare => "bare value",
        }
    }

    /// Decodes the text of a token of this kind into its value.
    pub fn decode(&self, text: &str) -> String {
        match self {
            Self::Quoted => {
                let inner = text.strip_prefix('"').unwrap_or(text);
                let inner = inner.strip_suffix('"').unwrap_or(inner);
                inner.chars().filter(|c| *c != '\\').collect()
            }
            Self::Bare => text.to_string(),
        }
    }

    /// Whether a token of this kind with the given text is closed.
    ///
    /// Bare values always are; quoted values need their closing quote.
    pub fn is_terminated(&self, text: &str) -> bool {
        match self {
            Self::Quoted => text.len() > 1 && text.ends_with('"'),
            Self::Bare => true,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
