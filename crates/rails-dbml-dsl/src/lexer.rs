use logos::Logos;

use crate::token::Token;

/// A lexed value and the text it was read from.
#[derive(Debug, Clone)]
pub struct Lexeme {
    pub token: Token,
    pub text: String,
}

impl Lexeme {
    /// The decoded value (quotes and backslashes removed for quoted tokens).
    pub fn value(&self) -> String {
        self.token.decode(&self.text)
    }

    pub fn is_terminated(&self) -> bool {
        self.token.is_terminated(&self.text)
    }
}

/// Tokenizes a run of whitespace-separated values.
pub fn tokenize(source: &str) -> Vec<Lexeme> {
    Token::lexer(source)
        .spanned()
        .map(|(result, range)| Lexeme {
            // Every non-whitespace character starts either a quoted or a bare
            // value, so the lexer has no error case; keep the text as bare.
            token: result.unwrap_or(Token::Bare),
            text: source[range].to_string(),
        })
        .collect()
}
