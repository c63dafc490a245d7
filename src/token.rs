//! The token shape this crate expects from the caller-supplied lexer, and
//! the lookahead contract ([`LexerView`]) it is driven through.
//!
//! The lexer itself is out of scope for this crate; a caller hands in an
//! implementation of [`LexerView`] wrapping whatever line-oriented scanner
//! produced the reply text.

/// One token of the input, as produced by the external lexer.
///
/// `Field` carries the structured shape a field line is expected to have;
/// `Eof` marks the end of input; `Other` is the catch-all for every other
/// line kind the lexer may emit (empty line, non-empty line, a registry's
/// "roid line", and so on) — terminals never match these by name, only
/// `any line` does, and it matches any `Other` or `Field` token but never
/// `Eof`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Field {
        name: String,
        /// Carried through untouched; this crate has no use for a field's
        /// translations, only the type registry or a caller might.
        translations: Vec<String>,
        value: Option<String>,
        lexer_diagnostics: Vec<String>,
    },
    Eof {
        lexer_diagnostics: Vec<String>,
    },
    Other {
        kind: String,
        lexer_diagnostics: Vec<String>,
    },
}

impl Token {
    pub fn lexer_diagnostics(&self) -> &[String] {
        match self {
            Token::Field {
                lexer_diagnostics, ..
            }
            | Token::Eof { lexer_diagnostics }
            | Token::Other {
                lexer_diagnostics, ..
            } => lexer_diagnostics,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof { .. })
    }
}

/// The lookahead contract a validator run is driven through.
///
/// `peek_line` must be pure and idempotent: calling it twice in a row
/// without an intervening `advance_line` returns the same token. Past the
/// last real token, both `peek_line` and `advance_line` settle on `Eof`
/// forever — `advance_line` is a no-op once the lexer has nothing left to
/// give.
pub trait LexerView {
    /// Returns the token at the head of the stream without consuming it.
    fn peek_line(&mut self) -> Token;

    /// Consumes the token at the head of the stream.
    fn advance_line(&mut self);

    /// The 1-based line number of the token `peek_line` currently returns.
    fn line_no(&self) -> u32;
}
