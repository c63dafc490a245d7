//! The terminal matcher (`spec.md` §4.2): decides whether the token at the
//! head of the stream satisfies a single `field`, `any line`, or `EOF`
//! terminal, using exactly one token of lookahead.
//!
//! This module never decides whether a non-match is acceptable — that
//! depends on the entry's quantifier, which [`crate::quantifier`] owns.
//! It only classifies the attempt and, on a match, performs type
//! validation and advances the lexer.

use crate::error::ProgrammerError;
use crate::grammar::{LineKind, Terminal};
use crate::quantifier::Attempt;
use crate::token::Token;
use crate::validator::Validator;

/// Attempts to match `terminal` against the token currently at the head of
/// the stream. Consumes that token (and runs type validation, for a
/// matched field with a non-empty value) only when it matches.
pub(crate) fn match_terminal(
    v: &mut Validator<'_>,
    terminal: &Terminal,
) -> Result<Attempt, ProgrammerError> {
    let line = v.line_no();
    match terminal.line {
        LineKind::Eof => match v.peek() {
            Token::Eof { lexer_diagnostics } => {
                v.diagnostics_mut().extend_lexer(line, &lexer_diagnostics);
                v.advance();
                Ok(Attempt::Matched)
            }
            _ => Ok(Attempt::Declined),
        },
        LineKind::Field => match v.peek() {
            Token::Field {
                name,
                value,
                lexer_diagnostics,
                ..
            } if name == terminal.name => {
                v.diagnostics_mut().extend_lexer(line, &lexer_diagnostics);
                let attempt = match value {
                    None => Attempt::EmptyField,
                    Some(value) => {
                        if let Some(ty) = &terminal.field_type {
                            if !v.types().has_type(ty) {
                                return Err(ProgrammerError::UnknownType(ty.clone()));
                            }
                            let diags = v.types().validate_type(ty, &value, line);
                            v.diagnostics_mut().extend_type(line, diags);
                        }
                        Attempt::Matched
                    }
                };
                v.advance();
                Ok(attempt)
            }
            _ => Ok(Attempt::Declined),
        },
        LineKind::AnyLine => match v.peek() {
            Token::Eof { .. } => Ok(Attempt::Declined),
            other => {
                let diags = other.lexer_diagnostics().to_vec();
                v.diagnostics_mut().extend_lexer(line, &diags);
                v.advance();
                Ok(Attempt::Matched)
            }
        },
    }
}
