//! The choice section (`spec.md` §4.5): an unordered set of alternative
//! single-line field expectations, of which exactly one may match the
//! token at the head of the stream.
//!
//! A choice section never partially consumes: it either matches one of its
//! alternatives by field name (advancing exactly one token, whatever that
//! alternative's value turns out to be) or declines without consuming
//! anything. Whether a declined or empty-field attempt is acceptable is,
//! same as for a terminal, the quantifier engine's call to make — the
//! entry referencing this choice carries that quantifier.

use std::collections::BTreeMap;

use crate::error::ProgrammerError;
use crate::grammar::ChoiceAlt;
use crate::quantifier::Attempt;
use crate::token::Token;
use crate::validator::Validator;

pub(crate) fn match_choice(
    v: &mut Validator<'_>,
    alternatives: &BTreeMap<String, ChoiceAlt>,
) -> Result<Attempt, ProgrammerError> {
    let line = v.line_no();
    match v.peek() {
        Token::Field {
            name,
            value,
            lexer_diagnostics,
            ..
        } if alternatives.contains_key(&name) => {
            v.diagnostics_mut().extend_lexer(line, &lexer_diagnostics);
            let alt = &alternatives[&name];
            let attempt = match value {
                None => Attempt::EmptyField,
                Some(value) => {
                    if let Some(ty) = &alt.field_type {
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
    }
}

/// A stable, human-readable rendering of a choice's alternative names, for
/// diagnostic messages.
pub(crate) fn describe_alternatives(alternatives: &BTreeMap<String, ChoiceAlt>) -> String {
    let names: Vec<&str> = alternatives.keys().map(String::as_str).collect();
    format!("one of {}", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;
    use crate::test_support::{field_token, FakeLexer, FakeTypeRegistry};

    fn alts() -> BTreeMap<String, ChoiceAlt> {
        let mut map = BTreeMap::new();
        map.insert("Registrar URL".to_string(), ChoiceAlt::new("url"));
        map.insert("Registrar WHOIS Server".to_string(), ChoiceAlt::new("hostname"));
        map
    }

    #[test]
    fn matches_whichever_alternative_is_present() {
        let mut lexer = FakeLexer::new(vec![field_token("Registrar URL", Some("https://x"))]);
        let grammar = Grammar::default();
        let types = FakeTypeRegistry::new().with_always_ok("url").with_always_ok("hostname");
        let mut v = Validator::new(&mut lexer, &grammar, &types, crate::limit::DEFAULT_RECURSION_LIMIT);
        let attempt = match_choice(&mut v, &alts()).unwrap();
        assert_eq!(attempt, Attempt::Matched);
        assert_eq!(v.tokens_consumed(), 1);
    }

    #[test]
    fn declines_without_consuming_when_nothing_matches() {
        let mut lexer = FakeLexer::new(vec![field_token("Registrant Name", Some("X"))]);
        let grammar = Grammar::default();
        let types = FakeTypeRegistry::new();
        let mut v = Validator::new(&mut lexer, &grammar, &types, crate::limit::DEFAULT_RECURSION_LIMIT);
        let attempt = match_choice(&mut v, &alts()).unwrap();
        assert_eq!(attempt, Attempt::Declined);
        assert_eq!(v.tokens_consumed(), 0);
    }

    #[test]
    fn reports_empty_field_for_a_matched_but_empty_alternative() {
        let mut lexer = FakeLexer::new(vec![field_token("Registrar URL", None)]);
        let grammar = Grammar::default();
        let types = FakeTypeRegistry::new();
        let mut v = Validator::new(&mut lexer, &grammar, &types, crate::limit::DEFAULT_RECURSION_LIMIT);
        let attempt = match_choice(&mut v, &alts()).unwrap();
        assert_eq!(attempt, Attempt::EmptyField);
        assert_eq!(v.tokens_consumed(), 1);
    }
}
