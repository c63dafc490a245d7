//! The quantifier engine (`spec.md` §4.3): drives one or more attempts at
//! an entry's subject and decides, per the quantifier's table, whether a
//! `declined` or `empty-field` attempt is silent, hard-fails, or needs to
//! be weighed against sibling `optional-constrained` entries.

use crate::diagnostic::Diagnostic;
use crate::error::ProgrammerError;
use crate::grammar::{Entry, LineKind, Quantifier, Subject};
use crate::{choice, dispatch, line_matcher};
use crate::validator::Validator;

/// The outcome of one attempt at an entry's subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Attempt {
    /// At least one token was consumed and, for a field, its value (if
    /// present) passed type validation, or validation produced
    /// diagnostics but the field was still consumed.
    Matched,
    /// A field (or choice alternative) matched by name but carried no
    /// value.
    EmptyField,
    /// The subject did not match; nothing was consumed.
    Declined,
}

/// Drives `entry` to completion: one attempt for `Once`/`OptionalFree`/
/// `OptionalConstrained`, as many as the quantifier allows for the
/// repeating quantifiers. `group` tracks `optional-constrained` siblings
/// within the enclosing sequence and is reset fresh per sequence, never
/// per entry.
pub(crate) fn drive(
    v: &mut Validator<'_>,
    entry: &Entry,
    group: &mut ConstrainedGroup,
) -> Result<(), ProgrammerError> {
    // EOF's non-match is always a hard failure, regardless of quantifier.
    if let Subject::Terminal(terminal) = &entry.subject {
        if terminal.line == LineKind::Eof {
            return match attempt(v, entry)? {
                Attempt::Matched => Ok(()),
                _ => {
                    push_missing(v, entry);
                    Ok(())
                }
            };
        }
    }

    match entry.quantifier {
        Quantifier::Once => once(v, entry),
        Quantifier::OptionalConstrained => optional_constrained(v, entry, group),
        Quantifier::OptionalFree => optional_free(v, entry),
        Quantifier::Repeatable => repeatable(v, entry, None),
        Quantifier::RepeatableMax(max) => repeatable(v, entry, Some(max)),
        Quantifier::OptionalRepeatable => optional_repeatable(v, entry),
    }
}

fn attempt(v: &mut Validator<'_>, entry: &Entry) -> Result<Attempt, ProgrammerError> {
    match &entry.subject {
        Subject::Terminal(terminal) => line_matcher::match_terminal(v, terminal),
        Subject::RuleRef(name) => dispatch::rule_ref_attempt(v, name),
    }
}

fn once(v: &mut Validator<'_>, entry: &Entry) -> Result<(), ProgrammerError> {
    match attempt(v, entry)? {
        Attempt::Matched => {}
        Attempt::EmptyField => push_empty(v, entry),
        Attempt::Declined => push_missing(v, entry),
    }
    Ok(())
}

fn optional_free(v: &mut Validator<'_>, entry: &Entry) -> Result<(), ProgrammerError> {
    // Declined, empty-field, or matched: all silent beyond whatever
    // lexer/type diagnostics the attempt itself forwarded.
    attempt(v, entry)?;
    Ok(())
}

fn optional_constrained(
    v: &mut Validator<'_>,
    entry: &Entry,
    group: &mut ConstrainedGroup,
) -> Result<(), ProgrammerError> {
    let line = v.line_no();
    let outcome = match attempt(v, entry)? {
        Attempt::Matched => ConstrainedOutcome::PresentNonEmpty,
        Attempt::EmptyField => ConstrainedOutcome::PresentEmpty,
        Attempt::Declined => ConstrainedOutcome::Omitted,
    };
    group.record(v, entry, outcome, line);
    Ok(())
}

fn repeatable(v: &mut Validator<'_>, entry: &Entry, max: Option<u32>) -> Result<(), ProgrammerError> {
    if max == Some(0) {
        return Err(ProgrammerError::InvalidQuantifier {
            subject: describe_subject(&entry.subject),
            reason: "repeatable max must be at least 1".to_string(),
        });
    }

    let mut count: u32 = 0;
    let mut over_limit_reported = false;
    loop {
        let outcome = attempt(v, entry)?;
        match outcome {
            Attempt::Declined => {
                if count == 0 {
                    push_missing(v, entry);
                }
                break;
            }
            Attempt::EmptyField => push_empty(v, entry),
            Attempt::Matched => {}
        }
        count += 1;
        if let Some(max) = max {
            if count > max && !over_limit_reported {
                push_too_many(v, entry);
                over_limit_reported = true;
            }
        }
    }
    Ok(())
}

fn optional_repeatable(v: &mut Validator<'_>, entry: &Entry) -> Result<(), ProgrammerError> {
    loop {
        match attempt(v, entry)? {
            Attempt::Declined => break,
            Attempt::EmptyField => push_empty(v, entry),
            Attempt::Matched => {}
        }
    }
    Ok(())
}

fn push_missing(v: &mut Validator<'_>, entry: &Entry) {
    let line = v.line_no();
    let message = format!("expected {} at line {line}", describe_subject(&entry.subject));
    v.diagnostics_mut().push(Diagnostic::missing_terminal(line, message));
}

fn push_empty(v: &mut Validator<'_>, entry: &Entry) {
    let line = v.line_no();
    let message = format!(
        "empty value for {} at line {line}",
        describe_subject(&entry.subject)
    );
    v.diagnostics_mut().push(Diagnostic::empty_field(line, message));
}

fn push_too_many(v: &mut Validator<'_>, entry: &Entry) {
    let line = v.line_no();
    let message = format!(
        "too many repetitions of {} at line {line}",
        describe_subject(&entry.subject)
    );
    v.diagnostics_mut().push(Diagnostic::too_many_repetitions(line, message));
}

pub(crate) fn describe_subject(subject: &Subject) -> String {
    match subject {
        Subject::Terminal(terminal) => match terminal.line {
            LineKind::Field => format!("field \"{}\"", terminal.name),
            LineKind::AnyLine => "a line".to_string(),
            LineKind::Eof => "EOF".to_string(),
        },
        Subject::RuleRef(name) => name.clone(),
    }
}

/// Which outcome an `optional-constrained` entry produced, for the
/// consistency check `spec.md` §4.3 requires across an entire enclosing
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConstrainedOutcome {
    PresentNonEmpty,
    PresentEmpty,
    Omitted,
}

/// Tracks the first `optional-constrained` outcome seen within one
/// enclosing sequence, and flags any sibling entry that disagrees with it.
/// Fresh per sequence dispatch — never shared across a `RuleRef`'s own
/// nested sequence.
#[derive(Debug, Default)]
pub(crate) struct ConstrainedGroup {
    established: Option<ConstrainedOutcome>,
}

impl ConstrainedGroup {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, v: &mut Validator<'_>, entry: &Entry, outcome: ConstrainedOutcome, line: u32) {
        match self.established {
            None => self.established = Some(outcome),
            Some(established) if established == outcome => {}
            Some(_) => {
                let message = format!(
                    "inconsistent optional-constrained {} at line {line}",
                    describe_subject(&entry.subject)
                );
                v.diagnostics_mut()
                    .push(Diagnostic::optional_constrained_inconsistency(line, message));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Grammar, Terminal};
    use crate::test_support::{field_token, FakeLexer, FakeTypeRegistry};

    fn validator<'a>(
        lexer: &'a mut FakeLexer,
        grammar: &'a Grammar,
        types: &'a FakeTypeRegistry,
    ) -> Validator<'a> {
        Validator::new(lexer, grammar, types, crate::limit::DEFAULT_RECURSION_LIMIT)
    }

    #[test]
    fn once_hard_fails_on_decline() {
        let mut lexer = FakeLexer::new(vec![]);
        let grammar = Grammar::default();
        let types = FakeTypeRegistry::new();
        let mut v = validator(&mut lexer, &grammar, &types);
        let entry = Entry::once(Subject::Terminal(Terminal::field("Domain Name", "hostname")));
        let mut group = ConstrainedGroup::new();
        drive(&mut v, &entry, &mut group).unwrap();
        assert_eq!(
            v.diagnostics_mut().clone().into_strings(),
            vec!["expected field \"Domain Name\" at line 1".to_string()]
        );
    }

    #[test]
    fn optional_constrained_group_flags_mixed_outcomes() {
        let mut lexer = FakeLexer::new(vec![field_token("Referral URL", None)]);
        let grammar = Grammar::default();
        let types = FakeTypeRegistry::new();
        let mut v = validator(&mut lexer, &grammar, &types);
        let mut group = ConstrainedGroup::new();
        let domain = Entry::new(
            Subject::Terminal(Terminal::field("Domain Name", "hostname")),
            Quantifier::OptionalConstrained,
        );
        let referral = Entry::new(
            Subject::Terminal(Terminal::field("Referral URL", "url")),
            Quantifier::OptionalConstrained,
        );
        drive(&mut v, &domain, &mut group).unwrap();
        drive(&mut v, &referral, &mut group).unwrap();
        let strings = v.diagnostics_mut().clone().into_strings();
        assert_eq!(strings.len(), 1);
        assert!(strings[0].contains("inconsistent optional-constrained"));
        assert!(strings[0].contains("line 1"));
    }

    #[test]
    fn repeatable_max_reports_once_on_overflow() {
        let mut lexer = FakeLexer::new(vec![
            field_token("Name Server", Some("a")),
            field_token("Name Server", Some("b")),
            field_token("Name Server", Some("c")),
        ]);
        let grammar = Grammar::default();
        let types = FakeTypeRegistry::new().with_always_ok("hostname");
        let mut v = validator(&mut lexer, &grammar, &types);
        let mut group = ConstrainedGroup::new();
        let entry = Entry::new(
            Subject::Terminal(Terminal::field("Name Server", "hostname")),
            Quantifier::RepeatableMax(2),
        );
        drive(&mut v, &entry, &mut group).unwrap();
        let strings = v.diagnostics_mut().clone().into_strings();
        assert_eq!(strings.len(), 1);
        assert!(strings[0].contains("too many repetitions"));
    }

    #[test]
    fn repeatable_continues_past_an_empty_occurrence_to_a_later_valid_one() {
        let mut lexer = FakeLexer::new(vec![
            field_token("Name Server", Some("a")),
            field_token("Name Server", None),
            field_token("Name Server", Some("c")),
        ]);
        let grammar = Grammar::default();
        let types = FakeTypeRegistry::new().with_always_ok("hostname");
        let mut v = validator(&mut lexer, &grammar, &types);
        let mut group = ConstrainedGroup::new();
        let entry = Entry::new(
            Subject::Terminal(Terminal::field("Name Server", "hostname")),
            Quantifier::Repeatable,
        );
        drive(&mut v, &entry, &mut group).unwrap();
        // All three tokens consumed — the valid occurrence after the empty
        // one isn't left dangling for a later entry to choke on.
        assert_eq!(v.tokens_consumed(), 3);
        let strings = v.diagnostics_mut().clone().into_strings();
        assert_eq!(strings.len(), 1);
        assert!(strings[0].contains("empty value"));
    }
}
