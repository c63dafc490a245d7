//! The rule dispatcher (`spec.md` §4.1): resolves a rule name to its body
//! and either walks a sequence entry by entry or defers to the choice
//! matcher, guarding every entry against runaway recursion.

use crate::choice;
use crate::diagnostic::Diagnostic;
use crate::error::ProgrammerError;
use crate::grammar::{Entry, RuleBody};
use crate::quantifier::{self, Attempt, ConstrainedGroup};
use crate::validator::Validator;

/// Dispatches the grammar's root rule. Used only by [`crate::validate`] —
/// sub-rule references go through [`rule_ref_attempt`] instead, since they
/// need an attempt classification the root call doesn't.
pub(crate) fn dispatch_root(v: &mut Validator<'_>, rule_name: &str) -> Result<(), ProgrammerError> {
    let body = v
        .grammar()
        .rule_body(rule_name)
        .ok_or_else(|| ProgrammerError::UnknownRule(rule_name.to_string()))?;

    if !v.recursion.enter() {
        push_recursion_limit(v, rule_name);
        return Ok(());
    }
    let result = match body {
        RuleBody::Sequence(entries) => dispatch_sequence(v, entries),
        RuleBody::Choice(alternatives) => match choice::match_choice(v, alternatives)? {
            Attempt::Declined => {
                let line = v.line_no();
                let message = format!(
                    "expected {} at line {line}",
                    choice::describe_alternatives(alternatives)
                );
                v.diagnostics_mut().push(Diagnostic::missing_terminal(line, message));
                Ok(())
            }
            _ => Ok(()),
        },
    };
    v.recursion.exit();
    result
}

/// Runs `entries` in order, tracking `optional-constrained` siblings in a
/// [`ConstrainedGroup`] scoped to this one sequence.
pub(crate) fn dispatch_sequence(v: &mut Validator<'_>, entries: &[Entry]) -> Result<(), ProgrammerError> {
    let mut group = ConstrainedGroup::new();
    for entry in entries {
        quantifier::drive(v, entry, &mut group)?;
    }
    Ok(())
}

/// Enters `rule_name` as a sub-rule reference and classifies the attempt
/// (`spec.md` §4.4): a choice body classifies itself directly (matched,
/// empty-field, or declined, exactly like a terminal); a sequence body has
/// no such notion, so the classification falls back to the commit signal —
/// matched if at least one token was consumed or at least one diagnostic
/// was produced while running it, declined otherwise.
pub(crate) fn rule_ref_attempt(v: &mut Validator<'_>, rule_name: &str) -> Result<Attempt, ProgrammerError> {
    let body = v
        .grammar()
        .rule_body(rule_name)
        .ok_or_else(|| ProgrammerError::UnknownRule(rule_name.to_string()))?;

    if !v.recursion.enter() {
        push_recursion_limit(v, rule_name);
        // Classified as `Matched`, not `Declined`: a diagnostic has already
        // been produced for this branch, and `Declined` would make the
        // enclosing quantifier treat it as an ordinary non-match and push a
        // second, redundant "expected ..." diagnostic on top of it.
        return Ok(Attempt::Matched);
    }
    let attempt = match body {
        RuleBody::Choice(alternatives) => choice::match_choice(v, alternatives),
        RuleBody::Sequence(entries) => {
            let tokens_before = v.tokens_consumed();
            let diagnostics_before = v.diagnostics_mut().len();
            dispatch_sequence(v, entries)?;
            let consumed = v.tokens_consumed() > tokens_before;
            let diagnosed = v.diagnostics_mut().len() > diagnostics_before;
            Ok(if consumed || diagnosed {
                Attempt::Matched
            } else {
                Attempt::Declined
            })
        }
    };
    v.recursion.exit();
    attempt
}

fn push_recursion_limit(v: &mut Validator<'_>, rule_name: &str) {
    let line = v.line_no();
    let message = format!("recursion limit exceeded while entering rule \"{rule_name}\" at line {line}");
    // Closest of `DiagnosticKind`'s structural sub-kinds: dispatch could not
    // enter the rule, the same "expected ... wasn't there" shape as an
    // ordinary missing terminal.
    v.diagnostics_mut().push(Diagnostic::missing_terminal(line, message));
}
