//! Diagnostics: the validator's entire output.
//!
//! `spec.md` §7 groups diagnostics into three categories by origin —
//! lexer-sourced, type-sourced, structural — but they are all flattened to
//! plain strings at the public boundary (see [`Diagnostics::into_strings`]).
//! [`Diagnostic`] and [`DiagnosticKind`] exist so the engine can reason
//! about a diagnostic's origin internally (the optional-constrained
//! consistency check, for one, needs to tell "I already saw a present
//! value" apart from "I already saw an omission"); nothing downstream of
//! `validate` sees them. The structural category is split into its own
//! sub-kinds (one per §7 structural cause) rather than one catch-all, so a
//! caller inspecting [`Diagnostic::kind`] can tell a missing terminal apart
//! from an empty field or a too-many-repetitions overflow without parsing
//! the message text.
//!
//! [`Diagnostic::kind`]: Diagnostic#structfield.kind

use std::fmt;

/// Where a diagnostic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Forwarded verbatim from a token's `lexer_diagnostics`.
    LexerSourced,
    /// Produced by the type registry for a field's value.
    TypeSourced,
    /// An expected terminal (field, `any line`, `EOF`, or rule reference)
    /// was not present where required. Also covers a recursion-limit hit on
    /// a rule reference — dispatch could not enter the rule, which from the
    /// caller's perspective is the same "expected ... wasn't there" shape.
    MissingTerminal,
    /// A field (or choice alternative) matched by name but carried no
    /// value, in a context that required one.
    EmptyField,
    /// A `repeatable max N` entry matched more than `N` times.
    TooManyRepetitions,
    /// Sibling `optional-constrained` entries in one enclosing sequence
    /// disagreed on present/empty/omitted.
    OptionalConstrainedInconsistency,
    /// Tokens remained after the root rule's sequence was satisfied.
    TrailingInput,
}

/// One diagnostic, anchored to the line it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: u32,
    pub kind: DiagnosticKind,
    message: String,
}

impl Diagnostic {
    pub fn lexer(line: u32, message: String) -> Self {
        Self {
            line,
            kind: DiagnosticKind::LexerSourced,
            message,
        }
    }

    pub fn type_sourced(line: u32, message: String) -> Self {
        Self {
            line,
            kind: DiagnosticKind::TypeSourced,
            message,
        }
    }

    pub fn missing_terminal(line: u32, message: String) -> Self {
        Self {
            line,
            kind: DiagnosticKind::MissingTerminal,
            message,
        }
    }

    pub fn empty_field(line: u32, message: String) -> Self {
        Self {
            line,
            kind: DiagnosticKind::EmptyField,
            message,
        }
    }

    pub fn too_many_repetitions(line: u32, message: String) -> Self {
        Self {
            line,
            kind: DiagnosticKind::TooManyRepetitions,
            message,
        }
    }

    pub fn optional_constrained_inconsistency(line: u32, message: String) -> Self {
        Self {
            line,
            kind: DiagnosticKind::OptionalConstrainedInconsistency,
            message,
        }
    }

    pub fn trailing_input(line: u32, message: String) -> Self {
        Self {
            line,
            kind: DiagnosticKind::TrailingInput,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// An ordered, append-only sink of diagnostics accumulated over one
/// validation run.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Forwards a token's lexer-sourced diagnostics verbatim, anchored to
    /// `line`. Lexer diagnostics are always forwarded when the token they
    /// came with is consumed, regardless of whether the quantifier that
    /// consumed it would otherwise stay silent.
    pub fn extend_lexer(&mut self, line: u32, messages: &[String]) {
        for message in messages {
            self.push(Diagnostic::lexer(line, message.clone()));
        }
    }

    pub fn extend_type(&mut self, line: u32, messages: Vec<String>) {
        for message in messages {
            self.push(Diagnostic::type_sourced(line, message));
        }
    }

    pub fn into_strings(self) -> Vec<String> {
        self.0.into_iter().map(|d| d.to_string()).collect()
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }
}
