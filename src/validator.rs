//! Ties a lexer, a grammar, a type registry, and an accumulating
//! diagnostics sink together into the state threaded through one
//! validation run.
//!
//! Shape grounded on `apollo-parser`'s `Parser`, which bundles its lexer,
//! current-token cache, error list, and recursion limit the same way;
//! generalized here from an owned lexer to a caller-supplied
//! `&mut dyn LexerView`, since the lexer is out of scope for this crate.

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::dispatch;
use crate::error::ProgrammerError;
use crate::grammar::Grammar;
use crate::limit::{RecursionGuard, DEFAULT_RECURSION_LIMIT};
use crate::token::{LexerView, Token};
use crate::types::TypeRegistry;

pub(crate) struct Validator<'a> {
    lexer: &'a mut dyn LexerView,
    grammar: &'a Grammar,
    types: &'a dyn TypeRegistry,
    diagnostics: Diagnostics,
    pub(crate) recursion: RecursionGuard,
    tokens_consumed: u64,
}

impl<'a> Validator<'a> {
    pub(crate) fn new(
        lexer: &'a mut dyn LexerView,
        grammar: &'a Grammar,
        types: &'a dyn TypeRegistry,
        recursion_limit: usize,
    ) -> Self {
        Self {
            lexer,
            grammar,
            types,
            diagnostics: Diagnostics::new(),
            recursion: RecursionGuard::new(recursion_limit),
            tokens_consumed: 0,
        }
    }

    pub(crate) fn peek(&mut self) -> Token {
        self.lexer.peek_line()
    }

    pub(crate) fn advance(&mut self) {
        self.lexer.advance_line();
        self.tokens_consumed += 1;
    }

    pub(crate) fn line_no(&self) -> u32 {
        self.lexer.line_no()
    }

    pub(crate) fn tokens_consumed(&self) -> u64 {
        self.tokens_consumed
    }

    pub(crate) fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    pub(crate) fn types(&self) -> &'a dyn TypeRegistry {
        self.types
    }

    pub(crate) fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Validates one reply against `grammar`'s `rule` production, driving
/// `lexer` with one token of lookahead and consulting `types` for scalar
/// field values. Returns every diagnostic produced, in the order the
/// underlying tokens were encountered.
///
/// Panics if the grammar itself is malformed (an unknown rule or type
/// name, or an invalid quantifier) — these are programmer errors in the
/// grammar the caller supplied, not problems with the input being
/// validated, and are never returned as diagnostics. Use [`Grammar::check`]
/// ahead of time to catch them without a panic.
///
/// [`Grammar::check`]: crate::grammar::Grammar::check
pub fn validate(
    rule: &str,
    lexer: &mut dyn LexerView,
    grammar: &Grammar,
    types: &dyn TypeRegistry,
) -> Vec<String> {
    validate_with_limit(rule, lexer, grammar, types, DEFAULT_RECURSION_LIMIT)
}

/// As [`validate`], but with an explicit recursion-guard depth instead of
/// [`crate::limit::DEFAULT_RECURSION_LIMIT`].
pub fn validate_with_limit(
    rule: &str,
    lexer: &mut dyn LexerView,
    grammar: &Grammar,
    types: &dyn TypeRegistry,
    recursion_limit: usize,
) -> Vec<String> {
    let mut v = Validator::new(lexer, grammar, types, recursion_limit);
    match dispatch::dispatch_root(&mut v, rule) {
        Ok(()) => {}
        Err(err) => panic!("{err}"),
    }
    if !v.peek().is_eof() {
        let line = v.line_no();
        v.diagnostics_mut().push(Diagnostic::trailing_input(
            line,
            format!("unexpected trailing input at line {line}"),
        ));
    }
    v.into_diagnostics().into_strings()
}

/// As [`validate`], generic over concrete lexer and type-registry types
/// instead of trait objects — convenient when the caller already owns a
/// concrete `LexerView`/`TypeRegistry` and would rather not name the trait
/// object type at the call site.
pub fn validate_with<L: LexerView, T: TypeRegistry>(
    rule: &str,
    lexer: &mut L,
    grammar: &Grammar,
    types: &T,
) -> Vec<String> {
    validate(rule, lexer, grammar, types)
}
