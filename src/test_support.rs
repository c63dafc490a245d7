//! Shared test fixtures: a scripted [`FakeLexer`] and a scripted
//! [`FakeTypeRegistry`], plus small constructor functions for building
//! [`Token`]s, used across this crate's own unit tests and by
//! `tests/scenarios.rs`.
//!
//! This module is compiled only in test builds. Integration tests in
//! `tests/` cannot see it (it isn't part of the library's public test-cfg
//! build they link against), so `tests/scenarios.rs` defines its own copy
//! of the same two fakes.

use std::collections::HashMap;

use crate::token::{LexerView, Token};
use crate::types::TypeRegistry;

/// Builds a [`Token::Field`] with no translations and no lexer diagnostics
/// — the common case in tests that aren't specifically exercising either.
pub fn field_token(name: &str, value: Option<&str>) -> Token {
    Token::Field {
        name: name.to_string(),
        translations: Vec::new(),
        value: value.map(str::to_string),
        lexer_diagnostics: Vec::new(),
    }
}

/// Builds a [`Token::Field`] carrying lexer diagnostics alongside its
/// value.
pub fn field_token_with_diagnostics(name: &str, value: Option<&str>, diagnostics: &[&str]) -> Token {
    Token::Field {
        name: name.to_string(),
        translations: Vec::new(),
        value: value.map(str::to_string),
        lexer_diagnostics: diagnostics.iter().map(|s| s.to_string()).collect(),
    }
}

/// Builds a [`Token::Other`] — a generic non-field, non-EOF line, the kind
/// `any line` terminals match.
pub fn other_token(kind: &str) -> Token {
    Token::Other {
        kind: kind.to_string(),
        lexer_diagnostics: Vec::new(),
    }
}

/// A lexer driven entirely by a pre-scripted token list. Once the list is
/// exhausted, it settles on `EOF` forever, matching the contract
/// `LexerView` documents.
pub struct FakeLexer {
    tokens: Vec<Token>,
    index: usize,
}

impl FakeLexer {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }
}

impl LexerView for FakeLexer {
    fn peek_line(&mut self) -> Token {
        self.tokens
            .get(self.index)
            .cloned()
            .unwrap_or(Token::Eof {
                lexer_diagnostics: Vec::new(),
            })
    }

    fn advance_line(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    fn line_no(&self) -> u32 {
        self.index as u32 + 1
    }
}

/// A type registry backed by a fixed set of known type names, each either
/// always passing or returning a scripted list of diagnostics regardless
/// of the value it's given.
#[derive(Default)]
pub struct FakeTypeRegistry {
    always_ok: HashMap<String, ()>,
    scripted: HashMap<String, Vec<String>>,
}

impl FakeTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `type_name` as known, always validating without
    /// diagnostics.
    pub fn with_always_ok(mut self, type_name: &str) -> Self {
        self.always_ok.insert(type_name.to_string(), ());
        self
    }

    /// Registers `type_name` as known, always producing `diagnostics`
    /// regardless of the value passed to it.
    pub fn with_scripted_diagnostics(mut self, type_name: &str, diagnostics: &[&str]) -> Self {
        self.scripted.insert(
            type_name.to_string(),
            diagnostics.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

impl TypeRegistry for FakeTypeRegistry {
    fn has_type(&self, name: &str) -> bool {
        self.always_ok.contains_key(name) || self.scripted.contains_key(name)
    }

    fn validate_type(&self, name: &str, _value: &str, _line: u32) -> Vec<String> {
        self.scripted.get(name).cloned().unwrap_or_default()
    }
}
