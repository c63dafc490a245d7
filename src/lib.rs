//! A grammar-driven validator for line-oriented, field-based reply text —
//! the kind of structured-but-not-quite-machine-readable output a
//! domain-registry directory service hands back to a query.
//!
//! This crate interprets a [`Grammar`] — sequences, choice sections,
//! sub-rule references, occurrence quantifiers — against a token stream
//! produced by a caller-supplied lexer ([`LexerView`]), using exactly one
//! token of lookahead, and produces a flat list of line-anchored
//! diagnostic strings. It does not lex, does not know how to validate a
//! scalar field's value (that's [`TypeRegistry`]'s job), does not load
//! grammars from a file format, and does not build a parse tree: the
//! reply is validated, not transformed.
//!
//! ```
//! use std::collections::BTreeMap;
//! use whois_grammar::{validate, Entry, Grammar, LexerView, RuleBody, Subject, Terminal, Token, TypeRegistry};
//!
//! struct OneLineLexer(Option<String>);
//!
//! impl LexerView for OneLineLexer {
//!     fn peek_line(&mut self) -> Token {
//!         match &self.0 {
//!             Some(value) => Token::Field {
//!                 name: "Domain Name".to_string(),
//!                 translations: Vec::new(),
//!                 value: Some(value.clone()),
//!                 lexer_diagnostics: Vec::new(),
//!             },
//!             None => Token::Eof { lexer_diagnostics: Vec::new() },
//!         }
//!     }
//!     fn advance_line(&mut self) {
//!         self.0 = None;
//!     }
//!     fn line_no(&self) -> u32 {
//!         1
//!     }
//! }
//!
//! struct AnyHostnameIsFine;
//!
//! impl TypeRegistry for AnyHostnameIsFine {
//!     fn has_type(&self, name: &str) -> bool {
//!         name == "hostname"
//!     }
//!     fn validate_type(&self, _name: &str, _value: &str, _line: u32) -> Vec<String> {
//!         Vec::new()
//!     }
//! }
//!
//! let mut rules = BTreeMap::new();
//! rules.insert(
//!     "Top".to_string(),
//!     RuleBody::Sequence(vec![
//!         Entry::once(Subject::Terminal(Terminal::field("Domain Name", "hostname"))),
//!         Entry::once(Subject::Terminal(Terminal::eof("EOF"))),
//!     ]),
//! );
//! let grammar = Grammar::new(rules);
//! let mut lexer = OneLineLexer(Some("EXAMPLE.TEST".to_string()));
//! assert!(validate("Top", &mut lexer, &grammar, &AnyHostnameIsFine).is_empty());
//! ```

#![forbid(unsafe_code)]

mod choice;
mod diagnostic;
mod dispatch;
mod error;
mod grammar;
mod line_matcher;
mod limit;
mod quantifier;
mod token;
mod types;
mod validator;

#[cfg(test)]
pub mod test_support;

pub use crate::diagnostic::{Diagnostic, DiagnosticKind};
pub use crate::error::ProgrammerError;
pub use crate::grammar::{ChoiceAlt, Entry, Grammar, GrammarIssue, LineKind, Quantifier, RuleBody, Subject, Terminal};
pub use crate::limit::DEFAULT_RECURSION_LIMIT;
pub use crate::token::{LexerView, Token};
pub use crate::types::TypeRegistry;
pub use crate::validator::{validate, validate_with, validate_with_limit};
