//! Programmer errors: grammar problems that are not diagnostics about the
//! input, because they aren't about the input at all. An unknown rule name,
//! an unknown type name, or a malformed quantifier all mean the grammar
//! itself is broken, and validation aborts rather than accumulating a
//! diagnostic for the caller to potentially ignore.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ProgrammerError {
    #[error("unknown rule \"{0}\"")]
    UnknownRule(String),

    #[error("unknown type \"{0}\"")]
    UnknownType(String),

    #[error("invalid quantifier on {subject}: {reason}")]
    InvalidQuantifier { subject: String, reason: String },
}
