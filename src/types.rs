//! The scalar type registry interface. The registry itself — whatever
//! validates hostnames, dates, roids, and the like — is out of scope; this
//! crate only calls through it.

/// A source of scalar field types, supplied by the caller.
///
/// `validate_type` returns zero or more already-formatted diagnostic
/// strings; `line` is the 1-based line number of the field being validated,
/// passed through so a registry can embed it directly into a message
/// instead of relying on the validator to tag it on afterwards (the
/// validator does that too, for registries that don't — see `spec.md` §7,
/// category "type-sourced").
pub trait TypeRegistry {
    /// Whether `name` names a type this registry knows about.
    fn has_type(&self, name: &str) -> bool;

    /// Validates `value` against the named type. Only called when
    /// `has_type(name)` is true; calling it otherwise is a logic error on
    /// this crate's part, not the registry's.
    fn validate_type(&self, name: &str, value: &str, line: u32) -> Vec<String>;
}
