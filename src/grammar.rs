//! The static grammar model: rules, sub-rules, quantifiers, line kinds, and
//! field types.
//!
//! A [`Grammar`] is caller-supplied data, not something this crate loads
//! from a file format — grammar construction and storage are out of scope
//! (see the crate-level docs). [`Grammar::check`] is an optional,
//! construction-time affordance for callers who build grammars
//! programmatically and want the structural invariants verified before
//! handing the grammar to [`crate::validate`].

use std::collections::BTreeMap;

use crate::types::TypeRegistry;

/// A named grammar production: either an ordered [`Sequence`] or an
/// unordered [`Choice`] section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleBody {
    /// An ordered list of entries to be matched in order.
    Sequence(Vec<Entry>),
    /// A set of alternative single-line field expectations; matches exactly
    /// one. Alternatives carry no quantifier of their own — quantification
    /// on a choice is expressed at the entry that references it.
    Choice(BTreeMap<String, ChoiceAlt>),
}

/// One element of a [`RuleBody::Sequence`]: a terminal or a reference to
/// another rule, wrapped in a [`Quantifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub subject: Subject,
    pub quantifier: Quantifier,
}

impl Entry {
    pub fn new(subject: Subject, quantifier: Quantifier) -> Self {
        Self {
            subject,
            quantifier,
        }
    }

    /// Convenience for the common case: exactly-once terminal or rule
    /// reference.
    pub fn once(subject: Subject) -> Self {
        Self::new(subject, Quantifier::Once)
    }
}

/// What an [`Entry`] matches against: a single line (a [`Terminal`]) or
/// another named rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Terminal(Terminal),
    RuleRef(String),
}

/// The kind of line a [`Terminal`] expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A named field, with an optional type to validate its value against.
    Field,
    /// Any token kind except `EOF`.
    AnyLine,
    /// End of input.
    Eof,
}

/// A terminal expectation: a named field on a particular line kind, `any
/// line`, or `EOF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    pub line: LineKind,
    /// The field name for [`LineKind::Field`]; informational for
    /// [`LineKind::Eof`]; unused for [`LineKind::AnyLine`].
    pub name: String,
    /// The scalar type to validate the field's value against. Only
    /// meaningful for [`LineKind::Field`].
    pub field_type: Option<String>,
}

impl Terminal {
    pub fn field(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            line: LineKind::Field,
            name: name.into(),
            field_type: Some(field_type.into()),
        }
    }

    pub fn any_line() -> Self {
        Self {
            line: LineKind::AnyLine,
            name: String::new(),
            field_type: None,
        }
    }

    pub fn eof(name: impl Into<String>) -> Self {
        Self {
            line: LineKind::Eof,
            name: name.into(),
            field_type: None,
        }
    }
}

/// One alternative of a [`RuleBody::Choice`] section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceAlt {
    pub field_type: Option<String>,
}

impl ChoiceAlt {
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            field_type: Some(field_type.into()),
        }
    }
}

/// Occurrence policy attached to an [`Entry`].
///
/// The absent case ("exactly once") is [`Quantifier::Once`]. See `spec.md`
/// §4.3 for the full semantics table; `RepeatableMax`'s `u32` must be ≥ 1
/// (checked by [`Grammar::check`] and, defensively, at dispatch time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Once,
    OptionalConstrained,
    OptionalFree,
    Repeatable,
    RepeatableMax(u32),
    OptionalRepeatable,
}

/// A mapping from rule name to rule body, supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    rules: BTreeMap<String, RuleBody>,
}

impl Grammar {
    pub fn new(rules: BTreeMap<String, RuleBody>) -> Self {
        Self { rules }
    }

    pub fn rule_body(&self, name: &str) -> Option<&RuleBody> {
        self.rules.get(name)
    }

    /// Checks invariants (i)-(iii) from `spec.md` §3 against a type
    /// registry: every non-terminal `name` resolves to a rule, every `type`
    /// resolves in the registry, and every `RepeatableMax(n)` has `n >= 1`.
    /// Invariant (iv) — a choice alternative carries no quantifier — holds
    /// structurally, since [`ChoiceAlt`] has no quantifier field to set.
    ///
    /// This is not called by [`crate::validate`] itself; `validate` trusts
    /// its grammar argument exactly as it trusts the lexer and type
    /// registry arguments. Call it yourself when building a grammar
    /// programmatically.
    pub fn check(&self, types: &dyn TypeRegistry) -> Vec<GrammarIssue> {
        let mut issues = Vec::new();
        for (rule_name, body) in &self.rules {
            match body {
                RuleBody::Sequence(entries) => {
                    for entry in entries {
                        self.check_entry(rule_name, entry, types, &mut issues);
                    }
                }
                RuleBody::Choice(alts) => {
                    for (alt_name, alt) in alts {
                        self.check_type(rule_name, alt_name, &alt.field_type, types, &mut issues);
                    }
                }
            }
        }
        issues
    }

    fn check_entry(
        &self,
        rule_name: &str,
        entry: &Entry,
        types: &dyn TypeRegistry,
        issues: &mut Vec<GrammarIssue>,
    ) {
        match &entry.subject {
            Subject::RuleRef(referenced) => {
                if !self.rules.contains_key(referenced) {
                    issues.push(GrammarIssue::UnknownRuleRef {
                        from_rule: rule_name.to_string(),
                        referenced: referenced.clone(),
                    });
                }
            }
            Subject::Terminal(terminal) => {
                self.check_type(rule_name, &terminal.name, &terminal.field_type, types, issues);
            }
        }
        if let Quantifier::RepeatableMax(0) = entry.quantifier {
            issues.push(GrammarIssue::InvalidRepeatableMax {
                rule: rule_name.to_string(),
            });
        }
    }

    fn check_type(
        &self,
        rule_name: &str,
        field_name: &str,
        field_type: &Option<String>,
        types: &dyn TypeRegistry,
        issues: &mut Vec<GrammarIssue>,
    ) {
        if let Some(ty) = field_type {
            if !types.has_type(ty) {
                issues.push(GrammarIssue::UnknownType {
                    rule: rule_name.to_string(),
                    field: field_name.to_string(),
                    type_name: ty.clone(),
                });
            }
        }
    }
}

/// A grammar-construction problem found by [`Grammar::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarIssue {
    UnknownRuleRef {
        from_rule: String,
        referenced: String,
    },
    UnknownType {
        rule: String,
        field: String,
        type_name: String,
    },
    InvalidRepeatableMax {
        rule: String,
    },
}
