//! Structured field violations for customer writes.
//!
//! Constraints report every failure they find as a [`Violation`] rather than
//! text, so adapters can render them in the caller's locale.

use std::fmt;

use super::messages::MessageKey;

/// Customer fields subject to validation, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Nome,
    Cpf,
}

impl Field {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nome => "nome",
            Self::Cpf => "cpf",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a single constraint failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Value is absent, null or blank.
    MissingField,
    /// Value does not satisfy the field's format.
    InvalidFormat,
    /// Value is longer than `max` characters.
    TooLong { max: usize },
}

/// One violated constraint on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: Field, kind: ViolationKind) -> Self {
        Self { field, kind }
    }

    /// Catalogue key describing this violation.
    pub fn message_key(&self) -> MessageKey {
        match (self.field, self.kind) {
            (Field::Nome, ViolationKind::TooLong { .. }) => MessageKey::NomeTamanho,
            (Field::Nome, _) => MessageKey::NomeObrigatorio,
            (Field::Cpf, ViolationKind::MissingField) => MessageKey::CpfObrigatorio,
            (Field::Cpf, _) => MessageKey::CpfInvalido,
        }
    }

    /// Named arguments interpolated into the message template.
    pub fn message_args(&self) -> Vec<(&'static str, String)> {
        match self.kind {
            ViolationKind::TooLong { max } => vec![("max", max.to_string())],
            ViolationKind::MissingField | ViolationKind::InvalidFormat => Vec::new(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::MissingField => write!(f, "{} is required", self.field),
            ViolationKind::InvalidFormat => write!(f, "{} is invalid", self.field),
            ViolationKind::TooLong { max } => {
                write!(f, "{} must have at most {max} characters", self.field)
            }
        }
    }
}

/// Non-empty set of violations, ordered by field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", summary(.violations))]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationFailure {
    /// Callers guarantee `violations` is non-empty.
    pub(crate) fn new(mut violations: Vec<Violation>) -> Self {
        violations.sort_by_key(|violation| violation.field);
        Self { violations }
    }

    /// Build a failure from collected violations; `None` when there are none.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            return None;
        }
        Some(Self::new(violations))
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}
