//! Customer record and its write-side validation.

use std::fmt;

use chrono::NaiveDate;

use super::cpf::{Cpf, CpfValidationError};
use super::validation::{Field, ValidationFailure, Violation, ViolationKind};

/// Maximum number of characters in a customer name.
pub const NOME_MAX: usize = 150;

/// Store-assigned customer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClienteId(i32);

impl ClienteId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for ClienteId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ClienteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer name: non-blank and at most [`NOME_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nome(String);

impl Nome {
    /// Validate a raw name, keeping it as submitted.
    pub fn new(raw: impl Into<String>) -> Result<Self, ViolationKind> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ViolationKind::MissingField);
        }
        if raw.chars().count() > NOME_MAX {
            return Err(ViolationKind::TooLong { max: NOME_MAX });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Nome {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Nome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Nome> for String {
    fn from(value: Nome) -> Self {
        value.0
    }
}

/// Persisted customer.
///
/// ## Invariants
/// - `id` is assigned once by the store and never changes;
/// - `data_cadastro` is set by the service at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cliente {
    pub id: ClienteId,
    pub nome: Nome,
    pub cpf: Cpf,
    pub data_cadastro: NaiveDate,
}

impl Cliente {
    /// Copy the writable fields of `draft` onto this record.
    pub fn apply(&mut self, draft: ClienteDraft) {
        self.nome = draft.nome;
        self.cpf = draft.cpf;
    }
}

/// Customer awaiting its store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCliente {
    pub nome: Nome,
    pub cpf: Cpf,
    pub data_cadastro: NaiveDate,
}

/// Validated writable fields of a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClienteDraft {
    pub nome: Nome,
    pub cpf: Cpf,
}

impl ClienteDraft {
    /// Stamp the draft with its registration date.
    pub fn register(self, data_cadastro: NaiveDate) -> NewCliente {
        NewCliente {
            nome: self.nome,
            cpf: self.cpf,
            data_cadastro,
        }
    }
}

/// Unvalidated customer fields as submitted by a client.
///
/// # Examples
/// ```
/// use clientes::domain::ClienteCandidate;
///
/// let draft = ClienteCandidate::new("Ramira", "529.982.247-25")
///     .validate()
///     .expect("valid customer");
/// assert_eq!(draft.cpf.as_str(), "52998224725");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClienteCandidate {
    pub nome: Option<String>,
    pub cpf: Option<String>,
}

impl ClienteCandidate {
    pub fn new(nome: impl Into<String>, cpf: impl Into<String>) -> Self {
        Self {
            nome: Some(nome.into()),
            cpf: Some(cpf.into()),
        }
    }

    /// Check every field, reporting all violations at once.
    pub fn validate(self) -> Result<ClienteDraft, ValidationFailure> {
        let nome = Nome::new(self.nome.unwrap_or_default())
            .map_err(|kind| Violation::new(Field::Nome, kind));
        let cpf = Cpf::parse(self.cpf.unwrap_or_default()).map_err(|err| {
            let kind = match err {
                CpfValidationError::Empty => ViolationKind::MissingField,
                _ => ViolationKind::InvalidFormat,
            };
            Violation::new(Field::Cpf, kind)
        });

        match (nome, cpf) {
            (Ok(nome), Ok(cpf)) => Ok(ClienteDraft { nome, cpf }),
            (nome, cpf) => Err(ValidationFailure::new(
                [nome.err(), cpf.err()].into_iter().flatten().collect(),
            )),
        }
    }
}
