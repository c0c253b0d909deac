//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses with localised messages.

use thiserror::Error;

use super::cliente::ClienteId;
use super::ports::ClienteRepositoryError;
use super::validation::ValidationFailure;

/// Failures raised by the customer driving ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClienteError {
    /// Submitted fields violate one or more constraints; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
    /// No customer has the requested id.
    #[error("cliente {id} not found")]
    NotFound { id: ClienteId },
    /// The store failed; the operation may or may not have been applied.
    #[error(transparent)]
    Storage(#[from] ClienteRepositoryError),
}

impl ClienteError {
    pub fn not_found(id: ClienteId) -> Self {
        Self::NotFound { id }
    }
}
