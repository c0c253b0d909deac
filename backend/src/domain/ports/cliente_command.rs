//! Driving port for customer mutations.
//!
//! HTTP handlers call this port with unvalidated input; implementations
//! validate, stamp and persist.

use async_trait::async_trait;

use crate::domain::{Cliente, ClienteCandidate, ClienteError, ClienteId};

/// Domain use-case port for creating, updating and deleting customers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClienteCommand: Send + Sync {
    /// Validate and store a new customer.
    async fn create(&self, candidate: ClienteCandidate) -> Result<Cliente, ClienteError>;

    /// Replace the name and CPF of an existing customer.
    ///
    /// # Errors
    ///
    /// [`ClienteError::NotFound`] takes precedence over validation failures.
    /// Bodies the HTTP adapter cannot decode are rejected before this runs.
    async fn update(&self, id: ClienteId, candidate: ClienteCandidate)
    -> Result<(), ClienteError>;

    /// Remove an existing customer.
    async fn delete(&self, id: ClienteId) -> Result<(), ClienteError>;
}
