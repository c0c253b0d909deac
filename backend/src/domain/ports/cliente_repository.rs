//! Port abstraction for customer persistence adapters and their errors.
//!
//! The [`ClienteRepository`] trait is the only way the domain touches stored
//! customers. Adapters assign identifiers on insert and never rewrite the
//! registration date on update.

use async_trait::async_trait;

use crate::domain::{Cliente, ClienteId, NewCliente};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by customer repository adapters.
    pub enum ClienteRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "cliente repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "cliente repository query failed: {message}",
    }
}

/// Port for customer storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    /// Insert a customer, returning it with its assigned id.
    async fn create(&self, cliente: &NewCliente) -> Result<Cliente, ClienteRepositoryError>;

    /// Fetch every customer ordered by id.
    async fn list(&self) -> Result<Vec<Cliente>, ClienteRepositoryError>;

    /// Fetch a customer by identifier.
    async fn find_by_id(&self, id: ClienteId) -> Result<Option<Cliente>, ClienteRepositoryError>;

    /// Write `nome` and `cpf` for `cliente.id`.
    ///
    /// Returns `false` when no row has that id.
    async fn update(&self, cliente: &Cliente) -> Result<bool, ClienteRepositoryError>;

    /// Remove a customer. Returns `false` when no row has that id.
    async fn delete(&self, id: ClienteId) -> Result<bool, ClienteRepositoryError>;
}
