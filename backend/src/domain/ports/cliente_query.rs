//! Driving port for customer lookups.

use async_trait::async_trait;

use crate::domain::{Cliente, ClienteError, ClienteId};

/// Domain use-case port for reading customers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClienteQuery: Send + Sync {
    /// Every customer, ordered by id.
    async fn list(&self) -> Result<Vec<Cliente>, ClienteError>;

    /// A single customer or [`ClienteError::NotFound`].
    async fn find(&self, id: ClienteId) -> Result<Cliente, ClienteError>;
}
