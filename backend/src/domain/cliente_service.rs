//! Customer domain service implementing the command and query ports.
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{ClienteCommand, ClienteQuery, ClienteRepository};
use crate::domain::{Cliente, ClienteCandidate, ClienteError, ClienteId};

/// Customer service backed by a [`ClienteRepository`].
///
/// Registration dates come from the injected clock's local calendar date.
#[derive(Clone)]
pub struct ClienteService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ClienteService<R> {
    /// Create a service over `repository`.
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use clientes::domain::ClienteService;
    /// # use clientes::outbound::memory::InMemoryClienteRepository;
    /// # use mockable::DefaultClock;
    /// let service = ClienteService::new(
    ///     Arc::new(InMemoryClienteRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

impl<R> ClienteService<R>
where
    R: ClienteRepository,
{
    async fn require(&self, id: ClienteId) -> Result<Cliente, ClienteError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClienteError::not_found(id))
    }
}

#[async_trait]
impl<R> ClienteCommand for ClienteService<R>
where
    R: ClienteRepository,
{
    async fn create(&self, candidate: ClienteCandidate) -> Result<Cliente, ClienteError> {
        let draft = candidate.validate()?;
        let today = self.clock.local().date_naive();
        let cliente = self.repository.create(&draft.register(today)).await?;
        info!(cliente_id = %cliente.id, "cliente created");
        Ok(cliente)
    }

    async fn update(&self, id: ClienteId, candidate: ClienteCandidate) -> Result<(), ClienteError> {
        let mut cliente = self.require(id).await?;
        cliente.apply(candidate.validate()?);
        if !self.repository.update(&cliente).await? {
            return Err(ClienteError::not_found(id));
        }
        info!(cliente_id = %id, "cliente updated");
        Ok(())
    }

    async fn delete(&self, id: ClienteId) -> Result<(), ClienteError> {
        self.require(id).await?;
        if !self.repository.delete(id).await? {
            return Err(ClienteError::not_found(id));
        }
        info!(cliente_id = %id, "cliente deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> ClienteQuery for ClienteService<R>
where
    R: ClienteRepository,
{
    async fn list(&self) -> Result<Vec<Cliente>, ClienteError> {
        Ok(self.repository.list().await?)
    }

    async fn find(&self, id: ClienteId) -> Result<Cliente, ClienteError> {
        self.require(id).await
    }
}

#[cfg(test)]
#[path = "cliente_service_tests.rs"]
mod tests;
