//! Process-local customer store.
//!
//! Used by tests and when no database URL is configured. Identifiers start
//! at 1 and are never reused, even after deletes.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ClienteRepository, ClienteRepositoryError};
use crate::domain::{Cliente, ClienteId, NewCliente};

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    rows: BTreeMap<ClienteId, Cliente>,
}

/// In-memory implementation of the `ClienteRepository` port.
#[derive(Debug, Default)]
pub struct InMemoryClienteRepository {
    store: Mutex<Store>,
}

impl InMemoryClienteRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Store>, ClienteRepositoryError> {
        self.store
            .lock()
            .map_err(|_| ClienteRepositoryError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl ClienteRepository for InMemoryClienteRepository {
    async fn create(&self, new: &NewCliente) -> Result<Cliente, ClienteRepositoryError> {
        let mut store = self.lock()?;
        let next = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| ClienteRepositoryError::query("cliente id sequence exhausted"))?;
        store.last_id = next;

        let cliente = Cliente {
            id: ClienteId::new(next),
            nome: new.nome.clone(),
            cpf: new.cpf.clone(),
            data_cadastro: new.data_cadastro,
        };
        store.rows.insert(cliente.id, cliente.clone());
        Ok(cliente)
    }

    async fn list(&self) -> Result<Vec<Cliente>, ClienteRepositoryError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ClienteId) -> Result<Option<Cliente>, ClienteRepositoryError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn update(&self, cliente: &Cliente) -> Result<bool, ClienteRepositoryError> {
        let mut store = self.lock()?;
        let Some(existing) = store.rows.get_mut(&cliente.id) else {
            return Ok(false);
        };
        existing.nome = cliente.nome.clone();
        existing.cpf = cliente.cpf.clone();
        Ok(true)
    }

    async fn delete(&self, id: ClienteId) -> Result<bool, ClienteRepositoryError> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }
}
