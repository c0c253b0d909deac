//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::MessageCatalog;
use crate::domain::ports::{ClienteCommand, ClienteQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub clientes: Arc<dyn ClienteCommand>,
    pub clientes_query: Arc<dyn ClienteQuery>,
    pub messages: Arc<MessageCatalog>,
}

impl HttpState {
    /// Construct state from port implementations and the message catalogue.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use clientes::domain::{ClienteService, MessageCatalog};
    /// use clientes::inbound::http::state::HttpState;
    /// use clientes::outbound::memory::InMemoryClienteRepository;
    /// use mockable::DefaultClock;
    ///
    /// let service = Arc::new(ClienteService::new(
    ///     Arc::new(InMemoryClienteRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let messages = Arc::new(MessageCatalog::builtin(None).expect("bundled messages"));
    /// let state = HttpState::new(service.clone(), service, messages);
    /// # let _ = state;
    /// ```
    pub fn new(
        clientes: Arc<dyn ClienteCommand>,
        clientes_query: Arc<dyn ClienteQuery>,
        messages: Arc<MessageCatalog>,
    ) -> Self {
        Self {
            clientes,
            clientes_query,
            messages,
        }
    }
}
