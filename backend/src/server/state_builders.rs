//! Builders selecting the customer store and wiring HTTP state over it.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::{info, warn};

use clientes::domain::ports::ClienteRepository;
use clientes::domain::{ClienteService, MessageCatalog};
use clientes::inbound::http::state::HttpState;
use clientes::outbound::memory::InMemoryClienteRepository;
use clientes::outbound::persistence::{DbPool, DieselClienteRepository, run_migrations};
use clientes::settings::AppSettings;

/// Wrap one service in both ports exposed to the handlers.
fn state_over<R>(repository: R, messages: Arc<MessageCatalog>) -> HttpState
where
    R: ClienteRepository + 'static,
{
    let service = Arc::new(ClienteService::new(
        Arc::new(repository),
        Arc::new(DefaultClock),
    ));
    HttpState::new(service.clone(), service, messages)
}

/// Build HTTP state over PostgreSQL when a database URL is configured,
/// otherwise over a process-local store.
///
/// Embedded migrations run first unless disabled in `settings`.
///
/// # Errors
/// Returns [`std::io::Error`] when migrations fail or the pool cannot be
/// built.
pub(crate) async fn build_http_state(
    settings: &AppSettings,
    messages: Arc<MessageCatalog>,
) -> std::io::Result<HttpState> {
    let Some(pool_config) = settings.pool_config() else {
        warn!("no database URL configured; customers are kept in memory");
        return Ok(state_over(InMemoryClienteRepository::default(), messages));
    };

    if settings.run_migrations() {
        let url = pool_config.database_url().to_owned();
        web::block(move || run_migrations(&url))
            .await
            .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
            .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
    }

    let max_size = pool_config.max_size();
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
    info!(max_size, "database pool ready");
    Ok(state_over(DieselClienteRepository::new(pool), messages))
}
