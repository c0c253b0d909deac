//! Test utilities for the clientes crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`,
//! through the `test-support` feature).

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use mockable::Clock;

use crate::Trace;
use crate::domain::{ClienteService, MessageCatalog};
use crate::inbound::http::clientes::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryClienteRepository;

/// Clock frozen at noon, local time, on a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixtureClock {
    now: DateTime<Local>,
}

impl FixtureClock {
    /// Freeze the clock on `date`.
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_time(NaiveTime::MIN) + chrono::Duration::hours(12);
        let now = Local
            .from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(|| Utc.from_utc_datetime(&noon).with_timezone(&Local));
        Self { now }
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

/// Build HTTP state over a fresh in-memory store and the bundled messages.
///
/// # Panics
///
/// Panics when the bundled message catalogue fails to load.
pub fn in_memory_state(clock: Arc<dyn Clock>) -> HttpState {
    let service = Arc::new(ClienteService::new(
        Arc::new(InMemoryClienteRepository::default()),
        clock,
    ));
    HttpState::new(service.clone(), service, Arc::new(bundled_messages()))
}

/// Load the bundled catalogue with the fallback default locale.
///
/// # Panics
///
/// Panics when the bundled message catalogue fails to load.
pub fn bundled_messages() -> MessageCatalog {
    MessageCatalog::builtin(None)
        .unwrap_or_else(|error| panic!("bundled messages failed to load: {error}"))
}

/// Application exposing the customer routes over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}
