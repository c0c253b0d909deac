//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub(crate) use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};

use clientes::Trace;
#[cfg(debug_assertions)]
use clientes::doc::ApiDoc;
use clientes::inbound::http::clientes::configure;
use clientes::inbound::http::health::{HealthState, live, ready};
use clientes::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(NormalizePath::trim())
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The health state is marked ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        http_state,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(actix_web::middleware::Condition::from_option(
            prometheus.clone(),
        ));

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Route wiring for the assembled application.

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::NaiveDate;
    use std::sync::Arc;

    use clientes::test_support::{FixtureClock, in_memory_state};

    fn app_state() -> web::Data<HttpState> {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        web::Data::new(in_memory_state(Arc::new(FixtureClock::on(date))))
    }

    #[actix_web::test]
    async fn trailing_slash_reaches_collection() {
        let app = test::init_service(build_app(
            web::Data::new(HealthState::new()),
            app_state(),
        ))
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/clientes/").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn health_probes_are_mounted() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let app = test::init_service(build_app(health, app_state())).await;

        for path in ["/health/ready", "/health/live"] {
            let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
            assert_eq!(res.status(), StatusCode::OK, "{path}");
        }
    }
}
