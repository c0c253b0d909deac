//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the customer endpoints, the health probes and the
//! request, response and error payloads. The document is served by Swagger
//! UI in debug builds and exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::clientes::{ClienteRequest, ClienteResponse};
use crate::inbound::http::error::ApiErrors;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clientes API",
        description = "Customer registration with CPF validation and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::clientes::create_cliente,
        crate::inbound::http::clientes::list_clientes,
        crate::inbound::http::clientes::get_cliente,
        crate::inbound::http::clientes::update_cliente,
        crate::inbound::http::clientes::delete_cliente,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ClienteRequest, ClienteResponse, ApiErrors)),
    tags(
        (name = "clientes", description = "Customer registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
