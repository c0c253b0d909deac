//! Customer API handlers.
//!
//! ```text
//! POST   /api/clientes      {"nome":"Ramira","cpf":"52998224725"}
//! GET    /api/clientes
//! GET    /api/clientes/{id}
//! PUT    /api/clientes/{id} {"nome":"Ramira","cpf":"52998224725"}
//! DELETE /api/clientes/{id}
//! ```

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Cliente, ClienteCandidate, ClienteId, MessageKey};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ApiError, ApiErrors, map_cliente_error};
use crate::inbound::http::locale::Localizer;
use crate::inbound::http::state::HttpState;

/// Base path of the customer resource.
pub const CLIENTES_PATH: &str = "/api/clientes";

/// Wire format of `dataCadastro`.
pub const DATA_CADASTRO_FORMAT: &str = "%d/%m/%Y";

mod data_cadastro {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use super::DATA_CADASTRO_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATA_CADASTRO_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATA_CADASTRO_FORMAT).map_err(D::Error::custom)
    }
}

/// Request body for creating or updating a customer.
///
/// `id` and `dataCadastro` are assigned by the server; when present they are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ClienteRequest {
    #[serde(default)]
    #[schema(example = "Ramira")]
    pub nome: Option<String>,
    #[serde(default)]
    #[schema(example = "529.982.247-25")]
    pub cpf: Option<String>,
}

impl From<ClienteRequest> for ClienteCandidate {
    fn from(value: ClienteRequest) -> Self {
        Self {
            nome: value.nome,
            cpf: value.cpf,
        }
    }
}

/// Customer representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ramira")]
    pub nome: String,
    #[schema(example = "52998224725")]
    pub cpf: String,
    #[serde(with = "data_cadastro")]
    #[schema(value_type = String, example = "19/10/2026")]
    pub data_cadastro: NaiveDate,
}

impl From<Cliente> for ClienteResponse {
    fn from(value: Cliente) -> Self {
        Self {
            id: value.id.value(),
            nome: value.nome.into(),
            cpf: value.cpf.into(),
            data_cadastro: value.data_cadastro,
        }
    }
}

/// Register the customer routes and their extractor error handlers.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use clientes::inbound::http::clientes::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(CLIENTES_PATH)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(create_cliente)
            .service(list_clientes)
            .service(get_cliente)
            .service(update_cliente)
            .service(delete_cliente),
    );
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected cliente request body");
    reject(req, MessageKey::CorpoInvalido).into()
}

fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected cliente id");
    reject(req, MessageKey::IdInvalido).into()
}

fn reject(req: &HttpRequest, key: MessageKey) -> ApiError {
    match Localizer::for_request(req) {
        Ok(localizer) => ApiError::single(StatusCode::BAD_REQUEST, &localizer, key),
        Err(err) => err,
    }
}

/// Create a customer.
#[utoipa::path(
    post,
    path = "/api/clientes",
    request_body = ClienteRequest,
    params(("Accept-Language" = Option<String>, Header, description = "Preferred message locale")),
    responses(
        (status = 201, description = "Customer created", body = ClienteResponse),
        (status = 400, description = "Invalid customer", body = ApiErrors),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Storage unavailable")
    ),
    tags = ["clientes"],
    operation_id = "createCliente"
)]
#[post("")]
pub async fn create_cliente(
    state: web::Data<HttpState>,
    localizer: Localizer,
    payload: web::Json<ClienteRequest>,
) -> ApiResult<HttpResponse> {
    let cliente = state
        .clientes
        .create(payload.into_inner().into())
        .await
        .map_err(|err| map_cliente_error(err, &localizer))?;
    Ok(HttpResponse::Created().json(ClienteResponse::from(cliente)))
}

/// List every customer ordered by id.
#[utoipa::path(
    get,
    path = "/api/clientes",
    responses(
        (status = 200, description = "Customers", body = [ClienteResponse]),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Storage unavailable")
    ),
    tags = ["clientes"],
    operation_id = "listClientes"
)]
#[get("")]
pub async fn list_clientes(
    state: web::Data<HttpState>,
    localizer: Localizer,
) -> ApiResult<web::Json<Vec<ClienteResponse>>> {
    let clientes = state
        .clientes_query
        .list()
        .await
        .map_err(|err| map_cliente_error(err, &localizer))?;
    Ok(web::Json(
        clientes.into_iter().map(ClienteResponse::from).collect(),
    ))
}

/// Fetch one customer.
#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    params(
        ("id" = i32, Path, description = "Customer identifier"),
        ("Accept-Language" = Option<String>, Header, description = "Preferred message locale")
    ),
    responses(
        (status = 200, description = "Customer", body = ClienteResponse),
        (status = 400, description = "Identifier is not an integer", body = ApiErrors),
        (status = 404, description = "Customer not found", body = ApiErrors),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Storage unavailable")
    ),
    tags = ["clientes"],
    operation_id = "getCliente"
)]
#[get("/{id}")]
pub async fn get_cliente(
    state: web::Data<HttpState>,
    localizer: Localizer,
    path: web::Path<i32>,
) -> ApiResult<web::Json<ClienteResponse>> {
    let cliente = state
        .clientes_query
        .find(ClienteId::new(path.into_inner()))
        .await
        .map_err(|err| map_cliente_error(err, &localizer))?;
    Ok(web::Json(cliente.into()))
}

/// Replace the name and CPF of a customer.
///
/// A missing customer is reported before the body is validated; a body
/// that is not JSON at all is rejected with 400 before the lookup.
#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    request_body = ClienteRequest,
    params(
        ("id" = i32, Path, description = "Customer identifier"),
        ("Accept-Language" = Option<String>, Header, description = "Preferred message locale")
    ),
    responses(
        (status = 204, description = "Customer updated"),
        (status = 400, description = "Invalid customer", body = ApiErrors),
        (status = 404, description = "Customer not found", body = ApiErrors),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Storage unavailable")
    ),
    tags = ["clientes"],
    operation_id = "updateCliente"
)]
#[put("/{id}")]
pub async fn update_cliente(
    state: web::Data<HttpState>,
    localizer: Localizer,
    path: web::Path<i32>,
    payload: web::Json<ClienteRequest>,
) -> ApiResult<HttpResponse> {
    state
        .clientes
        .update(ClienteId::new(path.into_inner()), payload.into_inner().into())
        .await
        .map_err(|err| map_cliente_error(err, &localizer))?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a customer.
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    params(
        ("id" = i32, Path, description = "Customer identifier"),
        ("Accept-Language" = Option<String>, Header, description = "Preferred message locale")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 400, description = "Identifier is not an integer", body = ApiErrors),
        (status = 404, description = "Customer not found", body = ApiErrors),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Storage unavailable")
    ),
    tags = ["clientes"],
    operation_id = "deleteCliente"
)]
#[delete("/{id}")]
pub async fn delete_cliente(
    state: web::Data<HttpState>,
    localizer: Localizer,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .clientes
        .delete(ClienteId::new(path.into_inner()))
        .await
        .map_err(|err| map_cliente_error(err, &localizer))?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "clientes_tests.rs"]
mod tests;
