//! HTTP adapter mapping for domain errors.
//!
//! Validation and lookup failures become a localised `{"errors": [...]}`
//! payload. Storage failures are logged and answered with a plain-text body
//! so driver detail never reaches clients.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::ClienteRepositoryError;
use crate::domain::{ClienteError, MessageKey};
use crate::middleware::trace::TraceId;

use super::locale::Localizer;

/// Error payload returned for client errors.
///
/// Example JSON: `{"errors": ["Cliente não encontrado"]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrors {
    #[schema(example = json!(["O campo Nome é obrigatório."]))]
    pub errors: Vec<String>,
}

/// Failure answered by an HTTP handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Client error carrying localised messages.
    #[error("request rejected with {status}")]
    Rejected { status: StatusCode, body: ApiErrors },
    /// The store could not be reached.
    #[error("service unavailable")]
    Unavailable,
    /// Unexpected failure.
    #[error("internal server error")]
    Internal,
}

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Reject with a single localised message.
    pub fn single(status: StatusCode, localizer: &Localizer, key: MessageKey) -> Self {
        Self::Rejected {
            status,
            body: ApiErrors {
                errors: vec![localizer.message(key, &[])],
            },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Rejected { status, .. } => *status,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            Self::Rejected { body, .. } => builder.json(body),
            Self::Unavailable => builder
                .insert_header(ContentType::plaintext())
                .body("Service unavailable"),
            Self::Internal => builder
                .insert_header(ContentType::plaintext())
                .body("Internal server error"),
        }
    }
}

/// Translate a domain failure into an HTTP error in the caller's locale.
pub fn map_cliente_error(error: ClienteError, localizer: &Localizer) -> ApiError {
    match error {
        ClienteError::Validation(failure) => ApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
            body: ApiErrors {
                errors: failure
                    .violations()
                    .iter()
                    .map(|violation| {
                        localizer.message(violation.message_key(), &violation.message_args())
                    })
                    .collect(),
            },
        },
        ClienteError::NotFound { .. } => {
            ApiError::single(StatusCode::NOT_FOUND, localizer, MessageKey::ClienteNaoEncontrado)
        }
        ClienteError::Storage(storage) => {
            let trace_id = TraceId::current().map(|id| id.to_string());
            error!(error = %storage, trace_id = ?trace_id, "cliente storage failure");
            match storage {
                ClienteRepositoryError::Connection { .. } => ApiError::Unavailable,
                ClienteRepositoryError::Query { .. } => ApiError::Internal,
            }
        }
    }
}
