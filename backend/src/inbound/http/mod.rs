//! HTTP inbound adapter exposing REST endpoints.

pub mod clientes;
pub mod error;
pub mod health;
pub mod locale;
pub mod state;

pub use error::ApiResult;
