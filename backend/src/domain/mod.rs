//! Domain primitives, ports and services.
//!
//! Purpose: define the customer aggregate, its validation rules and the ports
//! through which adapters reach it. Types here are transport agnostic; HTTP
//! and persistence concerns live in the inbound and outbound adapters.
//!
//! Public surface:
//! - Cliente, NewCliente, ClienteDraft, ClienteCandidate: customer aggregate
//!   and its write-side shapes.
//! - Cpf, Nome, ClienteId: validated field types.
//! - ValidationFailure, Violation: structured constraint failures.
//! - ClienteError: failures of the driving ports.
//! - MessageCatalog, MessageKey, Locale: localised message lookup.
//! - ClienteService: implementation of the driving ports.

pub mod cliente;
mod cliente_service;
pub mod cpf;
pub mod error;
pub mod messages;
pub mod ports;
pub mod validation;

pub use self::cliente::{
    Cliente, ClienteCandidate, ClienteDraft, ClienteId, NOME_MAX, NewCliente, Nome,
};
pub use self::cliente_service::ClienteService;
pub use self::cpf::{CPF_LENGTH, Cpf, CpfValidationError};
pub use self::error::ClienteError;
pub use self::messages::{
    FALLBACK_LOCALE, Locale, MessageCatalog, MessageCatalogError, MessageKey,
};
pub use self::validation::{Field, ValidationFailure, Violation, ViolationKind};
