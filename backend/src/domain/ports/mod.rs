//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports ([`ClienteRepository`]) expose strongly typed errors so
//! adapters map their failures into predictable variants. Driving ports
//! ([`ClienteCommand`], [`ClienteQuery`]) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod cliente_command;
mod cliente_query;
mod cliente_repository;

#[cfg(test)]
pub use cliente_command::MockClienteCommand;
pub use cliente_command::ClienteCommand;
#[cfg(test)]
pub use cliente_query::MockClienteQuery;
pub use cliente_query::ClienteQuery;
#[cfg(test)]
pub use cliente_repository::MockClienteRepository;
pub use cliente_repository::{ClienteRepository, ClienteRepositoryError};
