//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL through Diesel, with async support from `diesel-async` and
//! `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and the `table!`
//!   definitions (`schema.rs`) never leave this module.
//! - **Typed errors**: database failures map onto the port's error enum.
//!
//! # Example
//!
//! ```ignore
//! use clientes::outbound::persistence::{DbPool, DieselClienteRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/clientes")).await?;
//! let repo = DieselClienteRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_cliente_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_cliente_repository::DieselClienteRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
