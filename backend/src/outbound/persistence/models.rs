//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::cliente;

/// Row struct for reading from the cliente table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cliente)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ClienteRow {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub data_cadastro: NaiveDate,
}

/// Insertable struct for creating new customer records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cliente)]
pub(crate) struct NewClienteRow<'a> {
    pub nome: &'a str,
    pub cpf: &'a str,
    pub data_cadastro: NaiveDate,
}

/// Changeset for updating existing customers; `data_cadastro` is never written.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cliente)]
pub(crate) struct ClienteUpdate<'a> {
    pub nome: &'a str,
    pub cpf: &'a str,
}
