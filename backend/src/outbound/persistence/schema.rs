//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Customer records.
    cliente (id) {
        /// Primary key assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Customer name (max 150 characters).
        nome -> Varchar,
        /// Normalized CPF digits.
        cpf -> Varchar,
        /// Registration date, written once on insert.
        data_cadastro -> Date,
    }
}
