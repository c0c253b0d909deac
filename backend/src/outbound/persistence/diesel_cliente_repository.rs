//! PostgreSQL-backed `ClienteRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ClienteRepository, ClienteRepositoryError};
use crate::domain::{Cliente, ClienteId, Cpf, NewCliente, Nome};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ClienteRow, ClienteUpdate, NewClienteRow};
use super::pool::{DbPool, PoolError};
use super::schema::cliente;

/// Diesel-backed implementation of the `ClienteRepository` port.
#[derive(Clone)]
pub struct DieselClienteRepository {
    pool: DbPool,
}

impl DieselClienteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ClienteRepositoryError {
    map_basic_pool_error(error, ClienteRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ClienteRepositoryError {
    map_basic_diesel_error(
        error,
        ClienteRepositoryError::query,
        ClienteRepositoryError::connection,
    )
}

/// Convert a row into the domain aggregate, rejecting rows written outside
/// this service that break field invariants.
fn row_to_cliente(row: ClienteRow) -> Result<Cliente, ClienteRepositoryError> {
    let id = row.id;
    let nome = Nome::new(row.nome).map_err(|_| {
        warn!(cliente_id = id, "stored cliente has an invalid nome");
        ClienteRepositoryError::query(format!("stored cliente {id} has an invalid nome"))
    })?;
    let cpf = Cpf::parse(&row.cpf).map_err(|_| {
        warn!(cliente_id = id, "stored cliente has an invalid cpf");
        ClienteRepositoryError::query(format!("stored cliente {id} has an invalid cpf"))
    })?;
    Ok(Cliente {
        id: ClienteId::new(id),
        nome,
        cpf,
        data_cadastro: row.data_cadastro,
    })
}

#[async_trait]
impl ClienteRepository for DieselClienteRepository {
    async fn create(&self, new: &NewCliente) -> Result<Cliente, ClienteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewClienteRow {
            nome: new.nome.as_str(),
            cpf: new.cpf.as_str(),
            data_cadastro: new.data_cadastro,
        };

        let inserted: ClienteRow = diesel::insert_into(cliente::table)
            .values(&row)
            .returning(ClienteRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_cliente(inserted)
    }

    async fn list(&self) -> Result<Vec<Cliente>, ClienteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ClienteRow> = cliente::table
            .order(cliente::id.asc())
            .select(ClienteRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_cliente).collect()
    }

    async fn find_by_id(&self, id: ClienteId) -> Result<Option<Cliente>, ClienteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ClienteRow> = cliente::table
            .filter(cliente::id.eq(id.value()))
            .select(ClienteRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_cliente).transpose()
    }

    async fn update(&self, record: &Cliente) -> Result<bool, ClienteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = ClienteUpdate {
            nome: record.nome.as_str(),
            cpf: record.cpf.as_str(),
        };

        let affected = diesel::update(cliente::table.filter(cliente::id.eq(record.id.value())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: ClienteId) -> Result<bool, ClienteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(cliente::table.filter(cliente::id.eq(id.value())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn row(nome: &str, cpf: &str) -> ClienteRow {
        ClienteRow {
            id: 4,
            nome: nome.to_owned(),
            cpf: cpf.to_owned(),
            data_cadastro: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
        }
    }

    #[rstest]
    fn rows_convert_to_domain() {
        let cliente = row_to_cliente(row("Ramira", "52998224725")).expect("valid row");
        assert_eq!(cliente.id, ClienteId::new(4));
        assert_eq!(cliente.nome.as_str(), "Ramira");
        assert_eq!(cliente.cpf.as_str(), "52998224725");
    }

    #[rstest]
    #[case(row("", "52998224725"))]
    #[case(row("Ramira", "00000000000"))]
    fn corrupt_rows_become_query_errors(#[case] row: ClienteRow) {
        let err = row_to_cliente(row).expect_err("corrupt row");
        assert!(matches!(err, ClienteRepositoryError::Query { .. }));
    }
}
