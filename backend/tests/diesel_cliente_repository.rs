//! Integration tests for `DieselClienteRepository` against PostgreSQL.
//!
//! Runs only when `CLIENTES_TEST_DATABASE_URL` points at a disposable
//! database; the `cliente` table is truncated before use.

use chrono::NaiveDate;
use diesel_async::RunQueryDsl;

use clientes::domain::ports::ClienteRepository;
use clientes::domain::{ClienteCandidate, ClienteId, NewCliente};
use clientes::outbound::persistence::{DbPool, DieselClienteRepository, PoolConfig, run_migrations};

const DATABASE_URL_VAR: &str = "CLIENTES_TEST_DATABASE_URL";

fn database_url() -> Option<String> {
    match std::env::var(DATABASE_URL_VAR) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {DATABASE_URL_VAR} is not set");
            None
        }
    }
}

fn new_cliente(nome: &str, cpf: &str, data_cadastro: NaiveDate) -> NewCliente {
    ClienteCandidate::new(nome, cpf)
        .validate()
        .expect("valid customer")
        .register(data_cadastro)
}

async fn fresh_repository(url: &str) -> DieselClienteRepository {
    let migration_url = url.to_owned();
    tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .expect("migration task")
        .expect("migrations apply");

    let pool = DbPool::new(PoolConfig::new(url).with_max_size(2))
        .await
        .expect("pool builds");
    {
        let mut conn = pool.get().await.expect("connection");
        diesel::sql_query("TRUNCATE cliente RESTART IDENTITY")
            .execute(&mut conn)
            .await
            .expect("truncate cliente");
    }
    DieselClienteRepository::new(pool)
}

#[tokio::test]
async fn customer_lifecycle_round_trips_through_postgres() {
    let Some(url) = database_url() else {
        return;
    };
    let repo = fresh_repository(&url).await;
    let date = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");

    let first = repo
        .create(&new_cliente("Ramira", "52998224725", date))
        .await
        .expect("insert first");
    let second = repo
        .create(&new_cliente("Joana", "11144477735", date))
        .await
        .expect("insert second");
    assert!(second.id > first.id);
    assert_eq!(first.data_cadastro, date);

    let listed = repo.list().await.expect("list");
    assert_eq!(listed, vec![first.clone(), second.clone()]);

    let mut changed = first.clone();
    changed.apply(
        ClienteCandidate::new("Ramira Souza", "11144477735")
            .validate()
            .expect("valid"),
    );
    assert!(repo.update(&changed).await.expect("update"));
    assert_eq!(
        repo.find_by_id(first.id).await.expect("find"),
        Some(changed)
    );

    assert!(repo.delete(second.id).await.expect("delete"));
    assert!(!repo.delete(second.id).await.expect("second delete"));
    assert_eq!(repo.find_by_id(second.id).await.expect("find"), None);
    assert!(
        !repo
            .update(&second)
            .await
            .expect("update of missing row")
    );
    assert_eq!(
        repo.find_by_id(ClienteId::new(9999)).await.expect("find"),
        None
    );
}
