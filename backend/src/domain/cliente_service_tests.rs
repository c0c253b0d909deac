//! Tests for the customer service.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{ClienteRepositoryError, MockClienteRepository};
use crate::domain::{Cpf, Field, Nome, ViolationKind};

struct FixtureClock {
    now: DateTime<Local>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

#[fixture]
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

fn clock(date: NaiveDate) -> Arc<dyn Clock> {
    let now = Local
        .from_local_datetime(&date.and_hms_opt(12, 0, 0).expect("valid time"))
        .single()
        .expect("unambiguous local time");
    Arc::new(FixtureClock { now })
}

fn make_service(repo: MockClienteRepository, date: NaiveDate) -> ClienteService<MockClienteRepository> {
    ClienteService::new(Arc::new(repo), clock(date))
}

fn stored(id: i32, date: NaiveDate) -> Cliente {
    Cliente {
        id: ClienteId::new(id),
        nome: Nome::new("Ramira").expect("valid nome"),
        cpf: Cpf::parse("52998224725").expect("valid cpf"),
        data_cadastro: date,
    }
}

fn invalid_candidate() -> ClienteCandidate {
    ClienteCandidate::new("", "123")
}

#[rstest]
#[tokio::test]
async fn create_stamps_registration_date_from_clock(today: NaiveDate) {
    let mut repo = MockClienteRepository::new();
    repo.expect_create()
        .withf(move |new| new.data_cadastro == today && new.cpf.as_str() == "52998224725")
        .times(1)
        .return_once(move |new| {
            Ok(Cliente {
                id: ClienteId::new(1),
                nome: new.nome.clone(),
                cpf: new.cpf.clone(),
                data_cadastro: new.data_cadastro,
            })
        });

    let service = make_service(repo, today);
    let cliente = service
        .create(ClienteCandidate::new("Ramira", "529.982.247-25"))
        .await
        .expect("create succeeds");

    assert_eq!(cliente, stored(1, today));
}

#[rstest]
#[tokio::test]
async fn create_rejects_invalid_candidate_without_persisting(today: NaiveDate) {
    let mut repo = MockClienteRepository::new();
    repo.expect_create().never();

    let service = make_service(repo, today);
    let error = service
        .create(invalid_candidate())
        .await
        .expect_err("validation failure");

    let ClienteError::Validation(failure) = error else {
        panic!("expected validation failure, got {error:?}");
    };
    let kinds: Vec<_> = failure
        .violations()
        .iter()
        .map(|violation| (violation.field, violation.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (Field::Nome, ViolationKind::MissingField),
            (Field::Cpf, ViolationKind::InvalidFormat),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn create_surfaces_storage_errors(today: NaiveDate) {
    let mut repo = MockClienteRepository::new();
    repo.expect_create()
        .times(1)
        .return_once(|_| Err(ClienteRepositoryError::connection("refused")));

    let service = make_service(repo, today);
    let error = service
        .create(ClienteCandidate::new("Ramira", "52998224725"))
        .await
        .expect_err("storage failure");

    assert_eq!(
        error,
        ClienteError::Storage(ClienteRepositoryError::connection("refused"))
    );
}

#[rstest]
#[tokio::test]
async fn find_returns_not_found_for_absent_id(today: NaiveDate) {
    let mut repo = MockClienteRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let service = make_service(repo, today);
    let error = service
        .find(ClienteId::new(9999))
        .await
        .expect_err("not found");

    assert_eq!(error, ClienteError::not_found(ClienteId::new(9999)));
}

#[rstest]
#[tokio::test]
async fn list_returns_repository_records(today: NaiveDate) {
    let mut repo = MockClienteRepository::new();
    let records = vec![stored(1, today), stored(2, today)];
    let expected = records.clone();
    repo.expect_list().times(1).return_once(move || Ok(records));

    let service = make_service(repo, today);
    let listed = service.list().await.expect("list succeeds");

    assert_eq!(listed, expected);
}

#[rstest]
#[tokio::test]
async fn update_copies_fields_and_keeps_identity(today: NaiveDate) {
    let registered = NaiveDate::from_ymd_opt(2020, 5, 1).expect("valid date");
    let mut repo = MockClienteRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |id| Ok(Some(stored(id.value(), registered))));
    repo.expect_update()
        .withf(move |cliente| {
            cliente.id == ClienteId::new(3)
                && cliente.nome.as_str() == "Joana"
                && cliente.cpf.as_str() == "11144477735"
                && cliente.data_cadastro == registered
        })
        .times(1)
        .return_once(|_| Ok(true));

    let service = make_service(repo, today);
    service
        .update(
            ClienteId::new(3),
            ClienteCandidate::new("Joana", "111.444.777-35"),
        )
        .await
        .expect("update succeeds");
}

#[rstest]
#[tokio::test]
async fn update_reports_not_found_before_validation(today: NaiveDate) {
    let mut repo = MockClienteRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_update().never();

    let service = make_service(repo, today);
    let error = service
        .update(ClienteId::new(42), invalid_candidate())
        .await
        .expect_err("not found");

    assert_eq!(error, ClienteError::not_found(ClienteId::new(42)));
}

#[rstest]
#[tokio::test]
async fn update_rejects_invalid_candidate_for_existing_record(today: NaiveDate) {
    let mut repo = MockClienteRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |id| Ok(Some(stored(id.value(), today))));
    repo.expect_update().never();

    let service = make_service(repo, today);
    let error = service
        .update(ClienteId::new(1), invalid_candidate())
        .await
        .expect_err("validation failure");

    assert!(matches!(error, ClienteError::Validation(_)));
}

#[rstest]
#[tokio::test]
async fn update_reports_not_found_when_row_vanishes(today: NaiveDate) {
    let mut repo = MockClienteRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |id| Ok(Some(stored(id.value(), today))));
    repo.expect_update().times(1).return_once(|_| Ok(false));

    let service = make_service(repo, today);
    let error = service
        .update(ClienteId::new(1), ClienteCandidate::new("Joana", "11144477735"))
        .await
        .expect_err("not found");

    assert_eq!(error, ClienteError::not_found(ClienteId::new(1)));
}

#[rstest]
#[tokio::test]
async fn delete_removes_existing_record(today: NaiveDate) {
    let mut repo = MockClienteRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |id| Ok(Some(stored(id.value(), today))));
    repo.expect_delete()
        .withf(|id| *id == ClienteId::new(5))
        .times(1)
        .return_once(|_| Ok(true));

    let service = make_service(repo, today);
    service
        .delete(ClienteId::new(5))
        .await
        .expect("delete succeeds");
}

#[rstest]
#[tokio::test]
async fn delete_reports_not_found_for_absent_id(today: NaiveDate) {
    let mut repo = MockClienteRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_delete().never();

    let service = make_service(repo, today);
    let error = service
        .delete(ClienteId::new(5))
        .await
        .expect_err("not found");

    assert_eq!(error, ClienteError::not_found(ClienteId::new(5)));
}

#[rstest]
#[tokio::test]
async fn lookup_failures_surface_as_storage_errors(today: NaiveDate) {
    let mut repo = MockClienteRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(ClienteRepositoryError::query("syntax error")));

    let service = make_service(repo, today);
    let error = service
        .find(ClienteId::new(1))
        .await
        .expect_err("storage failure");

    assert!(matches!(error, ClienteError::Storage(ClienteRepositoryError::Query { .. })));
}
