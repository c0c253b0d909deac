//! End-to-end customer API behaviour over the in-memory store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use clientes::inbound::http::clientes::ClienteResponse;
use clientes::inbound::http::state::HttpState;
use clientes::test_support::{FixtureClock, in_memory_state, test_app};

#[fixture]
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

#[fixture]
fn state(today: NaiveDate) -> HttpState {
    in_memory_state(Arc::new(FixtureClock::on(today)))
}

#[rstest]
#[actix_web::test]
async fn create_then_get_returns_the_same_record(today: NaiveDate, state: HttpState) {
    let app = test::init_service(test_app(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/clientes")
            .set_json(json!({"nome": "Ramira", "cpf": "52998224725"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: ClienteResponse = test::read_body_json(res).await;
    assert_eq!(created.nome, "Ramira");
    assert_eq!(created.cpf, "52998224725");
    assert_eq!(created.data_cadastro, today);

    let fetched: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/clientes/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(
        fetched,
        json!({
            "id": created.id,
            "nome": "Ramira",
            "cpf": "52998224725",
            "dataCadastro": "19/10/2026",
        })
    );
}

#[rstest]
#[actix_web::test]
async fn invalid_create_lists_every_message_and_persists_nothing(state: HttpState) {
    let app = test::init_service(test_app(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/clientes")
            .set_json(json!({"nome": "", "cpf": "123"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"errors": ["O campo Nome é obrigatório.", "O campo CPF está inválido."]})
    );

    let listed: Vec<ClienteResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/clientes").to_request(),
    )
    .await;
    assert!(listed.is_empty());
}

#[rstest]
#[actix_web::test]
async fn unknown_id_is_not_found(state: HttpState) {
    let app = test::init_service(test_app(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/clientes/9999").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"errors": ["Cliente não encontrado"]}));
}

#[rstest]
#[actix_web::test]
async fn deleted_customer_is_gone(state: HttpState) {
    let app = test::init_service(test_app(state)).await;

    let created: ClienteResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/clientes")
            .set_json(json!({"nome": "Ramira", "cpf": "529.982.247-25"}))
            .to_request(),
    )
    .await;
    let uri = format!("/api/clientes/{}", created.id);

    let res = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn update_keeps_id_and_registration_date(today: NaiveDate, state: HttpState) {
    let app = test::init_service(test_app(state)).await;

    let created: ClienteResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/clientes")
            .set_json(json!({"nome": "Ramira", "cpf": "52998224725"}))
            .to_request(),
    )
    .await;
    let uri = format!("/api/clientes/{}", created.id);

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({
                "id": 4242,
                "nome": "Joana",
                "cpf": "11144477735",
                "dataCadastro": "01/01/2000",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let fetched: ClienteResponse =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.nome, "Joana");
    assert_eq!(fetched.cpf, "11144477735");
    assert_eq!(fetched.data_cadastro, today);
}

#[rstest]
#[actix_web::test]
async fn english_clients_receive_english_messages(state: HttpState) {
    let app = test::init_service(test_app(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/clientes/9999")
            .insert_header(("Accept-Language", "en-US,en;q=0.8,pt-BR;q=0.5"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"errors": ["Customer not found"]}));
}
