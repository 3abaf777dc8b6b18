//! HTTP-level tests for the invoice resource.

use axum_test::TestServer;
use biztrack::{app, ensure_tables, AppState};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn make_server(pool: PgPool) -> TestServer {
    ensure_tables(&pool).await.unwrap();
    TestServer::new(app(AppState { pool })).unwrap()
}

async fn seed(pool: &PgPool) -> i32 {
    sqlx::query(
        "INSERT INTO companies (code, name, description) \
         VALUES ('apple', 'Apple Computer', 'Maker of OSX.')",
    )
    .execute(pool)
    .await
    .unwrap();
    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO invoices (comp_code, amt, paid, add_date, paid_date) \
         VALUES ('apple', 100, false, '2018-01-01', NULL) RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

#[sqlx::test]
async fn lists_invoices(pool: PgPool) {
    let invoice_id = seed(&pool).await;
    let server = make_server(pool).await;

    let response = server.get("/invoices").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "invoices": [{ "id": invoice_id, "comp_code": "apple" }] })
    );
}

#[sqlx::test]
async fn gets_a_single_invoice_with_nested_company(pool: PgPool) {
    let invoice_id = seed(&pool).await;
    let server = make_server(pool).await;

    let response = server.get(&format!("/invoices/{}", invoice_id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "invoice": {
                "id": invoice_id,
                "amt": 100.0,
                "paid": false,
                "add_date": "2018-01-01",
                "paid_date": null,
                "company": {
                    "code": "apple",
                    "name": "Apple Computer",
                    "description": "Maker of OSX."
                }
            }
        })
    );
    // comp_code is replaced by the nested company, not duplicated
    assert!(body["invoice"].get("comp_code").is_none());
}

#[sqlx::test]
async fn responds_404_for_missing_invoice(pool: PgPool) {
    seed(&pool).await;
    let server = make_server(pool).await;

    let response = server.get("/invoices/0").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "No such invoice: 0");
}

#[sqlx::test]
async fn creates_an_invoice_with_column_defaults(pool: PgPool) {
    seed(&pool).await;
    let server = make_server(pool).await;

    let response = server
        .post("/invoices")
        .json(&json!({ "comp_code": "apple", "amt": 100 }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["invoice"]["comp_code"], "apple");
    assert_eq!(body["invoice"]["amt"], 100.0);
    assert_eq!(body["invoice"]["paid"], false);
    assert_eq!(body["invoice"]["paid_date"], Value::Null);
    assert!(body["invoice"]["id"].is_number());
    assert!(body["invoice"]["add_date"].is_string());
}

#[sqlx::test]
async fn create_with_unknown_company_surfaces_as_server_error(pool: PgPool) {
    let server = make_server(pool).await;

    let response = server
        .post("/invoices")
        .json(&json!({ "comp_code": "nope", "amt": 50 }))
        .await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"]["status"], 500);
}

#[sqlx::test]
async fn update_changes_only_the_amount(pool: PgPool) {
    let invoice_id = seed(&pool).await;
    let server = make_server(pool).await;

    let response = server
        .put(&format!("/invoices/{}", invoice_id))
        .json(&json!({ "amt": 200 }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "invoice": {
                "id": invoice_id,
                "comp_code": "apple",
                "amt": 200.0,
                "paid": false,
                "add_date": "2018-01-01",
                "paid_date": null
            }
        })
    );
}

#[sqlx::test]
async fn update_ignores_fields_other_than_amount(pool: PgPool) {
    let invoice_id = seed(&pool).await;
    let server = make_server(pool).await;

    let response = server
        .put(&format!("/invoices/{}", invoice_id))
        .json(&json!({ "amt": 200, "paid": true, "paid_date": "2020-06-01" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["invoice"]["amt"], 200.0);
    assert_eq!(body["invoice"]["paid"], false);
    assert_eq!(body["invoice"]["add_date"], "2018-01-01");
    assert_eq!(body["invoice"]["paid_date"], Value::Null);
}

#[sqlx::test]
async fn update_responds_404_for_missing_invoice(pool: PgPool) {
    seed(&pool).await;
    let server = make_server(pool).await;

    let response = server.put("/invoices/0").json(&json!({ "amt": 200 })).await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn deletes_an_invoice(pool: PgPool) {
    let invoice_id = seed(&pool).await;
    let server = make_server(pool).await;

    let response = server.delete(&format!("/invoices/{}", invoice_id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "status": "deleted" }));

    server
        .get(&format!("/invoices/{}", invoice_id))
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn delete_responds_404_for_missing_invoice(pool: PgPool) {
    let server = make_server(pool).await;

    let response = server.delete("/invoices/0").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}
