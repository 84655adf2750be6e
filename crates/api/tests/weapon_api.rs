//! Integration tests for the `/api/v1/weapons` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_employee(app: &axum::Router, name: &str) -> i64 {
    let response = post_json(app.clone(), "/api/v1/employees", json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

fn weapon_payload(employee_id: i64, nom_arme: &str) -> serde_json::Value {
    json!({
        "horodateur": "2023-05-17T12:30:00Z",
        "employe_id": employee_id,
        "detenteur": "Jean Dupont",
        "nom_arme": nom_arme,
        "serigraphie": "JD-001",
        "prix": 1250
    })
}

// ---------------------------------------------------------------------------
// Test: create / get round-trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_get_roundtrip(pool: PgPool) {
    let app = common::build_test_app(pool);
    let employee_id = create_employee(&app, "Alice").await;

    let response = post_json(
        app.clone(),
        "/api/v1/weapons",
        weapon_payload(employee_id, "Revolver Cattleman"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["nom_arme"], "Revolver Cattleman");
    assert_eq!(created["prix"], 1250);

    let id = created["id"].as_i64().unwrap();
    let response = get(app.clone(), &format!("/api/v1/weapons/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_dangling_employee_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/weapons", weapon_payload(31337, "X")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: update and delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_all_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = create_employee(&app, "Alice").await;
    let bob = create_employee(&app, "Bob").await;

    let response = post_json(app.clone(), "/api/v1/weapons", weapon_payload(alice, "Carabine")).await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/weapons/{id}"),
        json!({
            "horodateur": "2024-01-02T08:00:00Z",
            "employe_id": bob,
            "detenteur": "Marie Curie",
            "nom_arme": "Carabine Varmint",
            "serigraphie": "MC-007",
            "prix": 9900
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["employe_id"], bob);
    assert_eq!(updated["detenteur"], "Marie Curie");
    assert_eq!(updated["prix"], 9900);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let employee_id = create_employee(&app, "Alice").await;

    let response = put_json(
        app.clone(),
        "/api/v1/weapons/5555",
        weapon_payload(employee_id, "Rien"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_returns_removed_row(pool: PgPool) {
    let app = common::build_test_app(pool);
    let employee_id = create_employee(&app, "Alice").await;

    let response = post_json(app.clone(), "/api/v1/weapons", weapon_payload(employee_id, "Hachette")).await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/weapons/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let deleted = body_json(response).await;
    assert_eq!(deleted["nom_arme"], "Hachette");

    let response = get(app.clone(), &format!("/api/v1/weapons/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: list pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_respects_limit_and_offset(pool: PgPool) {
    let app = common::build_test_app(pool);
    let employee_id = create_employee(&app, "Alice").await;

    for nom in ["W1", "W2", "W3", "W4"] {
        let response =
            post_json(app.clone(), "/api/v1/weapons", weapon_payload(employee_id, nom)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.clone(), "/api/v1/weapons?limit=2&offset=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    let page = page.as_array().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0]["nom_arme"], "W2");
    assert_eq!(page[1]["nom_arme"], "W3");
}
