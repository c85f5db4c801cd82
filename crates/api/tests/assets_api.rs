//! HTTP-level integration tests for the asset endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete, get, post_json, post_json_as, post_raw, projection, put_json, seed_fleet,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_each_class_returns_200_and_projection() {
    let app = common::build_test_app().await;

    for (name, t, c) in [
        ("dove1", "satellite", "dove"),
        ("rapideye1", "satellite", "rapideye"),
        ("dish1", "antenna", "dish"),
        ("yagi1", "antenna", "yagi"),
    ] {
        let response = post_json(&app, "/assets/v1/", projection(name, t, c)).await;
        assert_eq!(response.status(), StatusCode::OK, "{name}");
        assert_eq!(body_json(response).await, projection(name, t, c));
    }
}

#[tokio::test]
async fn create_without_admin_header_returns_401_and_persists_nothing() {
    let app = common::build_test_app().await;

    let response =
        post_json_as(&app, "/assets/v1/", projection("yagi2", "antenna", "yagi"), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");

    let response = get(&app, "/assets/v1/yagi2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_as_non_admin_returns_401() {
    let app = common::build_test_app().await;

    let response = post_json_as(
        &app,
        "/assets/v1/",
        projection("yagi2", "antenna", "yagi"),
        Some("guest"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_header_value_is_case_insensitive() {
    let app = common::build_test_app().await;

    let response = post_json_as(
        &app,
        "/assets/v1",
        projection("dove1", "satellite", "dove"),
        Some("Admin"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unauthenticated_garbage_is_refused_before_parsing() {
    let app = common::build_test_app().await;

    let response = post_json_as(&app, "/assets/v1/", json!("not an object"), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_accepts_a_body_without_content_type() {
    let app = common::build_test_app().await;
    let body = projection("dove1", "satellite", "dove");

    let response = post_raw(&app, "/assets/v1/", body.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, body);

    let response = get(&app, "/assets/v1/dove1").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_body_returns_400_with_json_error() {
    let app = common::build_test_app().await;

    for body in [
        "{not json".to_string(),
        json!("not an object").to_string(),
        json!({"name": "dish1", "type": "antenna", "class": "dish", "details": [1]}).to_string(),
    ] {
        let response = post_raw(&app, "/assets/v1/", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    }

    let response = get(&app, "/assets/v1/").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_with_details_round_trips() {
    let app = common::build_test_app().await;
    let body = json!({
        "name": "dish1",
        "type": "antenna",
        "class": "dish",
        "details": {"diameter": 0.5, "radome": false}
    });

    let response = post_json(&app, "/assets/v1/", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/assets/v1/dish1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, body);
}

#[tokio::test]
async fn details_may_be_omitted() {
    let app = common::build_test_app().await;

    let response = post_json(
        &app,
        "/assets/v1/",
        json!({"name": "yagi1", "type": "antenna", "class": "yagi"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["details"], json!({}));
}

#[tokio::test]
async fn invalid_input_returns_400() {
    let app = common::build_test_app().await;

    for body in [
        json!({"name": "foo", "type": "satellite", "class": "dove"}),
        json!({"name": "foo!", "type": "satellite", "class": "dove"}),
        json!({"name": "_dove", "type": "satellite", "class": "dove"}),
        json!({"name": "name", "type": "foo", "class": "dove"}),
        json!({"name": "name", "type": 2, "class": "dove"}),
        json!({"name": "name", "type": "satellite", "class": "dish"}),
        json!({"name": "name", "type": "satellite", "class": 2}),
        json!({"name": "name", "type": "satellite", "class": "dove", "details": {"foo": "bar"}}),
        json!({"name": "name", "type": "antenna", "class": "dish", "details": {"gain": 0.5}}),
        json!({"name": "name", "type": "antenna", "class": "dish", "details": {"diameter": "foo"}}),
        json!({"name": "name", "type": "antenna", "class": "yagi", "details": {"gain": "foo"}}),
        json!({"type": "satellite", "class": "dove"}),
    ] {
        let response = post_json(&app, "/assets/v1/", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    let response = get(&app, "/assets/v1/").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn unknown_detail_and_kind_mismatch_report_differently() {
    let app = common::build_test_app().await;

    let unknown = post_json(
        &app,
        "/assets/v1/",
        json!({"name": "dish1", "type": "antenna", "class": "dish", "details": {"gain": 0.5}}),
    )
    .await;
    let unknown = body_json(unknown).await;

    let mismatch = post_json(
        &app,
        "/assets/v1/",
        json!({
            "name": "dish1",
            "type": "antenna",
            "class": "dish",
            "details": {"diameter": "foo"}
        }),
    )
    .await;
    let mismatch = body_json(mismatch).await;

    assert!(unknown["error"].as_str().unwrap().contains("Unknown detail"));
    assert!(unknown["error"].as_str().unwrap().contains("permitted: diameter, radome"));
    assert!(mismatch["error"].as_str().unwrap().contains("must be a float"));
}

#[tokio::test]
async fn duplicate_name_returns_409_and_keeps_the_original() {
    let app = common::build_test_app().await;

    let response = post_json(&app, "/assets/v1/", projection("alpha1", "satellite", "dove")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(&app, "/assets/v1/", projection("alpha1", "antenna", "dish")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let response = get(&app, "/assets/v1/").await;
    assert_eq!(
        body_json(response).await,
        json!([projection("alpha1", "satellite", "dove")])
    );
}

// ---------------------------------------------------------------------------
// Immutability
// ---------------------------------------------------------------------------

#[tokio::test]
async fn put_and_delete_are_not_allowed() {
    let app = common::build_test_app().await;
    post_json(&app, "/assets/v1/", projection("beta1", "satellite", "dove")).await;

    let response =
        put_json(&app, "/assets/v1/beta1", projection("beta2", "satellite", "dove")).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = delete(&app, "/assets/v1/beta1").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = get(&app, "/assets/v1/beta1").await;
    assert_eq!(
        body_json(response).await,
        projection("beta1", "satellite", "dove")
    );
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_single_and_404_for_missing() {
    let app = common::build_test_app().await;
    seed_fleet(&app).await;

    let response = get(&app, "/assets/v1/dove1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        projection("dove1", "satellite", "dove")
    );

    let response = get(&app, "/assets/v1/dove3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn list_all_is_sorted_by_name() {
    let app = common::build_test_app().await;
    for (name, t, c) in [
        ("dish1", "antenna", "dish"),
        ("dish2", "antenna", "dish"),
        ("dove1", "satellite", "dove"),
        ("yagi1", "antenna", "yagi"),
    ] {
        post_json(&app, "/assets/v1/", projection(name, t, c)).await;
    }

    let expected = json!([
        projection("dish1", "antenna", "dish"),
        projection("dish2", "antenna", "dish"),
        projection("dove1", "satellite", "dove"),
        projection("yagi1", "antenna", "yagi"),
    ]);

    let response = get(&app, "/assets/v1/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, expected);

    let response = get(&app, "/assets/v1").await;
    assert_eq!(body_json(response).await, expected);
}

async fn listed_names(app: &axum::Router, uri: &str) -> Vec<String> {
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK, "{uri}");
    body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn filter_by_type() {
    let app = common::build_test_app().await;
    seed_fleet(&app).await;

    assert_eq!(
        listed_names(&app, "/assets/v1/sat").await,
        ["dove1", "dove2", "rapideye1", "rapideye2"]
    );
    assert_eq!(
        listed_names(&app, "/assets/v1/ant/").await,
        ["dish1", "dish2", "yagi1", "yagi2"]
    );
    assert_eq!(
        listed_names(&app, "/assets/v1/ant").await,
        ["dish1", "dish2", "yagi1", "yagi2"]
    );
}

#[tokio::test]
async fn filter_by_class() {
    let app = common::build_test_app().await;
    seed_fleet(&app).await;

    assert_eq!(listed_names(&app, "/assets/v1/sat/dove").await, ["dove1", "dove2"]);
    assert_eq!(
        listed_names(&app, "/assets/v1/sat/rapideye").await,
        ["rapideye1", "rapideye2"]
    );
    assert_eq!(listed_names(&app, "/assets/v1/ant/dish").await, ["dish1", "dish2"]);
    assert_eq!(listed_names(&app, "/assets/v1/ant/yagi").await, ["yagi1", "yagi2"]);
}

#[tokio::test]
async fn filtered_listing_returns_full_projections() {
    let app = common::build_test_app().await;
    post_json(
        &app,
        "/assets/v1/",
        json!({"name": "yagi1", "type": "antenna", "class": "yagi", "details": {"gain": 3.5}}),
    )
    .await;

    let response = get(&app, "/assets/v1/ant/yagi").await;
    assert_eq!(
        body_json(response).await,
        json!([{"name": "yagi1", "type": "antenna", "class": "yagi", "details": {"gain": 3.5}}])
    );
}

#[tokio::test]
async fn class_path_under_wrong_type_is_not_a_lookup() {
    let app = common::build_test_app().await;
    seed_fleet(&app).await;

    let response = get(&app, "/assets/v1/sat/dish").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
