mod common;

use axum::http::{header, StatusCode};
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_create_tenant_and_redirect() {
    let app = TestApp::new().await;

    let res = app.create_tenant(json!({"subdomain": "Acme-Co", "icon": "🏢"})).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        res.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "https://acme-co.example.com"
    );

    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["tenant"]["slug"], "acme-co");
    assert_eq!(body["tenant"]["name"], "Acme-Co");
    assert_eq!(body["tenant"]["icon"], "🏢");
    assert_eq!(body["redirect_to"], "https://acme-co.example.com");
    assert!(!body["tenant"]["id"].as_str().unwrap().is_empty());

    let by_slug = app.get("/api/v1/tenants/by-slug/acme-co", None).await;
    assert_eq!(by_slug.status(), StatusCode::OK);
    let stored = parse_body(by_slug).await;
    assert_eq!(stored["id"], body["tenant"]["id"]);
    assert_eq!(stored["name"], "Acme-Co");
}

#[tokio::test]
async fn test_duplicate_slug_is_conflict_and_store_unchanged() {
    let app = TestApp::new().await;

    let first = app.create_tenant(json!({"subdomain": "acme-co", "icon": "🏢", "name": "Acme"})).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.create_tenant(json!({"subdomain": "ACME-CO", "icon": "🚀"})).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = parse_body(second).await;
    assert_eq!(body["kind"], "slug_taken");
    assert_eq!(body["subdomain"], "ACME-CO");
    assert_eq!(body["icon"], "🚀");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tenants")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_validation_rejections_echo_raw_input() {
    let app = TestApp::new().await;

    let res = app.create_tenant(json!({"subdomain": "bad_name!", "icon": "🏢"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "invalid_subdomain");
    assert_eq!(body["subdomain"], "bad_name!");
    assert_eq!(body["icon"], "🏢");
    assert_eq!(
        body["error"],
        "Subdomain can only have lowercase letters, numbers, and hyphens. Please try again."
    );

    let res = app.create_tenant(json!({"subdomain": "acme", "icon": "not an emoji"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["kind"], "invalid_icon");

    let res = app.create_tenant(json!({"subdomain": "acme"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["kind"], "missing_field");
    assert_eq!(body["error"], "Subdomain and icon are required");

    let res = app.create_tenant(json!({"subdomain": null, "icon": "🏢"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["kind"], "missing_field");
    assert_eq!(body["subdomain"], "");
    assert_eq!(body["icon"], "🏢");

    let res = app.create_tenant(json!({"subdomain": "acme", "icon": null, "name": null})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["kind"], "missing_field");
    assert_eq!(body["subdomain"], "acme");

    // Nothing was written, not even the sanitized "badname".
    let missing = app.get("/api/v1/tenants/by-slug/badname", None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let listing = parse_body(app.get("/api/v1/tenants", None).await).await;
    assert!(listing.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_listing_and_deletion() {
    let app = TestApp::new().await;

    for (subdomain, icon) in [("acme", "🏢"), ("globex", "🌐"), ("initech", "🖨️")] {
        let res = app.create_tenant(json!({"subdomain": subdomain, "icon": icon})).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let listing = parse_body(app.get("/api/v1/tenants", None).await).await;
    assert_eq!(listing.as_array().unwrap().len(), 3);

    let res = app.delete("/api/v1/tenants/globex").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["success"], "Tenant deleted successfully");

    let listing = parse_body(app.get("/api/v1/tenants", None).await).await;
    let slugs: Vec<&str> = listing.as_array().unwrap().iter()
        .map(|t| t["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs.len(), 2);
    assert!(!slugs.contains(&"globex"));

    let gone = app.get("/api/v1/tenants/by-slug/globex", None).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let again = app.delete("/api/v1/tenants/globex").await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_body(again).await["kind"], "not_found");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let res = app.get("/health", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "ok");
}
