use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use crate::support::app_builder::create_test_app;
use crate::support::build_test_state;

#[actix_web::test]
async fn health_reports_db_and_migrations() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["migrations"]
        .as_str()
        .is_some_and(|m| m.starts_with("m2026")));
    assert!(body.get("db_error").is_none());
    Ok(())
}

#[actix_web::test]
async fn health_without_db_still_answers() -> Result<(), Box<dyn std::error::Error>> {
    let state = crossline_backend::infra::state::build_state().build().await?;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["db"], "error");
    assert!(body["db_error"].is_string());
    Ok(())
}
