use super::get_json;
use crate::fixtures::create_test_app;
use axum::http::StatusCode;
use farepath_web::models::HealthResponse;

#[tokio::test]
async fn test_health_check() {
    let (status, health): (_, HealthResponse) = get_json(create_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(health.status, "ok");
}
