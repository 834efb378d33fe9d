use super::get_json;
use crate::fixtures::{create_broken_app, create_test_app};
use axum::http::StatusCode;
use farepath_web::models::{ErrorResponse, StatsResponse};

#[tokio::test]
async fn test_stats_counts_snapshot() {
    let (status, stats): (_, StatsResponse) = get_json(create_test_app(), "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats.total_airports, 5);
    assert_eq!(stats.total_flights, 4);
}

#[tokio::test]
async fn test_stats_unavailable_without_dataset() {
    let (status, error): (_, ErrorResponse) = get_json(create_broken_app(), "/api/stats").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error.error, "snapshot_unavailable");
}
