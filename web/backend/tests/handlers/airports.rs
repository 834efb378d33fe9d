use super::get_json;
use crate::fixtures::create_test_app;
use axum::http::StatusCode;
use farepath_web::models::{AirportListResponse, AirportSearchResponse};

#[tokio::test]
async fn test_list_airports() {
    let (status, list): (_, AirportListResponse) = get_json(create_test_app(), "/api/airports").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.count, 5);
    assert_eq!(list.airports[0].code, "JFK");
    assert_eq!(list.airports[0].name, "New York");
}

#[tokio::test]
async fn test_search_by_city_name() {
    let (status, search): (_, AirportSearchResponse) =
        get_json(create_test_app(), "/api/airports/search?q=par").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(search.count, 1);
    assert_eq!(search.results[0].code, "CDG");
}

#[tokio::test]
async fn test_search_by_code_is_case_insensitive() {
    let (_, search): (_, AirportSearchResponse) =
        get_json(create_test_app(), "/api/airports/search?q=nrt").await;

    assert_eq!(search.count, 1);
    assert_eq!(search.results[0].name, "Tokyo");
}

#[tokio::test]
async fn test_search_respects_limit() {
    // "o" matches New York, London, Tokyo and Oslo
    let (_, search): (_, AirportSearchResponse) =
        get_json(create_test_app(), "/api/airports/search?q=o&limit=2").await;

    assert_eq!(search.count, 2);
    assert_eq!(search.results.len(), 2);
}

#[tokio::test]
async fn test_blank_search_returns_nothing() {
    let (status, search): (_, AirportSearchResponse) =
        get_json(create_test_app(), "/api/airports/search?q=%20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(search.count, 0);
    assert!(search.results.is_empty());
}
