use super::get_json;
use crate::fixtures::{create_broken_app, create_test_app};
use axum::http::StatusCode;
use farepath_core::Algorithm;
use farepath_web::models::{ErrorResponse, FareResponse};

#[tokio::test]
async fn test_fare_with_one_stopover() {
    let (status, fare): (_, FareResponse) =
        get_json(create_test_app(), "/api/fare?from=JFK&to=CDG&stopovers=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fare.from, "JFK");
    assert_eq!(fare.to, "CDG");
    assert_eq!(fare.stopovers, 1);
    assert_eq!(fare.fare, Some(30.0));
    assert!(fare.reachable);
    assert_eq!(fare.algorithm, Algorithm::Bounded);
}

#[tokio::test]
async fn test_direct_fare_without_stopovers() {
    let (_, fare): (_, FareResponse) =
        get_json(create_test_app(), "/api/fare?from=JFK&to=CDG&stopovers=0").await;

    assert_eq!(fare.fare, Some(50.0));
}

#[tokio::test]
async fn test_codes_are_normalized() {
    let (status, fare): (_, FareResponse) =
        get_json(create_test_app(), "/api/fare?from=%20jfk&to=cdg%20&stopovers=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fare.from, "JFK");
    assert_eq!(fare.to, "CDG");
}

#[tokio::test]
async fn test_unreachable_fare_is_null() {
    let (status, fare): (_, FareResponse) =
        get_json(create_test_app(), "/api/fare?from=JFK&to=OSL&stopovers=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fare.fare, None);
    assert!(!fare.reachable);
}

#[tokio::test]
async fn test_stopover_bound_limits_reach() {
    // JFK -> CDG -> NRT needs one stopover
    let (_, direct): (_, FareResponse) =
        get_json(create_test_app(), "/api/fare?from=JFK&to=NRT&stopovers=0").await;
    let (_, two_stops): (_, FareResponse) =
        get_json(create_test_app(), "/api/fare?from=JFK&to=NRT&stopovers=2").await;

    assert_eq!(direct.fare, None);
    assert_eq!(two_stops.fare, Some(42.5));
}

#[tokio::test]
async fn test_layered_algorithm_agrees() {
    let (status, fare): (_, FareResponse) = get_json(
        create_test_app(),
        "/api/fare?from=JFK&to=NRT&stopovers=2&algorithm=layered",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fare.algorithm, Algorithm::Layered);
    assert_eq!(fare.fare, Some(42.5));
}

#[tokio::test]
async fn test_unknown_airport_is_rejected() {
    let (status, error): (_, ErrorResponse) =
        get_json(create_test_app(), "/api/fare?from=JFK&to=XXX&stopovers=1").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error.error, "invalid_argument");
    assert!(error.message.contains("XXX"));
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let (status, error): (_, ErrorResponse) =
        get_json(create_test_app(), "/api/fare?from=JFK&stopovers=1").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error.message.contains("to"));
}

#[tokio::test]
async fn test_missing_stopovers_is_rejected() {
    let (status, _): (_, ErrorResponse) =
        get_json(create_test_app(), "/api/fare?from=JFK&to=CDG").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_stopovers_out_of_range() {
    let app = create_test_app();
    let (negative, _): (_, ErrorResponse) =
        get_json(app.clone(), "/api/fare?from=JFK&to=CDG&stopovers=-1").await;
    let (too_many, _): (_, ErrorResponse) =
        get_json(app, "/api/fare?from=JFK&to=CDG&stopovers=3").await;

    assert_eq!(negative, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(too_many, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_non_integer_stopovers() {
    let (status, error): (_, ErrorResponse) =
        get_json(create_test_app(), "/api/fare?from=JFK&to=CDG&stopovers=one").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error.message.contains("stopovers"));
}

#[tokio::test]
async fn test_fare_unavailable_without_dataset() {
    let (status, error): (_, ErrorResponse) =
        get_json(create_broken_app(), "/api/fare?from=JFK&to=CDG&stopovers=1").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error.error, "snapshot_unavailable");
}
