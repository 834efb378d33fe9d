use crate::error::ApiError;
use crate::fares::find_fare_between_airports;
use crate::models::{
    AirportListResponse, AirportResult, AirportSearchQuery, AirportSearchResponse, FareParams,
    FareResponse, HealthResponse, StatsResponse,
};
use crate::search::search_airports_in_snapshot;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Farepath API is running".to_string(),
    })
}

pub async fn list_airports(State(state): State<Arc<AppState>>) -> Result<Json<AirportListResponse>, ApiError> {
    let airports = state.snapshots.airports().await?;
    let airports: Vec<AirportResult> = airports.iter().map(AirportResult::from).collect();
    let count = airports.len();

    Ok(Json(AirportListResponse { airports, count }))
}

pub async fn search_airports(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AirportSearchQuery>,
) -> Result<Json<AirportSearchResponse>, ApiError> {
    let airports = state.snapshots.airports().await?;
    let query = params.q.trim();
    let (results, count) = search_airports_in_snapshot(&airports, query, params.limit);

    Ok(Json(AirportSearchResponse {
        query: query.to_string(),
        results,
        count,
    }))
}

pub async fn find_fare(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FareParams>,
) -> Result<Json<FareResponse>, ApiError> {
    let response = find_fare_between_airports(&state, params).await?;
    Ok(Json(response))
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<StatsResponse>, ApiError> {
    let airports = state.snapshots.airports().await?;
    let flights = state.snapshots.flights().await?;

    Ok(Json(StatsResponse {
        total_airports: airports.len(),
        total_flights: flights.len(),
    }))
}
