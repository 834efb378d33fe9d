use farepath_core::{Airport, Algorithm};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AirportResult {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<&Airport> for AirportResult {
    fn from(airport: &Airport) -> Self {
        Self {
            code: airport.code.clone(),
            name: airport.name.clone(),
            lat: airport.lat,
            lng: airport.lng,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct AirportListResponse {
    pub airports: Vec<AirportResult>,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct AirportSearchQuery {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

#[derive(Serialize, Deserialize)]
pub struct AirportSearchResponse {
    pub query: String,
    pub results: Vec<AirportResult>,
    pub count: usize,
}

/// Raw `/api/fare` parameters; presence and ranges are checked by the handler.
#[derive(Deserialize)]
pub struct FareParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub stopovers: Option<String>,
    pub algorithm: Option<Algorithm>,
}

#[derive(Serialize, Deserialize)]
pub struct SearchStats {
    pub states_expanded: usize,
    pub duration_ms: u64,
}

#[derive(Serialize, Deserialize)]
pub struct FareResponse {
    pub from: String,
    pub to: String,
    pub stopovers: u32,
    /// `null` when no route exists within the stopover bound
    pub fare: Option<f64>,
    pub reachable: bool,
    pub algorithm: Algorithm,
    pub search_stats: SearchStats,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_airports: usize,
    pub total_flights: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
