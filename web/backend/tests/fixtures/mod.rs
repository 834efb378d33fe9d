use async_trait::async_trait;
use axum::Router;
use farepath_core::{Airport, Algorithm, Dataset, FlightEdge, Price, SearchConfig};
use farepath_web::{
    build_router,
    error::SnapshotError,
    snapshot::{InMemorySource, SnapshotSource},
    state::AppState,
};
use std::sync::Arc;
use std::time::Duration;

pub const TEST_TTL: Duration = Duration::from_secs(60);

fn airport(code: &str, name: &str) -> Airport {
    Airport::new(code, name)
}

fn flight(departure: &str, arrival: &str, cents: u64) -> FlightEdge {
    FlightEdge::new(departure, arrival, Price::from_cents(cents))
}

/// JFK -> LHR -> CDG costs 30.00 with one stopover, the direct JFK -> CDG 50.00.
/// OSL has no flights at all.
pub fn create_test_dataset() -> Dataset {
    Dataset {
        airports: vec![
            airport("JFK", "New York"),
            airport("LHR", "London"),
            airport("CDG", "Paris"),
            airport("NRT", "Tokyo"),
            airport("OSL", "Oslo"),
        ],
        flights: vec![
            flight("JFK", "LHR", 1000),
            flight("LHR", "CDG", 2000),
            flight("JFK", "CDG", 5000),
            flight("CDG", "NRT", 1250),
        ],
    }
}

pub fn create_test_state() -> Arc<AppState> {
    let source = Arc::new(InMemorySource::new(create_test_dataset()));
    Arc::new(AppState::with_source(
        source,
        TEST_TTL,
        SearchConfig::new(Algorithm::Bounded, 2),
    ))
}

pub fn create_test_app() -> Router {
    build_router(create_test_state())
}

/// A source whose dataset cannot be read.
pub struct BrokenSource;

#[async_trait]
impl SnapshotSource for BrokenSource {
    async fn load_airports(&self) -> Result<Vec<Airport>, SnapshotError> {
        Err(SnapshotError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "dataset missing",
        )))
    }

    async fn load_flights(&self) -> Result<Vec<FlightEdge>, SnapshotError> {
        Err(SnapshotError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "dataset missing",
        )))
    }
}

pub fn create_broken_app() -> Router {
    let state = AppState::with_source(Arc::new(BrokenSource), TEST_TTL, SearchConfig::default());
    build_router(Arc::new(state))
}
