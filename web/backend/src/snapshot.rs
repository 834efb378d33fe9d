use crate::error::SnapshotError;
use async_trait::async_trait;
use farepath_core::{Airport, Dataset, FlightEdge, parse_dataset};
use moka::future::Cache;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tracing::info;

pub const AIRPORTS_CACHE_KEY: &str = "airport.all";
pub const FLIGHTS_CACHE_KEY: &str = "flight.all";

/// Where airport and flight snapshots come from.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn load_airports(&self) -> Result<Vec<Airport>, SnapshotError>;
    async fn load_flights(&self) -> Result<Vec<FlightEdge>, SnapshotError>;
}

/// Reads the dataset file written by `farepath-seed`.
pub struct JsonFileSource {
    dataset_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(dataset_path: PathBuf) -> Self {
        Self { dataset_path }
    }

    async fn read_dataset(&self) -> Result<Dataset, SnapshotError> {
        let file_contents = tokio::fs::read(&self.dataset_path).await?;
        Ok(parse_dataset(&file_contents)?)
    }
}

#[async_trait]
impl SnapshotSource for JsonFileSource {
    async fn load_airports(&self) -> Result<Vec<Airport>, SnapshotError> {
        Ok(self.read_dataset().await?.airports)
    }

    async fn load_flights(&self) -> Result<Vec<FlightEdge>, SnapshotError> {
        Ok(self.read_dataset().await?.flights)
    }
}

pub struct InMemorySource {
    dataset: Dataset,
}

impl InMemorySource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl SnapshotSource for InMemorySource {
    async fn load_airports(&self) -> Result<Vec<Airport>, SnapshotError> {
        Ok(self.dataset.airports.clone())
    }

    async fn load_flights(&self) -> Result<Vec<FlightEdge>, SnapshotError> {
        Ok(self.dataset.flights.clone())
    }
}

/// Read-through cache over a [`SnapshotSource`]. Entries expire after the
/// configured TTL; concurrent misses for the same key share a single load.
#[derive(Clone)]
pub struct SnapshotCache {
    source: Arc<dyn SnapshotSource>,
    airports: Cache<&'static str, Arc<Vec<Airport>>>,
    flights: Cache<&'static str, Arc<Vec<FlightEdge>>>,
}

impl SnapshotCache {
    pub fn new(source: Arc<dyn SnapshotSource>, ttl: Duration) -> Self {
        Self {
            source,
            airports: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
            flights: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
        }
    }

    pub async fn airports(&self) -> Result<Arc<Vec<Airport>>, Arc<SnapshotError>> {
        self.airports
            .try_get_with(AIRPORTS_CACHE_KEY, async {
                let airports = self.source.load_airports().await?;
                info!(count = airports.len(), "loaded airport snapshot");
                Ok::<_, SnapshotError>(Arc::new(airports))
            })
            .await
    }

    pub async fn flights(&self) -> Result<Arc<Vec<FlightEdge>>, Arc<SnapshotError>> {
        self.flights
            .try_get_with(FLIGHTS_CACHE_KEY, async {
                let flights = self.source.load_flights().await?;
                info!(count = flights.len(), "loaded flight snapshot");
                Ok::<_, SnapshotError>(Arc::new(flights))
            })
            .await
    }

    /// Drops both snapshots so the next read goes to the source.
    pub async fn invalidate(&self) {
        self.airports.invalidate(AIRPORTS_CACHE_KEY).await;
        self.flights.invalidate(FLIGHTS_CACHE_KEY).await;
    }
}
