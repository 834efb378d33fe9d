use crate::error::{FareError, Result};
use crate::price::Price;
use crate::string_normalization::normalize_code;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

impl Airport {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            lat: 0.0,
            lng: 0.0,
        }
    }
}

/// A directed, priced route between two airport codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightEdge {
    #[serde(rename = "code_departure")]
    pub departure: String,
    #[serde(rename = "code_arrival")]
    pub arrival: String,
    pub price: Price,
}

impl FlightEdge {
    pub fn new(departure: impl Into<String>, arrival: impl Into<String>, price: Price) -> Self {
        Self {
            departure: departure.into(),
            arrival: arrival.into(),
            price,
        }
    }
}

/// On-disk snapshot of the airport registry and the flight routes between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub airports: Vec<Airport>,
    pub flights: Vec<FlightEdge>,
}

impl Dataset {
    pub fn airport_codes(&self) -> FxHashSet<String> {
        self.airports.iter().map(|airport| airport.code.clone()).collect()
    }

    pub fn find_airport(&self, code: &str) -> Option<&Airport> {
        let normalized = normalize_code(code);
        self.airports.iter().find(|airport| airport.code == normalized)
    }
}

pub fn load_dataset(dataset_path: &Path) -> Result<Dataset> {
    let file_contents = fs::read(dataset_path)?;
    parse_dataset(&file_contents)
}

pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_slice(bytes)?;
    ensure_unique_codes(&dataset.airports)?;
    Ok(dataset)
}

pub fn save_dataset(dataset: &Dataset, dataset_path: &Path) -> Result<()> {
    if let Some(parent) = dataset_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let serialized = serde_json::to_vec_pretty(dataset)?;

    // Write to temp file first, then atomic rename
    let temp_path = dataset_path.with_extension("json.tmp");
    fs::write(&temp_path, serialized)?;
    fs::rename(&temp_path, dataset_path)?;
    Ok(())
}

fn ensure_unique_codes(airports: &[Airport]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for airport in airports {
        if !seen.insert(airport.code.as_str()) {
            return Err(FareError::InvalidDataset(format!(
                "duplicate airport code '{}'",
                airport.code
            )));
        }
    }
    Ok(())
}
