use crate::error::ConfigError;
use farepath_core::{Algorithm, DEFAULT_MAX_STOPOVERS};
use std::{path::PathBuf, time::Duration};

const DEFAULT_DATASET_PATH: &str = "../../data/dataset.json";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SNAPSHOT_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub bind_addr: String,
    /// How long airport and flight snapshots stay cached
    pub snapshot_ttl: Duration,
    pub max_stopovers: u32,
    /// Used when a fare request does not name an algorithm
    pub default_algorithm: Algorithm,
}

impl Config {
    /// Reads settings from the environment, loading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dataset_path = lookup("DATASET_PATH").unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let default_algorithm = lookup("SEARCH_ALGORITHM").map(Algorithm::from).unwrap_or_default();
        let snapshot_ttl_secs = parse_number(&lookup, "SNAPSHOT_TTL_SECS", DEFAULT_SNAPSHOT_TTL_SECS)?;
        let max_stopovers = parse_number(&lookup, "MAX_STOPOVERS", u64::from(DEFAULT_MAX_STOPOVERS))?;

        let max_stopovers = u32::try_from(max_stopovers).map_err(|_| ConfigError::InvalidNumber {
            key: "MAX_STOPOVERS",
            value: max_stopovers.to_string(),
        })?;

        Ok(Self {
            dataset_path: PathBuf::from(dataset_path),
            bind_addr,
            snapshot_ttl: Duration::from_secs(snapshot_ttl_secs),
            max_stopovers,
            default_algorithm,
        })
    }
}

fn parse_number<F>(lookup: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::InvalidNumber { key, value: raw }),
        },
        None => Ok(default),
    }
}
