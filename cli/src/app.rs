use farepath_core::{Dataset, load_dataset};
use std::{error::Error, path::PathBuf};
use tracing::debug;

const DATA_DIR_NAME: &str = "farepath";
const DATASET_FILE_NAME: &str = "dataset.json";

pub struct FarePathApp {
    pub dataset_path: PathBuf,
}

impl FarePathApp {
    pub fn new(data_path: Option<String>) -> Result<Self, Box<dyn Error>> {
        let dataset_path = match data_path {
            Some(path) => PathBuf::from(path),
            None => default_dataset_path()?,
        };

        if !dataset_path.exists() {
            return Err(format!(
                "Dataset not found: {:?}. Generate one with farepath-seed or pass --data",
                dataset_path
            )
            .into());
        }

        Ok(Self { dataset_path })
    }

    pub fn load_data(&self) -> Result<Dataset, Box<dyn Error>> {
        let dataset = load_dataset(&self.dataset_path)?;
        debug!(
            path = %self.dataset_path.display(),
            airports = dataset.airports.len(),
            flights = dataset.flights.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}

/// `<platform data dir>/farepath/dataset.json`
pub fn default_dataset_path() -> Result<PathBuf, Box<dyn Error>> {
    let data_dir = dirs::data_dir().ok_or("Could not determine the platform data directory")?;
    Ok(data_dir.join(DATA_DIR_NAME).join(DATASET_FILE_NAME))
}
