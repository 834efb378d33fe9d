use thiserror::Error;

#[derive(Debug, Error)]
pub enum FareError {
    #[error("airport '{0}' not found")]
    UnknownAirport(String),
    #[error("the {0} field is required")]
    MissingField(&'static str),
    #[error("stopovers must be between 0 and {max}, got {value}")]
    StopoversOutOfRange { value: i64, max: u32 },
    #[error("invalid price: {0}")]
    InvalidPrice(String),
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("cannot generate dataset: {0}")]
    Generator(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FareError {
    /// Errors caused by the caller's query rather than by the data or the environment.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::UnknownAirport(_) | Self::MissingField(_) | Self::StopoversOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FareError>;
