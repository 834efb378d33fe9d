pub mod dataset;
pub mod error;
pub mod generator;
pub mod graph;
pub mod price;
pub mod query;
pub mod search;
pub mod search_config;
pub mod string_normalization;

// Re-export commonly used items
pub use dataset::{Airport, Dataset, FlightEdge, load_dataset, parse_dataset, save_dataset};
pub use error::{FareError, Result};
pub use generator::{GeneratorConfig, generate_dataset};
pub use graph::{Destinations, FareGraph, build_graph};
pub use price::Price;
pub use query::FareQuery;
pub use search::{FareSearch, cheapest_fare, find_cheapest_fare, layered_cheapest_fare, search_fare};
pub use search_config::{Algorithm, DEFAULT_MAX_STOPOVERS, SearchConfig};
