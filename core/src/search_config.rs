use serde::{Deserialize, Serialize};

/// Stopover limit enforced at the query boundary unless configured otherwise.
pub const DEFAULT_MAX_STOPOVERS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first relaxation over every walk within the hop bound
    #[default]
    Bounded,
    /// Bellman-Ford limited to `stopovers + 1` rounds
    Layered,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bounded => "bounded",
            Algorithm::Layered => "layered",
        }
    }
}

impl From<&str> for Algorithm {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "layered" | "bellman-ford" => Algorithm::Layered,
            _ => Algorithm::Bounded,
        }
    }
}

impl From<String> for Algorithm {
    fn from(value: String) -> Self {
        Algorithm::from(value.as_str())
    }
}

impl PartialEq<&str> for Algorithm {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Configuration for fare searches
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Largest stopover count a query may ask for
    pub max_stopovers: u32,
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, max_stopovers: u32) -> Self {
        Self {
            algorithm,
            max_stopovers,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            max_stopovers: DEFAULT_MAX_STOPOVERS,
        }
    }
}
