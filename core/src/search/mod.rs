pub mod bounded;
pub mod layered;
mod state;

pub use bounded::cheapest_fare;
pub use layered::layered_cheapest_fare;

use crate::dataset::FlightEdge;
use crate::error::{FareError, Result};
use crate::graph::{Destinations, FareGraph, build_graph};
use crate::price::Price;
use crate::search_config::Algorithm;

/// Outcome of one fare search. `fare` is `None` when the destination cannot
/// be reached within the stopover bound.
#[derive(Debug, Clone, PartialEq)]
pub struct FareSearch {
    pub fare: Option<Price>,
    pub states_expanded: usize,
    pub elapsed_secs: f64,
}

impl FareSearch {
    pub fn new(fare: Option<Price>, states_expanded: usize, elapsed_secs: f64) -> Self {
        Self {
            fare,
            states_expanded,
            elapsed_secs,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.fare.is_some()
    }

    pub fn duration_ms(&self) -> u64 {
        (self.elapsed_secs * 1000.0) as u64
    }
}

pub fn find_cheapest_fare(
    graph: &FareGraph,
    from: &str,
    to: &str,
    stopovers: usize,
    algorithm: Algorithm,
) -> Result<FareSearch> {
    match algorithm {
        Algorithm::Bounded => cheapest_fare(graph, from, to, stopovers),
        Algorithm::Layered => layered_cheapest_fare(graph, from, to, stopovers),
    }
}

/// Builds a graph from the given snapshots and searches it once.
pub fn search_fare<I, S>(
    airport_codes: I,
    flights: &[FlightEdge],
    from: &str,
    to: &str,
    stopovers: usize,
    algorithm: Algorithm,
) -> Result<FareSearch>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let graph = build_graph(airport_codes, flights);
    find_cheapest_fare(&graph, from, to, stopovers, algorithm)
}

fn resolve_endpoints<'g>(
    graph: &'g FareGraph,
    from: &str,
    to: &str,
) -> Result<(&'g str, &'g Destinations)> {
    let origin = graph
        .entry(from)
        .ok_or_else(|| FareError::UnknownAirport(from.to_string()))?;

    if !graph.contains(to) {
        return Err(FareError::UnknownAirport(to.to_string()));
    }

    Ok(origin)
}
