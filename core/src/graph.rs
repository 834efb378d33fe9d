use crate::dataset::FlightEdge;
use crate::price::Price;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use tracing::warn;

pub type Destinations = FxHashMap<String, Price>;

/// Directed route graph: airport code -> (reachable airport code -> price).
///
/// Every airport in the universe has an entry, isolated ones included, so
/// lookups for a known code never fail. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct FareGraph {
    adjacency: FxHashMap<String, Destinations>,
    edge_count: usize,
}

impl FareGraph {
    pub fn contains(&self, code: &str) -> bool {
        self.adjacency.contains_key(code)
    }

    pub fn destinations(&self, code: &str) -> Option<&Destinations> {
        self.adjacency.get(code)
    }

    /// Resolves a code to the graph's own key so callers can borrow it for the graph's lifetime.
    pub fn entry(&self, code: &str) -> Option<(&str, &Destinations)> {
        self.adjacency
            .get_key_value(code)
            .map(|(key, destinations)| (key.as_str(), destinations))
    }

    pub fn price(&self, departure: &str, arrival: &str) -> Option<Price> {
        self.adjacency
            .get(departure)
            .and_then(|destinations| destinations.get(arrival))
            .copied()
    }

    pub fn airport_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn airports(&self) -> impl Iterator<Item = (&String, &Destinations)> {
        self.adjacency.iter()
    }
}

/// Builds the route graph for one search.
///
/// When several edges share the same departure and arrival, the first one
/// seen keeps its price and later ones are ignored. Edges naming an airport
/// outside `airport_codes` are skipped.
pub fn build_graph<I, S>(airport_codes: I, edges: &[FlightEdge]) -> FareGraph
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut adjacency: FxHashMap<String, Destinations> = airport_codes
        .into_iter()
        .map(|code| (code.into(), Destinations::default()))
        .collect();

    let mut edge_count = 0;
    let mut skipped = 0;

    for edge in edges {
        if !adjacency.contains_key(&edge.arrival) {
            skipped += 1;
            continue;
        }

        let Some(destinations) = adjacency.get_mut(&edge.departure) else {
            skipped += 1;
            continue;
        };

        if let Entry::Vacant(slot) = destinations.entry(edge.arrival.clone()) {
            slot.insert(edge.price);
            edge_count += 1;
        }
    }

    if skipped > 0 {
        warn!(skipped, "ignored flights referencing unknown airports");
    }

    FareGraph {
        adjacency,
        edge_count,
    }
}
