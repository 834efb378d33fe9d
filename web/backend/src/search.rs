use crate::models::AirportResult;
use farepath_core::{Airport, string_normalization::clean_str};

pub fn search_airports_in_snapshot(
    airports: &[Airport],
    query: &str,
    limit: usize,
) -> (Vec<AirportResult>, usize) {
    if query.trim().is_empty() {
        return (vec![], 0);
    }

    let mut results = filter_airports_by_query(query, airports);
    results = sort_results_by_relevance(results, query);
    results.truncate(limit);
    let count = results.len();

    (results, count)
}

/// Matches on the airport code or on the normalized city name.
pub fn filter_airports_by_query(query: &str, airports: &[Airport]) -> Vec<AirportResult> {
    let normalized_query = clean_str(query);

    airports
        .iter()
        .filter(|airport| {
            airport.code.to_lowercase().contains(&normalized_query)
                || clean_str(&airport.name).contains(&normalized_query)
        })
        .map(AirportResult::from)
        .collect()
}

pub fn sort_results_by_relevance(mut results: Vec<AirportResult>, query: &str) -> Vec<AirportResult> {
    let normalized_query = clean_str(query);
    let starts_with_query = |airport: &AirportResult| {
        airport.code.to_lowercase().starts_with(&normalized_query)
            || clean_str(&airport.name).starts_with(&normalized_query)
    };

    results.sort_by(|a, b| {
        let a_starts = starts_with_query(a);
        let b_starts = starts_with_query(b);

        match (a_starts, b_starts) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.len().cmp(&b.name.len()).then_with(|| a.code.cmp(&b.code)),
        }
    });

    results
}
