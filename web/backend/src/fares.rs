use crate::error::ApiError;
use crate::models::{FareParams, FareResponse, SearchStats};
use crate::state::AppState;
use farepath_core::{Airport, Algorithm, FareError, FareQuery, FareSearch, build_graph, find_cheapest_fare};
use rustc_hash::FxHashSet;
use tracing::debug;

pub async fn find_fare_between_airports(state: &AppState, params: FareParams) -> Result<FareResponse, ApiError> {
    let airports = state.snapshots.airports().await?;
    let algorithm = params.algorithm.unwrap_or(state.search_config.algorithm);
    let query = validate_params(&params, &airports, state.search_config.max_stopovers)?;

    let flights = state.snapshots.flights().await?;
    let graph = build_graph(airports.iter().map(|airport| airport.code.as_str()), &flights);

    let search = find_cheapest_fare(&graph, &query.from, &query.to, query.stopovers as usize, algorithm)?;
    debug!(
        from = %query.from,
        to = %query.to,
        stopovers = query.stopovers,
        reachable = search.is_reachable(),
        "fare search served"
    );

    Ok(build_fare_response(query, algorithm, &search))
}

pub fn validate_params(params: &FareParams, airports: &[Airport], max_stopovers: u32) -> Result<FareQuery, ApiError> {
    let from = params.from.as_deref().ok_or(FareError::MissingField("from"))?;
    let to = params.to.as_deref().ok_or(FareError::MissingField("to"))?;
    let stopovers = parse_stopovers(params.stopovers.as_deref())?;

    let known_codes: FxHashSet<String> = airports.iter().map(|airport| airport.code.clone()).collect();
    Ok(FareQuery::validate(from, to, stopovers, &known_codes, max_stopovers)?)
}

fn parse_stopovers(raw: Option<&str>) -> Result<i64, ApiError> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty());
    let raw = raw.ok_or(FareError::MissingField("stopovers"))?;

    raw.parse()
        .map_err(|_| ApiError::InvalidParameter(format!("stopovers must be an integer, got '{}'", raw)))
}

pub fn build_fare_response(query: FareQuery, algorithm: Algorithm, search: &FareSearch) -> FareResponse {
    FareResponse {
        from: query.from,
        to: query.to,
        stopovers: query.stopovers,
        fare: search.fare.map(f64::from),
        reachable: search.is_reachable(),
        algorithm,
        search_stats: SearchStats {
            states_expanded: search.states_expanded,
            duration_ms: search.duration_ms(),
        },
    }
}
