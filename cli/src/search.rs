use farepath_core::{FareError, FareQuery, Price, Result, build_graph, find_cheapest_fare};
use farepath_core::Dataset;

use crate::args::Args;

pub struct SearchRequest {
    pub query: FareQuery,
    pub from_name: String,
    pub to_name: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub fare: Option<Price>,
    pub states_expanded: usize,
    pub search_duration: f64,
    pub from_code: String,
    pub to_code: String,
    pub stopovers: u32,
    pub display_options: Args,
}

pub fn create_search_request(args: Args, dataset: &Dataset) -> Result<SearchRequest> {
    let query = FareQuery::validate(
        &args.from,
        &args.to,
        args.stopovers,
        &dataset.airport_codes(),
        args.max_stopovers,
    )?;

    let from_name = airport_name(dataset, &query.from)?;
    let to_name = airport_name(dataset, &query.to)?;

    Ok(SearchRequest {
        query,
        from_name,
        to_name,
        search_args: args,
    })
}

pub fn execute_fare_search(request: SearchRequest, dataset: &Dataset) -> Result<SearchResult> {
    let graph = build_graph(dataset.airport_codes(), &dataset.flights);

    let search = find_cheapest_fare(
        &graph,
        &request.query.from,
        &request.query.to,
        request.query.stopovers as usize,
        request.search_args.algorithm,
    )?;

    Ok(SearchResult {
        fare: search.fare,
        states_expanded: search.states_expanded,
        search_duration: search.elapsed_secs,
        from_code: request.query.from,
        to_code: request.query.to,
        stopovers: request.query.stopovers,
        display_options: request.search_args,
    })
}

fn airport_name(dataset: &Dataset, code: &str) -> Result<String> {
    dataset
        .find_airport(code)
        .map(|airport| airport.name.clone())
        .ok_or_else(|| FareError::UnknownAirport(code.to_string()))
}
