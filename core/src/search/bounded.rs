use super::state::{BoundedState, SearchState};
use super::{FareSearch, resolve_endpoints};
use crate::error::Result;
use crate::graph::FareGraph;
use std::time::Instant;
use tracing::debug;

/// Cheapest fare from `from` to `to` using at most `stopovers + 1` legs.
///
/// Walks every route within the hop bound breadth-first without pruning
/// dearer revisits of the same airport, so the work grows with
/// (branching factor)^(stopovers + 2) on dense graphs. Use
/// [`layered_cheapest_fare`](super::layered_cheapest_fare) when that matters;
/// both return the same fare.
pub fn cheapest_fare(graph: &FareGraph, from: &str, to: &str, stopovers: usize) -> Result<FareSearch> {
    let search_timer = Instant::now();
    let (_, origin) = resolve_endpoints(graph, from, to)?;

    let mut bounded_state = BoundedState::new(origin);

    while let Some(current) = bounded_state.queue.pop_front() {
        if current.hops > stopovers {
            continue;
        }
        bounded_state.states_expanded += 1;

        let next_hops = current.hops + 1;

        for (destination, &leg_price) in current.destinations {
            let updated_price = current.price + leg_price;

            if destination == to {
                bounded_state.offer_arrival(updated_price);
            }

            // States past the bound would be discarded on dequeue
            if next_hops > stopovers {
                continue;
            }

            if let Some(onward) = graph.destinations(destination) {
                bounded_state.queue.push_back(SearchState {
                    destinations: onward,
                    price: updated_price,
                    hops: next_hops,
                });
            }
        }
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(
        from,
        to,
        stopovers,
        states_expanded = bounded_state.states_expanded,
        found = bounded_state.best_price.is_some(),
        "bounded fare search finished"
    );

    Ok(FareSearch::new(
        bounded_state.best_price,
        bounded_state.states_expanded,
        elapsed_time,
    ))
}
