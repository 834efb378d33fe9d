use super::{FareSearch, resolve_endpoints};
use crate::error::Result;
use crate::graph::FareGraph;
use crate::price::Price;
use rustc_hash::FxHashMap;
use std::{collections::hash_map::Entry, time::Instant};
use tracing::debug;

/// Same fare as [`cheapest_fare`](super::cheapest_fare), computed with
/// Bellman-Ford rounds capped at `stopovers + 1`.
///
/// Each round relaxes only from the previous round's prices, which keeps the
/// leg count bounded while collapsing every airport to its cheapest price
/// per round. Work is O((stopovers + 1) * edges).
pub fn layered_cheapest_fare(
    graph: &FareGraph,
    from: &str,
    to: &str,
    stopovers: usize,
) -> Result<FareSearch> {
    let search_timer = Instant::now();
    let (origin_code, _) = resolve_endpoints(graph, from, to)?;

    let mut round_prices: FxHashMap<&str, Price> = FxHashMap::default();
    round_prices.insert(origin_code, Price::ZERO);

    let mut best_price: Option<Price> = None;
    let mut relaxations = 0;

    for _round in 0..=stopovers {
        let mut next_prices = round_prices.clone();

        for (&airport, &price_so_far) in &round_prices {
            let Some(destinations) = graph.destinations(airport) else {
                continue;
            };

            for (destination, &leg_price) in destinations {
                relaxations += 1;
                let updated_price = price_so_far + leg_price;

                if destination == to && best_price.is_none_or(|best| updated_price < best) {
                    best_price = Some(updated_price);
                }

                match next_prices.entry(destination.as_str()) {
                    Entry::Occupied(mut known) => {
                        if updated_price < *known.get() {
                            known.insert(updated_price);
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(updated_price);
                    }
                }
            }
        }

        // Later rounds would repeat the same relaxations
        if next_prices == round_prices {
            break;
        }
        round_prices = next_prices;
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(
        from,
        to,
        stopovers,
        relaxations,
        found = best_price.is_some(),
        "layered fare search finished"
    );

    Ok(FareSearch::new(best_price, relaxations, elapsed_time))
}
