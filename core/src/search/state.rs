use crate::graph::Destinations;
use crate::price::Price;
use std::collections::VecDeque;

/// One queued step of the bounded search: where we can fly next, what it
/// cost to get here, and how many legs were flown.
#[derive(Clone, Copy)]
pub(crate) struct SearchState<'g> {
    pub destinations: &'g Destinations,
    pub price: Price,
    pub hops: usize,
}

pub(crate) struct BoundedState<'g> {
    pub queue: VecDeque<SearchState<'g>>,
    pub best_price: Option<Price>,
    pub states_expanded: usize,
}

impl<'g> BoundedState<'g> {
    pub fn new(origin: &'g Destinations) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(SearchState {
            destinations: origin,
            price: Price::ZERO,
            hops: 0,
        });

        Self {
            queue,
            best_price: None,
            states_expanded: 0,
        }
    }

    /// Keeps `price` only when strictly cheaper, so the first cheapest arrival wins ties.
    pub fn offer_arrival(&mut self, price: Price) {
        if self.best_price.is_none_or(|best| price < best) {
            self.best_price = Some(price);
        }
    }
}
