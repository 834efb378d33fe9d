use crate::dataset::{Airport, Dataset, FlightEdge};
use crate::error::{FareError, Result};
use crate::price::Price;
use rand::Rng;
use rand::seq::index;
use rustc_hash::FxHashSet;

const CODE_LENGTH: u32 = 3;
const MIN_TICKET_FARE_CENTS: u64 = 3_000;
const MAX_TICKET_FARE_CENTS: u64 = 40_000;

const CITY_NAMES: &[&str] = &[
    "Amsterdam", "Athens", "Bangkok", "Barcelona", "Berlin", "Bogota", "Boston", "Cairo",
    "Chicago", "Dakar", "Denver", "Dubai", "Dublin", "Hanoi", "Helsinki", "Istanbul",
    "Jakarta", "Johannesburg", "Karachi", "Lagos", "Lima", "Lisbon", "London", "Madrid",
    "Manila", "Melbourne", "Mexico City", "Milan", "Montreal", "Mumbai", "Nairobi", "Osaka",
    "Oslo", "Paris", "Prague", "Reykjavik", "Rome", "Santiago", "Seoul", "Singapore",
    "Stockholm", "Sydney", "Taipei", "Tokyo", "Toronto", "Vienna", "Warsaw", "Zurich",
];

/// Size of a synthetic dataset
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub airports: usize,
    pub flights: usize,
}

impl GeneratorConfig {
    pub fn new(airports: usize, flights: usize) -> Self {
        Self { airports, flights }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            airports: 100,
            flights: 2500,
        }
    }
}

/// Random airports with unique three-letter codes and random routes between
/// them. No route leaves and enters the same airport, and no ordered pair of
/// airports gets more than one route.
pub fn generate_dataset<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Dataset> {
    let max_airports = 26usize.pow(CODE_LENGTH);
    if config.airports > max_airports {
        return Err(FareError::Generator(format!(
            "at most {} unique airport codes exist, {} requested",
            max_airports, config.airports
        )));
    }

    let max_flights = config.airports * config.airports.saturating_sub(1);
    if config.flights > max_flights {
        return Err(FareError::Generator(format!(
            "{} airports allow at most {} distinct routes, {} requested",
            config.airports, max_flights, config.flights
        )));
    }

    let airports = generate_airports(config.airports, rng);
    let flights = generate_flights(&airports, config.flights, rng);

    Ok(Dataset { airports, flights })
}

fn generate_airports<R: Rng>(count: usize, rng: &mut R) -> Vec<Airport> {
    let mut used_codes = FxHashSet::default();
    let mut airports = Vec::with_capacity(count);

    while airports.len() < count {
        let code = random_code(rng);
        if !used_codes.insert(code.clone()) {
            continue;
        }

        let city = CITY_NAMES[rng.random_range(0..CITY_NAMES.len())];
        airports.push(Airport {
            code,
            name: city.to_string(),
            lat: rng.random_range(-90.0..=90.0),
            lng: rng.random_range(-180.0..=180.0),
        });
    }

    airports
}

fn random_code<R: Rng>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect()
}

fn generate_flights<R: Rng>(airports: &[Airport], count: usize, rng: &mut R) -> Vec<FlightEdge> {
    let airport_count = airports.len();
    let route_space = airport_count * airport_count.saturating_sub(1);

    // Index every ordered pair (i, j) with i != j as i * (n - 1) + k, where
    // k skips the diagonal. Sampling indices without replacement keeps pairs unique.
    index::sample(rng, route_space, count)
        .into_iter()
        .map(|route_index| {
            let departure = route_index / (airport_count - 1);
            let offset = route_index % (airport_count - 1);
            let arrival = if offset >= departure { offset + 1 } else { offset };

            FlightEdge::new(
                airports[departure].code.clone(),
                airports[arrival].code.clone(),
                random_price(rng),
            )
        })
        .collect()
}

fn random_price<R: Rng>(rng: &mut R) -> Price {
    Price::from_cents(rng.random_range(MIN_TICKET_FARE_CENTS..=MAX_TICKET_FARE_CENTS))
}
