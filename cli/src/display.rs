use farepath_core::Price;

use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "✈️  Searching fares from {} ({}) to {} ({})",
        colors.airport(&request.query.from),
        request.from_name,
        colors.airport(&request.query.to),
        request.to_name
    );

    println!("⚙️  Using {} search", request.search_args.algorithm.as_str());

    println!(
        "🔁 Allowing up to {} stopover(s)",
        colors.number(&request.query.stopovers.to_string())
    );

    println!("🔍 Searching...");
}

pub fn display_search_results(result: SearchResult, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if result.display_options.quiet {
        println!("{}", format_quiet_fare(result.fare));
        return;
    }

    if is_verbose {
        println!("\n---\n");
    }

    match result.fare {
        Some(fare) => {
            println!(
                "{} Cheapest fare from {} to {}: {}",
                colors.success("✅"),
                colors.airport(&result.from_code),
                colors.airport(&result.to_code),
                colors.fare(&fare.to_string())
            );
        }
        None => {
            println!(
                "{} {} and {} within {} stopover(s)",
                colors.error("❌ No route found between"),
                colors.airport(&result.from_code),
                colors.airport(&result.to_code),
                result.stopovers
            );
        }
    }

    if is_verbose {
        display_search_statistics(result.states_expanded, result.search_duration, colors);
    }
}

/// Machine-friendly output: the fare, or `-1` when there is no route.
pub fn format_quiet_fare(fare: Option<Price>) -> String {
    match fare {
        Some(fare) => fare.to_string(),
        None => "-1".to_string(),
    }
}

fn display_search_statistics(states_expanded: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Expanded {} search states in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(states_expanded)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
