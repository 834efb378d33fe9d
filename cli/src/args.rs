use clap::Parser;
use farepath_core::{Algorithm, DEFAULT_MAX_STOPOVERS};

#[derive(Parser, Clone)]
#[command(name = "farepath")]
#[command(about = "Find the cheapest fare between two airports with a bounded number of stopovers")]
pub struct Args {
    /// Departure airport code
    pub from: String,

    /// Arrival airport code
    pub to: String,

    /// Maximum number of intermediate stopovers
    #[arg(short, long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub stopovers: i64,

    /// Search algorithm: bounded (default) or layered
    #[arg(short, long, value_name = "ALGORITHM", default_value = "bounded", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Largest stopover count accepted
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_STOPOVERS)]
    pub max_stopovers: u32,

    /// Dataset file (defaults to the platform data directory)
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and engine logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only print the fare
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Clone)]
#[command(name = "farepath-seed")]
#[command(about = "Generate a synthetic airport and flight dataset")]
pub struct SeedArgs {
    /// Number of airports
    #[arg(short, long, value_name = "COUNT", default_value = "100")]
    pub airports: usize,

    /// Number of flight routes
    #[arg(short, long, value_name = "COUNT", default_value = "2500")]
    pub flights: usize,

    /// Random seed for reproducible datasets
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output file (defaults to the platform data directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

fn parse_algorithm(value: &str) -> Result<Algorithm, String> {
    match value.to_lowercase().as_str() {
        "bounded" => Ok(Algorithm::Bounded),
        "layered" => Ok(Algorithm::Layered),
        other => Err(format!("unknown algorithm '{}' (expected bounded or layered)", other)),
    }
}
