use clap::Parser;
use farepath::{SeedArgs, app::default_dataset_path, colors::ColorScheme, format_number};
use farepath_core::{GeneratorConfig, generate_dataset, save_dataset};
use rand::{SeedableRng, rngs::StdRng};
use std::{error::Error, path::PathBuf};

fn main() {
    let seed_args = SeedArgs::parse();
    let colors = ColorScheme::new(true);

    if let Err(error) = run(seed_args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(seed_args: SeedArgs, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let output_path = match seed_args.output {
        Some(path) => PathBuf::from(path),
        None => default_dataset_path()?,
    };

    let mut rng = match seed_args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = GeneratorConfig::new(seed_args.airports, seed_args.flights);
    let dataset = generate_dataset(&config, &mut rng)?;
    save_dataset(&dataset, &output_path)?;

    println!(
        "{} Wrote {} airports and {} flights to {}",
        colors.success("✅"),
        colors.number(&format_number(dataset.airports.len())),
        colors.number(&format_number(dataset.flights.len())),
        output_path.display()
    );

    Ok(())
}
