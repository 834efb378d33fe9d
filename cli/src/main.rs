use clap::Parser;
use farepath::{
    Args, FarePathApp,
    colors::ColorScheme,
    display::{display_search_info, display_search_results},
    search::{create_search_request, execute_fare_search},
};
use tracing_subscriber::EnvFilter;

fn main() {
    let search_args = Args::parse();
    let colors = ColorScheme::new(!search_args.no_color);

    if search_args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("farepath=debug,farepath_core=debug"))
            .with_writer(std::io::stderr)
            .init();
    }

    let app = match FarePathApp::new(search_args.data.clone()) {
        Ok(app) => app,
        Err(error) => exit_with_error(&colors, &error.to_string()),
    };

    let dataset = match app.load_data() {
        Ok(dataset) => dataset,
        Err(error) => exit_with_error(&colors, &error.to_string()),
    };

    let search_request = match create_search_request(search_args, &dataset) {
        Ok(request) => request,
        Err(error) => exit_with_error(&colors, &error.to_string()),
    };

    if search_request.search_args.verbose {
        display_search_info(&search_request, &colors);
    }

    match execute_fare_search(search_request, &dataset) {
        Ok(search_result) => display_search_results(search_result, &colors),
        Err(error) => exit_with_error(&colors, &error.to_string()),
    }
}

fn exit_with_error(colors: &ColorScheme, message: &str) -> ! {
    eprintln!("{} {}", colors.error("❌ Error:"), message);
    std::process::exit(1);
}
