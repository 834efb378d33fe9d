pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::FarePathApp;
pub use args::{Args, SeedArgs};
pub use utils::format_number;
