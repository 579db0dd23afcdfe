mod generate;
mod health;

pub use generate::{ErrorResponse, generate_handler};
pub use health::health_handler;
