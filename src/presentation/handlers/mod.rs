mod analyze;
mod critique;
mod error;
mod health;

pub use analyze::analyze_handler;
pub use critique::{CritiqueRequest, critique_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
