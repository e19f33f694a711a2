mod critique_service;
pub mod prompt_builder;

pub use critique_service::{CritiqueError, CritiqueService};
pub use prompt_builder::{MAX_RESUME_CHARS, SYSTEM_INSTRUCTION, build_prompt};
