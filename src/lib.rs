// Python Project Generator
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::placeholder::{Placeholder, PlaceholderMap};
pub use models::project_spec::ProjectSpec;
pub use services::generator::{GenerateOptions, GeneratedProject, ProjectGenerator};
pub use services::renderer::render;
pub use services::validator::validate_project;
pub use utils::error::{GeneratorError, Result};
pub use utils::validation::sanitize_project_name;
