// Models module for data structures
pub mod manifest;
pub mod placeholder;
pub mod placement;
pub mod project_spec;
