// Shared utilities: errors, configuration, logging, filesystem helpers

pub mod config;
pub mod error;
pub mod fs_utils;
pub mod logging;
pub mod validation;
