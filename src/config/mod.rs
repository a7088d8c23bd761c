//! Configuration module for the archiver.
//!
//! This module handles:
//! - Loading the archive section from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{ArchiveSection, Config};
pub use validation::validate_config;
