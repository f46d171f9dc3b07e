//! Configuration module for Title-Sweep
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file, and layering command-line overrides on top of it.
//!
//! # Example
//!
//! ```no_run
//! use title_sweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("title-sweep.toml")).unwrap();
//! println!("Fetching with {} workers", config.fetch.workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetchConfig, OutputConfig, Overrides, DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, DEFAULT_WORKERS,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, MAX_TIMEOUT_SECS, MAX_WORKERS};
