//! URL handling module for Title-Sweep
//!
//! This module provides scheme normalization for raw input and domain
//! extraction for the report.

mod domain;
mod normalize;

// Re-export main functions
pub use domain::{domain_of, domain_of_str};
pub use normalize::ensure_scheme;
