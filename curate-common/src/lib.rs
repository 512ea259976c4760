//! # Curate Common Library
//!
//! Shared code for the curation workspace:
//! - Error types (`Error` enum, `Result` alias)
//! - Configuration resolution (database path lookup)

pub mod config;
pub mod error;

pub use error::{Error, Result};
