//! Films Vault Library
//!
//! Generates static movie and genre content files from TMDB for a static site.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
