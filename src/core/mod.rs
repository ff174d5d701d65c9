//! Core business logic modules.

pub mod collector;
pub mod enricher;
pub mod favorites;
pub mod generator;
pub mod loader;
pub mod schema;
pub mod transform;
