//! CLI command implementations.

pub mod favorites;
pub mod generate;
pub mod search;
pub mod validate;
