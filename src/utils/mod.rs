//! Utility helpers.

pub mod fs;
pub mod image;
