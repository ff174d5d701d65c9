//! Data models.

pub mod config;
pub mod content;
pub mod favorite;
