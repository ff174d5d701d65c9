//! Content file generators.

pub mod content;
pub mod slug;
