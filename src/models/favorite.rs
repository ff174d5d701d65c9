//! Favorite movie model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A favorited movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// TMDB ID.
    pub id: u64,
    pub title: String,
    /// Poster path, if any.
    pub poster: Option<String>,
    /// When the movie was favorited.
    pub added_at: DateTime<Utc>,
}
