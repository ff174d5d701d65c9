//! Persisted content models.
//!
//! These are the on-disk shapes read back by the static site. Field names are
//! camelCase and nullable fields are always written, as `null` when absent.

use serde::{Deserialize, Serialize};

/// Content category, one directory per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Movies,
    Genres,
}

impl Collection {
    /// Directory name under the content root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Collection::Movies => "movies",
            Collection::Genres => "genres",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A movie content file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedMovie {
    /// TMDB ID.
    pub id: u64,
    pub title: String,
    pub original_title: String,
    /// May be an empty string.
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// Release date (YYYY-MM-DD).
    pub release_date: String,
    pub vote_average: f64,
    pub vote_count: u64,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// 0 means unknown.
    pub budget: u64,
    /// 0 means unknown.
    pub revenue: u64,
    pub genres: Vec<GenreRef>,
    #[serde(default)]
    pub credits: MovieCredits,
    pub popularity: f64,
    pub status: String,
    pub tagline: Option<String>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
}

/// Genre reference embedded in a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRef {
    pub id: u64,
    pub name: String,
}

/// Trimmed credits of a movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieCredits {
    pub cast: Vec<CastEntry>,
    pub crew: Vec<CrewEntry>,
}

/// Billed cast member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastEntry {
    pub id: u64,
    pub name: String,
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    pub order: u32,
}

/// Key crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewEntry {
    pub id: u64,
    pub name: String,
    pub job: String,
    pub department: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// A genre content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedGenre {
    pub id: u64,
    pub name: String,
    pub slug: String,
    /// Declared by the site schema; never computed by the generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_count: Option<u64>,
}
