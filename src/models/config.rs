//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default TMDB API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB configuration.
    pub tmdb: TmdbSettings,
    /// Content generation configuration.
    pub generation: GenerationSettings,
    /// Favorites store file.
    pub favorites_path: Option<PathBuf>,
}

/// TMDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbSettings {
    /// API key (v3).
    pub api_key: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Listing used to pick the movies to generate.
    pub listing: ListingKind,
}

/// Provider listing endpoints usable as a generation source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    #[default]
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingKind::Popular => write!(f, "popular"),
            ListingKind::TopRated => write!(f, "top_rated"),
            ListingKind::NowPlaying => write!(f, "now_playing"),
            ListingKind::Upcoming => write!(f, "upcoming"),
        }
    }
}

/// Content generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Root content directory (holds `movies/` and `genres/`).
    pub content_dir: PathBuf,
    /// Listing pages to fetch.
    pub pages: Vec<u32>,
    /// Pause between listing pages, in milliseconds.
    pub page_delay_ms: u64,
    /// Pause after each written movie, in milliseconds.
    pub item_delay_ms: u64,
}

impl Default for TmdbSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            listing: ListingKind::default(),
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("./src/content"),
            pages: vec![1, 2, 3],
            page_delay_ms: 250,
            item_delay_ms: 100,
        }
    }
}

/// Immutable settings for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root content directory.
    pub content_dir: PathBuf,
    /// Listing pages to fetch, in order.
    pub pages: Vec<u32>,
    /// Pause between listing pages.
    pub page_delay: Duration,
    /// Pause after each written movie.
    pub item_delay: Duration,
}

impl GeneratorConfig {
    /// Directory holding movie files.
    pub fn movies_dir(&self) -> PathBuf {
        self.content_dir.join("movies")
    }

    /// Directory holding genre files.
    pub fn genres_dir(&self) -> PathBuf {
        self.content_dir.join("genres")
    }
}

impl From<&GenerationSettings> for GeneratorConfig {
    fn from(settings: &GenerationSettings) -> Self {
        Self {
            content_dir: settings.content_dir.clone(),
            pages: settings.pages.clone(),
            page_delay: Duration::from_millis(settings.page_delay_ms),
            item_delay: Duration::from_millis(settings.item_delay_ms),
        }
    }
}

impl Config {
    /// Apply `TMDB_API_KEY` / `TMDB_BASE_URL` environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            if !key.trim().is_empty() {
                self.tmdb.api_key = Some(key);
            }
        }
        if let Ok(url) = std::env::var("TMDB_BASE_URL") {
            if !url.trim().is_empty() {
                self.tmdb.base_url = url;
            }
        }
        self
    }

    /// Favorites file, falling back to the config directory.
    pub fn favorites_file(&self) -> PathBuf {
        self.favorites_path
            .clone()
            .unwrap_or_else(|| dirs_config_path().join("favorites.json"))
    }
}

/// Get the configuration directory path.
pub fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("films_vault")
}

/// Parse configuration from a TOML file.
pub fn load_config_from(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from the default file, then apply env overrides.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    let config = if config_path.exists() {
        match load_config_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", config_path.display(), e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    config.with_env_overrides()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [generation]
            pages = [1, 2]

            [tmdb]
            listing = "top_rated"
            "#,
        )
        .unwrap();

        assert_eq!(config.generation.pages, vec![1, 2]);
        assert_eq!(config.generation.page_delay_ms, 250);
        assert_eq!(config.tmdb.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.tmdb.listing, ListingKind::TopRated);
    }

    #[test]
    fn test_generator_config_dirs() {
        let config = GeneratorConfig::from(&GenerationSettings {
            content_dir: PathBuf::from("/tmp/content"),
            ..Default::default()
        });

        assert_eq!(config.movies_dir(), PathBuf::from("/tmp/content/movies"));
        assert_eq!(config.genres_dir(), PathBuf::from("/tmp/content/genres"));
        assert_eq!(config.item_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_listing_kind_names() {
        let kind: ListingKind = toml::from_str::<TmdbSettings>("listing = \"top_rated\"")
            .unwrap()
            .listing;
        assert_eq!(kind, ListingKind::TopRated);
        assert_eq!(ListingKind::NowPlaying.to_string(), "now_playing");
    }
}
