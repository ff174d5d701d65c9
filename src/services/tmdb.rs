//! TMDB API client.

use crate::models::config::{ListingKind, TmdbSettings};
use crate::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Paged listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPage<T> {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Listing-level movie summary.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
}

/// Movie details.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub imdb_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub revenue: Option<u64>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Genre.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Genre list response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

/// Movie credits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// Cast member.
#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

/// Crew member.
#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: String,
    pub department: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Filters for the discover endpoint.
///
/// A non-blank `query` switches to a title search and the other filters are
/// ignored, since TMDB search does not accept them.
#[derive(Debug, Clone, Default)]
pub struct DiscoverParams {
    pub query: Option<String>,
    pub page: Option<u32>,
    pub with_genres: Option<String>,
    pub primary_release_year: Option<String>,
    pub vote_average_gte: Option<String>,
    pub vote_average_lte: Option<String>,
    pub sort_by: Option<String>,
    pub include_adult: Option<String>,
}

impl DiscoverParams {
    /// Build the endpoint (path and query string) for these filters.
    pub fn endpoint(&self) -> String {
        if let Some(query) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            return format!(
                "/search/movie?query={}&page={}",
                urlencoding::encode(query),
                self.page.unwrap_or(1)
            );
        }

        let page = self.page.map(|p| p.to_string());
        let pairs = [
            ("page", page.as_deref()),
            ("with_genres", self.with_genres.as_deref()),
            ("primary_release_year", self.primary_release_year.as_deref()),
            ("vote_average.gte", self.vote_average_gte.as_deref()),
            ("vote_average.lte", self.vote_average_lte.as_deref()),
            ("sort_by", self.sort_by.as_deref()),
            ("include_adult", self.include_adult.as_deref()),
        ];

        let query: Vec<String> = pairs
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{}={}", key, urlencoding::encode(v)))
            })
            .collect();

        format!("/discover/movie?{}", query.join("&"))
    }
}

/// Source of catalog data for content generation.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one listing page.
    async fn listing_page(&self, page: u32) -> Result<ListingPage<CatalogItem>>;

    /// Fetch full details for a movie.
    async fn movie_details(&self, id: u64) -> Result<MovieDetails>;

    /// Fetch the credit list for a movie.
    async fn movie_credits(&self, id: u64) -> Result<Credits>;

    /// Fetch the movie genre list.
    async fn genres(&self) -> Result<Vec<Genre>>;
}

/// TMDB API client.
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    listing: ListingKind,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(settings: &TmdbSettings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(crate::Error::TmdbApiKeyMissing)?;

        Ok(Self {
            api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            listing: settings.listing,
            client: reqwest::Client::new(),
        })
    }

    /// Full request URL for an endpoint, with the API key appended.
    pub fn build_url(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}api_key={}",
            self.base_url, endpoint, separator, self.api_key
        )
    }

    /// GET an endpoint and decode the JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        tracing::debug!("GET {}", endpoint);

        let resp = self.client.get(self.build_url(endpoint)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(crate::Error::Api {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        Ok(resp.json().await?)
    }

    /// Verify API key is valid.
    pub async fn verify_api_key(&self) -> Result<bool> {
        match self.client.get(self.build_url("/authentication")).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Get popular movies.
    pub async fn popular_movies(&self, page: u32) -> Result<ListingPage<CatalogItem>> {
        self.fetch(&format!("/movie/popular?page={}", page)).await
    }

    /// Get top rated movies.
    pub async fn top_rated_movies(&self, page: u32) -> Result<ListingPage<CatalogItem>> {
        self.fetch(&format!("/movie/top_rated?page={}", page)).await
    }

    /// Get now playing movies.
    pub async fn now_playing_movies(&self, page: u32) -> Result<ListingPage<CatalogItem>> {
        self.fetch(&format!("/movie/now_playing?page={}", page)).await
    }

    /// Get upcoming movies.
    pub async fn upcoming_movies(&self, page: u32) -> Result<ListingPage<CatalogItem>> {
        self.fetch(&format!("/movie/upcoming?page={}", page)).await
    }

    /// Get movie details.
    pub async fn get_movie_details(&self, movie_id: u64) -> Result<MovieDetails> {
        self.fetch(&format!("/movie/{}", movie_id)).await
    }

    /// Get movie credits.
    pub async fn get_movie_credits(&self, movie_id: u64) -> Result<Credits> {
        self.fetch(&format!("/movie/{}/credits", movie_id)).await
    }

    /// Get the movie genre list.
    pub async fn get_genres(&self) -> Result<Vec<Genre>> {
        let resp: GenreList = self.fetch("/genre/movie/list").await?;
        Ok(resp.genres)
    }

    /// Search movies by title.
    pub async fn search_movies(&self, query: &str, page: u32) -> Result<ListingPage<CatalogItem>> {
        self.fetch(&format!(
            "/search/movie?query={}&page={}",
            urlencoding::encode(query),
            page
        ))
        .await
    }

    /// Get movies of one genre.
    pub async fn movies_by_genre(&self, genre_id: u64, page: u32) -> Result<ListingPage<CatalogItem>> {
        self.fetch(&format!("/discover/movie?with_genres={}&page={}", genre_id, page))
            .await
    }

    /// Filtered browsing, or title search when a query is given.
    pub async fn discover_movies(&self, params: &DiscoverParams) -> Result<ListingPage<CatalogItem>> {
        self.fetch(&params.endpoint()).await
    }
}

#[async_trait]
impl CatalogSource for TmdbClient {
    async fn listing_page(&self, page: u32) -> Result<ListingPage<CatalogItem>> {
        match self.listing {
            ListingKind::Popular => self.popular_movies(page).await,
            ListingKind::TopRated => self.top_rated_movies(page).await,
            ListingKind::NowPlaying => self.now_playing_movies(page).await,
            ListingKind::Upcoming => self.upcoming_movies(page).await,
        }
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails> {
        self.get_movie_details(id).await
    }

    async fn movie_credits(&self, id: u64) -> Result<Credits> {
        self.get_movie_credits(id).await
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        self.get_genres().await
    }
}
