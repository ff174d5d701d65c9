//! Shared test fixtures.

use async_trait::async_trait;
use films_vault::models::config::GeneratorConfig;
use films_vault::services::tmdb::{CatalogItem, CatalogSource, Credits, Genre, ListingPage, MovieDetails};
use films_vault::{Error, Result};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory catalog that records every request it serves.
#[derive(Default)]
pub struct FakeCatalog {
    pub pages: HashMap<u32, Vec<(u64, &'static str)>>,
    pub genres: Vec<(u64, &'static str)>,
    pub failing_details: HashSet<u64>,
    pub failing_pages: HashSet<u32>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn title_of(&self, id: u64) -> &'static str {
        self.pages
            .values()
            .flatten()
            .find(|(item_id, _)| *item_id == id)
            .map(|(_, title)| *title)
            .unwrap_or("Unknown")
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn listing_page(&self, page: u32) -> Result<ListingPage<CatalogItem>> {
        self.record(format!("page:{}", page));
        if self.failing_pages.contains(&page) {
            return Err(Error::Api {
                status: 500,
                endpoint: format!("/movie/popular?page={}", page),
            });
        }

        let results: Vec<_> = self
            .pages
            .get(&page)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|(id, title)| json!({"id": id, "title": title, "popularity": 10.0}))
            .collect();
        Ok(serde_json::from_value(json!({"page": page, "results": results}))?)
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails> {
        self.record(format!("details:{}", id));
        if self.failing_details.contains(&id) {
            return Err(Error::Api {
                status: 404,
                endpoint: format!("/movie/{}", id),
            });
        }

        Ok(serde_json::from_value(json!({
            "id": id,
            "imdb_id": null,
            "title": self.title_of(id),
            "original_title": self.title_of(id),
            "overview": "",
            "tagline": null,
            "homepage": null,
            "status": "Released",
            "release_date": "2024-03-01",
            "runtime": null,
            "budget": 0,
            "revenue": 0,
            "popularity": 10.0,
            "vote_average": 7.5,
            "vote_count": 100,
            "poster_path": null,
            "backdrop_path": null,
            "genres": [{"id": 28, "name": "Action"}]
        }))?)
    }

    async fn movie_credits(&self, id: u64) -> Result<Credits> {
        self.record(format!("credits:{}", id));

        let cast: Vec<_> = (0..12)
            .map(|i| json!({"id": i, "name": format!("Actor {}", i), "character": "Self", "order": i}))
            .collect();
        let crew: Vec<_> = ["Director", "Gaffer", "Producer", "Story"]
            .iter()
            .enumerate()
            .map(|(i, job)| json!({"id": 100 + i, "name": format!("Crew {}", i), "job": job, "department": "Crew"}))
            .collect();
        Ok(serde_json::from_value(json!({"cast": cast, "crew": crew}))?)
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        self.record("genres".to_string());
        Ok(self
            .genres
            .iter()
            .map(|(id, name)| Genre {
                id: *id,
                name: name.to_string(),
            })
            .collect())
    }
}

/// Run configuration with no pacing delays.
pub fn fast_config(content_dir: &Path, pages: Vec<u32>) -> GeneratorConfig {
    GeneratorConfig {
        content_dir: content_dir.to_path_buf(),
        pages,
        page_delay: Duration::ZERO,
        item_delay: Duration::ZERO,
    }
}
