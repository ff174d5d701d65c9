//! Integration tests for content generation.
//!
//! Tests cover:
//! - Per-item failure isolation
//! - Listing page failure aborting the run
//! - Request ordering
//! - Genre files

mod common;

use common::{fast_config, FakeCatalog};
use films_vault::core::collector::collect_pages;
use films_vault::core::generator::Generator;
use films_vault::core::loader;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn catalog() -> FakeCatalog {
    FakeCatalog {
        pages: HashMap::from([
            (1, vec![(10, "Ten Little Heroes"), (20, "Twenty: The Sequel")]),
            (2, vec![(30, "Thirty!")]),
        ]),
        genres: vec![(28, "Action"), (878, "Science Fiction")],
        ..Default::default()
    }
}

fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

// ========== MOVIE GENERATION TESTS ==========

#[tokio::test]
async fn test_failed_item_is_skipped_and_run_continues() {
    let temp_dir = TempDir::new().unwrap();
    let mut catalog = catalog();
    catalog.failing_details = HashSet::from([20]);

    let generator = Generator::new(catalog, fast_config(temp_dir.path(), vec![1, 2]));
    let report = generator.generate_movies().await.unwrap();

    assert_eq!(report.movies.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].id, 20);
    assert_eq!(report.failures[0].title, "Twenty: The Sequel");
    assert!(report.failures[0].reason.contains("404"));

    assert_eq!(
        file_names(&temp_dir.path().join("movies")),
        vec!["ten-little-heroes-10.json", "thirty-30.json"]
    );
}

#[tokio::test]
async fn test_listing_failure_aborts_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let mut catalog = catalog();
    catalog.failing_pages = HashSet::from([2]);

    let generator = Generator::new(catalog, fast_config(temp_dir.path(), vec![1, 2]));
    let result = generator.generate_movies().await;

    assert!(matches!(result, Err(films_vault::Error::Api { status: 500, .. })));
    assert!(!temp_dir.path().join("movies").exists());
}

#[tokio::test]
async fn test_requests_are_sequential_and_ordered() {
    let temp_dir = TempDir::new().unwrap();
    let generator = Generator::new(catalog(), fast_config(temp_dir.path(), vec![1, 2]));
    generator.generate_movies().await.unwrap();

    let calls = generator_calls(&generator);
    assert_eq!(
        calls,
        vec![
            "page:1",
            "page:2",
            "details:10",
            "credits:10",
            "details:20",
            "credits:20",
            "details:30",
            "credits:30",
        ]
    );
}

#[tokio::test]
async fn test_written_movie_is_trimmed_and_loadable() {
    let temp_dir = TempDir::new().unwrap();
    let generator = Generator::new(catalog(), fast_config(temp_dir.path(), vec![1]));
    generator.generate_movies().await.unwrap();

    let movies = loader::load_movies(temp_dir.path()).unwrap();
    assert_eq!(movies.len(), 2);

    for movie in &movies {
        assert_eq!(movie.credits.cast.len(), 10);
        let jobs: Vec<&str> = movie.credits.crew.iter().map(|c| c.job.as_str()).collect();
        assert_eq!(jobs, vec!["Director", "Producer", "Story"]);
        assert_eq!(movie.poster_path, None);
    }

    let raw = fs::read_to_string(temp_dir.path().join("movies").join("ten-little-heroes-10.json")).unwrap();
    assert!(raw.contains("\"posterPath\": null"));
    assert!(raw.contains("\"runtime\": null"));
}

#[tokio::test]
async fn test_regeneration_overwrites_same_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = fast_config(temp_dir.path(), vec![1]);

    Generator::new(catalog(), config.clone()).generate_movies().await.unwrap();
    Generator::new(catalog(), config).generate_movies().await.unwrap();

    assert_eq!(file_names(&temp_dir.path().join("movies")).len(), 2);
}

// ========== GENRE GENERATION TESTS ==========

#[tokio::test]
async fn test_genre_file_contents() {
    let temp_dir = TempDir::new().unwrap();
    let generator = Generator::new(catalog(), fast_config(temp_dir.path(), vec![]));
    let report = generator.generate_genres().await.unwrap();

    assert_eq!(report.genres.len(), 2);

    let action = temp_dir.path().join("genres").join("action.json");
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(action).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"id": 28, "name": "Action", "slug": "action"})
    );
    assert!(temp_dir.path().join("genres").join("science-fiction.json").exists());
}

#[tokio::test]
async fn test_generate_all() {
    let temp_dir = TempDir::new().unwrap();
    let generator = Generator::new(catalog(), fast_config(temp_dir.path(), vec![1, 2]));
    let report = generator.generate_all().await.unwrap();

    assert_eq!(report.written(), 5);
    assert!(report.failures.is_empty());
    assert_eq!(generator_calls(&generator)[0], "genres");

    let genres = loader::load_genres(temp_dir.path()).unwrap();
    let slugs: Vec<&str> = genres.iter().map(|g| g.slug.as_str()).collect();
    assert_eq!(slugs, vec!["action", "science-fiction"]);
}

// ========== COLLECTOR TESTS ==========

#[tokio::test]
async fn test_collect_pages_keeps_page_order() {
    let items = collect_pages(&catalog(), &[2, 1], Duration::ZERO).await.unwrap();
    let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[tokio::test]
async fn test_collect_pages_waits_between_pages() {
    let start = std::time::Instant::now();
    collect_pages(&catalog(), &[1, 2], Duration::from_millis(20))
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(40));
}

fn generator_calls(generator: &Generator<FakeCatalog>) -> Vec<String> {
    generator.source().calls()
}
