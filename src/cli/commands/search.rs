//! Search and discover command implementations.

use crate::models::config::Config;
use crate::services::tmdb::{CatalogItem, DiscoverParams, ListingPage, TmdbClient};
use crate::utils::image::{poster_url_or_placeholder, ImageSize};
use crate::Result;
use colored::Colorize;

/// Search movies by title.
pub async fn search(config: &Config, query: &str, page: u32) -> Result<()> {
    println!("{} {}", "🔍 Searching:".bold().cyan(), query);
    println!();

    let client = TmdbClient::new(&config.tmdb)?;
    let results = client.search_movies(query, page).await?;
    print_results(&results);
    Ok(())
}

/// List movies of one genre.
pub async fn by_genre(config: &Config, genre_id: u64, page: u32) -> Result<()> {
    println!("{} {}", "🎭 Genre:".bold().cyan(), genre_id);
    println!();

    let client = TmdbClient::new(&config.tmdb)?;
    let results = client.movies_by_genre(genre_id, page).await?;
    print_results(&results);
    Ok(())
}

/// Browse movies with discover filters.
pub async fn discover(config: &Config, params: &DiscoverParams) -> Result<()> {
    println!("{}", "🎞️  Discovering movies...".bold().cyan());
    println!();

    let client = TmdbClient::new(&config.tmdb)?;
    let results = client.discover_movies(params).await?;
    print_results(&results);
    Ok(())
}

fn print_results(results: &ListingPage<CatalogItem>) {
    if results.results.is_empty() {
        println!("No movies found.");
        return;
    }

    println!(
        "{:<10} {:<6} {:<6} {}",
        "ID".bold(),
        "Year".bold(),
        "Rating".bold(),
        "Title".bold()
    );
    println!("{}", "-".repeat(80));

    for item in &results.results {
        let year = item
            .release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .unwrap_or("----");
        let rating = item
            .vote_average
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "-".to_string());

        println!("{:<10} {:<6} {:<6} {}", item.id, year, rating, item.title);
        println!(
            "{:<24} {}",
            "",
            poster_url_or_placeholder(item.poster_path.as_deref(), &item.title, ImageSize::W342)
                .dimmed()
        );
    }

    println!();
    println!(
        "Page {} of {} ({} results)",
        results.page, results.total_pages, results.total_results
    );
}
