//! Favorites command implementation.

use crate::core::favorites::FavoritesStore;
use crate::models::config::Config;
use crate::utils::image::poster_url;
use crate::Result;
use colored::Colorize;

/// List favorite movies.
pub async fn list_favorites(config: &Config) -> Result<()> {
    println!("{}", "❤️  Favorites".bold().cyan());
    println!();

    let store = FavoritesStore::new(config.favorites_file());
    let favorites = store.load()?;

    if favorites.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }

    println!(
        "{:<10} {:<20} {}",
        "ID".bold(),
        "Added".bold(),
        "Title".bold()
    );
    println!("{}", "-".repeat(80));

    for favorite in &favorites {
        println!(
            "{:<10} {:<20} {}",
            favorite.id,
            favorite.added_at.format("%Y-%m-%d %H:%M"),
            favorite.title
        );
        if let Some(url) = poster_url(favorite.poster.as_deref()) {
            println!("{:<31} {}", "", url.dimmed());
        }
    }

    Ok(())
}

/// Toggle a movie in favorites.
pub async fn toggle_favorite(config: &Config, id: u64, title: &str, poster: Option<&str>) -> Result<()> {
    let store = FavoritesStore::new(config.favorites_file());

    if store.toggle(id, title, poster)? {
        println!("{} {}", "❤️  Added to favorites:".bold().green(), title);
    } else {
        println!("{} {}", "Removed from favorites:".bold().yellow(), title);
    }

    Ok(())
}
