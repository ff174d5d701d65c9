//! Validate command implementation.
//!
//! Loads both content collections through the site schema.

use crate::core::loader;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Validate all content files under `content_dir`.
pub async fn validate(content_dir: &Path) -> Result<()> {
    println!("{}", "🔍 Validating content files...".bold().cyan());
    println!();

    let genres = loader::load_genres(content_dir)?;
    println!("  {} {}", "Genres:".bold(), genres.len());

    let movies = loader::load_movies(content_dir)?;
    println!("  {} {}", "Movies:".bold(), movies.len());

    let without_poster = movies.iter().filter(|m| m.poster_path.is_none()).count();
    if without_poster > 0 {
        println!("  {} {}", "Without poster:".bold(), without_poster);
    }

    println!();
    println!("{}", "✅ All content files match the schema".bold().green());
    Ok(())
}
