//! Films Vault CLI
//!
//! A command-line tool that generates static movie content files from TMDB.

use clap::Parser;
use films_vault::cli::{
    args::{Cli, Commands, FavoritesAction},
    commands::{favorites, generate, search, validate},
};
use films_vault::models::config::{load_config, Config};
use films_vault::preflight;
use films_vault::services::tmdb::DiscoverParams;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = load_config();

    // Run the appropriate command
    match cli.command {
        Commands::Generate { target } => {
            let gen_config = generate::generator_config(&config, target.args());

            if !cli.skip_preflight {
                run_preflight_checks(&config, Some(&gen_config.content_dir)).await?;
            }

            generate::generate(&config, &target, gen_config).await?;
        }

        Commands::Validate { content_dir } => {
            let dir = content_dir.unwrap_or_else(|| config.generation.content_dir.clone());
            validate::validate(&dir).await?;
        }

        Commands::Search { query, page } => {
            if !cli.skip_preflight {
                run_preflight_checks(&config, None).await?;
            }
            search::search(&config, &query, page).await?;
        }

        Commands::Genre { id, page } => {
            if !cli.skip_preflight {
                run_preflight_checks(&config, None).await?;
            }
            search::by_genre(&config, id, page).await?;
        }

        Commands::Discover {
            genre,
            year,
            min_rating,
            max_rating,
            sort_by,
            include_adult,
            page,
        } => {
            if !cli.skip_preflight {
                run_preflight_checks(&config, None).await?;
            }

            let params = DiscoverParams {
                query: None,
                page: Some(page),
                with_genres: genre,
                primary_release_year: year,
                vote_average_gte: min_rating,
                vote_average_lte: max_rating,
                sort_by,
                include_adult: include_adult.then(|| "true".to_string()),
            };
            search::discover(&config, &params).await?;
        }

        Commands::Favorites { action } => match action {
            FavoritesAction::List => {
                favorites::list_favorites(&config).await?;
            }
            FavoritesAction::Toggle { id, title, poster } => {
                favorites::toggle_favorite(&config, id, &title, poster.as_deref()).await?;
            }
        },
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("films_vault=debug")
    } else {
        EnvFilter::new("films_vault=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(config: &Config, content_dir: Option<&Path>) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config, content_dir).await;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
