//! Generate command implementation.
//!
//! Implements the `generate all`, `generate movies` and `generate genres`
//! subcommands.

use crate::cli::args::{GenerateArgs, GenerateTarget};
use crate::core::generator::{GenerationReport, Generator};
use crate::models::config::{Config, GeneratorConfig};
use crate::services::tmdb::TmdbClient;
use crate::Result;
use colored::Colorize;

/// Resolve the run configuration: CLI flags over config file values.
pub fn generator_config(config: &Config, args: &GenerateArgs) -> GeneratorConfig {
    let mut gen_config = GeneratorConfig::from(&config.generation);
    if let Some(ref dir) = args.content_dir {
        gen_config.content_dir = dir.clone();
    }
    if let Some(ref pages) = args.pages {
        gen_config.pages = pages.clone();
    }
    gen_config
}

/// Execute the generate command.
pub async fn generate(
    config: &Config,
    target: &GenerateTarget,
    gen_config: GeneratorConfig,
) -> Result<GenerationReport> {
    println!("{}", "🎬 Generating content...".bold().cyan());
    println!();
    println!("  {} {}", "Content dir:".bold(), gen_config.content_dir.display());
    println!("  {} {}", "Listing:".bold(), config.tmdb.listing);
    println!("  {} {:?}", "Pages:".bold(), gen_config.pages);
    println!();

    let client = TmdbClient::new(&config.tmdb)?;
    let generator = Generator::new(client, gen_config).with_progress(true);

    let report = match target {
        GenerateTarget::All(_) => generator.generate_all().await?,
        GenerateTarget::Movies(_) => generator.generate_movies().await?,
        GenerateTarget::Genres(_) => generator.generate_genres().await?,
    };

    print_summary(&report);
    Ok(report)
}

fn print_summary(report: &GenerationReport) {
    println!();
    println!("{}", "📋 Generation Summary".bold().green());
    println!("  {} {}", "Genres written:".bold(), report.genres.len());
    println!("  {} {}", "Movies written:".bold(), report.movies.len());
    println!("  {} {}", "Failed:".bold(), report.failures.len());

    if !report.failures.is_empty() {
        println!();
        println!("{}", "⚠️  Failed Movies:".bold().yellow());
        for failure in &report.failures {
            println!(
                "  {} ({}) - {}",
                failure.title.red(),
                failure.id,
                failure.reason
            );
        }
    }
}
