//! Content generation driver.
//!
//! Genres: one request, one file per genre.
//! Movies: collect listing pages, then for each item fetch details and
//! credits, normalize, and write. A failing item is logged and skipped; a
//! failing listing page aborts the run.

use crate::core::collector::collect_pages;
use crate::core::enricher::enrich;
use crate::core::transform::{normalize_genre, normalize_movie};
use crate::generators::content::{write_genre, write_movie};
use crate::models::config::GeneratorConfig;
use crate::services::tmdb::{CatalogItem, CatalogSource};
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// A movie that could not be generated.
#[derive(Debug, Clone)]
pub struct ItemFailure {
    pub id: u64,
    pub title: String,
    pub reason: String,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Genre files written.
    pub genres: Vec<PathBuf>,
    /// Movie files written.
    pub movies: Vec<PathBuf>,
    /// Movies skipped because of an error.
    pub failures: Vec<ItemFailure>,
}

impl GenerationReport {
    /// Total files written.
    pub fn written(&self) -> usize {
        self.genres.len() + self.movies.len()
    }

    fn merge(&mut self, other: GenerationReport) {
        self.genres.extend(other.genres);
        self.movies.extend(other.movies);
        self.failures.extend(other.failures);
    }
}

/// Content generator.
pub struct Generator<S> {
    source: S,
    config: GeneratorConfig,
    show_progress: bool,
}

impl<S: CatalogSource> Generator<S> {
    /// Create a generator over a catalog source.
    pub fn new(source: S, config: GeneratorConfig) -> Self {
        Self {
            source,
            config,
            show_progress: false,
        }
    }

    /// Draw a progress bar while processing movies.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Underlying catalog source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Generate genres, then movies.
    pub async fn generate_all(&self) -> Result<GenerationReport> {
        let mut report = self.generate_genres().await?;
        report.merge(self.generate_movies().await?);

        tracing::info!(
            "All content generated: {} files, {} failures",
            report.written(),
            report.failures.len()
        );
        Ok(report)
    }

    /// Write one file per provider genre.
    pub async fn generate_genres(&self) -> Result<GenerationReport> {
        let dir = self.config.genres_dir();
        tracing::info!("Generating genre content in {}", dir.display());

        let genres = self.source.genres().await?;
        let mut report = GenerationReport::default();

        for genre in genres {
            let genre = normalize_genre(genre);
            let path = write_genre(&dir, &genre)?;
            tracing::info!("Generated genre: {}", genre.name);
            report.genres.push(path);
        }

        Ok(report)
    }

    /// Write one file per listed movie, skipping items that fail.
    pub async fn generate_movies(&self) -> Result<GenerationReport> {
        let dir = self.config.movies_dir();
        tracing::info!("Generating movie content in {}", dir.display());

        let items = collect_pages(&self.source, &self.config.pages, self.config.page_delay).await?;
        tracing::info!("Processing {} movies...", items.len());

        let pb = self.progress_bar(items.len() as u64);
        let total = items.len();
        let mut report = GenerationReport::default();

        for (idx, item) in items.into_iter().enumerate() {
            let id = item.id;
            let title = item.title.clone();
            pb.set_message(title.clone());

            match self.process_movie(item).await {
                Ok(path) => {
                    tracing::info!(
                        "Generated: {} ({}/{})",
                        path.file_name().unwrap_or_default().to_string_lossy(),
                        idx + 1,
                        total
                    );
                    report.movies.push(path);
                    tokio::time::sleep(self.config.item_delay).await;
                }
                Err(e) => {
                    tracing::error!("Error processing movie {}: {}", title, e);
                    report.failures.push(ItemFailure {
                        id,
                        title,
                        reason: e.to_string(),
                    });
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(report)
    }

    async fn process_movie(&self, item: CatalogItem) -> Result<PathBuf> {
        let record = enrich(&self.source, item).await?;
        let movie = normalize_movie(record);
        write_movie(&self.config.movies_dir(), &movie)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        pb
    }
}
