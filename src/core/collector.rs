//! Listing page collector.

use crate::services::tmdb::{CatalogItem, CatalogSource};
use crate::Result;
use std::time::Duration;

/// Fetch the given listing pages one after another and flatten their results.
///
/// Results keep page order. Sleeps `delay` after every page. Any page failure
/// aborts the whole collection.
pub async fn collect_pages<S: CatalogSource + ?Sized>(
    source: &S,
    pages: &[u32],
    delay: Duration,
) -> Result<Vec<CatalogItem>> {
    let mut items = Vec::new();

    for &page in pages {
        tracing::info!("Fetching page {}...", page);
        let listing = source.listing_page(page).await?;
        tracing::debug!("Page {}: {} results", page, listing.results.len());
        items.extend(listing.results);

        tokio::time::sleep(delay).await;
    }

    Ok(items)
}
