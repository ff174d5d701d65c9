//! Listing item enrichment.

use crate::services::tmdb::{CatalogItem, CatalogSource, Credits, MovieDetails};
use crate::Result;

/// A listing item merged with its detail and credit payloads.
#[derive(Debug, Clone)]
pub struct EnrichedRecord {
    pub item: CatalogItem,
    pub details: MovieDetails,
    pub credits: Credits,
}

/// Fetch details, then credits, for one listing item.
pub async fn enrich<S: CatalogSource + ?Sized>(source: &S, item: CatalogItem) -> Result<EnrichedRecord> {
    let details = source.movie_details(item.id).await?;
    let credits = source.movie_credits(item.id).await?;

    Ok(EnrichedRecord {
        item,
        details,
        credits,
    })
}
