//! Provider record to content file transformation.

use crate::core::enricher::EnrichedRecord;
use crate::generators::slug::derive_slug;
use crate::models::content::{
    CastEntry, CrewEntry, GenreRef, MovieCredits, PersistedGenre, PersistedMovie,
};
use crate::services::tmdb::{CastMember, CrewMember, Genre};

/// Maximum cast entries kept per movie.
pub const MAX_CAST: usize = 10;

/// Maximum crew entries kept per movie.
pub const MAX_CREW: usize = 10;

/// Crew jobs kept in content files.
pub const KEY_CREW_JOBS: &[&str] = &["Director", "Producer", "Screenplay", "Story"];

/// Build a movie content record from an enriched provider record.
///
/// Detail fields win over listing fields; the listing item only fills gaps.
/// Provider ordering of cast and crew is kept.
pub fn normalize_movie(record: EnrichedRecord) -> PersistedMovie {
    let EnrichedRecord {
        item,
        details,
        credits,
    } = record;

    let title = details.title;
    let original_title = details
        .original_title
        .or(item.original_title)
        .unwrap_or_else(|| title.clone());

    PersistedMovie {
        id: details.id,
        original_title,
        overview: details.overview.or(item.overview).unwrap_or_default(),
        poster_path: non_empty(details.poster_path.or(item.poster_path)),
        backdrop_path: non_empty(details.backdrop_path.or(item.backdrop_path)),
        release_date: details.release_date.or(item.release_date).unwrap_or_default(),
        vote_average: details.vote_average.or(item.vote_average).unwrap_or_default(),
        vote_count: details.vote_count.or(item.vote_count).unwrap_or_default(),
        runtime: details.runtime,
        budget: details.budget.unwrap_or_default(),
        revenue: details.revenue.unwrap_or_default(),
        genres: details.genres.into_iter().map(genre_ref).collect(),
        credits: MovieCredits {
            cast: trim_cast(credits.cast.into_iter().map(cast_entry)),
            crew: trim_crew(credits.crew.into_iter().map(crew_entry)),
        },
        popularity: details.popularity.or(item.popularity).unwrap_or_default(),
        status: details.status.unwrap_or_default(),
        tagline: details.tagline,
        homepage: details.homepage,
        imdb_id: details.imdb_id,
        title,
    }
}

/// Re-apply credit trimming and null-defaulting to an existing record.
///
/// `renormalize(normalize_movie(r)) == normalize_movie(r)`.
pub fn renormalize(mut movie: PersistedMovie) -> PersistedMovie {
    movie.poster_path = non_empty(movie.poster_path.take());
    movie.backdrop_path = non_empty(movie.backdrop_path.take());

    let credits = std::mem::take(&mut movie.credits);
    movie.credits = MovieCredits {
        cast: trim_cast(credits.cast.into_iter().map(|c| CastEntry {
            profile_path: non_empty(c.profile_path),
            ..c
        })),
        crew: trim_crew(credits.crew.into_iter().map(|c| CrewEntry {
            profile_path: non_empty(c.profile_path),
            ..c
        })),
    };

    movie
}

/// Build a genre content record.
///
/// Names with no ASCII letters or digits get the slug `genre-{id}`.
pub fn normalize_genre(genre: Genre) -> PersistedGenre {
    let slug = match derive_slug(&genre.name) {
        slug if slug.is_empty() => format!("genre-{}", genre.id),
        slug => slug,
    };

    PersistedGenre {
        slug,
        id: genre.id,
        name: genre.name,
        movie_count: None,
    }
}

/// First `MAX_CAST` entries in billing order.
fn trim_cast(cast: impl Iterator<Item = CastEntry>) -> Vec<CastEntry> {
    cast.take(MAX_CAST).collect()
}

/// First `MAX_CREW` entries with a key job, after filtering.
fn trim_crew(crew: impl Iterator<Item = CrewEntry>) -> Vec<CrewEntry> {
    crew.filter(|c| KEY_CREW_JOBS.contains(&c.job.as_str()))
        .take(MAX_CREW)
        .collect()
}

fn cast_entry(member: CastMember) -> CastEntry {
    CastEntry {
        id: member.id,
        name: member.name,
        character: member.character.unwrap_or_default(),
        profile_path: non_empty(member.profile_path),
        order: member.order.unwrap_or_default(),
    }
}

fn crew_entry(member: CrewMember) -> CrewEntry {
    CrewEntry {
        id: member.id,
        name: member.name,
        job: member.job,
        department: member.department,
        profile_path: non_empty(member.profile_path),
    }
}

fn genre_ref(genre: Genre) -> GenreRef {
    GenreRef {
        id: genre.id,
        name: genre.name,
    }
}

/// Image paths are either a non-empty string or `None`.
fn non_empty(path: Option<String>) -> Option<String> {
    path.filter(|p| !p.is_empty())
}
