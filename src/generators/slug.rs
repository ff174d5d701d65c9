//! Slug and content filename generator.

use regex::Regex;
use std::sync::OnceLock;

/// Runs of characters that are not lowercase ASCII letters or digits.
fn non_slug_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid slug pattern"))
}

/// Derive a URL and filesystem safe slug from a title.
///
/// Lowercases, collapses every run of other characters into a single hyphen,
/// and strips leading/trailing hyphens. Titles with no ASCII letters or digits
/// yield an empty slug.
pub fn derive_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    non_slug_run()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Generate a movie filename.
///
/// Format: `${slug}-${id}.json`, or `${id}.json` when the title yields an
/// empty slug. The id keeps colliding slugs apart.
pub fn derive_filename(title: &str, id: u64) -> String {
    let slug = derive_slug(title);
    if slug.is_empty() {
        format!("{}.json", id)
    } else {
        format!("{}-{}.json", slug, id)
    }
}

/// Generate a genre filename.
///
/// Format: `${slug}.json`. Callers pass a non-empty slug.
pub fn genre_filename(slug: &str) -> String {
    format!("{}.json", slug)
}
