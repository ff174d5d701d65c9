//! Content collection loader.
//!
//! Reads content files back the way the static site does: every `*.json` file
//! in a collection directory must match its schema, or the whole load fails.

use crate::core::schema::{self, Shape};
use crate::models::content::{Collection, PersistedGenre, PersistedMovie};
use crate::utils::fs::{ensure_directory, get_extension};
use crate::Result;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List `*.json` files directly inside `dir`, sorted by name.
pub fn content_files(dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_directory(dir)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| crate::Error::other(e.to_string()))?;
        let path = entry.path();
        if entry.file_type().is_file() && get_extension(path).as_deref() == Some("json") {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Load one content file, checking it against `shape` first.
pub fn load_file<T: DeserializeOwned>(path: &Path, shape: &Shape) -> Result<T> {
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    let violations = schema::validate(&value, shape);
    if !violations.is_empty() {
        return Err(crate::Error::Schema {
            path: path.display().to_string(),
            violations,
        });
    }

    serde_json::from_value(value).map_err(|source| crate::Error::Decode {
        path: path.display().to_string(),
        source,
    })
}

/// Load all movie files under `content_dir/movies`.
pub fn load_movies(content_dir: &Path) -> Result<Vec<PersistedMovie>> {
    load_collection(content_dir, Collection::Movies, &schema::movie_schema())
}

/// Load all genre files under `content_dir/genres`.
pub fn load_genres(content_dir: &Path) -> Result<Vec<PersistedGenre>> {
    load_collection(content_dir, Collection::Genres, &schema::genre_schema())
}

fn load_collection<T: DeserializeOwned>(
    content_dir: &Path,
    collection: Collection,
    shape: &Shape,
) -> Result<Vec<T>> {
    let dir = content_dir.join(collection.dir_name());
    let files = content_files(&dir)?;
    tracing::debug!("Loading {} {} files", files.len(), collection);

    files.iter().map(|path| load_file(path, shape)).collect()
}
