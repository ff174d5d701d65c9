//! Content file writer.
//!
//! One pretty-printed JSON file per entity under a category directory.

use crate::generators::slug;
use crate::models::content::{PersistedGenre, PersistedMovie};
use crate::Result;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write an entity to `dir/filename`, creating `dir` if needed.
///
/// Existing files are overwritten in place; there is no temp-file rename,
/// so an interrupted write can leave a truncated file.
pub fn write_entity<T: Serialize>(dir: &Path, filename: &str, entity: &T) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(entity)?;

    fs::create_dir_all(dir)?;

    let path = dir.join(filename);
    let mut file = fs::File::create(&path)?;
    file.write_all(json.as_bytes())?;

    tracing::debug!("Wrote {:?}", path);
    Ok(path)
}

/// Write a movie as `movies_dir/{slug}-{id}.json`.
pub fn write_movie(movies_dir: &Path, movie: &PersistedMovie) -> Result<PathBuf> {
    write_entity(movies_dir, &slug::derive_filename(&movie.title, movie.id), movie)
}

/// Write a genre as `genres_dir/{slug}.json`.
pub fn write_genre(genres_dir: &Path, genre: &PersistedGenre) -> Result<PathBuf> {
    write_entity(genres_dir, &slug::genre_filename(&genre.slug), genre)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_entity_creates_nested_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("content").join("genres");

        let genre = PersistedGenre {
            id: 28,
            name: "Action".to_string(),
            slug: "action".to_string(),
            movie_count: None,
        };
        let path = write_genre(&dir, &genre).unwrap();

        assert_eq!(path, dir.join("action.json"));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "{\n  \"id\": 28,\n  \"name\": \"Action\",\n  \"slug\": \"action\"\n}"
        );
    }

    #[test]
    fn test_write_entity_overwrites() {
        let temp_dir = TempDir::new().unwrap();

        write_entity(temp_dir.path(), "x.json", &vec![1, 2, 3]).unwrap();
        let path = write_entity(temp_dir.path(), "x.json", &vec![4]).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "[\n  4\n]");
    }
}
