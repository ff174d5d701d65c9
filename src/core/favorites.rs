//! Favorites store.
//!
//! A single JSON array file holding every favorite. Each change reads the
//! whole list and rewrites it.

use crate::models::favorite::Favorite;
use crate::Result;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed favorites list.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// Open a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all favorites; a missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Favorite>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Check whether a movie is a favorite.
    pub fn is_favorite(&self, id: u64) -> Result<bool> {
        Ok(self.load()?.iter().any(|f| f.id == id))
    }

    /// Add or remove a movie, returning whether it is now a favorite.
    pub fn toggle(&self, id: u64, title: &str, poster: Option<&str>) -> Result<bool> {
        let mut favorites = self.load()?;

        let now_favorite = if favorites.iter().any(|f| f.id == id) {
            favorites.retain(|f| f.id != id);
            false
        } else {
            favorites.push(Favorite {
                id,
                title: title.to_string(),
                poster: poster.map(str::to_string),
                added_at: Utc::now(),
            });
            true
        };

        self.save(&favorites)?;
        tracing::debug!("Favorite {} ({}) -> {}", id, title, now_favorite);
        Ok(now_favorite)
    }

    fn save(&self, favorites: &[Favorite]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(favorites)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FavoritesStore::new(temp_dir.path().join("favorites.json"));

        assert!(store.load().unwrap().is_empty());
        assert!(!store.is_favorite(550).unwrap());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let temp_dir = TempDir::new().unwrap();
        let store = FavoritesStore::new(temp_dir.path().join("nested").join("favorites.json"));

        assert!(store.toggle(550, "Fight Club", Some("/p.jpg")).unwrap());
        assert!(store.toggle(13, "Forrest Gump", None).unwrap());
        assert!(store.is_favorite(550).unwrap());

        let favorites = store.load().unwrap();
        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites[0].title, "Fight Club");
        assert_eq!(favorites[0].poster.as_deref(), Some("/p.jpg"));

        assert!(!store.toggle(550, "Fight Club", Some("/p.jpg")).unwrap());
        let favorites = store.load().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, 13);
    }

    #[test]
    fn test_stored_shape() {
        let temp_dir = TempDir::new().unwrap();
        let store = FavoritesStore::new(temp_dir.path().join("favorites.json"));
        store.toggle(550, "Fight Club", None).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        let entry = &raw[0];
        assert_eq!(entry["id"], 550);
        assert_eq!(entry["title"], "Fight Club");
        assert!(entry["poster"].is_null());
        assert!(entry["addedAt"].is_string());
    }
}
