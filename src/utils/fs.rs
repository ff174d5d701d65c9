//! File system utilities.

use crate::Result;
use std::path::Path;

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Create `path` if needed and confirm files can be written inside it.
pub fn ensure_writable_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    ensure_directory(path)?;

    let marker = path.join(".films_vault_write_check");
    std::fs::write(&marker, b"")?;
    std::fs::remove_file(&marker)?;
    Ok(())
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
