//! Content directory preflight check.

use super::CheckResult;
use crate::utils::fs::ensure_writable_dir;
use std::path::Path;

/// Check that the content directory exists (or can be created) and is writable.
pub fn check(dir: &Path) -> CheckResult {
    match ensure_writable_dir(dir) {
        Ok(()) => CheckResult::ok("Content dir", &dir.display().to_string()),
        Err(e) => CheckResult::fail(
            "Content dir",
            &format!("{} not writable: {}", dir.display(), e),
            "Pass a writable directory with --content-dir",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writable_dir_passes() {
        let temp_dir = TempDir::new().unwrap();
        let result = check(&temp_dir.path().join("content"));
        assert!(result.success);
    }

    #[test]
    fn test_file_in_the_way_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("content");
        std::fs::write(&blocker, "not a dir").unwrap();

        let result = check(&blocker);
        assert!(!result.success);
        assert!(result.hint.is_some());
    }
}
