//! TMDB API preflight check.

use super::CheckResult;
use crate::models::config::TmdbSettings;
use crate::services::tmdb::TmdbClient;

/// Check if TMDB API is accessible.
pub async fn check(settings: &TmdbSettings) -> CheckResult {
    match TmdbClient::new(settings) {
        Ok(client) => match client.verify_api_key().await {
            Ok(true) => CheckResult::ok("TMDB API", "connected"),
            Ok(false) => CheckResult::fail(
                "TMDB API",
                "invalid API key or unreachable",
                "Check your TMDB_API_KEY environment variable and network connection",
            ),
            Err(_) => CheckResult::fail(
                "TMDB API",
                "connection failed",
                "Check your network connection",
            ),
        },
        Err(_) => CheckResult::fail(
            "TMDB API",
            "API key not configured",
            "Set TMDB_API_KEY environment variable",
        ),
    }
}
