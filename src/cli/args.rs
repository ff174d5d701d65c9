//! Command line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Films Vault - Generate static movie content from TMDB
#[derive(Parser, Debug)]
#[command(name = "films-vault")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate content files
    Generate {
        #[command(subcommand)]
        target: GenerateTarget,
    },

    /// Check content files against the site schema
    Validate {
        /// Content root (holds movies/ and genres/)
        #[arg(long, value_name = "DIR")]
        content_dir: Option<PathBuf>,
    },

    /// Search movies by title
    Search {
        /// Title to search for
        #[arg(value_name = "QUERY")]
        query: String,

        /// Result page
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// List movies of one genre
    Genre {
        /// TMDB genre ID
        #[arg(value_name = "ID")]
        id: u64,

        /// Result page
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Browse movies with filters
    Discover {
        /// Genre ID(s), comma separated
        #[arg(short = 'g', long)]
        genre: Option<String>,

        /// Primary release year
        #[arg(short = 'y', long)]
        year: Option<String>,

        /// Minimum vote average
        #[arg(long)]
        min_rating: Option<String>,

        /// Maximum vote average
        #[arg(long)]
        max_rating: Option<String>,

        /// Sort order (e.g., popularity.desc, vote_average.desc)
        #[arg(long)]
        sort_by: Option<String>,

        /// Include adult titles
        #[arg(long)]
        include_adult: bool,

        /// Result page
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Manage favorite movies
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GenerateTarget {
    /// Generate genres, then movies
    All(GenerateArgs),

    /// Generate movie files only
    Movies(GenerateArgs),

    /// Generate genre files only
    Genres(GenerateArgs),
}

impl GenerateTarget {
    /// Shared arguments of every target.
    pub fn args(&self) -> &GenerateArgs {
        match self {
            GenerateTarget::All(args) | GenerateTarget::Movies(args) | GenerateTarget::Genres(args) => {
                args
            }
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Content root (holds movies/ and genres/)
    #[arg(long, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Listing pages to fetch, comma separated (e.g., 1,2,3)
    #[arg(long, value_delimiter = ',')]
    pub pages: Option<Vec<u32>>,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// List favorite movies
    List,

    /// Add a movie to favorites, or remove it if already there
    Toggle {
        /// TMDB movie ID
        #[arg(value_name = "ID")]
        id: u64,

        /// Movie title
        #[arg(long)]
        title: String,

        /// Poster path (e.g., /abc.jpg)
        #[arg(long)]
        poster: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_pages() {
        let cli = Cli::parse_from([
            "films-vault",
            "generate",
            "movies",
            "--pages",
            "1,2,5",
            "--content-dir",
            "/tmp/content",
        ]);

        match cli.command {
            Commands::Generate { target } => {
                assert!(matches!(target, GenerateTarget::Movies(_)));
                assert_eq!(target.args().pages, Some(vec![1, 2, 5]));
                assert_eq!(target.args().content_dir, Some(PathBuf::from("/tmp/content")));
            }
            _ => panic!("Expected Generate"),
        }
    }

    #[test]
    fn test_parse_genre() {
        let cli = Cli::parse_from(["films-vault", "genre", "28", "--page", "3"]);
        match cli.command {
            Commands::Genre { id, page } => {
                assert_eq!(id, 28);
                assert_eq!(page, 3);
            }
            _ => panic!("Expected Genre"),
        }
    }

    #[test]
    fn test_parse_favorites_toggle() {
        let cli = Cli::parse_from(["films-vault", "-v", "favorites", "toggle", "550", "--title", "Fight Club"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Favorites {
                action: FavoritesAction::Toggle { id, title, poster },
            } => {
                assert_eq!(id, 550);
                assert_eq!(title, "Fight Club");
                assert_eq!(poster, None);
            }
            _ => panic!("Expected Favorites Toggle"),
        }
    }
}
