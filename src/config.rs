//! Service configuration.
//!
//! Command-line flags (with environment fallbacks) for the binary, and the engine
//! constants that shape pagination and the candidate window.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-search", version, about = "Product catalog search service")]
pub struct Cli {
    /// Address the HTTP server binds to.
    #[arg(long, env = "CATALOG_SEARCH_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// JSON array of products loaded into the in-memory catalog at startup.
    #[arg(long, env = "CATALOG_SEARCH_SEED")]
    pub catalog: Option<PathBuf>,

    /// JSON file replacing the built-in synonym and boost tables.
    #[arg(long, env = "CATALOG_SEARCH_VOCABULARY")]
    pub vocabulary: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Capacity of the query log channel. Entries beyond it are dropped.
    #[arg(long, default_value_t = 1024)]
    pub analytics_buffer: usize,
}

/// Engine constants. Injected into the engine so tests can shrink the window.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub default_page_size: usize,
    pub max_page_size: usize,
    /// Candidates fetched per requested page slot.
    pub window_multiplier: usize,
    /// Hard cap on candidates fetched and scored per request.
    pub max_window: usize,
    /// Queries shorter than this (in characters, after trimming) return nothing.
    pub min_query_chars: usize,
    /// Image used for products without any picture.
    pub placeholder_image: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_page_size: 12,
            max_page_size: 50,
            window_multiplier: 3,
            max_window: 60,
            min_query_chars: 2,
            placeholder_image: "/images/placeholder.png".to_string(),
        }
    }
}

impl SearchSettings {
    /// Clamps a requested page size into `[1, max_page_size]`; absent means the default.
    pub fn clamp_page_size(&self, requested: Option<i64>) -> usize {
        match requested {
            Some(size) => size.clamp(1, self.max_page_size as i64) as usize,
            None => self.default_page_size,
        }
    }

    /// `min(page_size × window_multiplier, max_window)`.
    pub fn candidate_window(&self, page_size: usize) -> usize {
        page_size
            .saturating_mul(self.window_multiplier)
            .min(self.max_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page_size() {
        let settings = SearchSettings::default();

        assert_eq!(settings.clamp_page_size(None), 12);
        assert_eq!(settings.clamp_page_size(Some(0)), 1);
        assert_eq!(settings.clamp_page_size(Some(-4)), 1);
        assert_eq!(settings.clamp_page_size(Some(20)), 20);
        assert_eq!(settings.clamp_page_size(Some(500)), 50);
    }

    #[test]
    fn test_candidate_window_is_capped() {
        let settings = SearchSettings::default();

        assert_eq!(settings.candidate_window(1), 3);
        assert_eq!(settings.candidate_window(12), 36);
        assert_eq!(settings.candidate_window(20), 60);
        assert_eq!(settings.candidate_window(50), 60);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["catalog-search"]).unwrap();

        assert_eq!(cli.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert!(cli.catalog.is_none());
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.analytics_buffer, 1024);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "catalog-search",
            "--bind",
            "0.0.0.0:9000",
            "--catalog",
            "seed.json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.bind.port(), 9000);
        assert_eq!(cli.catalog, Some(PathBuf::from("seed.json")));
        assert_eq!(cli.log_level, "debug");
    }
}
