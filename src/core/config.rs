//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Address, site root and bundle names come from the Leptos options instead.

/// Default `Cache-Control: max-age` for the compiled bundle, in seconds
pub const DEFAULT_ASSET_MAX_AGE: u64 = 3600;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Static host configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive
    /// Example: info,bridge_landing=debug
    pub log_filter: String,

    /// Public URL of the site, emitted as the canonical link in the shell
    /// Example: https://bridge.example.com/
    pub canonical_url: Option<String>,

    /// `max-age` for files under the bundle directory
    pub asset_max_age: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("SITE_CANONICAL_URL").ok(),
            std::env::var("ASSET_MAX_AGE").ok(),
        )
    }

    fn from_vars(
        log_filter: Option<String>,
        canonical_url: Option<String>,
        asset_max_age: Option<String>,
    ) -> Self {
        let asset_max_age = match asset_max_age.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_ASSET_MAX_AGE,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = raw, "invalid ASSET_MAX_AGE, using default");
                DEFAULT_ASSET_MAX_AGE
            }),
        };

        Self {
            log_filter: log_filter
                .filter(|filter| !filter.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            canonical_url: canonical_url.filter(|url| !url.trim().is_empty()),
            asset_max_age,
        }
    }

    /// Check if a canonical URL is configured
    pub fn has_canonical_url(&self) -> bool {
        self.canonical_url.is_some()
    }

    /// `Cache-Control` header value for bundle files
    pub fn asset_cache_control(&self) -> String {
        format!("public, max-age={}", self.asset_max_age)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Parsing Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.log_filter, "info");
        assert!(config.canonical_url.is_none());
        assert_eq!(config.asset_max_age, DEFAULT_ASSET_MAX_AGE);
        assert!(!config.has_canonical_url());
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_vars(
            Some("debug".to_string()),
            Some("https://bridge.example.com/".to_string()),
            Some("86400".to_string()),
        );

        assert_eq!(config.log_filter, "debug");
        assert_eq!(
            config.canonical_url,
            Some("https://bridge.example.com/".to_string())
        );
        assert_eq!(config.asset_max_age, 86400);
    }

    #[test]
    fn test_invalid_max_age_falls_back() {
        let config = Config::from_vars(None, None, Some("one day".to_string()));
        assert_eq!(config.asset_max_age, DEFAULT_ASSET_MAX_AGE);

        let config = Config::from_vars(None, None, Some("-5".to_string()));
        assert_eq!(config.asset_max_age, DEFAULT_ASSET_MAX_AGE);
    }

    #[test]
    fn test_max_age_is_trimmed() {
        let config = Config::from_vars(None, None, Some(" 60 ".to_string()));
        assert_eq!(config.asset_max_age, 60);
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let config = Config::from_vars(
            Some("  ".to_string()),
            Some("".to_string()),
            Some("".to_string()),
        );

        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(!config.has_canonical_url());
        assert_eq!(config.asset_max_age, DEFAULT_ASSET_MAX_AGE);
    }

    #[test]
    fn test_asset_cache_control() {
        let config = Config::from_vars(None, None, Some("120".to_string()));
        assert_eq!(config.asset_cache_control(), "public, max-age=120");
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment; only check it doesn't fail
        let config = Config::from_env();
        assert!(!config.log_filter.is_empty());
    }
}
