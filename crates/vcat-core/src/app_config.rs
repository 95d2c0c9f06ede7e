use std::path::PathBuf;

use crate::options::{NormalizeOptions, PriceStrategy};
use crate::ConfigError;

/// Runtime configuration for a catalog extraction run.
///
/// Populated from `VCAT_*` environment variables (see [`crate::config`]).
/// `base_url` is optional here because the CLI may supply it as a flag;
/// the binary rejects a run where neither source provides one.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Storefront origin, e.g. `https://www.portsaid.com.ar`.
    pub base_url: Option<String>,
    /// Search endpoint path appended to `base_url`.
    pub search_endpoint: String,
    pub log_level: String,
    pub output_dir: PathBuf,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Total attempt budget per page request.
    pub max_retries: u32,
    /// Base delay in seconds for exponential backoff between attempts.
    pub retry_backoff_base_secs: u64,
    /// Sleep between page requests, bounding the request rate.
    pub request_delay_ms: u64,
    /// Hard pagination ceiling for unattended runs. `None` is unbounded.
    pub max_pages: Option<u32>,
    pub description_truncate_chars: usize,
    pub include_sizes: bool,
    pub price_strategy: PriceStrategy,
}

impl AppConfig {
    /// Normalization options derived from this configuration.
    #[must_use]
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            description_truncate_chars: self.description_truncate_chars,
            include_sizes: self.include_sizes,
            price_strategy: self.price_strategy,
        }
    }

    /// Resolves the storefront origin, preferring an explicit override
    /// (a CLI flag) over the environment-provided value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] naming `VCAT_BASE_URL`
    /// when neither source provides one.
    pub fn resolve_base_url(&self, override_url: Option<String>) -> Result<String, ConfigError> {
        override_url
            .or_else(|| self.base_url.clone())
            .ok_or_else(|| ConfigError::MissingEnvVar("VCAT_BASE_URL".to_string()))
    }
}
