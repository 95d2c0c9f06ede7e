use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::options::PriceStrategy;
use crate::ConfigError;

/// Default `User-Agent`: a realistic desktop browser profile. Some
/// storefront CDNs reject obviously non-browser agents.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Default VTEX intelligent-search endpoint path.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "/api/io/_v/api/intelligent-search/product_search";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any `VCAT_*` variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in
/// the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any `VCAT_*` variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => match raw.as_str() {
                "1" | "true" => Ok(true),
                "0" | "false" => Ok(false),
                other => Err(ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: format!("expected true/false, got \"{other}\""),
                }),
            },
        }
    };

    let base_url = lookup("VCAT_BASE_URL").ok();
    let search_endpoint = or_default("VCAT_SEARCH_ENDPOINT", DEFAULT_SEARCH_ENDPOINT);
    let log_level = or_default("VCAT_LOG_LEVEL", "info");
    let output_dir = PathBuf::from(or_default("VCAT_OUTPUT_DIR", "./output"));
    let user_agent = or_default("VCAT_USER_AGENT", DEFAULT_USER_AGENT);

    let request_timeout_secs = parse_u64("VCAT_REQUEST_TIMEOUT_SECS", "10")?;
    let max_retries = parse_u32("VCAT_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("VCAT_RETRY_BACKOFF_BASE_SECS", "1")?;
    let request_delay_ms = parse_u64("VCAT_REQUEST_DELAY_MS", "300")?;

    let max_pages = match lookup("VCAT_MAX_PAGES") {
        Err(_) => None,
        Ok(raw) => Some(raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: "VCAT_MAX_PAGES".to_string(),
            reason: e.to_string(),
        })?),
    };

    let description_truncate_chars = parse_usize("VCAT_DESCRIPTION_TRUNCATE_CHARS", "500")?;
    let include_sizes = parse_bool("VCAT_INCLUDE_SIZES", true)?;
    let price_strategy = or_default("VCAT_PRICE_STRATEGY", "offer-chain")
        .parse::<PriceStrategy>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "VCAT_PRICE_STRATEGY".to_string(),
            reason,
        })?;

    Ok(AppConfig {
        base_url,
        search_endpoint,
        log_level,
        output_dir,
        user_agent,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_secs,
        request_delay_ms,
        max_pages,
        description_truncate_chars,
        include_sizes,
        price_strategy,
    })
}
