use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod options;
pub mod product;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use options::{NormalizeOptions, PriceStrategy};
pub use product::CanonicalProduct;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
