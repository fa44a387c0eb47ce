use thiserror::Error;

/// Failures while loading the game catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate game id `{0}` in catalog")]
    DuplicateId(String),
}

/// Failures while loading or validating site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}
