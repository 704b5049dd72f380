use thiserror::Error;

/// Errors that can occur while talking to the recipe API or hosting the page
#[derive(Error, Debug)]
pub enum FinderError {
    /// Transport failure or non-success HTTP status
    #[error("Failed to fetch: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Response body was not the JSON shape we expect
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Lookup by id returned no meal
    #[error("No meal found with id {0}")]
    MealNotFound(String),

    /// Client builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to write rendered output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
