use thiserror::Error;

/// Errors that can occur at the edges of a recipe import.
///
/// Extraction and normalization themselves never fail; these cover the
/// end-to-end import, payload serialization and configuration.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The document yielded no ingredient lines
    #[error("No ingredients found in recipe '{title}'")]
    NoIngredients { title: String },

    /// Failed to serialize the AFX payload
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to read the HTML input
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
