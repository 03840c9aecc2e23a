//! Error handling for the authority-signal engine.
//! One error enum per subsystem, `thiserror` only, rolled up into [`AuthorityError`].

pub mod config_error;
pub mod intent_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use intent_error::IntentError;
pub use validation_error::ValidationError;

/// Top-level error. Only configuration, string parsing and build-time
/// validation can fail; retrieval and formatting never do.
#[derive(Debug, thiserror::Error)]
pub enum AuthorityError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Intent(#[from] IntentError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AuthorityResult<T> = Result<T, AuthorityError>;
