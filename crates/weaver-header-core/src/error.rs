//! Error types for the header block.

use miette::Diagnostic;

use crate::platform::PlatformError;

/// Errors surfaced by header block operations.
///
/// Malformed block data never produces an error; normalization absorbs it.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum HeaderError {
    /// A level lookup missed the configured catalog.
    #[error("heading level {level} is not in the configured catalog")]
    #[diagnostic(
        code(weaver_header::level_not_found),
        help("stored levels must be normalized against the active configuration")
    )]
    LevelNotFound { level: u8 },

    /// The host platform failed to create or update an element.
    #[error("platform error: {0}")]
    #[diagnostic(code(weaver_header::platform))]
    Platform(#[from] PlatformError),

    /// Tool configuration could not be resolved.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration resolution errors, raised once at block construction.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("`levels` does not contain any heading level between 1 and 6")]
    #[diagnostic(
        code(weaver_header::config::empty_catalog),
        help("list at least one of 1, 2, 3, 4, 5, 6 in `levels`, or omit it")
    )]
    EmptyCatalog,

    #[error("`defaultLevel` {0} is not a heading level")]
    #[diagnostic(code(weaver_header::config::default_level))]
    InvalidDefaultLevel(i64),

    #[error("invalid header tool configuration: {0}")]
    #[diagnostic(code(weaver_header::config::parse))]
    Parse(#[from] serde_json::Error),
}
