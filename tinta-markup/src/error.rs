//! Error types for rule loading and rendering

use thiserror::Error;

/// Errors raised while loading the tag rule registry.
///
/// Any of these aborts the load; a partially built registry is never returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A rule source could not be read or deserialized
    #[error("rule source '{source_name}' is malformed: {message}")]
    MalformedSource {
        source_name: String,
        message: String,
    },
    /// A rule pattern failed to compile
    #[error("rule '{key}' has an invalid pattern: {message}")]
    InvalidPattern { key: String, message: String },
    /// A rule pattern matches the empty string and would never advance
    #[error("rule '{key}' matches the empty string")]
    EmptyMatch { key: String },
    /// A rule references a renderer that does not exist
    #[error("rule '{key}' references unknown renderer '{renderer}'")]
    UnknownRenderer { key: String, renderer: String },
    /// The requested backend name is not recognized
    #[error("unknown backend '{0}'")]
    UnknownBackend(String),
}

/// Recoverable errors raised while rendering a single chunk.
///
/// The assembler never propagates these; the failing chunk is emitted as
/// escaped source text instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The image resolver has no metadata for the referenced file
    #[error("no metadata available for image '{0}'")]
    ImageUnavailable(String),
    /// The syntax highlighter rejected the code block
    #[error("highlighting failed: {0}")]
    Highlight(String),
    /// The chunk exceeds the configured expansion bound
    #[error("chunk of {size} bytes exceeds the {limit} byte limit")]
    ChunkTooLarge { size: usize, limit: usize },
}
