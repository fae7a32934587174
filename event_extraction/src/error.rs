//! Errors raised while configuring or running event extraction.

use thiserror::Error;

/// Errors from extraction and configuration.
///
/// A sentence without a trigger is not an error; extraction reports it
/// as `None`.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("parser error: {0}")]
    Parser(String),

    #[error("parser returned {found} parsed sentences for a batch of {expected}")]
    ParseCountMismatch { expected: usize, found: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("dependency label `{label}` is listed in both {first} and {second} tags")]
    OverlappingLabel {
        label: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("trigger label `{label}` is also listed in {role} tags")]
    TriggerLabelReused { label: String, role: &'static str },

    #[error("trigger tag set is empty")]
    EmptyTriggerTags,
}
