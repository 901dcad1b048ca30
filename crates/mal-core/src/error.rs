//! Core error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `CoreError` or wrap `CoreError` as one variant.  `mal-sim` does the latter.

use thiserror::Error;

use crate::HandlerId;

/// The error type for `mal-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("event '{event}' has no handler {handler}")]
    UnknownHandler {
        event:   &'static str,
        handler: HandlerId,
    },
}

/// Shorthand result type for `mal-core`.
pub type CoreResult<T> = Result<T, CoreError>;
