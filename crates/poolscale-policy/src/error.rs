//! Policy error types.

use thiserror::Error;

/// Result type alias for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Errors that can occur while resolving parameters for a decision.
///
/// All variants are configuration errors: fatal, surfaced immediately,
/// never silently defaulted. The caller must fix its configuration.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("parameter `{name}` provider failed: {source}")]
    Param {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("min_workers ({min}) exceeds max_workers ({max})")]
    Bounds { min: u32, max: u32 },
}
