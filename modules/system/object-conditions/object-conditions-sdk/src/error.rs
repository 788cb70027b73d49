//! Error types for the object-conditions module.

use thiserror::Error;

/// Errors surfaced by the policy engine's permission-listing call.
///
/// These represent infrastructure/transport failures only. "No conditional
/// grant exists" is not an engine error — it is reported by the extractor as
/// [`crate::pep::ExtractError::EmptyCondition`].
#[derive(Debug, Error)]
pub enum PolicyEngineError {
    /// The policy engine is not reachable or not ready.
    #[error("policy engine unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred while listing permissions.
    #[error("internal error: {0}")]
    Internal(String),
}
