//! Allowed-object-condition extraction.
//!
//! Scans a user's effective permissions for one action and turns the
//! condition-bearing object fields into prefix-stripped condition fragments.
//!
//! ## Prefix contract
//!
//! Any permission whose object field is meant as a filter condition encodes
//! it as `<prefix><field> <op> <value>`. The prefix is a convention between
//! the policy author and the caller; a matching permission that violates it
//! means the policy data itself is inconsistent with the expected schema for
//! this action class, so extraction fails as a whole (fail-closed, no partial
//! result).

use crate::api::PolicyEngineClient;
use crate::error::PolicyEngineError;

/// Error from allowed-object-condition extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A permission matching the action does not carry the required object
    /// prefix. Indicates inconsistent policy data; never retried.
    #[error("object condition does not carry the required prefix")]
    ObjectCondition,

    /// Extraction completed but found no permission for the user/action pair.
    /// A legitimate outcome (no conditional grant exists), kept distinct from
    /// the malformed-data case so callers can branch on it.
    #[error("no object conditions matched the requested action")]
    EmptyCondition,

    /// The permission-listing call itself failed. Propagated unchanged.
    #[error(transparent)]
    Policy(#[from] PolicyEngineError),
}

/// Extract the allowed object conditions for `user` performing `action`.
///
/// Selects the user's effective permissions whose action component equals
/// `action` (the engine already scopes results to `user`), verifies that
/// every selected object field starts with `prefix`, and returns the
/// remainders with the prefix stripped, preserving engine order.
///
/// Validation runs before any stripping: either the whole selection passes
/// the prefix contract or the extraction fails with no partial result.
///
/// # Errors
///
/// - [`ExtractError::ObjectCondition`] if any matching permission violates
///   the prefix contract
/// - [`ExtractError::EmptyCondition`] if no permission matches the action
/// - [`ExtractError::Policy`] if the permission-listing call fails
pub async fn extract_allowed_conditions(
    engine: &dyn PolicyEngineClient,
    user: &str,
    action: &str,
    prefix: &str,
) -> Result<Vec<String>, ExtractError> {
    let permissions = engine.list_effective_permissions(user).await?;

    let matching: Vec<_> = permissions
        .iter()
        .filter(|tuple| tuple.action == action)
        .collect();

    if let Some(bad) = matching.iter().find(|tuple| !tuple.object.starts_with(prefix)) {
        tracing::warn!(
            object = %bad.object,
            action,
            prefix,
            "object condition violates the prefix contract, possible policy data inconsistency",
        );
        return Err(ExtractError::ObjectCondition);
    }

    let conditions: Vec<String> = matching
        .iter()
        .filter_map(|tuple| tuple.object.strip_prefix(prefix))
        .map(str::to_owned)
        .collect();

    if conditions.is_empty() {
        return Err(ExtractError::EmptyCondition);
    }

    Ok(conditions)
}
