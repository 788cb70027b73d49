//! Public client trait for the external policy engine.

use async_trait::async_trait;

use crate::error::PolicyEngineError;
use crate::models::PermissionTuple;

/// Client trait for the policy engine's permission-listing capability.
///
/// Implementations wrap whatever backs the policy store — an in-process
/// engine, an RPC gateway, a disk-backed model. Consumers treat the returned
/// set as authoritative and read-only:
///
/// ```ignore
/// let permissions = engine.list_effective_permissions("alice").await?;
/// ```
#[async_trait]
pub trait PolicyEngineClient: Send + Sync {
    /// List every permission effectively granted to `user`, including
    /// permissions derived through role hierarchies.
    ///
    /// Tuple order is meaningful: downstream extraction preserves it.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if the policy store cannot be reached
    /// - `Internal` for unexpected engine failures
    async fn list_effective_permissions(
        &self,
        user: &str,
    ) -> Result<Vec<PermissionTuple>, PolicyEngineError>;
}
