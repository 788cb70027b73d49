//! Domain models for the object-conditions module.

use serde::{Deserialize, Serialize};

/// One effective permission granted to a user by the policy engine,
/// possibly derived through role hierarchies.
///
/// In the conditional-authorization use case the `object` component is not a
/// plain resource identifier but a condition expression carrying an agreed
/// prefix (e.g. `"r.obj.price < 25"`). The tuple is owned by the policy
/// engine; this SDK only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionTuple {
    /// User or role identifier the permission is granted to.
    pub subject: String,
    /// Resource identifier, or a prefixed condition expression.
    pub object: String,
    /// Operation name (e.g. `"read"`, `"write"`).
    pub action: String,
}

impl PermissionTuple {
    /// Create a permission tuple.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        object: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            object: object.into(),
            action: action.into(),
        }
    }
}
