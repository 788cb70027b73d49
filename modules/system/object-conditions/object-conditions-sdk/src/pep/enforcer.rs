//! Policy Enforcement Point (`PEP`) object.
//!
//! [`ConditionEnforcer`] encapsulates the full PEP flow: list effective
//! permissions → extract allowed object conditions → compose them into one
//! [`CompositePredicate`] for the data-access layer.
//!
//! Constructed once during service initialisation with the policy-engine
//! client. The action, prefix and combinator are supplied per call, so a
//! single enforcer serves all conditional resources in a service.

use std::sync::Arc;

use condkit_predicate::{Combinator, CompositePredicate, ConditionParseError, build_query};

use crate::api::PolicyEngineClient;
use crate::pep::extractor::{ExtractError, extract_allowed_conditions};

/// Error from the PEP enforcement flow.
#[derive(Debug, thiserror::Error)]
pub enum EnforcerError {
    /// Condition extraction failed (malformed prefix, no matching grant, or
    /// upstream policy failure).
    #[error("condition extraction failed: {0}")]
    Extract(#[from] ExtractError),

    /// An extracted condition failed the comparison grammar.
    #[error("condition parsing failed: {0}")]
    Parse(#[from] ConditionParseError),
}

/// Policy Enforcement Point for attribute-based object conditions.
///
/// Holds the policy-engine client. Constructed once during service init;
/// cloneable and cheap to pass around (`Arc` inside).
///
/// # Example
///
/// ```ignore
/// use condkit_predicate::Combinator;
/// use object_conditions_sdk::ConditionEnforcer;
///
/// let enforcer = ConditionEnforcer::new(engine.clone());
///
/// let scope = enforcer
///     .scope_predicate("alice", "read", "r.obj.", Combinator::Or)
///     .await?;
/// ```
#[derive(Clone)]
pub struct ConditionEnforcer {
    engine: Arc<dyn PolicyEngineClient>,
}

impl ConditionEnforcer {
    /// Create a new enforcer.
    #[must_use]
    pub fn new(engine: Arc<dyn PolicyEngineClient>) -> Self {
        Self { engine }
    }

    /// The validated, prefix-stripped condition fragments for `user`
    /// performing `action`.
    ///
    /// # Errors
    ///
    /// See [`extract_allowed_conditions`].
    pub async fn allowed_conditions(
        &self,
        user: &str,
        action: &str,
        prefix: &str,
    ) -> Result<Vec<String>, ExtractError> {
        extract_allowed_conditions(self.engine.as_ref(), user, action, prefix).await
    }

    /// Execute the full PEP flow: extract the allowed conditions and compose
    /// them into one [`CompositePredicate`] under `combinator`.
    ///
    /// # Errors
    ///
    /// - [`EnforcerError::Extract`] if extraction fails
    /// - [`EnforcerError::Parse`] if any extracted condition fails the grammar
    pub async fn scope_predicate(
        &self,
        user: &str,
        action: &str,
        prefix: &str,
        combinator: Combinator,
    ) -> Result<CompositePredicate, EnforcerError> {
        let conditions = self.allowed_conditions(user, action, prefix).await?;
        Ok(build_query(&conditions, combinator)?)
    }
}

impl std::fmt::Debug for ConditionEnforcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionEnforcer").finish_non_exhaustive()
    }
}
