#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Object-conditions SDK
//!
//! This crate provides the public API for the `object_conditions` module:
//!
//! - [`PolicyEngineClient`] — client trait for the external policy engine
//! - [`PermissionTuple`] — effective-permission model
//! - [`PolicyEngineError`] — upstream failure types
//! - [`pep`] — PEP helpers ([`ConditionEnforcer`], [`extract_allowed_conditions`])
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use condkit_predicate::Combinator;
//! use object_conditions_sdk::{ConditionEnforcer, PolicyEngineClient};
//!
//! // Wrap the policy engine once, during init.
//! let enforcer = ConditionEnforcer::new(engine);
//!
//! // Raw condition fragments, prefix already stripped.
//! let conditions = enforcer.allowed_conditions("alice", "read", "r.obj.").await?;
//!
//! // Or the full flow: extraction plus predicate composition.
//! let scope = enforcer
//!     .scope_predicate("alice", "read", "r.obj.", Combinator::Or)
//!     .await?;
//! // `scope` goes to the data-access layer as a boolean filter tree.
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod pep;

// Re-export main types at crate root
pub use api::PolicyEngineClient;
pub use error::PolicyEngineError;
pub use models::PermissionTuple;
pub use pep::{ConditionEnforcer, EnforcerError, ExtractError, extract_allowed_conditions};
