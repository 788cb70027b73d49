//! PEP (Policy Enforcement Point) helpers.
//!
//! - [`ConditionEnforcer`] — PEP object (list permissions → extract → compose)
//! - [`extract_allowed_conditions`] — Low-level: validated, prefix-stripped
//!   condition fragments for one user/action pair

pub mod enforcer;
pub mod extractor;

pub use enforcer::{ConditionEnforcer, EnforcerError};
pub use extractor::{ExtractError, extract_allowed_conditions};
