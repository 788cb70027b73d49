#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Backend-agnostic query predicates for attribute-based authorization.
//!
//! The crate has two halves:
//!
//! - [`predicate`] — the structured model: [`Predicate`], [`CompositePredicate`],
//!   [`CompareOp`], [`FieldValue`], [`Combinator`]. This is what a data-access
//!   layer consumes and translates into a concrete filter.
//! - [`parse`] — the restricted comparison grammar (`<field> <op> <value>`)
//!   and [`build_query`], which turns a batch of raw condition strings into
//!   one [`CompositePredicate`].
//!
//! Column/field resolution against a real storage schema is deliberately not
//! done here; the consumer owns that mapping.

pub mod parse;
pub mod predicate;

pub use parse::{ConditionParseError, build_query, parse_condition};
pub use predicate::{Combinator, CompareOp, CompositePredicate, FieldValue, Predicate};
