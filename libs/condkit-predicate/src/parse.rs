//! Condition grammar: `<field> <operator> <value>`.
//!
//! The grammar is deliberately narrow — one identifier, one operator from the
//! fixed symbol table, one word/number/dotted token — and must match the raw
//! string in full. Anything else is [`ConditionParseError::InvalidCondition`];
//! there is no partial or best-effort parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::predicate::{Combinator, CompareOp, CompositePredicate, FieldValue, Predicate};

/// Error from condition parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConditionParseError {
    /// The raw string does not match the condition grammar.
    #[error("invalid condition: {raw}")]
    InvalidCondition {
        /// The offending raw condition string.
        raw: String,
    },
}

/// Anchored grammar. Longer operator symbols come first so `<=`, `>=` and
/// `<>` win over their one-character prefixes.
#[allow(clippy::expect_used)] // literal pattern, cannot fail at runtime
static CONDITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\s*(<=|>=|<>|=|<|>)\s*([\w.]+)$").expect("valid condition grammar")
});

/// Parse one raw condition string into a [`Predicate`].
///
/// The value token is coerced syntactically: numeric if it parses as a float,
/// opaque text otherwise (see [`FieldValue::from_token`]).
///
/// # Errors
///
/// [`ConditionParseError::InvalidCondition`] if `raw` does not match the
/// grammar in full.
pub fn parse_condition(raw: &str) -> Result<Predicate, ConditionParseError> {
    let invalid = || ConditionParseError::InvalidCondition { raw: raw.to_owned() };

    let caps = CONDITION_RE.captures(raw).ok_or_else(invalid)?;
    // The operator capture is a subset of the symbol table, so the lookup
    // only fails if grammar and table drift apart.
    let op = CompareOp::from_symbol(&caps[2]).ok_or_else(invalid)?;

    Ok(Predicate::new(&caps[1], op, FieldValue::from_token(&caps[3])))
}

/// Parse a batch of raw condition strings and join them under `combinator`.
///
/// Parsing is fail-fast: the first invalid condition aborts the whole build
/// and no partial composite is produced. An empty input yields an empty
/// composite carrying `combinator` — see the empty-composite identities on
/// [`CompositePredicate`].
///
/// # Errors
///
/// Propagates [`ConditionParseError::InvalidCondition`] from the first
/// condition that fails the grammar.
pub fn build_query<S: AsRef<str>>(
    conditions: &[S],
    combinator: Combinator,
) -> Result<CompositePredicate, ConditionParseError> {
    let predicates = conditions
        .iter()
        .map(|c| parse_condition(c.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompositePredicate::new(predicates, combinator))
}
