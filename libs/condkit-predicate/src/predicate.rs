use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison operator of one condition.
///
/// A closed enumeration: the parser maps the symbol table (`=`, `<`, `>`,
/// `<=`, `>=`, `<>`) onto these variants and rejects everything else at parse
/// time. There is no fallback variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    /// `=` — equals.
    Eq,
    /// `<` — less than.
    Lt,
    /// `>` — greater than.
    Gt,
    /// `<=` — less than or equal.
    Le,
    /// `>=` — greater than or equal.
    Ge,
    /// `<>` — not equal.
    Ne,
}

impl CompareOp {
    /// Look up an operator by its condition-grammar symbol.
    ///
    /// Returns `None` for anything outside the fixed symbol table.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Eq),
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "<=" => Some(Self::Le),
            ">=" => Some(Self::Ge),
            "<>" => Some(Self::Ne),
            _ => None,
        }
    }

    /// The canonical condition-grammar symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Ne => "<>",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A comparison value, either numeric or textual.
///
/// The choice is purely syntactic: a raw token that parses as `f64` becomes
/// [`FieldValue::Number`], anything else stays [`FieldValue::Text`]. There is
/// no coercion to booleans, dates, or typed identifiers — the consumer knows
/// the real storage type of the field, this crate does not.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric value (all numeric tokens, integer-looking ones included).
    Number(f64),
    /// Opaque string value.
    Text(String),
}

impl FieldValue {
    /// Coerce a raw value token: numeric if it parses as a float, text otherwise.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        token
            .parse::<f64>()
            .map_or_else(|_| Self::Text(token.to_owned()), Self::Number)
    }

    /// The numeric value, if this is a [`FieldValue::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The text value, if this is a [`FieldValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for FieldValue {
    #[inline]
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<String> for FieldValue {
    #[inline]
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// One parsed condition: a typed comparison on a named field.
///
/// The field name is an authorization-level concept; mapping it to a real
/// storage column is the data-access layer's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    field: String,
    op: CompareOp,
    value: FieldValue,
}

impl Predicate {
    /// Create a predicate.
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl Into<FieldValue>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// The field name.
    #[inline]
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The comparison operator.
    #[inline]
    #[must_use]
    pub fn op(&self) -> CompareOp {
        self.op
    }

    /// The comparison value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}

/// Logical joiner applied across the predicates of a composite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    /// Conjunction — every predicate must hold.
    #[default]
    And,
    /// Disjunction — any predicate may hold.
    Or,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("AND"),
            Self::Or => f.write_str("OR"),
        }
    }
}

/// An ordered set of predicates under one combinator — the filter tree handed
/// to the data-access layer.
///
/// Predicate order matches the order conditions were supplied in; the
/// composite never re-sorts.
///
/// # Empty composites
///
/// A composite may legitimately hold zero predicates. The consumer must apply
/// the boolean identities, not guess: an empty [`Combinator::And`] composite
/// matches everything, an empty [`Combinator::Or`] composite matches nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompositePredicate {
    predicates: Vec<Predicate>,
    combinator: Combinator,
}

impl CompositePredicate {
    /// Create a composite from parsed predicates and a combinator.
    #[must_use]
    pub fn new(predicates: Vec<Predicate>, combinator: Combinator) -> Self {
        Self {
            predicates,
            combinator,
        }
    }

    /// Create a composite with zero predicates.
    ///
    /// Subject to the empty-composite identities documented on the type.
    #[must_use]
    pub fn empty(combinator: Combinator) -> Self {
        Self::new(Vec::new(), combinator)
    }

    /// The predicates, in supply order.
    #[inline]
    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// The combinator joining the predicates.
    #[inline]
    #[must_use]
    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Number of predicates.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` if the composite holds no predicates.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Distinct field names referenced by the composite, in first-appearance
    /// order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for p in &self.predicates {
            if !fields.contains(&p.field()) {
                fields.push(p.field());
            }
        }
        fields
    }

    /// All predicates on the given field, in supply order.
    #[must_use]
    pub fn predicates_for(&self, field: &str) -> Vec<&Predicate> {
        self.predicates
            .iter()
            .filter(|p| p.field() == field)
            .collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn symbol_table_round_trips() {
        for op in [
            CompareOp::Eq,
            CompareOp::Lt,
            CompareOp::Gt,
            CompareOp::Le,
            CompareOp::Ge,
            CompareOp::Ne,
        ] {
            assert_eq!(CompareOp::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        for symbol in ["==", "!=", "<<", ">>", "", " ", "in"] {
            assert_eq!(CompareOp::from_symbol(symbol), None);
        }
    }

    #[test]
    fn token_coercion_is_syntactic() {
        assert_eq!(FieldValue::from_token("25"), FieldValue::Number(25.0));
        assert_eq!(FieldValue::from_token("2.5"), FieldValue::Number(2.5));
        assert_eq!(
            FieldValue::from_token("bob"),
            FieldValue::Text("bob".to_owned())
        );
        // A dotted token that is not a number stays text.
        assert_eq!(
            FieldValue::from_token("v1.2.3"),
            FieldValue::Text("v1.2.3".to_owned())
        );
    }

    #[test]
    fn value_accessors() {
        assert_eq!(FieldValue::Number(2.0).as_number(), Some(2.0));
        assert_eq!(FieldValue::Number(2.0).as_text(), None);
        assert_eq!(FieldValue::Text("x".to_owned()).as_text(), Some("x"));
        assert_eq!(FieldValue::Text("x".to_owned()).as_number(), None);
    }

    #[test]
    fn predicate_display_renders_the_condition() {
        let p = Predicate::new("price", CompareOp::Lt, 25.0);
        assert_eq!(p.to_string(), "price < 25");

        let p = Predicate::new("author", CompareOp::Eq, "bob");
        assert_eq!(p.to_string(), "author = bob");
    }

    #[test]
    fn empty_composite_keeps_its_combinator() {
        let and = CompositePredicate::empty(Combinator::And);
        assert!(and.is_empty());
        assert_eq!(and.combinator(), Combinator::And);

        let or = CompositePredicate::empty(Combinator::Or);
        assert_eq!(or.len(), 0);
        assert_eq!(or.combinator(), Combinator::Or);
    }

    #[test]
    fn fields_are_distinct_in_first_appearance_order() {
        let composite = CompositePredicate::new(
            vec![
                Predicate::new("price", CompareOp::Gt, 10.0),
                Predicate::new("category_id", CompareOp::Eq, 2.0),
                Predicate::new("price", CompareOp::Lt, 25.0),
            ],
            Combinator::And,
        );
        assert_eq!(composite.fields(), vec!["price", "category_id"]);
        assert_eq!(composite.predicates_for("price").len(), 2);
        assert_eq!(composite.predicates_for("author").len(), 0);
    }

    #[test]
    fn predicate_serde_wire_shape() {
        let p = Predicate::new("price", CompareOp::Lt, 25.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"field":"price","op":"lt","value":25.0}"#);

        let p = Predicate::new("author", CompareOp::Ne, "bob");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"field":"author","op":"ne","value":"bob"}"#);
    }

    #[test]
    fn composite_serde_round_trip() {
        let composite = CompositePredicate::new(
            vec![
                Predicate::new("price", CompareOp::Lt, 25.0),
                Predicate::new("category_id", CompareOp::Eq, 2.0),
            ],
            Combinator::Or,
        );
        let json = serde_json::to_string(&composite).unwrap();
        let back: CompositePredicate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, composite);
        assert!(json.contains(r#""combinator":"or""#));
    }
}
