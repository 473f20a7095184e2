//! Attribute conditions
//!
//! A [`Condition`] is a list of [`Clause`]s combined with logical AND.
//! Clause values are stored as strings and compared loosely: two values are
//! equal when the strings match exactly or when both read as the same finite
//! number, so an attribute `id="1"` satisfies `eq("id", 1)` and
//! `eq("id", "1.0")` alike.

use serde_json::Value;
use std::fmt;
use xml_tree_traits::error::{Error, Result};

/// Comparison operator of an explicit clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
}

impl Operator {
    /// Parse an operator symbol; unknown symbols yield `None`
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Operator::Equal),
            "!=" => Some(Operator::NotEqual),
            _ => None,
        }
    }

    /// The symbol this operator is written as
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single predicate over an element's attributes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Clause {
    /// Attribute is present and loosely equal to `value`
    Equals { attribute: String, value: String },
    /// Attribute is absent or not loosely equal to `value`
    NotEquals { attribute: String, value: String },
}

impl Clause {
    /// Build a clause, stringifying `value` once
    pub fn new(attribute: impl Into<String>, operator: Operator, value: impl fmt::Display) -> Self {
        let attribute = attribute.into();
        let value = value.to_string();
        match operator {
            Operator::Equal => Clause::Equals { attribute, value },
            Operator::NotEqual => Clause::NotEquals { attribute, value },
        }
    }

    /// Name of the attribute the clause tests
    pub fn attribute(&self) -> &str {
        match self {
            Clause::Equals { attribute, .. } | Clause::NotEquals { attribute, .. } => attribute,
        }
    }

    /// Value the attribute is compared against
    pub fn value(&self) -> &str {
        match self {
            Clause::Equals { value, .. } | Clause::NotEquals { value, .. } => value,
        }
    }

    /// Operator of the clause
    pub fn operator(&self) -> Operator {
        match self {
            Clause::Equals { .. } => Operator::Equal,
            Clause::NotEquals { .. } => Operator::NotEqual,
        }
    }

    /// Evaluate the clause against an element's attribute pairs
    pub fn matches(&self, attributes: &[(String, String)]) -> bool {
        let actual = attributes
            .iter()
            .find(|(name, _)| name == self.attribute())
            .map(|(_, value)| value.as_str());

        match self {
            Clause::Equals { value, .. } => actual.is_some_and(|actual| loose_eq(actual, value)),
            Clause::NotEquals { value, .. } => !actual.is_some_and(|actual| loose_eq(actual, value)),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.attribute(), self.operator(), self.value())
    }
}

/// AND-combined set of attribute clauses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Condition {
    clauses: Vec<Clause>,
}

impl Condition {
    /// Create an empty condition, which matches every element
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality clause
    pub fn eq(self, attribute: impl Into<String>, value: impl fmt::Display) -> Self {
        self.clause(Clause::new(attribute, Operator::Equal, value))
    }

    /// Add an inequality clause
    pub fn ne(self, attribute: impl Into<String>, value: impl fmt::Display) -> Self {
        self.clause(Clause::new(attribute, Operator::NotEqual, value))
    }

    /// Add a prebuilt clause
    pub fn clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Build a condition of equality clauses from `(attribute, value)` pairs
    pub fn where_eq<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: fmt::Display,
    {
        pairs
            .into_iter()
            .map(|(attribute, value)| Clause::new(attribute, Operator::Equal, value))
            .collect()
    }

    /// Normalize a JSON condition into clauses.
    ///
    /// An object is a set of equality clauses. An array may mix equality
    /// objects and `[attribute, operator, value]` triples.
    pub fn from_json(json: &Value) -> Result<Self> {
        let mut condition = Condition::new();
        match json {
            Value::Object(map) => condition.push_equalities(map)?,
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::Object(map) => condition.push_equalities(map)?,
                        Value::Array(triple) => condition.clauses.push(clause_from_triple(triple)?),
                        other => {
                            return Err(Error::invalid_condition(format!(
                                "expected an object or [attribute, operator, value], got {other}"
                            )))
                        }
                    }
                }
            }
            other => {
                return Err(Error::invalid_condition(format!(
                    "expected an object or an array, got {other}"
                )))
            }
        }
        Ok(condition)
    }

    fn push_equalities(&mut self, map: &serde_json::Map<String, Value>) -> Result<()> {
        for (attribute, value) in map {
            let value = scalar_to_string(value)?;
            self.clauses
                .push(Clause::new(attribute.as_str(), Operator::Equal, value));
        }
        Ok(())
    }

    /// Clauses in evaluation order
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Check whether the condition has no clauses
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Evaluate all clauses left to right, stopping at the first failure
    pub fn matches(&self, attributes: &[(String, String)]) -> bool {
        self.clauses.iter().all(|clause| clause.matches(attributes))
    }
}

impl FromIterator<Clause> for Condition {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl From<Clause> for Condition {
    fn from(clause: Clause) -> Self {
        Self {
            clauses: vec![clause],
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

fn clause_from_triple(triple: &[Value]) -> Result<Clause> {
    let [attribute, operator, value] = triple else {
        return Err(Error::invalid_condition(format!(
            "explicit clause needs 3 elements, got {}",
            triple.len()
        )));
    };
    let attribute = attribute
        .as_str()
        .ok_or_else(|| Error::invalid_condition("clause attribute must be a string"))?;
    let symbol = operator
        .as_str()
        .ok_or_else(|| Error::invalid_condition("clause operator must be a string"))?;
    let operator = Operator::from_symbol(symbol)
        .ok_or_else(|| Error::invalid_condition(format!("unsupported operator {symbol:?}")))?;
    Ok(Clause::new(attribute, operator, scalar_to_string(value)?))
}

fn scalar_to_string(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::invalid_condition(format!(
            "clause value must be a string, number or boolean, got {other}"
        ))),
    }
}

/// String identity, equal integers, or equal finite numeric value
pub(crate) fn loose_eq(left: &str, right: &str) -> bool {
    if left == right {
        return true;
    }
    // Integers compare exactly; f64 would merge values above 2^53
    if let (Some(l), Some(r)) = (as_integer(left), as_integer(right)) {
        return l == r;
    }
    match (as_number(left), as_number(right)) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

fn as_integer(s: &str) -> Option<i128> {
    s.trim().parse::<i128>().ok()
}

fn as_number(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn equality_coerces_numbers() {
        let node = attrs(&[("id", "1")]);
        assert!(Condition::new().eq("id", 1).matches(&node));
        assert!(Condition::new().eq("id", "1").matches(&node));
        assert!(Condition::new().eq("id", "1.0").matches(&node));
        assert!(!Condition::new().eq("id", 2).matches(&node));
    }

    #[test]
    fn large_integers_compare_exactly() {
        let node = attrs(&[("id", "9007199254740993")]);
        assert!(!Condition::new().eq("id", "9007199254740992").matches(&node));
        assert!(Condition::new().ne("id", "9007199254740992").matches(&node));
        assert!(Condition::new().eq("id", 9007199254740993_u64).matches(&node));
        assert!(loose_eq("+7", "7"));
        assert!(loose_eq("7", "7.0"));
    }

    #[test]
    fn non_numeric_strings_compare_exactly() {
        let node = attrs(&[("dev", "edu")]);
        assert!(Condition::new().eq("dev", "edu").matches(&node));
        assert!(!Condition::new().eq("dev", "Edu").matches(&node));
        assert!(!loose_eq("inf", "infinity"));
    }

    #[test]
    fn missing_attribute_fails_equality_passes_inequality() {
        let node = attrs(&[("name", "zizoo")]);
        assert!(!Condition::new().eq("id", 1).matches(&node));
        assert!(Condition::new().ne("id", 1).matches(&node));
    }

    #[test]
    fn inequality_rejects_equal_value() {
        let node = attrs(&[("id", "2")]);
        assert!(!Condition::new().ne("id", 2).matches(&node));
        assert!(Condition::new().ne("id", 1).matches(&node));
    }

    #[test]
    fn clauses_are_and_combined() {
        let node = attrs(&[("name", "zizoo"), ("id", "1"), ("dev", "edu")]);
        let condition = Condition::new().eq("id", 1).eq("dev", "edu").ne("name", "john");
        assert!(condition.matches(&node));

        let condition = condition.eq("dev", "other");
        assert!(!condition.matches(&node));
    }

    #[test]
    fn empty_condition_matches_everything() {
        assert!(Condition::new().matches(&[]));
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(Operator::from_symbol("="), Some(Operator::Equal));
        assert_eq!(Operator::from_symbol("!="), Some(Operator::NotEqual));
        assert_eq!(Operator::from_symbol(">"), None);
        assert_eq!(Operator::NotEqual.to_string(), "!=");
    }

    #[test]
    fn where_eq_builds_equalities() {
        let condition = Condition::where_eq([("id", "1"), ("dev", "edu")]);
        assert_eq!(condition.clauses().len(), 2);
        assert!(condition
            .clauses()
            .iter()
            .all(|c| c.operator() == Operator::Equal));
    }

    #[test]
    fn json_object_and_triples_normalize() {
        let condition =
            Condition::from_json(&json!([{ "id": 1, "dev": "edu" }, ["name", "!=", "john"]]))
                .unwrap();
        assert_eq!(condition.clauses().len(), 3);
        assert!(condition.clauses().contains(&Clause::NotEquals {
            attribute: "name".to_string(),
            value: "john".to_string(),
        }));
        assert!(condition.clauses().contains(&Clause::Equals {
            attribute: "id".to_string(),
            value: "1".to_string(),
        }));
    }

    #[test]
    fn json_rejects_bad_shapes() {
        assert!(matches!(
            Condition::from_json(&json!("id")),
            Err(Error::InvalidCondition(_))
        ));
        assert!(Condition::from_json(&json!([["id", "!="]])).is_err());
        assert!(Condition::from_json(&json!([["id", ">", 1]])).is_err());
        assert!(Condition::from_json(&json!({ "id": null })).is_err());
    }

    #[test]
    fn display_lists_clauses() {
        let condition = Condition::new().eq("id", 1).ne("name", "john");
        assert_eq!(condition.to_string(), "id = \"1\" and name != \"john\"");
    }
}
