//! Protocol comparison wire types
//!
//! Shape quirk preserved for protocol compatibility: the literal value is
//! carried in `rightOperand.name`, not in a `value` field.

use serde::{Deserialize, Serialize};

/// Comparison operators accepted by SearchRecords.
///
/// Operators added by future protocol revisions deserialize to `Unknown`
/// and translate to no predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[serde(rename = "EQUALS")]
    Equals,

    #[serde(rename = "NOT_EQUALS")]
    NotEquals,

    #[serde(rename = "CONTAINS")]
    Contains,

    #[serde(rename = "STARTS_WITH")]
    StartsWith,

    #[serde(rename = "ENDS_WITH")]
    EndsWith,

    /// Unrecognized operator (forward compatibility)
    #[serde(other)]
    Unknown,
}

impl ComparisonOperator {
    /// Protocol spelling of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Equals => "EQUALS",
            ComparisonOperator::NotEquals => "NOT_EQUALS",
            ComparisonOperator::Contains => "CONTAINS",
            ComparisonOperator::StartsWith => "STARTS_WITH",
            ComparisonOperator::EndsWith => "ENDS_WITH",
            ComparisonOperator::Unknown => "UNKNOWN",
        }
    }
}

/// One side of a comparison. For the left side `name` is a field name;
/// for the right side it is the literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand {
    pub name: String,
}

impl Operand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single field comparison from a search request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub operator: ComparisonOperator,
    pub left_operand: Operand,
    pub right_operand: Operand,
}

impl Comparison {
    pub fn new(
        operator: ComparisonOperator,
        field: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        Self {
            operator,
            left_operand: Operand::new(field),
            right_operand: Operand::new(literal),
        }
    }

    /// The field name being compared
    pub fn field(&self) -> &str {
        &self.left_operand.name
    }

    /// The literal value, carried verbatim in `rightOperand.name`
    pub fn literal(&self) -> &str {
        &self.right_operand.name
    }
}
