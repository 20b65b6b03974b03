//! Comparison-to-predicate translation

use serde_json::Value;

use crate::catalog::EntitySpec;
use crate::record::normalize_tax_id;
use crate::store::StorePredicate;

use super::comparison::{Comparison, ComparisonOperator};

/// Outcome of translating one comparison
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// Add this predicate to the base query
    Predicate(StorePredicate),

    /// Leave the base query unmodified
    NoOp,
}

impl Translation {
    /// The predicate, if one was produced
    pub fn into_predicate(self) -> Option<StorePredicate> {
        match self {
            Translation::Predicate(p) => Some(p),
            Translation::NoOp => None,
        }
    }
}

/// Translate one comparison into a store predicate for `entity`.
///
/// An unmapped field or an unrecognized operator yields `NoOp`: an overly
/// broad read is recoverable by the caller, so filter clauses fail open
/// (writes fail closed, see the record normalizer).
pub fn translate(entity: &EntitySpec, comparison: &Comparison) -> Translation {
    let field = match entity.map_field(comparison.field()) {
        Some(f) => f,
        None => return Translation::NoOp,
    };

    let column = field.column.to_string();
    let literal = comparison.literal();

    let predicate = match comparison.operator {
        ComparisonOperator::Equals => StorePredicate::Eq {
            column,
            value: exact_match_value(entity, field.column, literal),
        },
        ComparisonOperator::NotEquals => StorePredicate::Neq {
            column,
            value: exact_match_value(entity, field.column, literal),
        },
        ComparisonOperator::Contains => StorePredicate::ContainsCi {
            column,
            needle: literal.to_string(),
        },
        ComparisonOperator::StartsWith => StorePredicate::StartsWithCi {
            column,
            prefix: literal.to_string(),
        },
        ComparisonOperator::EndsWith => StorePredicate::EndsWithCi {
            column,
            suffix: literal.to_string(),
        },
        ComparisonOperator::Unknown => return Translation::NoOp,
    };

    Translation::Predicate(predicate)
}

/// Literal used for exact matching. Natural-key literals get the same
/// tax-id normalization applied on write, so filters agree with stored
/// values.
fn exact_match_value(entity: &EntitySpec, column: &str, literal: &str) -> Value {
    if column == entity.natural_key {
        Value::String(normalize_tax_id(literal))
    } else {
        Value::String(literal.to_string())
    }
}
