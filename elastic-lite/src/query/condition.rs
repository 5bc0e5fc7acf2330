//! Field references and query conditions

use crate::value::FieldValue;
use std::fmt;

/// A document property, identified by its wire name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: String,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::new(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field { name }
    }
}

/// Equality-style condition, used for both `term` and `match` clauses
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticCondition {
    pub field: Field,
    pub value: FieldValue,
}

impl ElasticCondition {
    pub fn new(field: impl Into<Field>, value: impl Into<FieldValue>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Comparison operator of a range condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOperation {
    Gt,
    Gte,
    Lt,
    Lte,
}

impl RangeOperation {
    /// Key used in the `range` clause
    pub fn name(&self) -> &'static str {
        match self {
            RangeOperation::Gt => "gt",
            RangeOperation::Gte => "gte",
            RangeOperation::Lt => "lt",
            RangeOperation::Lte => "lte",
        }
    }
}

impl fmt::Display for RangeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inequality condition against a single field
#[derive(Debug, Clone, PartialEq)]
pub struct RangeCondition {
    pub field: Field,
    pub operation: RangeOperation,
    pub value: FieldValue,
}

impl RangeCondition {
    pub fn new(
        field: impl Into<Field>,
        operation: RangeOperation,
        value: impl Into<FieldValue>,
    ) -> Self {
        Self {
            field: field.into(),
            operation,
            value: value.into(),
        }
    }
}

/// The single condition a query carries
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveCondition {
    /// Analyzed full-text match
    Match(ElasticCondition),
    /// Exact match against the indexed term
    Term(ElasticCondition),
    Range(RangeCondition),
}

pub(crate) mod sealed {
    use super::ActiveCondition;

    /// Storage for the active condition; only queries in this crate have one
    pub trait ConditionSlot {
        fn condition_slot(&mut self) -> &mut Option<ActiveCondition>;
    }
}

/// Fluent condition setters shared by condition-based queries.
///
/// Setting a condition replaces whatever condition was active before.
pub trait Conditional: sealed::ConditionSlot + Sized {
    fn condition(&self) -> Option<&ActiveCondition>;

    fn with_condition(mut self, condition: ActiveCondition) -> Self {
        *self.condition_slot() = Some(condition);
        self
    }

    fn term(self, field: impl Into<Field>, value: impl Into<FieldValue>) -> Self {
        self.term_condition(ElasticCondition::new(field, value))
    }

    fn term_condition(self, condition: ElasticCondition) -> Self {
        self.with_condition(ActiveCondition::Term(condition))
    }

    fn match_text(self, field: impl Into<Field>, value: impl Into<FieldValue>) -> Self {
        self.match_condition(ElasticCondition::new(field, value))
    }

    fn match_condition(self, condition: ElasticCondition) -> Self {
        self.with_condition(ActiveCondition::Match(condition))
    }

    fn range(
        self,
        field: impl Into<Field>,
        operation: RangeOperation,
        value: impl Into<FieldValue>,
    ) -> Self {
        self.range_condition(RangeCondition::new(field, operation, value))
    }

    fn range_condition(self, condition: RangeCondition) -> Self {
        self.with_condition(ActiveCondition::Range(condition))
    }
}
