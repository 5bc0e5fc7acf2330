use super::condition::sealed::ConditionSlot;
use super::condition::{ActiveCondition, Conditional, Field};

/// Search request against an index/type, with an optional `_source` projection
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    index_name: String,
    type_name: String,
    condition: Option<ActiveCondition>,
    fields: Vec<Field>,
}

impl Search {
    /// Creates a search over `index_name`/`type_name` returning all fields
    pub fn from_index(index_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            type_name: type_name.into(),
            condition: None,
            fields: Vec::new(),
        }
    }

    /// Adds a field to the `_source` include list
    pub fn include(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn include_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Requested output fields; empty means all fields
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl ConditionSlot for Search {
    fn condition_slot(&mut self) -> &mut Option<ActiveCondition> {
        &mut self.condition
    }
}

impl Conditional for Search {
    fn condition(&self) -> Option<&ActiveCondition> {
        self.condition.as_ref()
    }
}
