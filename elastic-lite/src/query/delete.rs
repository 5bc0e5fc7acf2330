use super::condition::sealed::ConditionSlot;
use super::condition::{ActiveCondition, Conditional};
use crate::document::{has_identity, Document};
use crate::error::{Error, Result};

/// What a delete statement removes
#[derive(Clone, Copy)]
pub enum DeleteTarget<'a> {
    /// Every document in the index/type matching the condition
    Query {
        index_name: &'a str,
        type_name: &'a str,
    },
    /// One document, addressed by its id
    Document(&'a dyn Document),
}

/// Delete by query, or delete of a single known document
#[derive(Clone)]
pub struct Delete<'a> {
    index_name: String,
    type_name: String,
    document: Option<&'a dyn Document>,
    condition: Option<ActiveCondition>,
}

impl<'a> Delete<'a> {
    /// Creates a delete-by-query over `index_name`/`type_name`
    pub fn from_index(index_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            type_name: type_name.into(),
            document: None,
            condition: None,
        }
    }

    /// Creates a delete of `document`, which must carry a non-empty id
    pub fn document<D: Document + 'a>(document: &'a D) -> Result<Self> {
        if !has_identity(document) {
            return Err(Error::MissingIdentity(format!(
                "cannot delete a document from {}/{} without an id",
                document.index(),
                document.doc_type()
            )));
        }

        Ok(Self {
            index_name: document.index().to_string(),
            type_name: document.doc_type().to_string(),
            document: Some(document),
            condition: None,
        })
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn target(&self) -> DeleteTarget<'_> {
        match self.document {
            Some(document) => DeleteTarget::Document(document),
            None => DeleteTarget::Query {
                index_name: &self.index_name,
                type_name: &self.type_name,
            },
        }
    }
}

impl ConditionSlot for Delete<'_> {
    fn condition_slot(&mut self) -> &mut Option<ActiveCondition> {
        &mut self.condition
    }
}

impl Conditional for Delete<'_> {
    fn condition(&self) -> Option<&ActiveCondition> {
        self.condition.as_ref()
    }
}

impl std::fmt::Debug for Delete<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delete")
            .field("index_name", &self.index_name)
            .field("type_name", &self.type_name)
            .field("document_id", &self.document.and_then(|d| d.id()))
            .field("condition", &self.condition)
            .finish()
    }
}
