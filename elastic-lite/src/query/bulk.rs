use crate::document::Document;
use std::fmt;

/// Action of one bulk entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkMethod {
    Index,
    Update,
    Delete,
}

impl BulkMethod {
    /// Action name used as the meta-line key
    pub fn name(&self) -> &'static str {
        match self {
            BulkMethod::Index => "index",
            BulkMethod::Update => "update",
            BulkMethod::Delete => "delete",
        }
    }

    /// Whether the meta line is followed by a source line
    pub fn has_source(&self) -> bool {
        !matches!(self, BulkMethod::Delete)
    }
}

impl fmt::Display for BulkMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered batch of index/update/delete actions
#[derive(Clone, Default)]
pub struct Bulk<'a> {
    operations: Vec<(BulkMethod, &'a dyn Document)>,
}

impl<'a> Bulk<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<D: Document + 'a>(mut self, method: BulkMethod, document: &'a D) -> Self {
        self.operations.push((method, document as &'a dyn Document));
        self
    }

    pub fn index<D: Document + 'a>(self, document: &'a D) -> Self {
        self.add(BulkMethod::Index, document)
    }

    pub fn update<D: Document + 'a>(self, document: &'a D) -> Self {
        self.add(BulkMethod::Update, document)
    }

    pub fn delete<D: Document + 'a>(self, document: &'a D) -> Self {
        self.add(BulkMethod::Delete, document)
    }

    /// Appends the same action for every document in `documents`
    pub fn add_all<D, I>(mut self, method: BulkMethod, documents: I) -> Self
    where
        D: Document + 'a,
        I: IntoIterator<Item = &'a D>,
    {
        self.operations.extend(
            documents
                .into_iter()
                .map(|d| (method, d as &'a dyn Document)),
        );
        self
    }

    pub fn operations(&self) -> &[(BulkMethod, &'a dyn Document)] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl fmt::Debug for Bulk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.operations
                    .iter()
                    .map(|(method, doc)| (method.name(), doc.id())),
            )
            .finish()
    }
}
