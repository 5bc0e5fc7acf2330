use crate::document::Document;

/// Indexes (creates or replaces) a single document
#[derive(Clone, Copy)]
pub struct Index<'a> {
    document: &'a dyn Document,
}

impl<'a> Index<'a> {
    pub fn document<D: Document + 'a>(document: &'a D) -> Self {
        Self { document }
    }

    pub fn poco(&self) -> &'a dyn Document {
        self.document
    }
}

impl std::fmt::Debug for Index<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index")
            .field("index", &self.document.index())
            .field("type", &self.document.doc_type())
            .field("id", &self.document.id())
            .finish()
    }
}
