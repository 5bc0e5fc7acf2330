use crate::document::Document;

/// Partial update of a single document through the Update API
#[derive(Clone, Copy)]
pub struct Update<'a> {
    document: &'a dyn Document,
    upsert: bool,
}

impl<'a> Update<'a> {
    /// Updates the stored document with the non-null properties of `document`
    pub fn document<D: Document + 'a>(document: &'a D) -> Self {
        Self {
            document,
            upsert: false,
        }
    }

    /// Like [`Update::document`], but indexes `document` if it does not exist yet
    pub fn upsert<D: Document + 'a>(document: &'a D) -> Self {
        Self {
            document,
            upsert: true,
        }
    }

    pub fn poco(&self) -> &'a dyn Document {
        self.document
    }

    pub fn is_upsert(&self) -> bool {
        self.upsert
    }
}

impl std::fmt::Debug for Update<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Update")
            .field("index", &self.document.index())
            .field("type", &self.document.doc_type())
            .field("id", &self.document.id())
            .field("upsert", &self.upsert)
            .finish()
    }
}
