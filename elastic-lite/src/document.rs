//! The contract every indexable document fulfils
//!
//! A document carries metadata (id, index, type, score) and a set of content
//! properties. Only the content properties are ever written into a statement
//! body; the metadata travels in bulk meta lines and request paths.

use crate::error::Result;
use crate::value::FieldValue;
use serde::Serialize;
use serde_json::Value;

/// Property names reserved for document metadata
pub const METADATA_FIELDS: [&str; 4] = ["Id", "Index", "Type", "Score"];

/// An indexable document
pub trait Document {
    /// Document identity, `None` if the engine should assign one
    fn id(&self) -> Option<&str>;

    /// Target index name
    fn index(&self) -> &str;

    /// Mapping type name
    fn doc_type(&self) -> &str;

    /// Relevance score from the last search, if any
    fn score(&self) -> Option<f64> {
        None
    }

    /// Content properties as `(wire name, value)` pairs; `None` is null
    fn fields(&self) -> Result<Vec<(String, Option<FieldValue>)>>;
}

impl<D: Document + ?Sized> Document for &D {
    fn id(&self) -> Option<&str> {
        (**self).id()
    }

    fn index(&self) -> &str {
        (**self).index()
    }

    fn doc_type(&self) -> &str {
        (**self).doc_type()
    }

    fn score(&self) -> Option<f64> {
        (**self).score()
    }

    fn fields(&self) -> Result<Vec<(String, Option<FieldValue>)>> {
        (**self).fields()
    }
}

/// Returns true if `name` refers to document metadata rather than content
pub fn is_metadata_field(name: &str) -> bool {
    METADATA_FIELDS.contains(&name)
}

/// Whether the document has a usable identity
pub fn has_identity(document: &dyn Document) -> bool {
    document.id().is_some_and(|id| !id.is_empty())
}

/// Content properties that belong in a statement body: metadata names
/// removed, null values skipped, declaration order kept.
pub fn serializable_fields(document: &dyn Document) -> Result<Vec<(String, FieldValue)>> {
    Ok(document
        .fields()?
        .into_iter()
        .filter(|(name, _)| !is_metadata_field(name))
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect())
}

/// Enumerate the properties of any `Serialize` value that serializes to a
/// JSON object. Nested objects are rejected; nulls map to `None`.
pub fn fields_from_serialize<T: Serialize + ?Sized>(
    value: &T,
) -> Result<Vec<(String, Option<FieldValue>)>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(name, v)| match v {
                Value::Null => Ok((name, None)),
                other => Ok((name, Some(FieldValue::try_from(other)?))),
            })
            .collect(),
        other => Err(crate::Error::UnsupportedValue(format!(
            "document body must be an object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Wraps any `Serialize` struct with explicit metadata so it can be used as a
/// [`Document`] without a hand-written `fields` implementation.
#[derive(Debug, Clone)]
pub struct SerdeDocument<T> {
    pub id: Option<String>,
    pub index: String,
    pub doc_type: String,
    pub score: Option<f64>,
    pub source: T,
}

impl<T: Serialize> SerdeDocument<T> {
    pub fn new(index: impl Into<String>, doc_type: impl Into<String>, source: T) -> Self {
        Self {
            id: None,
            index: index.into(),
            doc_type: doc_type.into(),
            score: None,
            source,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl<T: Serialize> Document for SerdeDocument<T> {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn index(&self) -> &str {
        &self.index
    }

    fn doc_type(&self) -> &str {
        &self.doc_type
    }

    fn score(&self) -> Option<f64> {
        self.score
    }

    fn fields(&self) -> Result<Vec<(String, Option<FieldValue>)>> {
        fields_from_serialize(&self.source)
    }
}
