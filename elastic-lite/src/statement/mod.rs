//! Statement generation
//!
//! Turns a [`Query`] into the JSON body (NDJSON for bulk) the engine expects,
//! and into the [`Operation`] that addresses it.

mod operation;

pub use operation::{Method, Operation, JSON_CONTENT_TYPE, NDJSON_CONTENT_TYPE};

use crate::document::{has_identity, serializable_fields, Document};
use crate::error::{Error, Result};
use crate::query::{
    ActiveCondition, Bulk, BulkMethod, Conditional, Delete, DeleteTarget, Field, Index, Query,
    Search, Update,
};
use serde_json::{json, Map, Value};
use tracing::{debug, trace};

/// A generated statement together with its addressing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub operation: Operation,
    pub body: String,
}

/// Generates engine statements from queries
pub struct StatementFactory;

impl StatementFactory {
    /// Generate the request body for `query`
    pub fn generate(query: &Query<'_>) -> Result<String> {
        let statement = match query {
            Query::Search(search) => Self::generate_search(search)?,
            Query::Delete(delete) => Self::generate_delete(delete)?,
            Query::Index(index) => Self::generate_insert(index)?,
            Query::Update(update) => Self::generate_update(update)?,
            Query::Bulk(bulk) => Self::generate_bulk(bulk)?,
        };

        debug!(
            kind = query.kind(),
            bytes = statement.len(),
            "generated statement"
        );
        trace!(%statement, "statement body");

        Ok(statement)
    }

    /// Generate the body and the operation addressing it
    pub fn prepare(query: &Query<'_>) -> Result<Statement> {
        let operation = Self::operation(query)?;
        let body = Self::generate(query)?;
        Ok(Statement { operation, body })
    }

    /// Resolve the endpoint a query is sent to
    pub fn operation(query: &Query<'_>) -> Result<Operation> {
        let operation = match query {
            Query::Search(search) => Operation::new(
                Method::Post,
                [search.index_name(), search.type_name(), "_search"],
            ),
            Query::Delete(delete) => match delete.target() {
                DeleteTarget::Query {
                    index_name,
                    type_name,
                } => Operation::new(
                    Method::Post,
                    [index_name, type_name, "_delete_by_query"],
                ),
                DeleteTarget::Document(document) => Operation::new(
                    Method::Delete,
                    [
                        document.index(),
                        document.doc_type(),
                        require_id(document, "delete")?,
                    ],
                ),
            },
            Query::Index(index) => {
                let document = index.poco();
                match document.id().filter(|id| !id.is_empty()) {
                    Some(id) => Operation::new(
                        Method::Put,
                        [document.index(), document.doc_type(), id],
                    ),
                    None => Operation::new(Method::Post, [document.index(), document.doc_type()]),
                }
            }
            Query::Update(update) => {
                let document = update.poco();
                Operation::new(
                    Method::Post,
                    [
                        document.index(),
                        document.doc_type(),
                        require_id(document, "update")?,
                        "_update",
                    ],
                )
            }
            Query::Bulk(_) => {
                Operation::new(Method::Post, ["_bulk"]).with_content_type(NDJSON_CONTENT_TYPE)
            }
        };

        Ok(operation)
    }

    fn generate_search(search: &Search) -> Result<String> {
        let mut body = Map::new();
        body.insert("_source".to_string(), Self::sources(search.fields()));
        if let Some(query) = Self::render_condition(search.condition())? {
            body.insert("query".to_string(), query);
        }

        Ok(serde_json::to_string(&Value::Object(body))?)
    }

    fn generate_delete(delete: &Delete<'_>) -> Result<String> {
        let mut body = Map::new();
        if let Some(query) = Self::render_condition(delete.condition())? {
            body.insert("query".to_string(), query);
        }

        Ok(serde_json::to_string(&Value::Object(body))?)
    }

    fn generate_insert(index: &Index<'_>) -> Result<String> {
        Ok(serde_json::to_string(&Self::field_mapping(index.poco())?)?)
    }

    fn generate_update(update: &Update<'_>) -> Result<String> {
        let body = Self::update_document(update.poco(), update.is_upsert())?;
        Ok(serde_json::to_string(&body)?)
    }

    fn generate_bulk(bulk: &Bulk<'_>) -> Result<String> {
        let mut statement = String::new();

        for (method, document) in bulk.operations() {
            let meta = Self::bulk_meta(*method, *document)?;
            statement.push_str(&serde_json::to_string(&meta)?);
            statement.push('\n');

            let source = match method {
                BulkMethod::Index => Some(Self::field_mapping(*document)?),
                BulkMethod::Update => Some(Self::update_document(*document, false)?),
                BulkMethod::Delete => None,
            };
            if let Some(source) = source {
                statement.push_str(&serde_json::to_string(&source)?);
                statement.push('\n');
            }
        }

        Ok(statement)
    }

    fn bulk_meta(method: BulkMethod, document: &dyn Document) -> Result<Value> {
        let mut meta = Map::new();
        match method {
            BulkMethod::Index => {
                if let Some(id) = document.id().filter(|id| !id.is_empty()) {
                    meta.insert("_id".to_string(), Value::from(id));
                }
            }
            BulkMethod::Update | BulkMethod::Delete => {
                let id = require_id(document, method.name())?;
                meta.insert("_id".to_string(), Value::from(id));
            }
        }
        meta.insert("_index".to_string(), Value::from(document.index()));
        meta.insert("_type".to_string(), Value::from(document.doc_type()));

        let mut line = Map::new();
        line.insert(method.name().to_string(), Value::Object(meta));
        Ok(Value::Object(line))
    }

    fn sources(fields: &[Field]) -> Value {
        if fields.is_empty() {
            return Value::Bool(true);
        }

        let includes: Vec<Value> = fields.iter().map(|f| Value::from(f.name.as_str())).collect();
        json!({ "includes": includes })
    }

    fn update_document(document: &dyn Document, upsert: bool) -> Result<Value> {
        let mut body = Map::new();
        body.insert("doc".to_string(), Self::field_mapping(document)?);
        if upsert {
            body.insert("doc_as_upsert".to_string(), Value::Bool(true));
        }
        Ok(Value::Object(body))
    }

    /// Flat `name -> value` object of the document's content properties
    pub fn field_mapping(document: &dyn Document) -> Result<Value> {
        let mut mapping = Map::new();
        for (name, value) in serializable_fields(document)? {
            mapping.insert(name, value.to_json()?);
        }
        Ok(Value::Object(mapping))
    }

    /// Render the active condition as a query clause, `None` meaning match-all
    pub fn render_condition(condition: Option<&ActiveCondition>) -> Result<Option<Value>> {
        let Some(condition) = condition else {
            return Ok(None);
        };

        let clause = match condition {
            ActiveCondition::Match(c) => {
                let value = c.value.to_condition_json()?;
                json!({ "match": { c.field.name.as_str(): value } })
            }
            ActiveCondition::Term(c) => {
                let value = c.value.to_condition_json()?;
                json!({ "term": { c.field.name.as_str(): value } })
            }
            ActiveCondition::Range(r) => {
                let value = r.value.to_condition_json()?;
                json!({ "range": { r.field.name.as_str(): { r.operation.name(): value } } })
            }
        };

        Ok(Some(clause))
    }
}

fn require_id<'d>(document: &'d dyn Document, action: &str) -> Result<&'d str> {
    if !has_identity(document) {
        return Err(Error::MissingIdentity(format!(
            "cannot {} a document in {}/{} without an id",
            action,
            document.index(),
            document.doc_type()
        )));
    }
    Ok(document.id().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SerdeDocument;
    use crate::query::RangeOperation;

    fn parse(statement: &str) -> Value {
        serde_json::from_str(statement).unwrap()
    }

    fn person(id: Option<&str>) -> SerdeDocument<Value> {
        let mut doc = SerdeDocument::new(
            "people",
            "person",
            json!({"Name": "Ada", "Age": 36, "Email": null}),
        );
        doc.id = id.map(String::from);
        doc
    }

    #[test]
    fn test_render_no_condition() {
        assert!(StatementFactory::render_condition(None).unwrap().is_none());
    }

    #[test]
    fn test_render_match_and_term() {
        let search = Search::from_index("people", "person").match_text("Name", "ada lovelace");
        assert_eq!(
            StatementFactory::render_condition(search.condition()).unwrap(),
            Some(json!({"match": {"Name": "ada lovelace"}}))
        );

        let search = search.term("Status", "active");
        assert_eq!(
            StatementFactory::render_condition(search.condition()).unwrap(),
            Some(json!({"term": {"Status": "active"}}))
        );
    }

    #[test]
    fn test_render_range() {
        let search = Search::from_index("people", "person").range("Age", RangeOperation::Lt, 2.5);
        assert_eq!(
            StatementFactory::render_condition(search.condition()).unwrap(),
            Some(json!({"range": {"Age": {"lt": "2.5"}}}))
        );
    }

    #[test]
    fn test_search_without_condition_omits_query() {
        let query = Query::from(Search::from_index("people", "person"));
        let statement = StatementFactory::generate(&query).unwrap();
        assert_eq!(parse(&statement), json!({"_source": true}));
    }

    #[test]
    fn test_delete_by_query_body() {
        let query = Query::from(Delete::from_index("people", "person").term("Name", "ada"));
        let statement = StatementFactory::generate(&query).unwrap();
        assert_eq!(parse(&statement), json!({"query": {"term": {"Name": "ada"}}}));
    }

    #[test]
    fn test_document_delete_has_empty_body_and_addresses_by_id() {
        let doc = person(Some("p-1"));
        let query = Query::from(Delete::document(&doc).unwrap());
        let statement = StatementFactory::prepare(&query).unwrap();
        assert_eq!(parse(&statement.body), json!({}));
        assert_eq!(statement.operation.method, Method::Delete);
        assert_eq!(statement.operation.path(), "/people/person/p-1");
    }

    #[test]
    fn test_insert_skips_nulls() {
        let doc = person(Some("p-1"));
        let statement = StatementFactory::generate(&Query::from(Index::document(&doc))).unwrap();
        assert_eq!(parse(&statement), json!({"Name": "Ada", "Age": 36}));
    }

    #[test]
    fn test_insert_keeps_lowercase_content_fields() {
        let doc = SerdeDocument::new(
            "games",
            "match",
            json!({"Title": "final", "score": 3, "type": "cup", "index": 7, "Score": 9.5}),
        )
        .with_id("g1");
        let statement = StatementFactory::generate(&Query::from(Index::document(&doc))).unwrap();
        assert_eq!(
            parse(&statement),
            json!({"Title": "final", "score": 3, "type": "cup", "index": 7})
        );
    }

    #[test]
    fn test_update_and_upsert_bodies() {
        let doc = person(Some("p-1"));
        let update = StatementFactory::generate(&Update::document(&doc).into()).unwrap();
        assert_eq!(parse(&update), json!({"doc": {"Name": "Ada", "Age": 36}}));

        let upsert = StatementFactory::generate(&Update::upsert(&doc).into()).unwrap();
        assert_eq!(
            parse(&upsert),
            json!({"doc": {"Name": "Ada", "Age": 36}, "doc_as_upsert": true})
        );
    }

    #[test]
    fn test_operations() {
        let with_id = person(Some("p-1"));
        let without_id = person(None);

        let op = StatementFactory::operation(&Search::from_index("people", "person").into())
            .unwrap();
        assert_eq!(op.to_string(), "POST /people/person/_search");

        let op = StatementFactory::operation(&Delete::from_index("people", "person").into())
            .unwrap();
        assert_eq!(op.to_string(), "POST /people/person/_delete_by_query");

        let op = StatementFactory::operation(&Index::document(&with_id).into()).unwrap();
        assert_eq!(op.to_string(), "PUT /people/person/p-1");

        let op = StatementFactory::operation(&Index::document(&without_id).into()).unwrap();
        assert_eq!(op.to_string(), "POST /people/person");

        let op = StatementFactory::operation(&Update::upsert(&with_id).into()).unwrap();
        assert_eq!(op.to_string(), "POST /people/person/p-1/_update");

        let op = StatementFactory::operation(&Bulk::new().index(&with_id).into()).unwrap();
        assert_eq!(op.to_string(), "POST /_bulk");
        assert_eq!(op.content_type, NDJSON_CONTENT_TYPE);
    }

    #[test]
    fn test_update_without_id_cannot_be_addressed() {
        let doc = person(None);
        let err = StatementFactory::operation(&Update::document(&doc).into()).unwrap_err();
        assert!(matches!(err, Error::MissingIdentity(_)));
    }

    #[test]
    fn test_bulk_delete_without_id_fails() {
        let doc = person(None);
        let err = StatementFactory::generate(&Bulk::new().delete(&doc).into()).unwrap_err();
        assert!(matches!(err, Error::MissingIdentity(_)));
    }

    #[test]
    fn test_bulk_index_without_id_omits_id() {
        let doc = person(None);
        let statement = StatementFactory::generate(&Bulk::new().index(&doc).into()).unwrap();
        let first = statement.lines().next().unwrap();
        assert_eq!(
            parse(first),
            json!({"index": {"_index": "people", "_type": "person"}})
        );
    }

    #[test]
    fn test_non_finite_values_fail_generation() {
        let doc = SerdeDocument::new("m", "t", json!({"x": 1})).with_id("1");
        let search = Search::from_index("m", "t").term("x", f64::NAN);
        assert!(StatementFactory::generate(&search.into()).is_err());
        assert!(StatementFactory::generate(&Index::document(&doc).into()).is_ok());
    }
}
