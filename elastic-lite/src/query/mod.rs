//! Typed query model
//!
//! Condition-based queries (`Search`, `Delete::from_index`) are built with the
//! [`Conditional`] setters; document-bound queries wrap a borrowed
//! [`Document`](crate::Document). Every query is turned into its statement by
//! [`StatementFactory`](crate::StatementFactory).

mod bulk;
mod condition;
mod delete;
mod index;
mod search;
mod update;

pub use bulk::{Bulk, BulkMethod};
pub use condition::{
    ActiveCondition, Conditional, ElasticCondition, Field, RangeCondition, RangeOperation,
};
pub use delete::{Delete, DeleteTarget};
pub use index::Index;
pub use search::Search;
pub use update::Update;

/// Every query the statement factory can render
#[derive(Debug, Clone)]
pub enum Query<'a> {
    Search(Search),
    Delete(Delete<'a>),
    Index(Index<'a>),
    Update(Update<'a>),
    Bulk(Bulk<'a>),
}

impl Query<'_> {
    /// Variant name, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Query::Search(_) => "search",
            Query::Delete(_) => "delete",
            Query::Index(_) => "index",
            Query::Update(u) if u.is_upsert() => "upsert",
            Query::Update(_) => "update",
            Query::Bulk(_) => "bulk",
        }
    }
}

impl From<Search> for Query<'_> {
    fn from(q: Search) -> Self {
        Query::Search(q)
    }
}

impl<'a> From<Delete<'a>> for Query<'a> {
    fn from(q: Delete<'a>) -> Self {
        Query::Delete(q)
    }
}

impl<'a> From<Index<'a>> for Query<'a> {
    fn from(q: Index<'a>) -> Self {
        Query::Index(q)
    }
}

impl<'a> From<Update<'a>> for Query<'a> {
    fn from(q: Update<'a>) -> Self {
        Query::Update(q)
    }
}

impl<'a> From<Bulk<'a>> for Query<'a> {
    fn from(q: Bulk<'a>) -> Self {
        Query::Bulk(q)
    }
}
