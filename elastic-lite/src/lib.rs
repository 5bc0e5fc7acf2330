//! Typed query construction and statement generation for Elasticsearch
//!
//! Queries are built through fluent, typed builders and rendered into the
//! exact JSON bodies the engine's HTTP API expects.
//!
//! # Queries
//!
//! - [`Search`] - `match` / `term` / `range` condition plus `_source` projection
//! - [`Delete`] - delete-by-query, or delete of one document by id
//! - [`Index`] - index a whole document
//! - [`Update`] - partial update (`doc`), optionally as upsert
//! - [`Bulk`] - ordered index/update/delete actions as NDJSON
//!
//! # Example
//!
//! ```
//! use elastic_lite::{Conditional, Query, RangeOperation, Search, StatementFactory};
//!
//! let search = Search::from_index("people", "person")
//!     .term("status", "active")
//!     .range("age", RangeOperation::Gte, 18);
//!
//! let statement = StatementFactory::generate(&Query::from(search)).unwrap();
//! assert_eq!(
//!     statement,
//!     r#"{"_source":true,"query":{"range":{"age":{"gte":"18"}}}}"#
//! );
//! ```

pub mod document;
pub mod error;
pub mod query;
pub mod statement;
pub mod value;

pub use document::{Document, SerdeDocument};
pub use error::{Error, Result};
pub use query::{
    ActiveCondition, Bulk, BulkMethod, Conditional, Delete, DeleteTarget, ElasticCondition, Field,
    Index, Query, RangeCondition, RangeOperation, Search, Update,
};
pub use statement::{Method, Operation, Statement, StatementFactory};
pub use value::{escape, FieldValue};
