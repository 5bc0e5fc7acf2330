//! Transport and configuration for elasticlite statements
//!
//! The core crate only produces statements; this crate sends them. It does
//! not retry, authenticate, or decode responses: callers get the status and
//! the raw body back.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod transport;

pub use client::ElasticClient;
pub use config::{ClientConfig, ConnectionConfig, LoggingConfig};
pub use error::{ClientError, Result};
pub use logging::init_tracing;
pub use transport::{HttpTransport, RawResponse, Transport};
