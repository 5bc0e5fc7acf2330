//! Query execution over a transport

use crate::config::ClientConfig;
use crate::error::Result;
use crate::transport::{HttpTransport, RawResponse, Transport};
use elastic_lite::{Query, Statement, StatementFactory};
use std::future::Future;
use tracing::{debug, warn};

/// Generates statements and hands them to a [`Transport`]
pub struct ElasticClient<T: Transport = HttpTransport> {
    transport: T,
}

impl ElasticClient<HttpTransport> {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(&config.connection)?))
    }
}

impl<T: Transport> ElasticClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Generate the statement for `query` and send it.
    ///
    /// Generation happens before the returned future is first polled, so
    /// the query does not need to outlive the call.
    pub fn execute(
        &self,
        query: &Query<'_>,
    ) -> impl Future<Output = Result<RawResponse>> + Send + '_ {
        let prepared = StatementFactory::prepare(query);
        async move { self.send(prepared?).await }
    }

    /// Send an already generated statement
    pub async fn send(&self, statement: Statement) -> Result<RawResponse> {
        let operation = statement.operation;
        debug!(%operation, bytes = statement.body.len(), "sending statement");

        let response = self.transport.send(&operation, statement.body).await?;

        if response.is_success() {
            debug!(%operation, status = response.status, "statement accepted");
        } else {
            warn!(
                %operation,
                status = response.status,
                body = %response.text(),
                "statement rejected"
            );
        }

        Ok(response)
    }
}
