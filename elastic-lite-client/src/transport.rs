//! Sending statements to the engine

use crate::config::ConnectionConfig;
use crate::error::{ClientError, Result};
use async_trait::async_trait;
use elastic_lite::{Method, Operation};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::borrow::Cow;
use url::Url;

/// Status and raw body of an engine response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Delivers a statement body to the endpoint named by its operation
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, operation: &Operation, body: String) -> Result<RawResponse>;
}

/// `reqwest`-backed transport
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ConnectionConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "base_url '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self { client, base_url })
    }

    /// Full URL for `operation`, with each segment percent-encoded
    pub fn url_for(&self, operation: &Operation) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Config(format!("base_url '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(&operation.segments);
        Ok(url)
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, operation: &Operation, body: String) -> Result<RawResponse> {
        let url = self.url_for(operation)?;

        let response = self
            .client
            .request(http_method(operation.method), url)
            .header(CONTENT_TYPE, operation.content_type)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
