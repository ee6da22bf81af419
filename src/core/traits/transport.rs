use crate::core::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Fixed timeout for every remote round trip
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP method supported by the gateway APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// HTTP Basic credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub login: String,
    pub password: String,
}

impl BasicAuth {
    /// Builds credentials only when a login is configured
    pub fn from_parts(login: Option<String>, password: Option<String>) -> Option<Self> {
        login.filter(|l| !l.is_empty()).map(|login| BasicAuth {
            login,
            password: password.unwrap_or_default(),
        })
    }
}

/// Outbound request handed to a transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent only for POST
    pub body: Option<Value>,
    pub basic_auth: Option<BasicAuth>,
}

/// Raw response returned by a transport
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport capability injected into the gateway clients
///
/// Implementations perform exactly one round trip per call and must not retry.
/// Only connection-level failures are errors; any HTTP status is returned as
/// a response so callers can apply their own status rules.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// reqwest-backed transport with the fixed 20s timeout
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        builder = builder.header("Accept", "application/json");

        if let Some(auth) = &request.basic_auth {
            builder = builder.basic_auth(&auth.login, Some(&auth.password));
        }

        if let (Method::Post, Some(body)) = (request.method, &request.body) {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
