use reqwest::blocking::Client;
use thiserror::Error;

/// A GET that reached the server. The body is fully read for 200 and empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The request never produced a complete response (DNS, connect, TLS, body read).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<reqwest::Error>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Blocking HTTP GET.
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// `reqwest` with client defaults: no extra headers, default timeout and redirects.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        if status != 200 {
            // Non-200 bodies are never written, so they are not read either.
            tracing::debug!(url, status, "response received");
            return Ok(HttpResponse {
                status,
                body: Vec::new(),
            });
        }
        let body = response.bytes()?.to_vec();
        tracing::debug!(url, status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}
