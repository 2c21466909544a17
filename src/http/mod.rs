//! HTTP transport module.
//!
//! Single chokepoint for every network call: builds URLs, attaches the
//! ambient credential, serializes bodies and classifies responses. No
//! retries, no timeouts, no caching; each call is one round trip.

use std::sync::RwLock;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::Error;

/// Office-document MIME prefix used by the attendance export endpoint.
const DOCX_MIME_PREFIX: &str = "application/vnd.openxmlformats";

/// Shared HTTP client holding the base URL and the bearer token.
///
/// The token lives here so that every request picks it up automatically;
/// callers never attach credentials manually. Only the session store writes
/// the token.
pub struct HttpClient {
    base_url: String,
    inner: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            inner: reqwest::Client::new(),
            token: RwLock::new(None),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("token lock poisoned") = Some(token.into());
    }

    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    /// Build the absolute URL for a backend path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.inner.request(method, self.url(path));
        match self.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send a prepared request, mapping connection-level failures.
    async fn send(&self, method: Method, path: &str, req: RequestBuilder) -> Result<Response, Error> {
        tracing::debug!(%method, path, "request");
        req.send().await.map_err(Error::Network)
    }

    /// Decode a JSON response.
    ///
    /// The body is parsed as JSON unconditionally, error responses
    /// included; a non-success status then raises a structured error
    /// carrying the message, the status code and the raw body.
    async fn decode<T: DeserializeOwned>(&self, path: &str, resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let body: serde_json::Value = resp.json().await.map_err(Error::Network)?;

        if !status.is_success() {
            let err = Error::from_error_body(status.as_u16(), body);
            tracing::warn!(status = status.as_u16(), path, "api error: {}", err.message());
            return Err(err);
        }

        serde_json::from_value(body).map_err(Error::Decode)
    }

    async fn json_request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        req: RequestBuilder,
    ) -> Result<T, Error> {
        let resp = self.send(method, path, req).await?;
        self.decode(path, resp).await
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let req = self.builder(Method::GET, path);
        self.json_request(Method::GET, path, req).await
    }

    /// GET a JSON resource with query parameters. Unset filters are the
    /// caller's concern; only present pairs are sent.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let req = self.builder(Method::GET, path).query(query);
        self.json_request(Method::GET, path, req).await
    }

    /// POST a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let req = self.builder(Method::POST, path).json(body);
        self.json_request(Method::POST, path, req).await
    }

    /// POST with an empty JSON object body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.post(path, &serde_json::json!({})).await
    }

    /// POST a multipart form. The form carries its own content type and is
    /// passed through unserialized.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, Error> {
        let req = self.builder(Method::POST, path).multipart(form);
        self.json_request(Method::POST, path, req).await
    }

    /// PUT a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let req = self.builder(Method::PUT, path).json(body);
        self.json_request(Method::PUT, path, req).await
    }

    /// DELETE a resource.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let req = self.builder(Method::DELETE, path);
        self.json_request(Method::DELETE, path, req).await
    }

    /// GET a binary document (DOCX export).
    ///
    /// Binary endpoints have no structured error body: any non-success
    /// status collapses to a single generic export error without touching
    /// the payload. A success returns the raw bytes unparsed.
    pub async fn get_binary(&self, path: &str) -> Result<Vec<u8>, Error> {
        let req = self.builder(Method::GET, path);
        let resp = self.send(Method::GET, path, req).await?;
        let status = resp.status();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path, "export failed");
            return Err(Error::Export {
                status: status.as_u16(),
            });
        }

        if !declares_docx(&resp) {
            tracing::debug!(path, "binary endpoint returned a non-document content type");
        }

        Ok(resp.bytes().await.map_err(Error::Network)?.to_vec())
    }
}

/// Whether a response declares an office-document content type.
fn declares_docx(resp: &Response) -> bool {
    resp.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with(DOCX_MIME_PREFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpClient::new("http://127.0.0.1:5000/");
        assert_eq!(
            client.url("/api/members"),
            "http://127.0.0.1:5000/api/members"
        );
    }

    #[test]
    fn test_token_roundtrip() {
        let client = HttpClient::new("http://127.0.0.1:5000");
        assert!(client.token().is_none());

        client.set_token("t1");
        assert_eq!(client.token().as_deref(), Some("t1"));

        client.clear_token();
        assert!(client.token().is_none());
    }
}
