//! HTTP transport seam.
//!
//! The clients only describe requests; the browser build sends them with
//! `fetch`, the tester with `reqwest`, and tests with scripted fakes.

use async_trait::async_trait;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON payload; sent with `Content-Type: application/json` when present.
    pub body: Option<String>,
    /// Abort the request once this much time has passed.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    #[must_use]
    pub const fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
            body: None,
            timeout: None,
        }
    }

    #[must_use]
    pub const fn post_json(url: String, body: String) -> Self {
        Self {
            method: Method::Post,
            url,
            body: Some(body),
            timeout: None,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// A request that never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("request could not complete: {0}")]
    Unreachable(String),
}

#[async_trait(?Send)]
pub trait Transport {
    /// Send one request and return whatever response the server produced.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was received, including
    /// when the request timeout elapsed.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        let ok = |status| HttpResponse {
            status,
            body: Vec::new(),
        };
        assert!(ok(200).is_success());
        assert!(ok(201).is_success());
        assert!(!ok(199).is_success());
        assert!(!ok(300).is_success());
        assert!(!ok(500).is_success());
    }

    #[test]
    fn builders_set_method_and_timeout() {
        let req = HttpRequest::post_json("u".into(), "{}".into())
            .with_timeout(Duration::from_secs(3));
        assert_eq!(req.method.as_str(), "POST");
        assert_eq!(req.timeout, Some(Duration::from_secs(3)));
        let req = HttpRequest::get("u".into());
        assert_eq!(req.method, Method::Get);
        assert!(req.body.is_none());
        assert!(req.timeout.is_none());
    }
}
