//! Clients for `POST /posts` and `GET /draws/random`.

use crate::api::{CreatePostRequest, CreatePostResponse, DrawResponse};
use crate::config::{ApiBase, ConfigError, build_time_api_base};
use crate::content::PostContent;
use crate::errors::{ApiError, DRAW_FAILURE, POST_FAILURE, resolve_error_message};
use crate::transport::{HttpRequest, HttpResponse, Transport};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client-side timeout applied to post submissions.
pub const POST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct KirakujiClient<T> {
    transport: T,
    api_base: Option<String>,
}

impl<T: Transport> KirakujiClient<T> {
    /// Build a client around an unresolved base URL; it is validated per call.
    pub const fn new(transport: T, api_base: Option<String>) -> Self {
        Self {
            transport,
            api_base,
        }
    }

    /// Build a client from the base URL captured at compile time.
    pub fn from_build_env(transport: T) -> Self {
        Self::new(transport, build_time_api_base().map(str::to_string))
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    fn base(&self) -> Result<ApiBase, ConfigError> {
        ApiBase::resolve(self.api_base.as_deref())
    }

    /// Register a confession under a freshly generated post id.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiError::Config`] before any request when the base URL is
    /// missing, [`ApiError::Network`] when no response arrives within
    /// [`POST_TIMEOUT`], and [`ApiError::Http`] for non-2xx responses.
    pub async fn create_post(&self, content: &PostContent) -> Result<CreatePostResponse, ApiError> {
        let base = self.base()?;
        let payload = CreatePostRequest {
            post_id: new_post_id(),
            content: content.as_str().to_string(),
        };
        let body = serde_json::to_string(&payload).map_err(|err| ApiError::Payload {
            message: POST_FAILURE.to_string(),
            detail: err.to_string(),
        })?;
        let url = base.endpoint("posts");
        log::debug!("POST {url} post_id={}", payload.post_id);

        let request = HttpRequest::post_json(url, body).with_timeout(POST_TIMEOUT);
        let response = self.transport.send(request).await.map_err(|err| {
            log::warn!("post submission did not complete: {err}");
            ApiError::Network(err)
        })?;
        decode(response, POST_FAILURE)
    }

    /// Fetch one random fortune. No timeout, no retry.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::create_post`].
    pub async fn fetch_random_draw(&self) -> Result<DrawResponse, ApiError> {
        let base = self.base()?;
        let url = base.endpoint("draws/random");
        log::debug!("GET {url}");

        let response = self
            .transport
            .send(HttpRequest::get(url))
            .await
            .map_err(|err| {
                log::warn!("draw request did not complete: {err}");
                ApiError::Network(err)
            })?;
        decode(response, DRAW_FAILURE)
    }
}

fn decode<R: DeserializeOwned>(response: HttpResponse, fallback: &str) -> Result<R, ApiError> {
    if !response.is_success() {
        let message = resolve_error_message(response.status, &response.body, fallback);
        log::warn!("request failed with HTTP {}: {message}", response.status);
        return Err(ApiError::Http {
            status: response.status,
            message,
        });
    }
    serde_json::from_slice(&response.body).map_err(|err| ApiError::Payload {
        message: fallback.to_string(),
        detail: err.to_string(),
    })
}

/// A random UUID v4 identifying one submission.
#[must_use]
pub fn new_post_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_ids_are_unique_uuids() {
        let a = new_post_id();
        let b = new_post_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn decode_rejects_malformed_success_body() {
        let response = HttpResponse {
            status: 200,
            body: b"not json".to_vec(),
        };
        let err = decode::<DrawResponse>(response, DRAW_FAILURE).unwrap_err();
        assert!(matches!(err, ApiError::Payload { .. }));
        assert_eq!(err.user_message(), DRAW_FAILURE);
    }
}
