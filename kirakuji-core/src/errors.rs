//! User-facing error messages for the HTTP boundary.

use crate::api::ApiErrorBody;
use crate::config::ConfigError;
use crate::transport::TransportError;
use thiserror::Error;

pub const GENERIC_FAILURE: &str = "通信に失敗しました";
pub const POST_FAILURE: &str = "投稿に失敗しました";
pub const DRAW_FAILURE: &str = "おみくじの取得に失敗しました";
pub const NETWORK_UNREACHABLE: &str = "通信に失敗しました。電波の良いところで再度お試しください";
pub const NETWORK_TIMEOUT: &str = "通信がタイムアウトしました。時間をおいて再度お試しください";

/// Message for well-known HTTP statuses.
#[must_use]
pub const fn status_message(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("入力が正しくありません"),
        404 => Some("データが見つかりません"),
        409 => Some("すでに登録されています"),
        500 => Some("サーバーで問題が発生しました"),
        _ => None,
    }
}

/// The `message` field of an error body, if the body parses and carries one.
#[must_use]
pub fn message_from_body(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
}

/// Resolve the message for a non-success response.
///
/// Precedence: body `message`, then the status table, then `fallback`.
#[must_use]
pub fn resolve_error_message(status: u16, body: &[u8], fallback: &str) -> String {
    message_from_body(body)
        .unwrap_or_else(|| status_message(status).unwrap_or(fallback).to_string())
}

impl TransportError {
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout => NETWORK_TIMEOUT,
            Self::Unreachable(_) => NETWORK_UNREACHABLE,
        }
    }
}

/// Failure of a client call. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("{}", .0.user_message())]
    Network(TransportError),
    #[error("{message}")]
    Payload { message: String, detail: String },
}

impl ApiError {
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_message_wins_over_table() {
        let msg = resolve_error_message(400, br#"{"message":"bad"}"#, POST_FAILURE);
        assert_eq!(msg, "bad");
    }

    #[test]
    fn table_used_when_body_missing_or_malformed() {
        assert_eq!(
            resolve_error_message(500, b"", POST_FAILURE),
            "サーバーで問題が発生しました"
        );
        assert_eq!(
            resolve_error_message(404, b"<html>oops</html>", DRAW_FAILURE),
            "データが見つかりません"
        );
        assert_eq!(
            resolve_error_message(409, br#"{"message":""}"#, POST_FAILURE),
            "すでに登録されています"
        );
    }

    #[test]
    fn fallback_used_for_unmapped_status() {
        assert_eq!(resolve_error_message(418, b"{}", GENERIC_FAILURE), GENERIC_FAILURE);
        assert_eq!(resolve_error_message(503, b"", DRAW_FAILURE), DRAW_FAILURE);
    }

    #[test]
    fn network_errors_have_distinct_messages() {
        let timeout = ApiError::Network(TransportError::Timeout);
        let offline = ApiError::Network(TransportError::Unreachable("dns".into()));
        assert_eq!(timeout.user_message(), NETWORK_TIMEOUT);
        assert_eq!(offline.user_message(), NETWORK_UNREACHABLE);
        assert_ne!(timeout.user_message(), GENERIC_FAILURE);
        assert_eq!(timeout.status(), None);
    }

    #[test]
    fn config_error_is_transparent() {
        let err = ApiError::from(ConfigError::MissingApiBase);
        assert_eq!(err.user_message(), "KIRAKUJI_API_BASE が未設定です");
    }
}
