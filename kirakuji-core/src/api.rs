//! Wire shapes for the posting and draw endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub post_id: String,
    pub content: String,
}

/// Success body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub post_id: String,
}

/// Success body of `GET /draws/random`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResponse {
    #[serde(default)]
    pub post_id: String,
    pub result: String,
    #[serde(default)]
    pub status: String,
}

/// Error body shared by both endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_post_request_uses_snake_case_fields() {
        let body = CreatePostRequest {
            post_id: "abc".into(),
            content: "闇".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["post_id"], "abc");
        assert_eq!(json["content"], "闇");
    }

    #[test]
    fn draw_response_tolerates_missing_metadata() {
        let draw: DrawResponse = serde_json::from_str(r#"{"result":"大吉"}"#).unwrap();
        assert_eq!(draw.result, "大吉");
        assert!(draw.post_id.is_empty());
        assert!(draw.status.is_empty());
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, None);
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"bad"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("bad"));
    }
}
