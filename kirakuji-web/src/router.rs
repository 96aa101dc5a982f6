use serde::{Deserialize, Serialize};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/result")]
    Result,
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Query string of the result page: `/result?text=...`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ResultQuery {
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip_through_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Result.to_path(), "/result");
        assert_eq!(Route::recognize("/result"), Some(Route::Result));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn empty_query_serializes_without_text() {
        let json = serde_json::to_string(&ResultQuery::default()).unwrap();
        assert_eq!(json, "{}");
        let json = serde_json::to_string(&ResultQuery::with_text("大吉")).unwrap();
        assert_eq!(json, r#"{"text":"大吉"}"#);
    }
}
