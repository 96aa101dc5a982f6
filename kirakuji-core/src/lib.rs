//! Kirakuji client core
//!
//! Platform-agnostic logic for the Kirakuji fortune-draw front-end: the HTTP
//! boundary to the posting and draw endpoints, the Home view-state machine,
//! message layout helpers and the share fallback ladder.
//! This crate carries no DOM or UI framework dependencies; the browser and
//! native front-ends plug in through the [`Transport`] and [`SharePlatform`]
//! traits.
#![forbid(unsafe_code)]

pub mod api;
pub mod client;
pub mod config;
pub mod content;
pub mod controller;
pub mod errors;
pub mod flow;
pub mod overlay;
pub mod result;
pub mod share;
pub mod split;
pub mod transport;

pub use api::{ApiErrorBody, CreatePostRequest, CreatePostResponse, DrawResponse};
pub use client::{KirakujiClient, POST_TIMEOUT, new_post_id};
pub use config::{API_BASE_ENV, ApiBase, ConfigError, build_time_api_base};
pub use content::{ContentError, MAX_CONTENT_CHARS, PostContent, can_submit, char_count};
pub use controller::HomeController;
pub use errors::{ApiError, resolve_error_message, status_message};
pub use flow::{Effect, FlowEvent, HomeFlow, Origin, Step, Ticket};
pub use overlay::{
    ANIMATION_GRACE_MS, TRANSITION_MS, reveal_after, signal_or_deadline, wait_for_both,
};
pub use result::{RESULT_LINE_CHARS, RESULT_PLACEHOLDER, resolve_result_text, result_lines};
pub use share::{ShareError, ShareOutcome, SharePlatform, intent_url, share_result};
pub use split::split_message;
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
