//! Share fallback ladder for the result page.
//!
//! Attempts, in order: the native share sheet, a clipboard write confirmed
//! with an alert, a social intent link, and finally a manual copy prompt.

use async_trait::async_trait;
use thiserror::Error;

pub const SHARE_COPIED: &str = "共有用のテキストをコピーしました";
pub const SHARE_FAILED: &str = "共有に失敗しました";
pub const SHARE_PROMPT: &str = "共有用テキストをコピーしてください。";
pub const INTENT_BASE: &str = "https://twitter.com/intent/tweet?text=";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The user dismissed the share sheet.
    #[error("share cancelled")]
    Cancelled,
    #[error("capability unavailable")]
    Unsupported,
    #[error("share failed: {0}")]
    Failed(String),
}

/// How a share request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    Copied,
    Failed,
    IntentOpened,
    Prompted,
}

/// Browser capabilities used by [`share_result`].
#[async_trait(?Send)]
pub trait SharePlatform {
    async fn native_share(&self, text: &str) -> Result<(), ShareError>;
    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError>;
    fn open_intent(&self, url: &str) -> Result<(), ShareError>;
    /// Blocking confirmation dialog.
    fn alert(&self, message: &str);
    /// Blocking prompt pre-filled with `text` for manual copying.
    fn prompt_copy(&self, message: &str, text: &str);
}

#[must_use]
pub fn intent_url(text: &str) -> String {
    format!("{INTENT_BASE}{}", urlencoding::encode(text))
}

/// Share `text` through the first capability that works.
pub async fn share_result<P: SharePlatform + ?Sized>(platform: &P, text: &str) -> ShareOutcome {
    match platform.native_share(text).await {
        Ok(()) => return ShareOutcome::Shared,
        Err(ShareError::Cancelled) => return ShareOutcome::Cancelled,
        Err(ShareError::Unsupported) => {}
        Err(err) => log::warn!("native share failed, falling back: {err}"),
    }

    match platform.write_clipboard(text).await {
        Ok(()) => {
            platform.alert(SHARE_COPIED);
            return ShareOutcome::Copied;
        }
        Err(ShareError::Unsupported) => {}
        Err(err) => {
            log::warn!("clipboard write failed: {err}");
            platform.alert(SHARE_FAILED);
            return ShareOutcome::Failed;
        }
    }

    match platform.open_intent(&intent_url(text)) {
        Ok(()) => ShareOutcome::IntentOpened,
        Err(err) => {
            log::debug!("intent link unavailable: {err}");
            platform.prompt_copy(SHARE_PROMPT, text);
            ShareOutcome::Prompted
        }
    }
}
