//! Browser capabilities behind the result page's share button.

use crate::dom::{js_error_message, window};
use async_trait::async_trait;
use js_sys::{Object, Reflect};
use kirakuji_core::{ShareError, SharePlatform};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, ShareData};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserShare;

fn has_property(target: &Object, name: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(name))
        .is_ok_and(|value| !value.is_undefined() && !value.is_null())
}

/// A rejected share promise: `AbortError` means the user closed the sheet.
fn classify_rejection(err: &JsValue) -> ShareError {
    match err.dyn_ref::<DomException>() {
        Some(exception) if exception.name() == "AbortError" => ShareError::Cancelled,
        _ => ShareError::Failed(js_error_message(err)),
    }
}

#[async_trait(?Send)]
impl SharePlatform for BrowserShare {
    async fn native_share(&self, text: &str) -> Result<(), ShareError> {
        let navigator = window().ok_or(ShareError::Unsupported)?.navigator();
        if !has_property(&navigator, "share") {
            return Err(ShareError::Unsupported);
        }
        let data = ShareData::new();
        data.set_text(text);
        JsFuture::from(navigator.share_with_data(&data))
            .await
            .map(|_| ())
            .map_err(|err| classify_rejection(&err))
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let navigator = window().ok_or(ShareError::Unsupported)?.navigator();
        if !has_property(&navigator, "clipboard") {
            return Err(ShareError::Unsupported);
        }
        JsFuture::from(navigator.clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ShareError::Failed(js_error_message(&err)))
    }

    fn open_intent(&self, url: &str) -> Result<(), ShareError> {
        let win = window().ok_or(ShareError::Unsupported)?;
        match win.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            // Popup blocked.
            Ok(None) => Err(ShareError::Unsupported),
            Err(err) => Err(ShareError::Failed(js_error_message(&err))),
        }
    }

    fn alert(&self, message: &str) {
        if let Some(win) = window() {
            let _ = win.alert_with_message(message);
        }
    }

    fn prompt_copy(&self, message: &str, text: &str) {
        if let Some(win) = window() {
            let _ = win.prompt_with_message_and_default(message, text);
        }
    }
}
