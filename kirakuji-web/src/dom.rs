use async_trait::async_trait;
use js_sys::{Function, Promise, Uint8Array};
use kirakuji_core::{HttpRequest, HttpResponse, Transport, TransportError};
use std::time::Duration;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AbortController, Document, EventTarget, Headers, KeyboardEvent, Request, RequestInit, Response,
    Window,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("`window` is not available")]
    NoWindow,
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// The global `window`, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

fn timeout_ms(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if no browser `window` exists or the timer cannot be scheduled.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: u32) -> Result<(), DomError> {
    let win = window().ok_or(DomError::NoWindow)?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| DomError::Js("resolve function should be set".into()))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout_ms(Duration::from_millis(u64::from(duration_ms))),
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Writes `log` records to the browser console.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Install as the global logger. Later calls are ignored.
    pub fn install(level: log::LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

fn format_record(level: log::Level, target: &str, message: &std::fmt::Arguments<'_>) -> String {
    format!("[{level}] {target}: {message}")
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_record(
            record.level(),
            record.target(),
            record.args(),
        ));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn unreachable(err: JsValue) -> TransportError {
    TransportError::Unreachable(js_error_message(&err))
}

/// Aborts a fetch when its timeout elapses; cancels the timer on drop.
struct AbortTimer {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl AbortTimer {
    fn start(
        window: &Window,
        controller: &AbortController,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let controller = controller.clone();
        let callback = Closure::<dyn FnMut()>::new(move || controller.abort());
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout_ms(timeout),
            )
            .map_err(unreachable)?;
        Ok(Self {
            window: window.clone(),
            handle,
            _callback: callback,
        })
    }
}

impl Drop for AbortTimer {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.handle);
    }
}

/// A `keydown` listener on the whole document; removed on drop.
pub struct KeydownListener {
    target: EventTarget,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeydownListener {
    /// Listen on `document` so keys still reach the handler when focus falls
    /// back to `<body>`.
    ///
    /// # Errors
    /// Returns an error if there is no document or the listener cannot be added.
    pub fn on_document(handler: impl FnMut(KeyboardEvent) + 'static) -> Result<Self, DomError> {
        let target: EventTarget = document().ok_or(DomError::NoWindow)?.into();
        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(handler);
        target.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())?;
        Ok(Self { target, callback })
    }
}

impl Drop for KeydownListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}

/// [`Transport`] over the browser `fetch` API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let win = window().ok_or_else(|| TransportError::Unreachable("no window".into()))?;
        let controller = AbortController::new().map_err(unreachable)?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_signal(Some(&controller.signal()));
        if let Some(body) = request.body.as_deref() {
            let headers = Headers::new().map_err(unreachable)?;
            headers
                .set("Content-Type", "application/json")
                .map_err(unreachable)?;
            init.set_headers(&headers);
            init.set_body(&JsValue::from_str(body));
        }
        let fetch_request =
            Request::new_with_str_and_init(&request.url, &init).map_err(unreachable)?;

        let timer = request
            .timeout
            .map(|timeout| AbortTimer::start(&win, &controller, timeout))
            .transpose()?;
        let outcome = JsFuture::from(win.fetch_with_request(&fetch_request)).await;
        drop(timer);

        let value = outcome.map_err(|err| {
            if controller.signal().aborted() {
                TransportError::Timeout
            } else {
                unreachable(err)
            }
        })?;
        let response: Response = value.dyn_into().map_err(unreachable)?;
        let status = response.status();
        let buffer = JsFuture::from(response.array_buffer().map_err(unreachable)?)
            .await
            .map_err(unreachable)?;

        Ok(HttpResponse {
            status,
            body: Uint8Array::new(&buffer).to_vec(),
        })
    }
}
