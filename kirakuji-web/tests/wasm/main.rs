#![cfg(target_arch = "wasm32")]

use kirakuji_core::{HomeFlow, HttpRequest, Step, Transport, TransportError};
use kirakuji_web::components::home_modal::{self, HomeModal, INPUT_ID};
use kirakuji_web::dom::{self, FetchTransport};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{EventTarget, HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::{AppHandle, Callback, Renderer};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

fn modal_props(step: Step, on_close: Callback<()>) -> home_modal::Props {
    home_modal::Props {
        flow: HomeFlow {
            modal_open: true,
            step,
            content: "闇".into(),
            ..HomeFlow::default()
        },
        on_edit: Callback::noop(),
        on_submit: Callback::noop(),
        on_draw: Callback::noop(),
        on_retry: Callback::noop(),
        on_close,
    }
}

fn render_modal(on_close: Callback<()>) -> AppHandle<HomeModal> {
    kirakuji_web::i18n::set_lang("ja");
    Renderer::<HomeModal>::with_root_and_props(ensure_root(), modal_props(Step::Input, on_close))
        .render()
}

fn press(target: &web_sys::Element, key: &str, shift: bool) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    let target: EventTarget = target.clone().into();
    let _ = target.dispatch_event(&event);
}

fn active_id() -> String {
    dom::document()
        .and_then(|doc| doc.active_element())
        .map(|el| el.id())
        .unwrap_or_default()
}

async fn next_frame() {
    let _ = dom::sleep_ms(0).await;
}

#[wasm_bindgen_test]
async fn opening_focuses_the_textarea() {
    let app = render_modal(Callback::noop());
    next_frame().await;
    assert_eq!(active_id(), INPUT_ID);
    app.destroy();
}

#[wasm_bindgen_test]
async fn escape_requests_close() {
    let closed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&closed);
    let app = render_modal(Callback::from(move |()| flag.set(true)));
    next_frame().await;

    let input = dom::document()
        .and_then(|doc| doc.get_element_by_id(INPUT_ID))
        .expect("textarea");
    press(&input, "Escape", false);
    assert!(closed.get());
    app.destroy();
}

#[wasm_bindgen_test]
async fn shift_tab_from_first_wraps_to_last() {
    let app = render_modal(Callback::noop());
    next_frame().await;

    let doc = dom::document().expect("document");
    let close = doc
        .query_selector(".modal__close")
        .expect("query")
        .expect("close button");
    let close_html: HtmlElement = close.clone().dyn_into().expect("html element");
    close_html.focus().expect("focus close");

    press(&close, "Tab", true);
    let active = doc.active_element().expect("active element");
    assert!(active.class_list().contains("home-submit"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn escape_from_body_closes_after_step_change() {
    let closed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&closed);
    let on_close = Callback::from(move |()| flag.set(true));
    let mut app = render_modal(on_close.clone());
    next_frame().await;

    // The focused textarea goes away with the input step.
    app.update(modal_props(Step::Ready, on_close));
    next_frame().await;

    let body = dom::document()
        .and_then(|doc| doc.body())
        .expect("document body");
    press(&body, "Escape", false);
    assert!(closed.get());
    app.destroy();
}

#[wasm_bindgen_test]
async fn fetch_aborts_with_timeout_when_the_deadline_passes() {
    let request = HttpRequest {
        timeout: Some(Duration::from_millis(1)),
        ..HttpRequest::get("http://10.255.255.1/draws/random".into())
    };
    let outcome = FetchTransport.send(request).await;
    assert_eq!(outcome, Err(TransportError::Timeout));
}

#[wasm_bindgen_test]
async fn fetch_without_deadline_reports_unreachable() {
    let request = HttpRequest::get("http://127.0.0.1:9/draws/random".into());
    let outcome = FetchTransport.send(request).await;
    assert!(matches!(outcome, Err(TransportError::Unreachable(_))));
}
