//! Dialog content for each step of the Home flow.

use crate::components::modal::Modal;
use crate::components::result_card::ResultCard;
use crate::i18n;
use crate::paths::{DRAW_IMAGE, asset_path};
use kirakuji_core::{HomeFlow, MAX_CONTENT_CHARS, Step, char_count};
use std::collections::BTreeMap;
use yew::prelude::*;

pub const INPUT_ID: &str = "kirakuji-input";
pub const TRIGGER_ID: &str = "kirakuji-trigger";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub flow: HomeFlow,
    pub on_edit: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_draw: Callback<()>,
    /// Back to input; `true` also clears the textarea.
    pub on_retry: Callback<bool>,
    pub on_close: Callback<()>,
}

fn input_step(props: &Props) -> Html {
    let oninput = {
        let cb = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                cb.emit(area.value());
            }
        })
    };
    let onsubmit = {
        let cb = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let count = char_count(&props.flow.content).to_string();
    let max = MAX_CONTENT_CHARS.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("count", count.as_str());
    vars.insert("max", max.as_str());

    html! {
        <section class="home-step home-step--input">
            <textarea
                id={INPUT_ID}
                class="home-input"
                maxlength={max.clone()}
                placeholder={i18n::t("home.placeholder")}
                value={props.flow.content.clone()}
                {oninput}
            />
            <p class="home-counter muted" aria-live="polite">
                { i18n::tr("home.counter", Some(&vars)) }
            </p>
            <button
                type="button"
                class="home-submit"
                onclick={onsubmit}
                disabled={!props.flow.submit_enabled()}
            >
                { i18n::t("home.submit") }
            </button>
        </section>
    }
}

fn loading_step() -> Html {
    html! {
        <section class="home-step home-step--loading">
            <div class="home-character">{ i18n::t("home.loading_character") }</div>
            <p>{ i18n::t("home.loading_message") }</p>
            <div
                class="progress"
                role="progressbar"
                aria-busy="true"
                aria-label={i18n::t("home.loading_label")}
            >
                <div class="progress__bar progress__bar--pulse" />
            </div>
            <p class="muted">{ i18n::t("home.loading_hint") }</p>
        </section>
    }
}

fn ready_step(props: &Props) -> Html {
    let ondraw = {
        let cb = props.on_draw.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let label = i18n::t("home.draw");
    html! {
        <section class="home-step home-step--ready">
            <p>{ i18n::t("home.ready_message") }</p>
            <button
                type="button"
                class="image-button"
                aria-label={label.clone()}
                title={label.clone()}
                onclick={ondraw}
            >
                <img src={asset_path(DRAW_IMAGE)} alt="" width="200" height="200" />
                <span class="sr-only">{ label }</span>
            </button>
        </section>
    }
}

fn error_step(props: &Props, message: &str) -> Html {
    let onback = {
        let cb = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| cb.emit(false))
    };
    html! {
        <section class="home-step home-step--error">
            <p class="error-text" role="alert">{ message.to_string() }</p>
            <button type="button" class="home-back" onclick={onback}>
                { i18n::t("home.back_to_input") }
            </button>
        </section>
    }
}

#[function_component(HomeModal)]
pub fn home_modal(props: &Props) -> Html {
    let body = match &props.flow.step {
        Step::Input => input_step(props),
        Step::Loading(_) => loading_step(),
        Step::Ready => ready_step(props),
        Step::Result(text) => {
            let on_retry = {
                let cb = props.on_retry.clone();
                Callback::from(move |()| cb.emit(true))
            };
            html! {
                <ResultCard
                    text={AttrValue::from(text.clone())}
                    {on_retry}
                    retry_label={i18n::t("home.retry")}
                />
            }
        }
        Step::Error(message) => error_step(props, message),
    };

    html! {
        <Modal
            open={props.flow.modal_open}
            label={i18n::t("home.dialog_label")}
            close_label={i18n::t("home.close")}
            on_close={props.on_close.clone()}
            initial_focus_id={Some(AttrValue::from(INPUT_ID))}
            return_focus_id={Some(AttrValue::from(TRIGGER_ID))}
        >
            { body }
        </Modal>
    }
}
