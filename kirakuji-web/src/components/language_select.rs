use crate::i18n::{locales, set_lang, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub const SELECT_ID: &str = "lang-select";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: AttrValue,
    pub on_lang_change: Callback<String>,
}

#[function_component(LanguageSelect)]
pub fn language_select(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    let label = t("nav.language");
    html! {
        <nav aria-label={label.clone()} class="lang-nav">
            <label for={SELECT_ID} class="sr-only">{ label.clone() }</label>
            <select id={SELECT_ID} onchange={on_change} aria-label={label}>
                { for locales().iter().map(|meta| html! {
                    <option value={meta.code} selected={meta.code == p.current_lang.as_str()}>
                        { meta.name }
                    </option>
                }) }
            </select>
        </nav>
    }
}
