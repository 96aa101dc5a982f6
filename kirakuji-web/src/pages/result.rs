use crate::components::result_card::ResultCard;
use crate::i18n;
use crate::paths::{CURTAIN_IMAGE, asset_path};
use crate::router::{ResultQuery, Route};
use crate::share::BrowserShare;
use kirakuji_core::{resolve_result_text, share_result};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub text: AttrValue,
    pub on_retry: Callback<()>,
    pub on_share: Callback<()>,
}

/// The fortune under a curtain, with retry and share actions.
#[function_component(ResultView)]
pub fn result_view(props: &Props) -> Html {
    html! {
        <div class="result-page">
            <div class="result-page__curtain" aria-hidden="true">
                <img src={asset_path(CURTAIN_IMAGE)} alt="" width="1440" height="480" />
            </div>
            <main class="result-page__panel" aria-label={i18n::t("result.label")}>
                <ResultCard
                    text={props.text.clone()}
                    on_retry={props.on_retry.clone()}
                    retry_label={i18n::t("result.retry")}
                    share_label={Some(AttrValue::from(i18n::t("result.share")))}
                    on_share={Some(props.on_share.clone())}
                    reverse_buttons={true}
                />
            </main>
        </div>
    }
}

#[function_component(ResultPage)]
pub fn result_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let query = location
        .and_then(|loc| loc.query::<ResultQuery>().ok())
        .unwrap_or_default();
    let text = resolve_result_text(query.text.as_deref());

    let on_retry = Callback::from(move |()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });
    let on_share = {
        let text = text.clone();
        Callback::from(move |()| {
            let text = text.clone();
            spawn_local(async move {
                let outcome = share_result(&BrowserShare, &text).await;
                log::info!("share finished: {outcome:?}");
            });
        })
    };

    html! {
        <ResultView text={text} {on_retry} {on_share} />
    }
}
