use crate::i18n;
use crate::paths::{OVERLAY_IMAGE, asset_path};
use kirakuji_core::TRANSITION_MS;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or_default]
    pub sub_message: Option<AttrValue>,
    /// Fired when the progress bar animation finishes.
    pub on_animation_complete: Callback<()>,
}

#[function_component(TransitionOverlay)]
pub fn transition_overlay(props: &Props) -> Html {
    let on_end = {
        let cb = props.on_animation_complete.clone();
        Callback::from(move |_: AnimationEvent| cb.emit(()))
    };
    let style = format!("--kirakuji-transition-duration: {TRANSITION_MS}ms");
    let message = props
        .message
        .clone()
        .unwrap_or_else(|| i18n::t("overlay.message").into());
    let sub_message = props
        .sub_message
        .clone()
        .unwrap_or_else(|| i18n::t("overlay.sub_message").into());
    let image = asset_path(OVERLAY_IMAGE);

    html! {
        <output class="transition-overlay" aria-live="polite" aria-busy="true" {style}>
            <div class="transition-overlay__body">
                <div class="transition-overlay__stage">
                    <div class="kirakuji-ring" aria-hidden="true" />
                    <div class="kirakuji-ring kirakuji-ring--delayed" aria-hidden="true" />
                    <img class="kirakuji-float" src={image.clone()} alt="" width="240" height="240" />
                    <img class="kirakuji-shadow" src={image} alt="" width="240" height="240" aria-hidden="true" />
                </div>
                <p>{ message }</p>
                <div class="progress" role="progressbar" aria-label={i18n::t("overlay.progress_label")}>
                    <div class="kirakuji-progress" onanimationend={on_end} />
                </div>
                <p class="muted">{ sub_message }</p>
            </div>
        </output>
    }
}
