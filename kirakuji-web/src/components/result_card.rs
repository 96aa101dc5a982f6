use kirakuji_core::result_lines;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub text: AttrValue,
    pub on_retry: Callback<()>,
    pub retry_label: AttrValue,
    #[prop_or_default]
    pub share_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_share: Option<Callback<()>>,
    /// Put the share button before the retry button.
    #[prop_or_default]
    pub reverse_buttons: bool,
}

#[function_component(ResultCard)]
pub fn result_card(props: &Props) -> Html {
    let retry = {
        let cb = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let primary = html! {
        <button type="button" class="result-card__button result-card__retry" onclick={retry}>
            { props.retry_label.clone() }
        </button>
    };
    let secondary = match (&props.on_share, &props.share_label) {
        (Some(cb), Some(label)) => {
            let cb = cb.clone();
            let share = Callback::from(move |_: MouseEvent| cb.emit(()));
            Some(html! {
                <button type="button" class="result-card__button result-card__share" onclick={share}>
                    { label.clone() }
                </button>
            })
        }
        _ => None,
    };
    let actions_class = if secondary.is_some() {
        "result-card__actions result-card__actions--row"
    } else {
        "result-card__actions"
    };
    let (first, second) = if props.reverse_buttons {
        (secondary, Some(primary))
    } else {
        (Some(primary), secondary)
    };

    html! {
        <section class="result-card">
            <div class="result-card__frame">
                <svg class="result-card__border" viewBox="0 0 100 100" preserveAspectRatio="none" aria-hidden="true">
                    <rect
                        x="1" y="1" width="98" height="98" rx="6" ry="6"
                        fill="none" stroke="currentColor" stroke-width="2"
                        stroke-dasharray="14 6 4 10 8 12 6 5 9 7"
                    />
                </svg>
                <p class="result-card__text">
                    { for result_lines(&props.text).into_iter().map(|line| html! {
                        <span class="result-card__line">{ line }</span>
                    }) }
                </p>
            </div>
            <div class={actions_class}>
                { first.unwrap_or_default() }
                { second.unwrap_or_default() }
            </div>
        </section>
    }
}
