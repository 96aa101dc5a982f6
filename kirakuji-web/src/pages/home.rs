use crate::components::home_modal::{HomeModal, TRIGGER_ID};
use crate::components::transition_overlay::TransitionOverlay;
use crate::dom::{FetchTransport, sleep_ms};
use crate::i18n;
use crate::paths::{TRIGGER_IMAGE, asset_path};
use crate::router::{ResultQuery, Route};
use futures::channel::oneshot;
use kirakuji_core::{
    ANIMATION_GRACE_MS, FlowEvent, HomeController, HomeFlow, KirakujiClient, TRANSITION_MS,
    reveal_after, signal_or_deadline,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let flow = use_state(HomeFlow::default);
    let overlay_visible = use_state(|| false);
    let animation_done = use_mut_ref(|| None::<oneshot::Sender<()>>);
    let navigator = use_navigator();
    let controller = use_memo((), |()| {
        HomeController::new(KirakujiClient::from_build_env(FetchTransport))
    });

    {
        let controller = controller.clone();
        let flow = flow.clone();
        use_effect_with((), move |()| {
            let handle = flow.clone();
            controller.set_observer(move |snapshot| handle.set(snapshot.clone()));
            flow.set(controller.snapshot());
            move || controller.clear_observer()
        });
    }

    let dispatch = {
        let controller = controller.clone();
        move |event: FlowEvent| {
            controller.dispatch(event);
        }
    };

    let on_open = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(FlowEvent::Open))
    };
    let on_edit = {
        let dispatch = dispatch.clone();
        Callback::from(move |text: String| dispatch(FlowEvent::Edit(text)))
    };
    let on_retry = {
        let dispatch = dispatch.clone();
        Callback::from(move |clear_content: bool| dispatch(FlowEvent::Retry { clear_content }))
    };
    let on_close = Callback::from(move |()| dispatch(FlowEvent::Close));
    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |()| {
            let controller = controller.clone();
            spawn_local(async move { controller.submit().await });
        })
    };
    let on_draw = {
        let controller = controller.clone();
        let overlay_visible = overlay_visible.clone();
        let animation_done = animation_done.clone();
        Callback::from(move |()| {
            let controller = controller.clone();
            let overlay_visible = overlay_visible.clone();
            let navigator = navigator.clone();
            let (tx, rx) = oneshot::channel();
            *animation_done.borrow_mut() = Some(tx);
            overlay_visible.set(true);
            spawn_local(async move {
                let timer = async {
                    if let Err(err) = sleep_ms(TRANSITION_MS).await {
                        log::warn!("overlay timer unavailable: {err}");
                    }
                };
                let animation = signal_or_deadline(rx, async {
                    let _ = sleep_ms(TRANSITION_MS + ANIMATION_GRACE_MS).await;
                });
                match reveal_after(controller.draw(), timer, animation).await {
                    Some(text) => {
                        let Some(navigator) = navigator else {
                            log::error!("no router available to show the result");
                            return;
                        };
                        if let Err(err) =
                            navigator.push_with_query(&Route::Result, &ResultQuery::with_text(text))
                        {
                            log::error!("could not open result page: {err}");
                        }
                    }
                    None => overlay_visible.set(false),
                }
            });
        })
    };
    let on_animation_complete = Callback::from(move |()| {
        if let Some(tx) = animation_done.borrow_mut().take() {
            let _ = tx.send(());
        }
    });

    let trigger_label = i18n::t("home.trigger");
    html! {
        <div class="home">
            <div class="home__content">
                <h1>{ i18n::t("app.title") }</h1>
                <button
                    id={TRIGGER_ID}
                    type="button"
                    class="image-button"
                    aria-label={trigger_label.clone()}
                    title={trigger_label.clone()}
                    onclick={on_open}
                >
                    <img src={asset_path(TRIGGER_IMAGE)} alt="" width="220" height="220" />
                    <span class="sr-only">{ trigger_label }</span>
                </button>
            </div>
            <HomeModal
                flow={(*flow).clone()}
                {on_edit}
                {on_submit}
                {on_draw}
                {on_retry}
                {on_close}
            />
            if *overlay_visible {
                <TransitionOverlay {on_animation_complete} />
            }
        </div>
    }
}
