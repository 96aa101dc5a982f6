use crate::a11y::{focus_by_id, focus_first_in, trap_tab};
use crate::dom::KeydownListener;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// Accessible name of the dialog.
    pub label: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub close_label: AttrValue,
    /// Element focused when the dialog opens; the first focusable otherwise.
    #[prop_or_default]
    pub initial_focus_id: Option<AttrValue>,
    /// Element that gets focus back once the dialog closes.
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let was_open = use_mut_ref(|| false);

    {
        let container_ref = container_ref.clone();
        use_effect_with(
            (
                props.open,
                props.initial_focus_id.clone(),
                props.return_focus_id.clone(),
            ),
            move |(open, initial_focus_id, return_focus_id)| {
                let previously_open = std::mem::replace(&mut *was_open.borrow_mut(), *open);
                if *open && !previously_open {
                    let focused = initial_focus_id
                        .as_ref()
                        .is_some_and(|id| focus_by_id(id));
                    if !focused && let Some(el) = container_ref.cast::<web_sys::Element>() {
                        focus_first_in(&el);
                    }
                } else if !*open
                    && previously_open
                    && let Some(id) = return_focus_id.as_ref()
                {
                    focus_by_id(id);
                }
                || {}
            },
        );
    }

    // Keys are handled at the document so Escape and Tab keep working after a
    // step change drops focus to <body>.
    {
        let container_ref = container_ref.clone();
        use_effect_with(
            (props.open, props.on_close.clone()),
            move |(open, on_close)| {
                let listener = if *open {
                    let on_close = on_close.clone();
                    KeydownListener::on_document(move |e: KeyboardEvent| match e.key().as_str() {
                        "Escape" => {
                            e.prevent_default();
                            on_close.emit(());
                        }
                        "Tab" => {
                            if let Some(el) = container_ref.cast::<web_sys::Element>() {
                                trap_tab(&el, &e);
                            }
                        }
                        _ => {}
                    })
                    .map_err(|err| log::warn!("modal keys unavailable: {err}"))
                    .ok()
                } else {
                    None
                };
                move || drop(listener)
            },
        );
    }

    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_: PointerEvent| cb.emit(()))
    };
    let keep_open = Callback::from(|e: PointerEvent| e.stop_propagation());
    let on_close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    if !props.open {
        return Html::default();
    }

    html! {
        <div
            class="modal-backdrop"
            role="dialog"
            aria-modal="true"
            aria-label={props.label.clone()}
            onpointerdown={on_backdrop}
        >
            <main class="modal" ref={container_ref} onpointerdown={keep_open}>
                <button type="button" class="modal__close" onclick={on_close_click}>
                    { props.close_label.clone() }
                </button>
                { for props.children.iter() }
            </main>
        </div>
    }
}
