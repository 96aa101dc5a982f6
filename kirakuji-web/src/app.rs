use crate::components::language_select::LanguageSelect;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::result::ResultPage;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    let current_lang = use_state(crate::i18n::current_lang);
    let on_lang_change = {
        let current_lang = current_lang.clone();
        Callback::from(move |lang: String| current_lang.set(lang))
    };
    // Re-keyed on language change so every page renders the new bundle.
    html! {
        <BrowserRouter basename={router_base}>
            <header class="app-header">
                <LanguageSelect current_lang={(*current_lang).clone()} {on_lang_change} />
            </header>
            <div class="app-body" key={(*current_lang).clone()}>
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[function_component(NotFoundRoute)]
fn not_found_route() -> Html {
    let navigator = use_navigator();
    let on_go_home = Callback::from(move |()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });
    html! { <NotFound {on_go_home} /> }
}

#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Result => html! { <ResultPage /> },
        Route::NotFound => html! { <NotFoundRoute /> },
    }
}
