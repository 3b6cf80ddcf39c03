use crate::components::loading::Loading;
use crate::config::FrontendConfig;
use crate::context::AppContext;
use crate::models::app_state::AppState;
use crate::pages::LoginPage;
use crate::routes::{Route, switch};
use crate::session::Session;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_effect_with, use_memo, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let context = use_memo((), |()| AppContext::browser(&FrontendConfig::new()));
    let (state, dispatch) = use_store::<AppState>();
    let ready = use_state(|| false);

    {
        let context = context.clone();
        let dispatch = dispatch.clone();
        let ready = ready.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let session = context.coordinator.initialize().await;
                dispatch.set(AppState::from(&session));
                ready.set(true);
            });
            || ()
        });
    }

    let on_login = {
        let dispatch = dispatch.clone();
        Callback::from(move |session: Session| {
            dispatch.set(AppState::from(&session));
        })
    };

    let on_logout = {
        let context = context.clone();
        Callback::from(move |()| {
            let context = context.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let session = context.coordinator.logout().await;
                context.env.snapshot.invalidate();
                dispatch.set(AppState::from(&session));
            });
        })
    };

    if !*ready {
        return html! { <Loading /> };
    }

    if !state.authenticated {
        return html! {
            <LoginPage context={(*context).clone()} {on_login} />
        };
    }

    let context = (*context).clone();
    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route| switch(route, context.clone(), on_logout.clone())} />
        </BrowserRouter>
    }
}
