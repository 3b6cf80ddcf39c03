use crate::{components::NavLink, models::app_state::AppState, routes::Route};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_route: Route,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let username = use_selector(|state: &AppState| state.username.clone());
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    let links = html! {
        { for Route::nav_routes().into_iter().map(|route| html! {
            <NavLink {route} current_route={props.current_route.clone()} />
        }) }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<Route> to={Route::Users} classes="btn btn-ghost text-lg">
                {"User Management System"}
            </Link<Route>>
            <ul class="menu menu-horizontal gap-1">
                { links }
            </ul>
            <div class="flex items-center gap-2">
                if let Some(name) = &*username {
                    <span class="text-sm text-base-content/80">{format!("Welcome, {name}!")}</span>
                }
                <button class="btn btn-outline btn-sm" onclick={on_logout}>
                    {"Logout"}
                </button>
            </div>
        </nav>
    }
}
