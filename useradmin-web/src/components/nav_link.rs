use crate::routes::Route;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Eq)]
pub struct NavLinkProps {
    pub route: Route,
    pub current_route: Route,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let Some(label) = props.route.nav_label() else {
        return html! {};
    };
    let active_route_class = (props.route == props.current_route).then_some("btn-soft");

    html! {
        <li>
            <Link<Route> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
                {label}
            </Link<Route>>
        </li>
    }
}
