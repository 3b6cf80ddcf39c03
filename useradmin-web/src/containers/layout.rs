use crate::containers::header::Header;
use crate::routes::Route;
use web_sys::window;
use yew::{Callback, Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: Route,
    pub on_logout: Callback<()>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    use_effect_with((), |()| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element
                .set_attribute("data-theme", "light")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
        <>
            <Header current_route={props.current_route.clone()} on_logout={props.on_logout.clone()} />
            <div class="min-h-screen bg-base-100 flex flex-col">
                <main class={classes!("flex-grow", "p-4", "container", "mx-auto")}>
                    {props.children.clone()}
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <p>{"User Management System · Powered by Rust and Yew"}</p>
                </footer>
            </div>
        </>
    }
}
