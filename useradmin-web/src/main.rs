mod api;
mod app;
mod components;
mod config;
mod containers;
mod context;
mod controllers;
mod logging;
mod models;
mod pages;
mod routes;
mod scheduling;
mod session;
mod storage;

#[cfg(test)]
mod controllers_test;
#[cfg(test)]
mod test_support;

use app::App;
use config::FrontendConfig;
use tracing::{error, info};
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    logging::init(&FrontendConfig::new());

    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        match info.location() {
            Some(location) => error!(
                "panic: {payload} at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ),
            None => error!("panic: {payload}"),
        }
    }));

    info!("starting user management client");
    Renderer::<Root>::new().render();
}
