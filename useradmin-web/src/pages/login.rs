use crate::context::AppContext;
use crate::session::Session;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const DEMO_ACCOUNTS: [(&str, &str); 3] = [
    ("admin", "admin123"),
    ("user", "password"),
    ("demo", "demo123"),
];

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub context: AppContext,
    pub on_login: Callback<Session>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let coordinator = props.context.coordinator.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }
            let username_value = (*username).clone();
            let password_value = (*password).clone();
            loading.set(true);
            error.set(None);

            let coordinator = coordinator.clone();
            let on_login = on_login.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match coordinator.login(&username_value, &password_value).await {
                    Ok(session) => on_login.emit(session),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"User Management System"}</h2>
                    <h3 class="text-base-content/70">{"Please Login"}</h3>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username:"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            placeholder="Enter username"
                            value={(*username).clone()}
                            oninput={on_username_input}
                            disabled={is_busy}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password:"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            placeholder="Enter password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            disabled={is_busy}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Logging in..." } else { "Login" }}
                        </button>
                    </div>
                </form>
                <div class="card-body pt-0 text-sm">
                    <h4 class="font-semibold">{"Demo Credentials:"}</h4>
                    { for DEMO_ACCOUNTS.iter().map(|(user, pass)| html! {
                        <p>
                            <strong>{"Username:"}</strong>{format!(" {user} | ")}
                            <strong>{"Password:"}</strong>{format!(" {pass}")}
                        </p>
                    }) }
                </div>
            </div>
        </div>
    }
}
