use crate::components::StatusMessage;
use crate::context::AppContext;
use crate::controllers::{InteractionController, LookupUser};
use crate::routes::Route;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct LookupUserPageProps {
    pub context: AppContext,
}

#[function_component(LookupUserPage)]
pub fn lookup_user_page(props: &LookupUserPageProps) -> Html {
    let controller = {
        let env = props.context.env.clone();
        use_memo((), move |()| InteractionController::new(env, LookupUser))
    };
    let rerender = use_force_update();
    let user_id = use_state(String::new);

    {
        let controller = controller.clone();
        use_effect_with((), move |()| {
            controller.subscribe(Rc::new(move || rerender.force_update()));
            move || controller.teardown()
        });
    }

    let onsubmit = {
        let controller = controller.clone();
        let user_id = user_id.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let controller = controller.clone();
            let raw = (*user_id).clone();
            spawn_local(async move {
                controller.submit(raw).await;
            });
        })
    };

    let on_input = {
        let user_id = user_id.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                user_id.set(input.value());
            }
        })
    };

    let on_clear = {
        let controller = controller.clone();
        let user_id = user_id.clone();
        Callback::from(move |_: MouseEvent| {
            user_id.set(String::new());
            controller.reset();
        })
    };

    let busy = controller.is_pending();
    let result = controller.output().map(|record| {
        html! {
            <div class="card bg-base-200 shadow mt-4 max-w-lg">
                <div class="card-body">
                    <h3 class="card-title">{&record.name}</h3>
                    <p><strong>{"ID:"}</strong>{format!(" {}", record.id)}</p>
                    <p><strong>{"Email:"}</strong>{format!(" {}", record.email)}</p>
                    <p><strong>{"Age:"}</strong>{format!(" {}", record.age)}</p>
                    <p><strong>{"Occupation:"}</strong>{format!(" {}", record.occupation)}</p>
                    <div class="card-actions justify-end">
                        <Link<Route> to={Route::EditUser { id: record.id.clone() }} classes="btn btn-primary btn-sm">
                            {"Edit User"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <section>
            <h2 class="text-2xl font-semibold mb-4">{"Get Single User"}</h2>
            <form class="flex flex-col gap-3 max-w-lg" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="userId">
                        <span class="label-text">{"User ID:"}</span>
                    </label>
                    <input
                        id="userId"
                        class="input input-bordered"
                        type="text"
                        placeholder="Enter user ID (e.g., 1, 2, 3...)"
                        value={(*user_id).clone()}
                        oninput={on_input}
                        disabled={busy}
                    />
                </div>
                <div class="flex gap-2">
                    <button class="btn btn-primary" type="submit" disabled={busy}>
                        {if busy { "Searching..." } else { "Get User" }}
                    </button>
                    <button class="btn btn-ghost" type="button" onclick={on_clear} disabled={busy}>
                        {"Clear"}
                    </button>
                </div>
            </form>
            if controller.status().is_failed() {
                <div class="mt-4">
                    <StatusMessage status={controller.status()} />
                </div>
            }
            { for result }
        </section>
    }
}
