use crate::components::{StatusMessage, UserForm};
use crate::context::AppContext;
use crate::controllers::{CreateUser, InteractionController, UserDraft};
use crate::routes::Route;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[derive(Properties, PartialEq)]
pub struct AddUserPageProps {
    pub context: AppContext,
}

#[function_component(AddUserPage)]
pub fn add_user_page(props: &AddUserPageProps) -> Html {
    let controller = {
        let env = props.context.env.clone();
        use_memo((), move |()| InteractionController::new(env, CreateUser))
    };
    let rerender = use_force_update();
    let navigator = use_navigator();

    {
        let controller = controller.clone();
        use_effect_with((), move |()| {
            controller.subscribe(Rc::new(move || rerender.force_update()));
            move || controller.teardown()
        });
    }

    let on_submit = {
        let controller = controller.clone();
        let navigator = navigator.clone();
        Callback::from(move |draft: UserDraft| {
            let controller = controller.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let settlement = controller.submit(draft).await;
                if let Some(redirect) = settlement.into_redirect()
                    && redirect.elapsed().await
                    && let Some(navigator) = navigator
                {
                    navigator.push(&Route::Users);
                }
            });
        })
    };

    let on_cancel = Callback::from(move |()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Users);
        }
    });

    html! {
        <section>
            <h2 class="text-2xl font-semibold mb-4">{"Add New User"}</h2>
            <StatusMessage status={controller.status()} />
            <UserForm
                submit_label="Add User"
                busy_label="Adding..."
                busy={controller.is_pending()}
                {on_submit}
                {on_cancel}
            />
        </section>
    }
}
