use crate::components::loading::Loading;
use crate::components::{StatusMessage, UserForm};
use crate::context::AppContext;
use crate::controllers::{InteractionController, LoadUser, UpdateUser, UserDraft};
use crate::routes::Route;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};

#[derive(Properties, PartialEq)]
pub struct EditUserPageProps {
    pub id: String,
    pub context: AppContext,
}

/// Prefills the form from the current record, then submits a full update.
#[function_component(EditUserPage)]
pub fn edit_user_page(props: &EditUserPageProps) -> Html {
    let loader = {
        let env = props.context.env.clone();
        use_memo((), move |()| InteractionController::new(env, LoadUser))
    };
    let updater = {
        let env = props.context.env.clone();
        let id = props.id.clone();
        use_memo((), move |()| InteractionController::new(env, UpdateUser::new(id)))
    };
    let rerender = use_force_update();
    let navigator = use_navigator();

    {
        let loader = loader.clone();
        let updater = updater.clone();
        let id = props.id.clone();
        use_effect_with((), move |()| {
            let listener: Rc<dyn Fn()> = Rc::new(move || rerender.force_update());
            loader.subscribe(Rc::clone(&listener));
            updater.subscribe(listener);
            let fetch = loader.clone();
            spawn_local(async move {
                fetch.submit(id).await;
            });
            move || {
                loader.teardown();
                updater.teardown();
            }
        });
    }

    let on_submit = {
        let updater = updater.clone();
        let navigator = navigator.clone();
        Callback::from(move |draft: UserDraft| {
            let updater = updater.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let settlement = updater.submit(draft).await;
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

    let loaded = loader.output();
    let body = match (loader.status(), loaded) {
        (status, _) if status.is_failed() => html! {
            <>
                <StatusMessage {status} />
                <Link<Route> to={Route::Users} classes="btn btn-ghost">{"Back to list"}</Link<Route>>
            </>
        },
        (_, Some(record)) => html! {
            <>
                <StatusMessage status={updater.status()} />
                <UserForm
                    initial={UserDraft::from(&record)}
                    submit_label="Update User"
                    busy_label="Updating..."
                    busy={updater.is_pending()}
                    {on_submit}
                    {on_cancel}
                />
            </>
        },
        _ => html! { <Loading label="Loading user" /> },
    };

    html! {
        <section>
            <h2 class="text-2xl font-semibold mb-4">{"Edit User"}</h2>
            { body }
        </section>
    }
}
