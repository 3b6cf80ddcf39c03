use crate::api::HttpGateway;
use crate::components::StatusMessage;
use crate::components::loading::Loading;
use crate::context::AppContext;
use crate::controllers::{DeleteTarget, UserListScreen};
use crate::routes::Route;
use shared::models::UserRecord;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct UserListPageProps {
    pub context: AppContext,
}

#[function_component(UserListPage)]
pub fn user_list_page(props: &UserListPageProps) -> Html {
    let screen = {
        let env = props.context.env.clone();
        use_memo((), move |()| UserListScreen::new(env))
    };
    let rerender = use_force_update();

    {
        let screen = screen.clone();
        use_effect_with((), move |()| {
            screen.subscribe(Rc::new(move || rerender.force_update()));
            let loader = screen.clone();
            spawn_local(async move {
                loader.load().await;
            });
            move || screen.teardown()
        });
    }

    let on_refresh = {
        let screen = screen.clone();
        Callback::from(move |_: MouseEvent| {
            let screen = screen.clone();
            spawn_local(async move {
                screen.refresh().await;
            });
        })
    };

    let busy = screen.is_busy();
    let delete_button = |record: &UserRecord| {
        let screen: Rc<UserListScreen<HttpGateway>> = screen.clone();
        let confirm = props.context.confirm.clone();
        let target = DeleteTarget::from(record);
        let onclick = Callback::from(move |_: MouseEvent| {
            let screen = screen.clone();
            let confirm = confirm.clone();
            let target = target.clone();
            spawn_local(async move {
                screen.delete(target, confirm.as_ref()).await;
            });
        });
        html! {
            <button class="btn btn-error btn-sm" onclick={onclick} disabled={busy}>
                {"Delete"}
            </button>
        }
    };

    let users = screen.users();
    let list_status = screen.list_status();

    let body = if list_status.is_failed() {
        html! { <StatusMessage status={list_status} /> }
    } else if users.is_empty() && !list_status.is_succeeded() {
        html! { <Loading label="Loading users" /> }
    } else if users.is_empty() {
        html! {
            <div class="text-center p-8">
                <p>{"No users found."}</p>
                <Link<Route> to={Route::AddUser} classes="link link-primary">
                    {"Add the first user"}
                </Link<Route>>
            </div>
        }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Age"}</th>
                            <th>{"Occupation"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for users.iter().map(|record| html! {
                            <tr key={record.id.clone()}>
                                <td>{&record.id}</td>
                                <td>{&record.name}</td>
                                <td>{&record.email}</td>
                                <td>{record.age}</td>
                                <td>{&record.occupation}</td>
                                <td class="flex gap-2">
                                    <Link<Route>
                                        to={Route::EditUser { id: record.id.clone() }}
                                        classes="btn btn-primary btn-sm"
                                    >
                                        {"Edit"}
                                    </Link<Route>>
                                    { delete_button(record) }
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <section>
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-2xl font-semibold">{"All Users"}</h2>
                <button class="btn btn-ghost btn-sm" onclick={on_refresh} disabled={busy}>
                    {"Refresh"}
                </button>
            </div>
            <StatusMessage status={screen.delete_status()} />
            { body }
        </section>
    }
}
