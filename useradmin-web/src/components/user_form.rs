use crate::controllers::UserDraft;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserFormProps {
    #[prop_or_default]
    pub initial: UserDraft,
    pub submit_label: AttrValue,
    pub busy_label: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    pub on_submit: Callback<UserDraft>,
    pub on_cancel: Callback<()>,
}

fn bind_field(
    draft: &UseStateHandle<UserDraft>,
    assign: fn(&mut UserDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            let mut next = (*draft).clone();
            assign(&mut next, input.value());
            draft.set(next);
        }
    })
}

/// Name, email, age and occupation inputs shared by the add and edit screens.
#[function_component(UserForm)]
pub fn user_form(props: &UserFormProps) -> Html {
    let draft = use_state(|| props.initial.clone());

    let onsubmit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit((*draft).clone());
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let field = |id: &'static str,
                 label: &'static str,
                 kind: &'static str,
                 placeholder: &'static str,
                 value: &str,
                 oninput: Callback<InputEvent>| {
        html! {
            <div class="form-control">
                <label class="label" for={id}>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id={id}
                    class="input input-bordered"
                    type={kind}
                    placeholder={placeholder}
                    value={value.to_string()}
                    oninput={oninput}
                    disabled={props.busy}
                />
            </div>
        }
    };

    html! {
        <form class="flex flex-col gap-3 max-w-lg" onsubmit={onsubmit}>
            { field("name", "Name:", "text", "Enter full name", &draft.name,
                bind_field(&draft, |draft, value| draft.name = value)) }
            { field("email", "Email:", "email", "Enter email address", &draft.email,
                bind_field(&draft, |draft, value| draft.email = value)) }
            { field("age", "Age:", "number", "Enter age", &draft.age,
                bind_field(&draft, |draft, value| draft.age = value)) }
            { field("occupation", "Occupation:", "text", "Enter occupation", &draft.occupation,
                bind_field(&draft, |draft, value| draft.occupation = value)) }
            <div class="flex gap-2 mt-4">
                <button class="btn btn-primary" type="submit" disabled={props.busy}>
                    {if props.busy { props.busy_label.to_string() } else { props.submit_label.to_string() }}
                </button>
                <button class="btn btn-ghost" type="button" onclick={on_cancel}>
                    {"Cancel"}
                </button>
            </div>
        </form>
    }
}
