use crate::controllers::InteractionStatus;
use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct StatusMessageProps {
    pub status: InteractionStatus,
}

/// Success or error banner for a controller's latest outcome.
#[function_component(StatusMessage)]
pub fn status_message(props: &StatusMessageProps) -> Html {
    let tone = match &props.status {
        InteractionStatus::Succeeded(Some(_)) => "alert-success",
        InteractionStatus::Failed(_) => "alert-error",
        _ => return html! {},
    };
    let message = props.status.message().unwrap_or_default().to_string();

    html! {
        <div role="alert" class={classes!("alert", tone, "mb-4")}>
            <span>{message}</span>
        </div>
    }
}
