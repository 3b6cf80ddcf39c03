use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or("Loading".into())]
    pub label: yew::AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-full animate-fadeIn">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <div class="text-xl font-medium flex items-center gap-2">
                    <i class="fas fa-users text-primary"></i>
                    <span>{"User Management System"}</span>
                </div>
                <div class="mt-3 flex items-center gap-2">
                    <span class="loading loading-dots loading-sm"></span>
                    <span>{format!("{}...", props.label)}</span>
                </div>
            </div>
        </div>
    }
}
