use crate::containers::layout::Layout;
use crate::context::AppContext;
use crate::pages::{AddUserPage, EditUserPage, LookupUserPage, UserListPage};
use strum::{EnumIter, IntoEnumIterator};
use tracing::debug;
use yew::Callback;
use yew::prelude::*;
use yew_router::prelude::*;

/// Screens behind the login gate.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Users,
    #[at("/add")]
    AddUser,
    #[at("/edit/:id")]
    EditUser { id: String },
    #[at("/get")]
    LookupUser,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Label shown in the navigation bar, `None` for routes that are not
    /// linked from it.
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Users => Some("All Users"),
            Self::AddUser => Some("Add User"),
            Self::LookupUser => Some("Get Single User"),
            Self::EditUser { .. } | Self::NotFound => None,
        }
    }

    pub fn nav_routes() -> Vec<Self> {
        Self::iter().filter(|route| route.nav_label().is_some()).collect()
    }
}

/// Switch function for the authenticated routes.
pub fn switch(route: Route, context: AppContext, on_logout: Callback<()>) -> Html {
    debug!(?route, "switching route");
    let page = match route.clone() {
        Route::Users => html! { <UserListPage {context} /> },
        Route::AddUser => html! { <AddUserPage {context} /> },
        Route::EditUser { id } => {
            let key = id.clone();
            html! { <EditUserPage key={key} {id} {context} /> }
        }
        Route::LookupUser => html! { <LookupUserPage {context} /> },
        Route::NotFound => return html! { <Redirect<Route> to={Route::Users} /> },
    };

    html! {
        <Layout current_route={route} {on_logout}>
            { page }
        </Layout>
    }
}
