pub(crate) mod loading;
pub(crate) mod nav_link;
pub(crate) mod status_message;
pub(crate) mod user_form;

pub use nav_link::NavLink;
pub use status_message::StatusMessage;
pub use user_form::UserForm;
