mod add_user;
mod edit_user;
pub mod login;
mod lookup;
mod users;

pub use add_user::AddUserPage;
pub use edit_user::EditUserPage;
pub use login::LoginPage;
pub use lookup::LookupUserPage;
pub use users::UserListPage;
