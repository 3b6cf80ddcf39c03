pub mod auth;
pub mod errors;
pub mod user;

pub use auth::{LoginRequest, LoginResponse, LogoutResponse, VerifyResponse};
pub use errors::ErrorResponse;
pub use user::{DeleteUserResponse, UserPayload, UserRecord};
