pub mod auth_token;
pub mod current_user;

pub use auth_token::bearer_token;
pub use current_user::CurrentUser;
