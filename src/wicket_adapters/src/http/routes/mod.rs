pub mod error;
pub mod get_account;
pub mod login;
pub mod reset_password;
pub mod update_account;

pub use error::{AccountApiError, ErrorResponse};
pub use get_account::{AccountResponse, get_account};
pub use login::{LoginRequest, LoginResponse, login};
pub use reset_password::{PasswordResetRequest, PasswordResetResponse, reset_password};
pub use update_account::{UpdateAccountRequest, UpdateAccountResponse, update_account};
