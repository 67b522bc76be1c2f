pub mod get_account;
pub mod login;
pub mod reset_password;
pub mod update_account;
