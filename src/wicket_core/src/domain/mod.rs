pub mod account;
pub mod account_id;
pub mod email;
pub mod password;
pub mod username;
